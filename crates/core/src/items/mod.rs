//! Item fetcher & normalizer

pub mod fetcher;
pub mod normalize;

pub use fetcher::ItemFetcher;
pub use normalize::{display_name, normalize_contact};
