//! Anti-CSRF state token generation

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::Rng;

/// Number of random bytes behind each state token.
pub const STATE_TOKEN_BYTES: usize = 32;

/// Generate a cryptographically secure state token
///
/// Returns a URL-safe base64-encoded random string of 32 bytes (43 characters).
#[must_use]
pub fn generate_state_token() -> String {
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..STATE_TOKEN_BYTES).map(|_| rng.gen()).collect();
    URL_SAFE_NO_PAD.encode(random_bytes)
}
