//! Tracing subscriber setup
//!
//! `RUST_LOG` controls the filter (default `info` for crmbridge crates,
//! `warn` elsewhere). `CRMBRIDGE_LOG_FORMAT=json` switches to JSON lines.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str =
    "warn,crmbridge=info,crmbridge_api=info,crmbridge_core=info,crmbridge_infra=info";

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// Parse `CRMBRIDGE_LOG_FORMAT`; anything but `json` is the text format.
    pub fn from_value(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "json" => Self::Json,
            _ => Self::Pretty,
        }
    }

    pub fn from_env() -> Self {
        Self::from_value(std::env::var("CRMBRIDGE_LOG_FORMAT").ok().as_deref())
    }
}

/// Install the global subscriber. Call once, at startup.
pub fn init_tracing(format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry.with(fmt::layer().json().with_target(true)).init(),
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true).compact()).init(),
    }
}
