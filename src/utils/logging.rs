//! Tracing subscriber setup

use std::env;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log line format
pub const LOG_FORMAT_ENV: &str = "BFF_LOG_FORMAT";

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" | "" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("Unknown log format: {}", other)),
        }
    }
}

impl LogFormat {
    /// `BFF_LOG_FORMAT`, text when unset or unrecognised
    pub fn from_env() -> Self {
        env::var(LOG_FORMAT_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

/// Install the global subscriber. `RUST_LOG` filters, defaulting to `info`.
pub fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_target(true)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .init(),
    }
}
