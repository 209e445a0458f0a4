//! Outbound HTTP client
//!
//! Every remote call made by the authorization layer goes through one client built
//! here. The client carries the single client-wide timeout; nothing retries.

use crate::utils::error::{GatewayError, Result};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::debug;

/// Configuration for the outbound HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Total request timeout
    pub timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            pool_max_idle_per_host: 32,
            user_agent: format!("bff-gateway/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Default settings with the given request timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            connect_timeout: timeout.min(Duration::from_secs(5)),
            ..Self::default()
        }
    }
}

/// Build the shared outbound client
pub fn create_http_client(config: &HttpClientConfig) -> Result<Client> {
    debug!(timeout_ms = config.timeout.as_millis() as u64, "Creating outbound HTTP client");

    ClientBuilder::new()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .tcp_nodelay(true)
        .user_agent(&config.user_agent)
        .build()
        .map_err(|e| GatewayError::config(format!("Failed to build HTTP client: {}", e)))
}
