//! Main gateway configuration

use super::*;
use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Remote service endpoints
    #[serde(default)]
    pub services: ServicesConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Identity cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
}

impl GatewayConfig {
    /// Build a configuration from `BFF_*` environment variables over defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(host) = env::var("BFF_HOST") {
            config.server.host = host;
        }
        if let Some(port) = parse_env("BFF_PORT")? {
            config.server.port = port;
        }
        if let Ok(url) = env::var("BFF_AUTH_SERVICE") {
            config.services.auth_service = url;
        }
        if let Ok(url) = env::var("BFF_PROJECT_SERVICE") {
            config.services.project_service = url;
        }
        if let Ok(url) = env::var("BFF_DATASET_SERVICE") {
            config.services.dataset_service = url;
        }
        if let Some(timeout) = parse_env("BFF_SERVICE_TIMEOUT")? {
            config.services.timeout_secs = timeout;
        }
        if let Some(ttl) = parse_env("BFF_IDENTITY_CACHE_TTL")? {
            config.auth.identity_cache_ttl = ttl;
        }
        if let Ok(backend) = env::var("BFF_CACHE_BACKEND") {
            config.cache.backend = match backend.to_ascii_lowercase().as_str() {
                "memory" => CacheBackend::Memory,
                "redis" => CacheBackend::Redis,
                other => {
                    return Err(GatewayError::config(format!(
                        "BFF_CACHE_BACKEND must be 'memory' or 'redis', got '{}'",
                        other
                    )));
                }
            };
        }
        if let Ok(url) = env::var("BFF_REDIS_URL") {
            config.cache.redis_url = url;
        }

        Ok(config)
    }
}

fn parse_env<T: FromStr>(name: &str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| GatewayError::config(format!("Invalid value for {}: '{}'", name, raw))),
        Err(_) => Ok(None),
    }
}
