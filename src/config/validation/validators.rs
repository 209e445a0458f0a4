//! Validators for each configuration section

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::{debug, warn};

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<(), String> {
        self.server
            .validate()
            .map_err(|e| format!("Server config error: {}", e))?;
        self.services
            .validate()
            .map_err(|e| format!("Services config error: {}", e))?;
        self.auth
            .validate()
            .map_err(|e| format!("Auth config error: {}", e))?;
        self.cache
            .validate()
            .map_err(|e| format!("Cache config error: {}", e))?;
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating server configuration");

        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port cannot be 0".to_string());
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("Worker count must be greater than 0".to_string());
            }
        }

        if self.max_body_size == 0 {
            return Err("Max body size must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for ServicesConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating services configuration");

        validate_service_url("auth_service", &self.auth_service)?;
        validate_service_url("project_service", &self.project_service)?;
        validate_service_url("dataset_service", &self.dataset_service)?;

        if self.timeout_secs == 0 {
            return Err("Service timeout must be greater than 0".to_string());
        }

        if self.timeout_secs > 300 {
            return Err("Service timeout should not exceed 300 seconds".to_string());
        }

        Ok(())
    }
}

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating auth configuration");

        if self.identity_cache_ttl == 0 {
            return Err("Identity cache TTL must be greater than 0".to_string());
        }

        if self.identity_cache_ttl > IDENTITY_CACHE_TTL_WARN_THRESHOLD {
            warn!(
                ttl_secs = self.identity_cache_ttl,
                "Identity cache TTL exceeds one hour; disabled accounts stay authenticated for the whole window"
            );
        }

        Ok(())
    }
}

impl Validate for CacheConfig {
    fn validate(&self) -> Result<(), String> {
        match self.backend {
            CacheBackend::Memory => {
                if self.max_size == 0 {
                    return Err("Cache max size must be greater than 0".to_string());
                }
            }
            CacheBackend::Redis => {
                let parsed = url::Url::parse(&self.redis_url)
                    .map_err(|e| format!("Invalid Redis URL: {}", e))?;
                if !matches!(parsed.scheme(), "redis" | "rediss") {
                    return Err(format!(
                        "Redis URL must use redis:// or rediss://, got {}://",
                        parsed.scheme()
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Check that a service base URL is an absolute http(s) URL
pub fn validate_service_url(name: &str, value: &str) -> Result<(), String> {
    let parsed =
        url::Url::parse(value).map_err(|e| format!("{} is not a valid URL: {}", name, e))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!(
            "{} must use http or https, got {}",
            name,
            parsed.scheme()
        ));
    }

    if parsed.host_str().is_none() {
        return Err(format!("{} must include a host", name));
    }

    Ok(())
}
