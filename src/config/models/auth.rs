//! Authentication configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Identity cache TTL above which a warning is logged at startup
pub const IDENTITY_CACHE_TTL_WARN_THRESHOLD: u64 = 3600;

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Lifetime of a cached identity, in seconds.
    ///
    /// A disabled or deleted user stays authenticated for up to this long after the
    /// change, because a cache hit skips the directory status check. Changing this
    /// value needs sign-off from the platform security owner.
    #[serde(default = "default_identity_cache_ttl")]
    pub identity_cache_ttl: u64,
    /// Log a warning whenever the deprecated `project_geid` key resolves a context
    #[serde(default = "default_true")]
    pub warn_on_legacy_params: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            identity_cache_ttl: default_identity_cache_ttl(),
            warn_on_legacy_params: true,
        }
    }
}

impl AuthConfig {
    pub fn identity_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.identity_cache_ttl)
    }
}
