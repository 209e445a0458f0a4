//! Cache configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Which store backs the identity cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// In-process cache, not shared between gateway replicas
    #[default]
    Memory,
    /// Shared Redis instance
    Redis,
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Backend selection
    #[serde(default)]
    pub backend: CacheBackend,
    /// Maximum number of entries held by the memory backend
    #[serde(default = "default_cache_max_size")]
    pub max_size: u64,
    /// Redis connection URL, used when `backend` is `redis`
    #[serde(default = "default_redis_url")]
    pub redis_url: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            max_size: default_cache_max_size(),
            redis_url: default_redis_url(),
        }
    }
}
