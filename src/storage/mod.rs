//! Key/value storage for short-lived gateway state
//!
//! The identity cache is the only shared mutable state in the authorization layer.
//! It is written as whole values keyed by username, so backends need nothing beyond
//! get/set/delete with a per-entry TTL.
//!
//! ## Module Structure
//!
//! - `memory` - in-process cache on `moka`
//! - `redis` - shared cache on a Redis multiplexed connection (feature `redis`)

mod memory;
#[cfg(feature = "redis")]
mod redis;

pub use memory::MemoryCache;
#[cfg(feature = "redis")]
pub use redis::RedisCache;

use crate::config::{CacheBackend, CacheConfig};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Minimal async key/value store with per-entry expiry
#[async_trait]
pub trait KeyValueCache: Send + Sync {
    /// Get a value, `None` when absent or expired
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value, overwriting any previous one
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<()>;

    /// Remove a value
    async fn delete(&self, key: &str) -> Result<()>;
}

/// Build the backend selected in configuration
pub async fn create_cache(config: &CacheConfig) -> Result<Arc<dyn KeyValueCache>> {
    match config.backend {
        CacheBackend::Memory => {
            info!(max_size = config.max_size, "Using in-memory identity cache");
            Ok(Arc::new(MemoryCache::new(config.max_size)))
        }
        #[cfg(feature = "redis")]
        CacheBackend::Redis => {
            let cache = RedisCache::connect(&config.redis_url).await?;
            Ok(Arc::new(cache))
        }
        #[cfg(not(feature = "redis"))]
        CacheBackend::Redis => Err(crate::utils::error::GatewayError::config(
            "Redis cache backend requested but the `redis` feature is disabled",
        )),
    }
}
