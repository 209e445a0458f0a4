//! In-process cache backend

use super::KeyValueCache;
use crate::utils::error::Result;
use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use std::time::{Duration, Instant};

/// Cached payload together with the TTL it was written with
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    ttl: Duration,
}

/// Expire each entry after the TTL given at write time
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(&self, _key: &String, entry: &Entry, _created_at: Instant) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// `moka`-backed cache, local to one gateway process
#[derive(Clone)]
pub struct MemoryCache {
    inner: Cache<String, Entry>,
}

impl MemoryCache {
    /// Create a cache bounded to `max_size` entries
    pub fn new(max_size: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_size)
            .expire_after(PerEntryTtl)
            .build();
        Self { inner }
    }

    /// Number of live entries (approximate, see `moka` docs)
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}

impl std::fmt::Debug for MemoryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCache")
            .field("entry_count", &self.inner.entry_count())
            .finish()
    }
}

#[async_trait]
impl KeyValueCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.inner.get(key).await.map(|entry| entry.value))
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<()> {
        self.inner.insert(key.to_string(), Entry { value, ttl }).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.inner.invalidate(key).await;
        Ok(())
    }
}
