//! Identity cache

use super::types::Identity;
use crate::storage::KeyValueCache;
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Cache key of a username's identity
pub fn identity_cache_key(username: &str) -> String {
    format!("current_identity-{}", username)
}

/// Identities cached as JSON with a fixed TTL.
///
/// A cached identity is served without re-checking the directory, so a user who is
/// disabled after being cached keeps authenticating until the entry expires. The TTL
/// bounds that window. Entries are never invalidated explicitly.
#[derive(Clone)]
pub struct IdentityCache {
    store: Arc<dyn KeyValueCache>,
    ttl: Duration,
}

impl IdentityCache {
    pub fn new(store: Arc<dyn KeyValueCache>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn get(&self, username: &str) -> Result<Option<Identity>> {
        let key = identity_cache_key(username);
        let Some(raw) = self.store.get(&key).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => Ok(Some(identity)),
            Err(e) => {
                warn!(username, error = %e, "Discarding unreadable cached identity");
                Ok(None)
            }
        }
    }

    /// Overwrite the cached identity for its username
    pub async fn put(&self, identity: &Identity) -> Result<()> {
        let key = identity_cache_key(identity.username());
        let value = serde_json::to_string(identity)?;
        self.store.set(&key, value, self.ttl).await?;
        debug!(username = identity.username(), ttl_secs = self.ttl.as_secs(), "Cached identity");
        Ok(())
    }
}

impl std::fmt::Debug for IdentityCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityCache")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
