//! Redis cache backend

use super::KeyValueCache;
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client, RedisResult};
use std::time::Duration;
use tracing::{debug, info};

/// Identity cache shared between gateway replicas
#[derive(Clone)]
pub struct RedisCache {
    connection: MultiplexedConnection,
}

impl RedisCache {
    /// Open a multiplexed connection to `url`
    pub async fn connect(url: &str) -> Result<Self> {
        info!("Connecting identity cache to Redis");
        debug!("Redis URL: {}", Self::sanitize_url(url));

        let client = Client::open(url).map_err(GatewayError::Redis)?;
        let connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(GatewayError::Redis)?;

        info!("Redis identity cache connected");
        Ok(Self { connection })
    }

    /// Sanitize Redis URL for logging (hide password)
    pub(crate) fn sanitize_url(url: &str) -> String {
        if let Ok(parsed) = url::Url::parse(url) {
            let mut sanitized = parsed.clone();
            if sanitized.password().is_some() {
                let _ = sanitized.set_password(Some("***"));
            }
            sanitized.to_string()
        } else {
            "invalid_url".to_string()
        }
    }
}

impl std::fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCache").finish_non_exhaustive()
    }
}

#[async_trait]
impl KeyValueCache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection.clone();
        let value: RedisResult<Option<String>> = conn.get(key).await;
        value.map_err(GatewayError::Redis)
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<()> {
        let mut conn = self.connection.clone();
        // SET EX rejects 0, round sub-second TTLs up
        let ttl_seconds = ttl.as_secs().max(1);
        let _: () = conn
            .set_ex(key, value, ttl_seconds)
            .await
            .map_err(GatewayError::Redis)?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.connection.clone();
        let _: () = conn.del(key).await.map_err(GatewayError::Redis)?;
        Ok(())
    }
}
