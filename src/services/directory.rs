//! User directory client

use super::types::DirectoryUser;
use super::{endpoint, read_optional_json};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Live lookup of a user's profile and status
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch a user by exact username, `None` when the directory has no such user
    async fn get_user(&self, username: &str) -> Result<Option<DirectoryUser>>;
}

#[derive(Debug, Deserialize)]
struct DirectoryEnvelope {
    #[serde(default)]
    result: Option<serde_json::Value>,
}

/// `GET {auth_service}/admin/user?username=&exact=true`
#[derive(Debug, Clone)]
pub struct HttpUserDirectory {
    client: Client,
    base_url: String,
}

impl HttpUserDirectory {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn get_user(&self, username: &str) -> Result<Option<DirectoryUser>> {
        let url = endpoint(&self.base_url, &["admin", "user"])?;
        debug!(username, "Looking up user in directory");

        let response = self
            .client
            .get(url)
            .query(&[("username", username), ("exact", "true")])
            .send()
            .await?;

        let Some(envelope) =
            read_optional_json::<DirectoryEnvelope>(response, "user directory").await?
        else {
            return Ok(None);
        };

        match envelope.result {
            Some(value) if value.as_object().is_some_and(|o| !o.is_empty()) => {
                Ok(Some(serde_json::from_value(value)?))
            }
            _ => Ok(None),
        }
    }
}
