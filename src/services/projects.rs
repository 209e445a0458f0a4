//! Project service client

use super::types::ProjectRecord;
use super::{endpoint, read_optional_json};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Project lookups by id or code
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectDirectory: Send + Sync {
    /// The service accepts either identifier on the same route
    async fn get_project(&self, id_or_code: &str) -> Result<Option<ProjectRecord>>;
}

/// `GET {project_service}/projects/{id_or_code}`
#[derive(Debug, Clone)]
pub struct HttpProjectDirectory {
    client: Client,
    base_url: String,
}

impl HttpProjectDirectory {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ProjectDirectory for HttpProjectDirectory {
    async fn get_project(&self, id_or_code: &str) -> Result<Option<ProjectRecord>> {
        let url = endpoint(&self.base_url, &["projects", id_or_code])?;
        let response = self.client.get(url).send().await?;
        read_optional_json(response, "project service").await
    }
}
