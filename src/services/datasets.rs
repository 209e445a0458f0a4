//! Dataset service client

use super::types::DatasetRecord;
use super::{endpoint, read_optional_json};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Dataset lookups by id or code
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatasetDirectory: Send + Sync {
    async fn get_dataset(&self, id_or_code: &str) -> Result<Option<DatasetRecord>>;
}

/// `GET {dataset_service}/datasets/{id_or_code}`
#[derive(Debug, Clone)]
pub struct HttpDatasetDirectory {
    client: Client,
    base_url: String,
}

impl HttpDatasetDirectory {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl DatasetDirectory for HttpDatasetDirectory {
    async fn get_dataset(&self, id_or_code: &str) -> Result<Option<DatasetRecord>> {
        let url = endpoint(&self.base_url, &["datasets", id_or_code])?;
        let response = self.client.get(url).send().await?;
        read_optional_json(response, "dataset service").await
    }
}
