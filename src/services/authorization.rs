//! Policy decision client

use super::types::PolicyQuery;
use super::{endpoint, read_optional_json};
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Remote policy engine answering "may this role do this operation here?"
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PolicyAuthority: Send + Sync {
    async fn has_permission(&self, query: &PolicyQuery) -> Result<bool>;
}

#[derive(Debug, Deserialize)]
struct AuthorizeEnvelope {
    result: AuthorizeResult,
}

#[derive(Debug, Deserialize)]
struct AuthorizeResult {
    has_permission: bool,
}

/// `GET {auth_service}/authorize?role=&resource=&zone=&operation=&project_code=`
#[derive(Debug, Clone)]
pub struct HttpPolicyAuthority {
    client: Client,
    base_url: String,
}

impl HttpPolicyAuthority {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PolicyAuthority for HttpPolicyAuthority {
    async fn has_permission(&self, query: &PolicyQuery) -> Result<bool> {
        let url = endpoint(&self.base_url, &["authorize"])?;
        debug!(
            role = %query.role,
            resource = %query.resource,
            zone = %query.zone,
            operation = %query.operation,
            project_code = ?query.project_code,
            "Calling authorize"
        );

        let response = self.client.get(url).query(query).send().await?;
        let envelope = read_optional_json::<AuthorizeEnvelope>(response, "authorize")
            .await?
            .ok_or_else(|| GatewayError::upstream("authorize endpoint not found"))?;

        Ok(envelope.result.has_permission)
    }
}
