//! Remote service endpoints

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base URLs of the services the authorization layer calls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Directory and policy service (`/admin/user`, `/authorize`)
    #[serde(default = "default_auth_service")]
    pub auth_service: String,
    /// Project service (`/projects/{id_or_code}`)
    #[serde(default = "default_project_service")]
    pub project_service: String,
    /// Dataset service (`/datasets/{id_or_code}`)
    #[serde(default = "default_dataset_service")]
    pub dataset_service: String,
    /// Client-wide timeout for every outbound call, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            auth_service: default_auth_service(),
            project_service: default_project_service(),
            dataset_service: default_dataset_service(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ServicesConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
