//! Permission requests and their outcomes

use crate::auth::context::DatasetRef;
use serde::{Deserialize, Serialize};

/// Role sent to the policy service on behalf of platform administrators
pub const PLATFORM_ADMIN_POLICY_ROLE: &str = "platform_admin";

/// The `(resource, zone, operation)` triple a route requires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSpec {
    pub resource: String,
    pub zone: String,
    pub operation: String,
}

impl PermissionSpec {
    pub fn new(
        resource: impl Into<String>,
        zone: impl Into<String>,
        operation: impl Into<String>,
    ) -> Self {
        Self {
            resource: resource.into(),
            zone: zone.into(),
            operation: operation.into(),
        }
    }
}

/// What one request targets, built fresh per request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub project_code: Option<String>,
    pub dataset_ref: Option<DatasetRef>,
    pub permission: PermissionSpec,
}

/// Outcome of a permission check, with enough context to log a denial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub allowed: bool,
    pub resource: String,
    pub zone: String,
    pub operation: String,
    pub project_code: Option<String>,
}

impl Decision {
    pub fn from_context(context: &RequestContext, allowed: bool) -> Self {
        Self {
            allowed,
            resource: context.permission.resource.clone(),
            zone: context.permission.zone.clone(),
            operation: context.permission.operation.clone(),
            project_code: context.project_code.clone(),
        }
    }
}
