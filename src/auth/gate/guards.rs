//! Request-entry guards

use super::decision::{Decision, PLATFORM_ADMIN_POLICY_ROLE, PermissionSpec, RequestContext};
use crate::auth::context::{ContextResolver, RequestParts};
use crate::auth::identity::{Identity, IdentityResolver};
use crate::services::{
    DatasetDirectory, DatasetRecord, PolicyAuthority, PolicyQuery, ProjectDirectory,
};
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Combines identity, request context and the policy service into allow/deny.
///
/// Within a request the steps run strictly in order (identity, context, decision) and
/// the first failure short-circuits the rest.
#[derive(Clone)]
pub struct PermissionGate {
    identities: IdentityResolver,
    context: Arc<ContextResolver>,
    policy: Arc<dyn PolicyAuthority>,
    projects: Arc<dyn ProjectDirectory>,
    datasets: Arc<dyn DatasetDirectory>,
}

impl PermissionGate {
    pub fn new(
        identities: IdentityResolver,
        context: ContextResolver,
        policy: Arc<dyn PolicyAuthority>,
        projects: Arc<dyn ProjectDirectory>,
        datasets: Arc<dyn DatasetDirectory>,
    ) -> Self {
        Self {
            identities,
            context: Arc::new(context),
            policy,
            projects,
            datasets,
        }
    }

    pub fn context(&self) -> &ContextResolver {
        &self.context
    }

    pub async fn resolve_identity(&self, token: Option<&str>) -> Result<Identity> {
        self.identities.resolve_identity(token).await
    }

    /// Evaluate `permission` for the caller. A denial is a `Decision`, not an error.
    pub async fn check_permission(
        &self,
        parts: &RequestParts,
        token: Option<&str>,
        permission: &PermissionSpec,
    ) -> Result<Decision> {
        let identity = self.resolve_identity(token).await?;
        self.decide(&identity, parts, permission).await
    }

    /// Like [`check_permission`](Self::check_permission), failing with `Forbidden` on deny
    pub async fn require_permission(
        &self,
        parts: &RequestParts,
        token: Option<&str>,
        permission: &PermissionSpec,
    ) -> Result<Identity> {
        let identity = self.resolve_identity(token).await?;
        let decision = self.decide(&identity, parts, permission).await?;
        if !decision.allowed {
            return Err(GatewayError::forbidden(format!(
                "Permission denied for {} {} in zone {}",
                decision.operation, decision.resource, decision.zone
            )));
        }
        Ok(identity)
    }

    /// Resolve the targeted dataset and check the caller may act on it
    pub async fn require_dataset_access(
        &self,
        parts: &RequestParts,
        token: Option<&str>,
    ) -> Result<(Identity, DatasetRecord)> {
        let identity = self.resolve_identity(token).await?;

        let reference = self
            .context
            .resolve_dataset_ref(parts)
            .ok_or_else(|| GatewayError::bad_context("Request names no dataset"))?;
        let dataset = self
            .datasets
            .get_dataset(reference.as_str())
            .await?
            .ok_or_else(|| {
                GatewayError::not_found(format!("Dataset not found: {}", reference.as_str()))
            })?;

        if !identity
            .can_access_dataset(&dataset, self.projects.as_ref())
            .await?
        {
            info!(
                username = identity.username(),
                dataset = %dataset.code,
                "Dataset access denied"
            );
            return Err(GatewayError::forbidden(format!(
                "No access to dataset {}",
                dataset.code
            )));
        }

        Ok((identity, dataset))
    }

    async fn decide(
        &self,
        identity: &Identity,
        parts: &RequestParts,
        permission: &PermissionSpec,
    ) -> Result<Decision> {
        let context = RequestContext {
            project_code: self.context.resolve_project_code(parts).await?,
            dataset_ref: self.context.resolve_dataset_ref(parts),
            permission: permission.clone(),
        };

        let role = if identity.is_platform_admin() {
            Some(PLATFORM_ADMIN_POLICY_ROLE.to_string())
        } else {
            context
                .project_code
                .as_deref()
                .and_then(|code| identity.role_in(code))
                .map(|role| role.as_str().to_string())
        };

        let Some(role) = role else {
            info!(
                username = identity.username(),
                project_code = ?context.project_code,
                dataset = ?context.dataset_ref,
                resource = %permission.resource,
                "Denied: caller holds no role in the target project"
            );
            return Ok(Decision::from_context(&context, false));
        };

        let query = PolicyQuery {
            role,
            resource: permission.resource.clone(),
            zone: permission.zone.clone(),
            operation: permission.operation.clone(),
            project_code: context.project_code.clone(),
        };

        let allowed = match self.policy.has_permission(&query).await {
            Ok(allowed) => allowed,
            Err(e) => {
                warn!(error = %e, role = %query.role, "Policy call failed; denying");
                false
            }
        };

        if allowed {
            debug!(username = identity.username(), role = %query.role, "Permission granted");
        } else {
            info!(
                username = identity.username(),
                role = %query.role,
                resource = %query.resource,
                zone = %query.zone,
                operation = %query.operation,
                project_code = ?query.project_code,
                "Permission denied"
            );
        }
        Ok(Decision::from_context(&context, allowed))
    }
}

impl std::fmt::Debug for PermissionGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermissionGate")
            .field("identities", &self.identities)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
