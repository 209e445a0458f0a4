//! Bearer token to identity

use super::cache::IdentityCache;
use super::types::Identity;
use crate::auth::jwt::UnverifiedClaims;
use crate::services::UserDirectory;
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Resolves the caller behind a bearer token.
///
/// Cost per call: one cache read, and on a miss one directory call plus one cache
/// write. Directory failures propagate unchanged.
#[derive(Clone)]
pub struct IdentityResolver {
    cache: IdentityCache,
    directory: Arc<dyn UserDirectory>,
}

impl IdentityResolver {
    pub fn new(cache: IdentityCache, directory: Arc<dyn UserDirectory>) -> Self {
        Self { cache, directory }
    }

    pub async fn resolve_identity(&self, token: Option<&str>) -> Result<Identity> {
        let token = token.ok_or_else(|| GatewayError::unauthenticated("Missing bearer token"))?;
        let claims = UnverifiedClaims::decode(token)?;
        self.resolve_claims(&claims).await
    }

    pub async fn resolve_claims(&self, claims: &UnverifiedClaims) -> Result<Identity> {
        let username = claims.preferred_username().ok_or_else(|| {
            GatewayError::unauthenticated("Token has no preferred_username claim")
        })?;

        if let Some(identity) = self.cache.get(username).await? {
            debug!(username, "Identity cache hit");
            return Ok(identity);
        }
        debug!(username, "Identity cache miss");

        let user = self
            .directory
            .get_user(username)
            .await?
            .ok_or_else(|| GatewayError::unauthenticated(format!("Unknown user: {}", username)))?;

        if !user.is_active() {
            info!(username, status = ?user.attributes.status, "Rejecting inactive user");
            return Err(GatewayError::unauthenticated(format!(
                "User is not active: {}",
                username
            )));
        }

        let email = if user.email.is_empty() {
            claims.email().unwrap_or_default().to_string()
        } else {
            user.email
        };
        let identity = Identity::new(user.id, username, claims.realm_roles().to_vec())
            .with_profile(email, user.first_name, user.last_name);

        self.cache.put(&identity).await?;
        Ok(identity)
    }
}

impl std::fmt::Debug for IdentityResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityResolver")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
