//! Claims read from an unverified bearer token

use crate::utils::error::{GatewayError, Result};
use jsonwebtoken::{DecodingKey, Validation, decode, decode_header};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::debug;

/// `realm_access` claim issued by the identity provider
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RealmAccess {
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Claims of a bearer token whose signature was *not* checked here.
///
/// Signature, expiry and audience validation happen at the upstream edge gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct UnverifiedClaims {
    #[serde(default)]
    preferred_username: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    realm_access: RealmAccess,
}

impl UnverifiedClaims {
    /// Read the claims of `token` without verifying it
    pub fn decode(token: &str) -> Result<Self> {
        let header = decode_header(token)
            .map_err(|e| GatewayError::unauthenticated(format!("Malformed token: {}", e)))?;

        let mut validation = Validation::new(header.alg);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims = HashSet::new();

        let data = decode::<Self>(token, &DecodingKey::from_secret(&[]), &validation)
            .map_err(|e| GatewayError::unauthenticated(format!("Undecodable token: {}", e)))?;

        debug!(
            username = ?data.claims.preferred_username,
            "Read claims from bearer token"
        );
        Ok(data.claims)
    }

    /// The `preferred_username` claim, required for authentication
    pub fn preferred_username(&self) -> Option<&str> {
        self.preferred_username
            .as_deref()
            .filter(|name| !name.is_empty())
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// `realm_access.roles`, empty when the claim is absent
    pub fn realm_roles(&self) -> &[String] {
        &self.realm_access.roles
    }
}
