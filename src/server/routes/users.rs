//! Caller profile routes

use crate::auth::{CurrentIdentity, Identity, PlatformRole, ProjectRole};
use crate::server::routes::ApiResponse;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/users/me", web::get().to(current_user));
}

/// Profile of the authenticated caller
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub platform_role: PlatformRole,
    pub realm_roles: Vec<String>,
    pub project_roles: BTreeMap<String, ProjectRole>,
}

impl From<&Identity> for CurrentUserResponse {
    fn from(identity: &Identity) -> Self {
        Self {
            user_id: identity.user_id().to_string(),
            username: identity.username().to_string(),
            email: identity.email().to_string(),
            first_name: identity.first_name().to_string(),
            last_name: identity.last_name().to_string(),
            platform_role: identity.platform_role(),
            realm_roles: identity.realm_roles().to_vec(),
            project_roles: identity
                .project_roles()
                .iter()
                .map(|(code, role)| (code.clone(), *role))
                .collect(),
        }
    }
}

/// `GET /v1/users/me`
pub async fn current_user(identity: CurrentIdentity) -> HttpResponse {
    debug!(username = identity.username(), "Serving current user");
    HttpResponse::Ok().json(ApiResponse::success(CurrentUserResponse::from(&*identity)))
}
