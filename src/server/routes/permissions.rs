//! Permission probe routes

use crate::auth::{PermissionSpec, RequestParts};
use crate::auth::gate::bearer_token;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_web::web::{self, Bytes};
use actix_web::{HttpRequest, HttpResponse};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/permissions/check", web::post().to(check_permission));
}

/// `POST /v1/permissions/check`
///
/// Body `{resource, zone, operation}` plus any of the usual project parameters in the
/// query or body. Answers 200 with the decision whether allowed or not.
pub async fn check_permission(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: Bytes,
) -> Result<HttpResponse> {
    let permission: PermissionSpec = serde_json::from_slice(&body).map_err(|e| {
        GatewayError::bad_context(format!("Expected {{resource, zone, operation}}: {}", e))
    })?;

    let parts = RequestParts::from_actix(&req, &body);
    let token = bearer_token(&req);
    let decision = state
        .gate
        .check_permission(&parts, token.as_deref(), &permission)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(decision)))
}
