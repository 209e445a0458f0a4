//! HTTP route modules

pub mod datasets;
pub mod permissions;
pub mod users;

use actix_web::web;
use serde::Serialize;

/// Standard API response envelope
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
        }
    }
}

/// Mount every `/v1` route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1")
            .configure(users::configure_routes)
            .configure(permissions::configure_routes)
            .configure(datasets::configure_routes),
    );
}
