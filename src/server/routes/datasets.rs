//! Dataset routes

use crate::auth::DatasetAccess;
use crate::server::routes::ApiResponse;
use actix_web::{HttpResponse, web};
use tracing::debug;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/datasets/{dataset_code}", web::get().to(get_dataset));
}

/// `GET /v1/datasets/{dataset_code}`, the dataset record if the caller may act on it
pub async fn get_dataset(access: DatasetAccess) -> HttpResponse {
    debug!(
        username = access.identity.username(),
        dataset = %access.dataset.code,
        "Serving dataset"
    );
    HttpResponse::Ok().json(ApiResponse::success(access.dataset))
}
