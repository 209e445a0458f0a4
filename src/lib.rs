//! # bff-gateway
//!
//! Authorization resolution for a backend-for-frontend gateway.
//!
//! For every protected request the gateway must work out:
//!
//! - **who** is calling, from a bearer token plus a user-directory lookup, cached
//! - **what** project or dataset the request targets, from path, query or body
//! - **whether** the remote policy service allows the operation there
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bff_gateway::{Config, server::HttpServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/gateway.yaml").await?;
//!     HttpServer::new(&config).await?.start().await?;
//!     Ok(())
//! }
//! ```
//!
//! Route handlers declare guards as extractors:
//!
//! ```rust,no_run
//! use actix_web::HttpResponse;
//! use bff_gateway::auth::{Authorized, PermissionRule};
//!
//! struct ViewGreenroomFile;
//!
//! impl PermissionRule for ViewGreenroomFile {
//!     const RESOURCE: &'static str = "file";
//!     const ZONE: &'static str = "greenroom";
//!     const OPERATION: &'static str = "view";
//! }
//!
//! async fn list_files(auth: Authorized<ViewGreenroomFile>) -> HttpResponse {
//!     HttpResponse::Ok().body(auth.identity.username().to_string())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

pub use config::Config;
pub use utils::error::{GatewayError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
