//! Network utilities

pub mod http;

pub use http::{HttpClientConfig, create_http_client};
