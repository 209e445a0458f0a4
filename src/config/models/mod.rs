//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

pub mod auth;
pub mod cache;
pub mod gateway;
pub mod server;
pub mod services;

pub use auth::*;
pub use cache::*;
pub use gateway::*;
pub use server::*;
pub use services::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    5060
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    10 * 1024 * 1024 // 10MB
}

/// Default outbound timeout in seconds
pub fn default_timeout() -> u64 {
    10
}

pub fn default_identity_cache_ttl() -> u64 {
    300 // 5 minutes
}

pub fn default_cache_max_size() -> u64 {
    10_000
}

pub fn default_redis_url() -> String {
    "redis://127.0.0.1:6379".to_string()
}

pub fn default_auth_service() -> String {
    "http://auth.utility:5061/v1".to_string()
}

pub fn default_project_service() -> String {
    "http://project.utility:5064/v1".to_string()
}

pub fn default_dataset_service() -> String {
    "http://dataset.utility:5081/v1".to_string()
}

fn default_true() -> bool {
    true
}
