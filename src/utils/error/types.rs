//! Core error type definitions

use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Missing or undecodable token, missing username claim, unknown or inactive user
    #[error("Authentication error: {0}")]
    Unauthenticated(String),

    /// Request carries a contradictory project context
    #[error("Bad context: {0}")]
    BadContext(String),

    /// Context resolved but the operation is not allowed
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// A referenced record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// A remote dependency answered with an unexpected status or payload
    #[error("Upstream failure: {0}")]
    Upstream(String),

    /// HTTP client errors (transport failures and timeouts)
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Redis errors
    #[cfg(feature = "redis")]
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Stable machine-usable code for this error kind
    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::Unauthenticated(_) => "UNAUTHENTICATED",
            GatewayError::BadContext(_) => "BAD_CONTEXT",
            GatewayError::Forbidden(_) => "FORBIDDEN",
            GatewayError::NotFound(_) => "NOT_FOUND",
            GatewayError::Upstream(_) | GatewayError::HttpClient(_) => "UPSTREAM_FAILURE",
            #[cfg(feature = "redis")]
            GatewayError::Redis(_) => "CACHE_ERROR",
            GatewayError::Config(_) => "CONFIG_ERROR",
            GatewayError::Serialization(_)
            | GatewayError::Io(_)
            | GatewayError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether this error came from a remote dependency
    pub fn is_upstream(&self) -> bool {
        matches!(self, GatewayError::Upstream(_) | GatewayError::HttpClient(_))
    }
}
