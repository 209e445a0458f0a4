//! Helper functions for creating specific error types

use super::types::GatewayError;

impl GatewayError {
    pub fn unauthenticated<S: Into<String>>(message: S) -> Self {
        Self::Unauthenticated(message.into())
    }

    pub fn bad_context<S: Into<String>>(message: S) -> Self {
        Self::BadContext(message.into())
    }

    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}
