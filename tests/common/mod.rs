//! Common test utilities for bff-gateway

pub mod services;

pub use fixtures::{TokenFactory, UserFactory};
pub use services::MockServices;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is an Err with the given error code
#[macro_export]
macro_rules! assert_err_code {
    ($expr:expr, $code:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err({}), got Ok: {:?}", $code, v),
            Err(e) => assert_eq!(e.code(), $code, "unexpected error: {}", e),
        }
    };
}
