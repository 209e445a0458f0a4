//! Integration tests for bff-gateway
//!
//! Remote services are replaced by wiremock servers; everything else is the real
//! gateway code.

pub mod client_tests;
pub mod config_validation_tests;
pub mod error_handling_tests;
pub mod gate_scenario_tests;
