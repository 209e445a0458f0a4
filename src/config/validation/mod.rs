//! Configuration validation
//!
//! - `trait_def`: core Validate trait definition
//! - `validators`: implementations per configuration section
//! - `tests`: test suite for all validators

mod trait_def;
mod validators;

pub use trait_def::Validate;
pub use validators::validate_service_url;
