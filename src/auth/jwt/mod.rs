//! Bearer token handling
//!
//! Tokens reaching this layer have already been verified by the upstream edge
//! gateway that terminates TLS. This module only *reads* their claims; it never
//! checks signatures, and the [`UnverifiedClaims`] type exists so that read-only
//! claims cannot be mistaken for verified ones elsewhere in the crate.

mod claims;
mod utils;


pub use claims::{RealmAccess, UnverifiedClaims};
pub use utils::extract_bearer_token;
