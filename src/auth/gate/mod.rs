//! Permission gate
//!
//! Composes identity resolution, context resolution and the remote policy call into
//! the guards route handlers declare. The gate holds shared clients only; every
//! request is evaluated independently.

mod decision;
mod extractors;
mod guards;


pub use decision::{Decision, PLATFORM_ADMIN_POLICY_ROLE, PermissionSpec, RequestContext};
pub use extractors::{Authorized, CurrentIdentity, DatasetAccess, PermissionRule, bearer_token};
pub use guards::PermissionGate;
