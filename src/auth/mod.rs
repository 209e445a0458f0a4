//! Authorization resolution
//!
//! Every protected request passes through three steps:
//! - [`identity`]: who is calling, from the bearer token and the user directory
//! - [`context`]: which project or dataset the request targets
//! - [`gate`]: whether the policy service allows the operation there

pub mod context;
pub mod gate;
pub mod identity;
pub mod jwt;

pub use context::{ContextResolver, DatasetRef, RequestParts};
pub use gate::{
    Authorized, CurrentIdentity, DatasetAccess, Decision, PermissionGate, PermissionRule,
    PermissionSpec,
};
pub use identity::{Identity, IdentityCache, IdentityResolver, PlatformRole, ProjectRole};
pub use jwt::UnverifiedClaims;
