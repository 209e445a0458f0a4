//! Caller identity
//!
//! - `types`: the immutable [`Identity`] and the role vocabularies
//! - `roles`: capability queries derived from realm roles
//! - `cache`: TTL cache of identities keyed by username
//! - `resolver`: bearer token to [`Identity`]

mod cache;
mod resolver;
mod roles;
mod types;


pub use cache::{IdentityCache, identity_cache_key};
pub use resolver::IdentityResolver;
pub use roles::parse_realm_role;
pub use types::{Identity, PLATFORM_ADMIN_ROLE, PlatformRole, ProjectRole};
