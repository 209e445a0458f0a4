//! Request context resolution
//!
//! Decides which project (and, for dataset routes, which dataset) an inbound request
//! targets. The same logical parameter is spelled four different ways across the API,
//! so the lookup order lives here and nowhere else:
//!
//! 1. route-bound `project_code` / `project_id` (mutually exclusive)
//! 2. the JSON body, when the method carries one
//! 3. query parameters
//! 4. remaining path parameters
//!
//! Within each source the keys are tried as `project_code`, `container_code`,
//! `project_geid` (deprecated), `project_id`.

mod request;
mod resolver;
mod sources;


pub use request::{BoundParams, RequestParts};
pub use resolver::{ContextResolver, DatasetRef};
pub use sources::{BodySource, ContextKey, ContextSource, PathSource, QuerySource, SourceLookup};
