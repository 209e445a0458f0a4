//! Ordered places a project reference can come from

use super::request::{RequestParts, scalar_value};
use actix_web::http::Method;
use std::collections::HashMap;
use std::fmt;

/// Keys naming a project, in lookup priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKey {
    ProjectCode,
    ContainerCode,
    /// Deprecated alias of `project_id`
    ProjectGeid,
    ProjectId,
}

impl ContextKey {
    pub const PRIORITY: [ContextKey; 4] = [
        ContextKey::ProjectCode,
        ContextKey::ContainerCode,
        ContextKey::ProjectGeid,
        ContextKey::ProjectId,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContextKey::ProjectCode => "project_code",
            ContextKey::ContainerCode => "container_code",
            ContextKey::ProjectGeid => "project_geid",
            ContextKey::ProjectId => "project_id",
        }
    }

    /// Whether the value is an id that still needs an id to code lookup
    pub fn is_id(&self) -> bool {
        matches!(self, ContextKey::ProjectGeid | ContextKey::ProjectId)
    }

    pub fn is_deprecated(&self) -> bool {
        matches!(self, ContextKey::ProjectGeid)
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of inspecting one source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLookup {
    Found(ContextKey, String),
    NotFound,
}

/// One place a project reference may live. Implementations must be pure.
pub trait ContextSource: Send + Sync {
    fn name(&self) -> &'static str;

    fn lookup(&self, parts: &RequestParts) -> SourceLookup;
}

fn first_key(get: impl Fn(&str) -> Option<String>) -> SourceLookup {
    ContextKey::PRIORITY
        .iter()
        .find_map(|key| get(key.as_str()).map(|value| SourceLookup::Found(*key, value)))
        .unwrap_or(SourceLookup::NotFound)
}

fn from_params(params: &HashMap<String, String>) -> SourceLookup {
    first_key(|key| params.get(key).filter(|v| !v.is_empty()).cloned())
}

/// JSON request body
///
/// Read for POST, PUT and PATCH. DELETE bodies are read only when the request has no
/// query parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct BodySource;

impl BodySource {
    fn applies_to(parts: &RequestParts) -> bool {
        let method = parts.method();
        if *method == Method::POST || *method == Method::PUT || *method == Method::PATCH {
            true
        } else {
            *method == Method::DELETE && parts.query_params().is_empty()
        }
    }
}

impl ContextSource for BodySource {
    fn name(&self) -> &'static str {
        "body"
    }

    fn lookup(&self, parts: &RequestParts) -> SourceLookup {
        if !Self::applies_to(parts) {
            return SourceLookup::NotFound;
        }
        let Some(body) = parts.json_object() else {
            return SourceLookup::NotFound;
        };
        first_key(|key| body.get(key).and_then(scalar_value))
    }
}

/// Query string parameters
#[derive(Debug, Default, Clone, Copy)]
pub struct QuerySource;

impl ContextSource for QuerySource {
    fn name(&self) -> &'static str {
        "query"
    }

    fn lookup(&self, parts: &RequestParts) -> SourceLookup {
        from_params(parts.query_params())
    }
}

/// Path parameters other than the bound project ones
#[derive(Debug, Default, Clone, Copy)]
pub struct PathSource;

impl ContextSource for PathSource {
    fn name(&self) -> &'static str {
        "path"
    }

    fn lookup(&self, parts: &RequestParts) -> SourceLookup {
        from_params(parts.path_params())
    }
}
