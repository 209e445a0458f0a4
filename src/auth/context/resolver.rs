//! Project and dataset reference resolution

use super::request::{RequestParts, scalar_value};
use super::sources::{BodySource, ContextSource, PathSource, QuerySource, SourceLookup};
use crate::services::ProjectDirectory;
use crate::utils::error::{GatewayError, Result};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// A dataset named by code or by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum DatasetRef {
    Code(String),
    Id(String),
}

impl DatasetRef {
    /// The dataset service accepts either form on the same route
    pub fn as_str(&self) -> &str {
        match self {
            DatasetRef::Code(v) | DatasetRef::Id(v) => v,
        }
    }
}

/// Resolves the project a request targets.
///
/// Resolution is deterministic and read-only: calling it twice on the same request
/// yields the same answer, with at most one project lookup per call.
pub struct ContextResolver {
    projects: Arc<dyn ProjectDirectory>,
    sources: Vec<Box<dyn ContextSource>>,
    warn_on_legacy_params: bool,
}

impl ContextResolver {
    /// Resolver over body, query and path, in that order
    pub fn new(projects: Arc<dyn ProjectDirectory>, warn_on_legacy_params: bool) -> Self {
        Self::with_sources(
            projects,
            vec![
                Box::new(BodySource),
                Box::new(QuerySource),
                Box::new(PathSource),
            ],
            warn_on_legacy_params,
        )
    }

    pub fn with_sources(
        projects: Arc<dyn ProjectDirectory>,
        sources: Vec<Box<dyn ContextSource>>,
        warn_on_legacy_params: bool,
    ) -> Self {
        Self {
            projects,
            sources,
            warn_on_legacy_params,
        }
    }

    /// The project code the request targets, or `None` when it names no project.
    ///
    /// Fails with `BadContext` when the route binds both `project_code` and
    /// `project_id`, before any lookup is made.
    pub async fn resolve_project_code(&self, parts: &RequestParts) -> Result<Option<String>> {
        let bound = parts.bound();
        match (&bound.project_code, &bound.project_id) {
            (Some(_), Some(_)) => {
                return Err(GatewayError::bad_context(
                    "project_code and project_id are mutually exclusive",
                ));
            }
            (Some(code), None) => return Ok(Some(code.clone())),
            (None, Some(id)) => return self.code_for_id(id).await,
            (None, None) => {}
        }

        for source in &self.sources {
            match source.lookup(parts) {
                SourceLookup::Found(key, value) => {
                    debug!(source = source.name(), key = %key, "Resolved project reference");
                    if key.is_deprecated() && self.warn_on_legacy_params {
                        warn!(
                            source = source.name(),
                            "Deprecated project_geid parameter used; send project_id instead"
                        );
                    }
                    if key.is_id() {
                        return self.code_for_id(&value).await;
                    }
                    return Ok(Some(value));
                }
                SourceLookup::NotFound => {}
            }
        }

        debug!("Request names no project");
        Ok(None)
    }

    async fn code_for_id(&self, id: &str) -> Result<Option<String>> {
        match self.projects.get_project(id).await? {
            Some(project) => Ok(Some(project.code)),
            None => {
                debug!(project_id = id, "Project id not found; no context");
                Ok(None)
            }
        }
    }

    /// The dataset a request targets: path parameters first, then the JSON body,
    /// preferring `dataset_code` over `dataset_id` within each.
    pub fn resolve_dataset_ref(&self, parts: &RequestParts) -> Option<DatasetRef> {
        let path = parts.path_params();
        let from_path = |key: &str| path.get(key).filter(|v| !v.is_empty()).cloned();
        if let Some(code) = from_path("dataset_code") {
            return Some(DatasetRef::Code(code));
        }
        if let Some(id) = from_path("dataset_id") {
            return Some(DatasetRef::Id(id));
        }

        let body = parts.json_object()?;
        if let Some(code) = body.get("dataset_code").and_then(scalar_value) {
            return Some(DatasetRef::Code(code));
        }
        body.get("dataset_id").and_then(scalar_value).map(DatasetRef::Id)
    }
}

impl std::fmt::Debug for ContextResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sources: Vec<&str> = self.sources.iter().map(|s| s.name()).collect();
        f.debug_struct("ContextResolver")
            .field("sources", &sources)
            .field("warn_on_legacy_params", &self.warn_on_legacy_params)
            .finish_non_exhaustive()
    }
}
