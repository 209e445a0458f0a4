//! Capability queries over an identity's realm roles

use super::types::{Identity, PLATFORM_ADMIN_ROLE, ProjectRole};
use crate::services::{DatasetRecord, ProjectDirectory};
use crate::utils::error::Result;
use std::collections::HashMap;
use tracing::debug;

/// Prefix of platform-scoped realm roles, never a project code
const PLATFORM_PREFIX: &str = "platform";

/// Parse a `"<project_code>-<role>"` realm role.
///
/// Splits on the first `-`. Platform-scoped roles, empty codes and unrecognised role
/// names yield `None`.
pub fn parse_realm_role(raw: &str) -> Option<(&str, ProjectRole)> {
    let (code, role) = raw.split_once('-')?;
    if code.is_empty() || code == PLATFORM_PREFIX {
        return None;
    }
    let role = role.parse::<ProjectRole>().ok()?;
    Some((code, role))
}

impl Identity {
    pub fn is_platform_admin(&self) -> bool {
        self.realm_roles().iter().any(|r| r == PLATFORM_ADMIN_ROLE)
    }

    /// Project code to role, computed once per identity value
    pub fn project_roles(&self) -> &HashMap<String, ProjectRole> {
        self.project_roles.get_or_init(|| {
            let mut roles = HashMap::new();
            for raw in self.realm_roles() {
                if let Some((code, role)) = parse_realm_role(raw) {
                    roles.insert(code.to_string(), role);
                }
            }
            roles
        })
    }

    /// The caller's role in `project_code`, if any
    pub fn role_in(&self, project_code: &str) -> Option<ProjectRole> {
        self.project_roles().get(project_code).copied()
    }

    /// Codes of every project where the caller holds `role`, sorted
    pub fn projects_with_role(&self, role: ProjectRole) -> Vec<String> {
        let mut codes: Vec<String> = self
            .project_roles()
            .iter()
            .filter(|(_, r)| **r == role)
            .map(|(code, _)| code.clone())
            .collect();
        codes.sort();
        codes
    }

    pub fn can_access_project(&self, project_code: &str) -> bool {
        self.is_platform_admin() || self.project_roles().contains_key(project_code)
    }

    /// Whether the caller may act on `dataset`.
    ///
    /// Creators always may. Otherwise the dataset's project must be one the caller
    /// administers. Realm roles carry project codes while datasets carry project ids,
    /// so each admin project code is resolved to its id through `projects`, one at a
    /// time, stopping at the first match.
    pub async fn can_access_dataset(
        &self,
        dataset: &DatasetRecord,
        projects: &dyn ProjectDirectory,
    ) -> Result<bool> {
        if dataset.creator == self.username() {
            return Ok(true);
        }

        let Some(project_id) = dataset.project_id.as_deref() else {
            return Ok(false);
        };

        for code in self.projects_with_role(ProjectRole::Admin) {
            match projects.get_project(&code).await? {
                Some(project) if project.id == project_id => return Ok(true),
                Some(_) => {}
                None => debug!(project_code = %code, "Admin project not found in project service"),
            }
        }

        Ok(false)
    }
}
