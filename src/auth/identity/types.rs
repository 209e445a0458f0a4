//! Identity data model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Realm role granting platform-wide administration
pub const PLATFORM_ADMIN_ROLE: &str = "platform-admin";

/// Role held within a single project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectRole {
    Admin,
    Collaborator,
    Contributor,
}

impl ProjectRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectRole::Admin => "admin",
            ProjectRole::Collaborator => "collaborator",
            ProjectRole::Contributor => "contributor",
        }
    }
}

impl FromStr for ProjectRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(ProjectRole::Admin),
            "collaborator" => Ok(ProjectRole::Collaborator),
            "contributor" => Ok(ProjectRole::Contributor),
            other => Err(format!("Unknown project role: {}", other)),
        }
    }
}

impl fmt::Display for ProjectRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform-wide role, derived from the presence of [`PLATFORM_ADMIN_ROLE`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformRole {
    Admin,
    Member,
}

/// An authenticated caller.
///
/// Profile fields come from a live directory lookup; `realm_roles` are copied
/// verbatim from the bearer token so that roles cannot change mid-session. Values
/// are immutable once built, which is what lets the project-role map be computed
/// lazily and kept for the lifetime of the value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    user_id: String,
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    platform_role: PlatformRole,
    realm_roles: Vec<String>,
    #[serde(skip)]
    pub(super) project_roles: OnceLock<HashMap<String, ProjectRole>>,
}

impl Identity {
    pub fn new(
        user_id: impl Into<String>,
        username: impl Into<String>,
        realm_roles: Vec<String>,
    ) -> Self {
        let platform_role = if realm_roles.iter().any(|r| r == PLATFORM_ADMIN_ROLE) {
            PlatformRole::Admin
        } else {
            PlatformRole::Member
        };

        Self {
            user_id: user_id.into(),
            username: username.into(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            platform_role,
            realm_roles,
            project_roles: OnceLock::new(),
        }
    }

    /// Attach directory profile fields
    pub fn with_profile(
        mut self,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        self.email = email.into();
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn platform_role(&self) -> PlatformRole {
        self.platform_role
    }

    pub fn realm_roles(&self) -> &[String] {
        &self.realm_roles
    }
}

// The memoized role map is derived from `realm_roles` and takes no part in equality.
impl PartialEq for Identity {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id
            && self.username == other.username
            && self.email == other.email
            && self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.platform_role == other.platform_role
            && self.realm_roles == other.realm_roles
    }
}

impl Eq for Identity {}
