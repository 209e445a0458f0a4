//! Wire types exchanged with remote services

use serde::{Deserialize, Serialize};

/// Account status attribute carried by directory users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Disabled,
    Pending,
    Hibernate,
    #[serde(other)]
    Unknown,
}

/// Directory attributes of a user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserAttributes {
    #[serde(default)]
    pub status: Option<UserStatus>,
}

/// A user as returned by `GET /admin/user`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub attributes: UserAttributes,
}

impl DirectoryUser {
    /// Only users whose status attribute is exactly `active` may authenticate
    pub fn is_active(&self) -> bool {
        matches!(self.attributes.status, Some(UserStatus::Active))
    }
}

/// A project as returned by `GET /projects/{id_or_code}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// A dataset as returned by `GET /datasets/{id_or_code}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub id: String,
    pub code: String,
    pub creator: String,
    #[serde(default)]
    pub project_id: Option<String>,
}

/// Parameters of one `GET /authorize` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyQuery {
    pub role: String,
    pub resource: String,
    pub zone: String,
    pub operation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_code: Option<String>,
}
