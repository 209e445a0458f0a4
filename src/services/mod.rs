//! Remote service clients
//!
//! The authorization layer talks to three services it does not own:
//! - the auth service, for directory lookups and policy decisions
//! - the project service, for project id/code resolution
//! - the dataset service, for dataset records
//!
//! Each is reached through a small async trait so the resolvers and the gate can be
//! driven by fakes in tests. The `Http*` implementations share one `reqwest::Client`
//! carrying the client-wide timeout and never retry.

pub mod authorization;
pub mod datasets;
pub mod directory;
pub mod projects;
pub mod types;

pub use authorization::{HttpPolicyAuthority, PolicyAuthority};
pub use datasets::{DatasetDirectory, HttpDatasetDirectory};
pub use directory::{HttpUserDirectory, UserDirectory};
pub use projects::{HttpProjectDirectory, ProjectDirectory};
pub use types::{DatasetRecord, DirectoryUser, PolicyQuery, ProjectRecord, UserStatus};

#[cfg(test)]
pub use authorization::MockPolicyAuthority;
#[cfg(test)]
pub use datasets::MockDatasetDirectory;
#[cfg(test)]
pub use directory::MockUserDirectory;
#[cfg(test)]
pub use projects::MockProjectDirectory;

use crate::utils::error::{GatewayError, Result};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

/// Join path segments onto a service base URL, percent-encoding each segment
pub(crate) fn endpoint(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base)
        .map_err(|e| GatewayError::config(format!("Invalid service URL '{}': {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| GatewayError::config(format!("Service URL '{}' cannot be a base", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Decode a JSON body, mapping 404 to `None` and any other failure status to `Upstream`
pub(crate) async fn read_optional_json<T: DeserializeOwned>(
    response: Response,
    service: &str,
) -> Result<Option<T>> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(GatewayError::upstream(format!(
            "{} returned status {}",
            service, status
        )));
    }

    let body = response.json::<T>().await.map_err(|e| {
        GatewayError::upstream(format!("{} returned an unreadable body: {}", service, e))
    })?;
    Ok(Some(body))
}
