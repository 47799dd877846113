//! Identity extraction from GCP service-account key files.

use crate::error::ServiceAccountError;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceAccountInfo {
    pub username: String,
    pub project: String,
}

#[derive(Deserialize)]
struct KeyFile {
    #[serde(default)]
    client_email: String,
}

/// Derive `(username, project)` from the `client_email` of a key file.
///
/// `svc@project-123.iam.gserviceaccount.com` yields `svc` and `project-123`.
pub fn extract(buf: &[u8]) -> Result<ServiceAccountInfo, ServiceAccountError> {
    let key: KeyFile = serde_json::from_slice(buf)
        .map_err(|e| ServiceAccountError::InvalidJson(e.to_string()))?;

    let (username, domain) = key
        .client_email
        .split_once('@')
        .ok_or(ServiceAccountError::MissingAt)?;
    let username = username.to_string();

    match domain.split_once('.') {
        Some((project, _)) => Ok(ServiceAccountInfo {
            username,
            project: project.to_string(),
        }),
        None => Err(ServiceAccountError::MissingProjectSeparator { username }),
    }
}
