use super::{require_segment, Created, Creator};
use crate::constants;
use crate::core::service_account;
use crate::error::{Result, WizardError};
use crate::models::secret::Secret;
use crate::models::wizard_kind::WizardKind;
use std::fs;
use std::path::PathBuf;

/// Expand a leading `~/` against `$HOME`.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(path)
}

fn read_key_file(path: &str) -> Result<Vec<u8>> {
    let file = expand_home(path);
    let io_err = |source: std::io::Error| WizardError::Io {
        operation: "read",
        target: path.to_string(),
        source,
    };
    let len = fs::metadata(&file).map_err(io_err)?.len();
    if len > constants::MAX_SERVICE_ACCOUNT_SIZE {
        return Err(WizardError::Validation {
            field: "Service account file",
            reason: format!(
                "'{}' is {} bytes, max {} bytes",
                path,
                len,
                constants::MAX_SERVICE_ACCOUNT_SIZE
            ),
        });
    }
    fs::read(&file).map_err(io_err)
}

impl Creator<'_> {
    /// Service-account key file stored whole as the secret body.
    pub(super) fn create_gcp(&mut self) -> Result<Created> {
        self.header("Creating GCP credentials ...")?;
        let path = self
            .prompter
            .ask_string("Please enter path to the Service Account JSON file", "")?;
        let buf = read_key_file(&path)?;
        let info = service_account::extract(&buf).map_err(|source| WizardError::ServiceAccount {
            file: path.clone(),
            source,
        })?;
        let body = String::from_utf8(buf).map_err(|e| WizardError::Parse {
            what: path.clone(),
            reason: e.to_string(),
        })?;

        let mut username = info.username;
        if username.is_empty() {
            username = self
                .prompter
                .ask_string("Please enter the name of this service account", "")?;
        }
        require_segment("Username", &username)?;
        let mut project = info.project;
        if project.is_empty() {
            project = self
                .prompter
                .ask_string("Please enter the name of this GCP project", "")?;
        }
        require_segment("Project", &project)?;

        let name = self.secret_name(WizardKind::GcpServiceAccount, &[&project, &username])?;

        let sec = Secret::new("", Some(body));
        self.commit(&name, &sec)?;

        Ok(Created {
            kind: WizardKind::GcpServiceAccount,
            name,
            generated: false,
        })
    }
}
