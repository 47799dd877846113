//! Error kinds surfaced by the wizards.

use crate::constants;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("aborted by user")]
    Aborted,

    #[error("{field} {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("cannot parse {what}: {reason}")]
    Parse { what: String, reason: String },

    #[error("service account file '{file}': {source}")]
    ServiceAccount {
        file: String,
        #[source]
        source: ServiceAccountError,
    },

    #[error("{operation} {target}: {source}")]
    Io {
        operation: &'static str,
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to copy '{name}' to clipboard: {source}")]
    Clipboard {
        name: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to set '{name}': {source}")]
    Storage {
        name: String,
        #[source]
        source: BoxError,
    },
}

impl WizardError {
    /// A required field was left empty.
    pub fn empty(field: &'static str) -> Self {
        Self::Validation {
            field,
            reason: "must not be empty".to_string(),
        }
    }

    pub fn storage(name: &str, source: anyhow::Error) -> Self {
        Self::Storage {
            name: name.to_string(),
            source: source.into(),
        }
    }

    pub fn clipboard(name: &str, source: anyhow::Error) -> Self {
        Self::Clipboard {
            name: name.to_string(),
            source: source.into(),
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Aborted => constants::EXIT_ABORTED,
            Self::Validation { .. } => constants::EXIT_VALIDATION,
            Self::Parse { .. } | Self::ServiceAccount { .. } => constants::EXIT_PARSE,
            Self::Io { .. } | Self::Clipboard { .. } => constants::EXIT_IO,
            Self::Storage { .. } => constants::EXIT_STORAGE,
        }
    }
}

/// Failures extracting identity details from a service-account key.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceAccountError {
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("client_email contains no email")]
    MissingAt,

    /// The username could still be read; only the project is missing.
    #[error("client_email domain of '{username}' has no project separator")]
    MissingProjectSeparator { username: String },
}

impl ServiceAccountError {
    /// Username recovered before the failure, if any.
    pub fn partial_username(&self) -> Option<&str> {
        match self {
            Self::MissingProjectSeparator { username } => Some(username),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, WizardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_kind() {
        assert_eq!(WizardError::Aborted.exit_code(), constants::EXIT_ABORTED);
        assert_eq!(WizardError::empty("Account").exit_code(), constants::EXIT_VALIDATION);
        let parse = WizardError::ServiceAccount {
            file: "key.json".into(),
            source: ServiceAccountError::MissingAt,
        };
        assert_eq!(parse.exit_code(), constants::EXIT_PARSE);
        assert!(parse.to_string().contains("key.json"));
        assert_eq!(
            WizardError::storage("misc/x", anyhow::anyhow!("disk full")).exit_code(),
            constants::EXIT_STORAGE
        );
    }

    #[test]
    fn test_storage_error_names_target() {
        let err = WizardError::storage("aws/iam/acme/bob", anyhow::anyhow!("read-only store"));
        let msg = err.to_string();
        assert!(msg.contains("aws/iam/acme/bob"));
        assert!(msg.contains("read-only store"));
    }

    #[test]
    fn test_empty_field_message() {
        assert_eq!(WizardError::empty("Authority").to_string(), "Authority must not be empty");
    }

    #[test]
    fn test_partial_username() {
        let err = ServiceAccountError::MissingProjectSeparator {
            username: "svc".into(),
        };
        assert_eq!(err.partial_username(), Some("svc"));
        assert_eq!(ServiceAccountError::MissingAt.partial_username(), None);
    }
}
