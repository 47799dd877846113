//! Structured secret record handed to a store.

use crate::error::{Result, WizardError};
use serde::Serialize;
use zeroize::Zeroizing;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecretField {
    pub key: String,
    pub value: String,
}

/// Primary value, ordered named fields, and an optional opaque body.
#[derive(Clone)]
pub struct Secret {
    value: Zeroizing<String>,
    fields: Vec<SecretField>,
    body: Option<String>,
}

impl Default for Secret {
    fn default() -> Self {
        Self::new("", None)
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys: Vec<&str> = self.fields.iter().map(|field| field.key.as_str()).collect();
        f.debug_struct("Secret")
            .field("value", &"<redacted>")
            .field("fields", &keys)
            .field("body", &self.body.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Secret {
    pub fn new(value: impl Into<String>, body: Option<String>) -> Self {
        Self {
            value: Zeroizing::new(value.into()),
            fields: Vec::new(),
            body,
        }
    }

    /// Set a field. An existing key keeps its position and gets the new value.
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() {
            return Err(WizardError::empty("Field name"));
        }
        if key.contains(['\n', '\r']) {
            return Err(WizardError::Validation {
                field: "Field name",
                reason: format!("'{}' must not contain line breaks", key.escape_debug()),
            });
        }
        if let Some(existing) = self.fields.iter_mut().find(|f| f.key == key) {
            existing.value = value.to_string();
        } else {
            self.fields.push(SecretField {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
        Ok(())
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn fields(&self) -> &[SecretField] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_keep_insertion_order() {
        let mut sec = Secret::new("pw", None);
        sec.set_field("zeta", "1").unwrap();
        sec.set_field("alpha", "2").unwrap();
        sec.set_field("mid", "3").unwrap();
        let keys: Vec<&str> = sec.fields().iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_set_field_replaces_in_place() {
        let mut sec = Secret::new("pw", None);
        sec.set_field("a", "1").unwrap();
        sec.set_field("b", "2").unwrap();
        sec.set_field("a", "3").unwrap();
        assert_eq!(sec.fields().len(), 2);
        assert_eq!(sec.fields()[0].key, "a");
        assert_eq!(sec.field("a"), Some("3"));
    }

    #[test]
    fn test_set_field_rejects_bad_keys() {
        let mut sec = Secret::default();
        assert!(sec.set_field("", "x").is_err());
        assert!(sec.set_field("two\nlines", "x").is_err());
        assert!(sec.fields().is_empty());
    }

    #[test]
    fn test_debug_redacts_values() {
        let mut sec = Secret::new("hunter2", None);
        sec.set_field("token", "abc123").unwrap();
        let dbg = format!("{:?}", sec);
        assert!(!dbg.contains("hunter2"));
        assert!(!dbg.contains("abc123"));
        assert!(dbg.contains("token"));
    }

    #[test]
    fn test_body_only_secret() {
        let sec = Secret::new("", Some("{\"k\":1}".into()));
        assert_eq!(sec.value(), "");
        assert_eq!(sec.body(), Some("{\"k\":1}"));
    }
}
