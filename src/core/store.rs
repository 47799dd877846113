//! Secret store abstraction and the bundled backends.
//!
//! The wizard only needs three operations: an existence check, a single
//! write, and the list of mount points for prefix selection.

use crate::constants;
use crate::core::file_lock::StoreLock;
use crate::core::paths::StorePaths;
use crate::models::secret::{Secret, SecretField};
use crate::util::{fs as store_fs, path as store_path};
use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use zeroize::Zeroizing;

pub trait SecretStore {
    fn exists(&self, name: &str) -> bool;
    fn set(&mut self, name: &str, secret: &Secret) -> Result<()>;
    fn mount_points(&self) -> Vec<String>;
}

/// On-disk document format of one secret.
#[derive(Serialize)]
struct SecretDocument<'a> {
    value: &'a str,
    fields: &'a [SecretField],
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a str>,
}

/// JSON documents below the store root; mount points live in their own directories.
#[derive(Debug, Clone)]
pub struct FileStore {
    paths: StorePaths,
    mounts: BTreeMap<String, PathBuf>,
}

impl FileStore {
    pub fn new(paths: StorePaths, mounts: BTreeMap<String, PathBuf>) -> Self {
        Self { paths, mounts }
    }

    /// Directory and file a name maps to. A leading mount segment routes to that mount.
    fn locate(&self, name: &str) -> Result<(PathBuf, PathBuf)> {
        if let Some((first, rest)) = name.split_once('/') {
            if let Some(dir) = self.mounts.get(first) {
                tracing::debug!(mount = first, "routing secret to mount point");
                return Ok((dir.clone(), store_path::secret_file(dir, rest)?));
            }
        }
        let dir = self.paths.root.clone();
        let file = store_path::secret_file(&dir, name)?;
        Ok((dir, file))
    }
}

impl SecretStore for FileStore {
    fn exists(&self, name: &str) -> bool {
        match self.locate(name) {
            Ok((_, file)) => file.is_file(),
            Err(_) => false,
        }
    }

    fn set(&mut self, name: &str, secret: &Secret) -> Result<()> {
        let (dir, file) = self.locate(name)?;
        store_fs::ensure_dir(&self.paths.root, constants::STORE_DIR_MODE)?;
        store_fs::ensure_dir(&dir, constants::STORE_DIR_MODE)?;
        if let Some(parent) = file.parent() {
            store_fs::ensure_dir(parent, constants::STORE_DIR_MODE)?;
        }

        let doc = SecretDocument {
            value: secret.value(),
            fields: secret.fields(),
            body: secret.body(),
        };
        let json = Zeroizing::new(serde_json::to_vec_pretty(&doc).context("serialize secret")?);

        let _lock = StoreLock::acquire(&self.paths.lock)?;
        store_fs::write_atomic(&file, &json, constants::SECRET_FILE_MODE)
            .with_context(|| format!("write {}", file.display()))?;
        Ok(())
    }

    fn mount_points(&self) -> Vec<String> {
        self.mounts.keys().cloned().collect()
    }
}

/// In-memory store preserving write order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    secrets: Vec<(String, Secret)>,
    mounts: Vec<String>,
    writes: usize,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mounts(mounts: &[&str]) -> Self {
        Self {
            mounts: mounts.iter().map(|m| m.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Reject every write, for exercising storage failures.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Seed an entry without counting it as a write.
    pub fn insert(&mut self, name: &str, secret: Secret) {
        self.put(name, secret);
    }

    pub fn get(&self, name: &str) -> Option<&Secret> {
        self.secrets
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    pub fn names(&self) -> Vec<&str> {
        self.secrets.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Successful `set` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    fn put(&mut self, name: &str, secret: Secret) {
        if let Some(existing) = self.secrets.iter_mut().find(|(n, _)| n == name) {
            existing.1 = secret;
        } else {
            self.secrets.push((name.to_string(), secret));
        }
    }
}

impl SecretStore for MemoryStore {
    fn exists(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    fn set(&mut self, name: &str, secret: &Secret) -> Result<()> {
        if self.read_only {
            bail!("store is read-only");
        }
        self.put(name, secret.clone());
        self.writes += 1;
        Ok(())
    }

    fn mount_points(&self) -> Vec<String> {
        self.mounts.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn file_store(dir: &TempDir, mounts: &[(&str, PathBuf)]) -> FileStore {
        let paths = StorePaths::from_root(dir.path().join("root"));
        let mounts = mounts
            .iter()
            .map(|(name, path)| (name.to_string(), path.clone()))
            .collect();
        FileStore::new(paths, mounts)
    }

    fn sample_secret() -> Secret {
        let mut sec = Secret::new("hunter2", None);
        sec.set_field("username", "bob").unwrap();
        sec.set_field("url", "https://example.com").unwrap();
        sec
    }

    #[test]
    fn test_file_store_write_then_exists() {
        let dir = TempDir::new().unwrap();
        let mut store = file_store(&dir, &[]);
        assert!(!store.exists("websites/example.com/bob"));
        store.set("websites/example.com/bob", &sample_secret()).unwrap();
        assert!(store.exists("websites/example.com/bob"));

        let path = dir.path().join("root/websites/example.com/bob.json");
        let doc: serde_json::Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(doc["value"], "hunter2");
        assert_eq!(doc["fields"][0]["key"], "username");
        assert_eq!(doc["fields"][1]["key"], "url");
        assert!(doc.get("body").is_none());
    }

    #[test]
    fn test_file_store_body_document() {
        let dir = TempDir::new().unwrap();
        let mut store = file_store(&dir, &[]);
        let sec = Secret::new("", Some("{\"client_email\":\"a@b.c\"}".into()));
        store.set("gcp/iam/b/a", &sec).unwrap();
        let path = dir.path().join("root/gcp/iam/b/a.json");
        let doc: serde_json::Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(doc["value"], "");
        assert_eq!(doc["body"], "{\"client_email\":\"a@b.c\"}");
    }

    #[cfg(unix)]
    #[test]
    fn test_file_store_private_mode() {
        use std::os::unix::fs::PermissionsExt;
        let dir = TempDir::new().unwrap();
        let mut store = file_store(&dir, &[]);
        store.set("misc/test", &sample_secret()).unwrap();
        let meta = fs::metadata(dir.path().join("root/misc/test.json")).unwrap();
        assert_eq!(meta.permissions().mode() & 0o777, constants::SECRET_FILE_MODE);
    }

    #[test]
    fn test_file_store_routes_mounts() {
        let dir = TempDir::new().unwrap();
        let work = dir.path().join("work");
        let mut store = file_store(&dir, &[("work", work.clone())]);
        assert_eq!(store.mount_points(), vec!["work".to_string()]);

        store.set("work/misc/deploy", &sample_secret()).unwrap();
        assert!(work.join("misc/deploy.json").is_file());
        assert!(store.exists("work/misc/deploy"));
        assert!(!store.exists("misc/deploy"));
    }

    #[test]
    fn test_file_store_rejects_traversal() {
        let dir = TempDir::new().unwrap();
        let mut store = file_store(&dir, &[]);
        assert!(store.set("../escape", &sample_secret()).is_err());
        assert!(store.set("/etc/escape", &sample_secret()).is_err());
        assert!(!dir.path().join("escape.json").exists());
        assert!(!store.exists("../escape"));
    }

    #[test]
    fn test_file_store_overwrites() {
        let dir = TempDir::new().unwrap();
        let mut store = file_store(&dir, &[]);
        store.set("misc/x", &Secret::new("one", None)).unwrap();
        store.set("misc/x", &Secret::new("two", None)).unwrap();
        let doc: serde_json::Value =
            serde_json::from_slice(&fs::read(dir.path().join("root/misc/x.json")).unwrap())
                .unwrap();
        assert_eq!(doc["value"], "two");
    }

    #[test]
    fn test_memory_store_counts_writes() {
        let mut store = MemoryStore::new();
        store.insert("misc/seeded", Secret::new("x", None));
        assert_eq!(store.writes(), 0);
        assert!(store.exists("misc/seeded"));

        store.set("misc/a", &Secret::new("a", None)).unwrap();
        store.set("misc/b", &Secret::new("b", None)).unwrap();
        assert_eq!(store.writes(), 2);
        assert_eq!(store.names(), vec!["misc/seeded", "misc/a", "misc/b"]);
    }

    #[test]
    fn test_memory_store_read_only() {
        let mut store = MemoryStore::new().read_only();
        assert!(store.set("misc/a", &Secret::default()).is_err());
        assert_eq!(store.writes(), 0);
        assert!(!store.exists("misc/a"));
    }
}
