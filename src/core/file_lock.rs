//! Exclusive flock(2) guard serializing writes to the file store.

use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Held for the duration of one store write. Released on drop.
pub struct StoreLock {
    _file: File,
}

impl StoreLock {
    /// Acquire the lock, blocking while another writer holds it.
    pub fn acquire(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)
            .with_context(|| format!("open lock file {}", path.display()))?;
        file.lock_exclusive()
            .with_context(|| format!("acquire lock {}", path.display()))?;
        tracing::debug!(lock = %path.display(), "store lock acquired");
        Ok(Self { _file: file })
    }
}
