//! Store root resolution and directory structure.

use crate::constants;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct StorePaths {
    pub root: PathBuf,
    pub config: PathBuf,
    pub lock: PathBuf,
}

impl StorePaths {
    /// Resolve the store root from CLI arg, env var, or `$HOME`.
    pub fn resolve(root_arg: Option<PathBuf>) -> Result<Self> {
        if let Some(root) = root_arg {
            return Ok(Self::from_root(root));
        }
        if let Ok(root) = env::var(constants::ROOT_ENV) {
            if !root.is_empty() {
                return Ok(Self::from_root(PathBuf::from(root)));
            }
        }
        let home = env::var_os("HOME")
            .map(PathBuf::from)
            .context("cannot determine store root: HOME is not set (use --root)")?;
        Ok(Self::from_root(home.join(constants::DEFAULT_ROOT_DIR)))
    }

    pub fn from_root(root: PathBuf) -> Self {
        let config = root.join(constants::CONFIG_FILE);
        let lock = root.join(constants::STORE_LOCK_FILE);
        Self { root, config, lock }
    }
}

impl std::fmt::Display for StorePaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "store@{}", self.root.display())
    }
}
