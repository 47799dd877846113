//! Mapping secret names onto files without escaping the store directory.

use crate::constants;
use anyhow::{bail, Result};
use std::path::{Component, Path, PathBuf};

/// Normalize a path by resolving `.` and `..` components without filesystem access.
pub fn normalize(path: &Path) -> PathBuf {
    let mut components = Vec::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                components.pop();
            }
            Component::CurDir => {}
            other => components.push(other),
        }
    }
    components.iter().collect()
}

/// Check if `path` is contained within `root` after normalization.
pub fn is_within(path: &Path, root: &Path) -> bool {
    normalize(path).starts_with(normalize(root))
}

/// File holding the secret `name` below `dir`.
///
/// Only plain relative segments are accepted: no `..`, no absolute paths,
/// no trailing separator.
pub fn secret_file(dir: &Path, name: &str) -> Result<PathBuf> {
    if name.is_empty() || name.ends_with('/') {
        bail!("invalid secret name '{}'", name);
    }
    if !Path::new(name)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        bail!(
            "invalid secret name '{}': only relative path segments allowed",
            name
        );
    }
    let file = dir.join(format!("{}{}", name, constants::SECRET_EXTENSION));
    if !is_within(&file, dir) {
        bail!("invalid secret name '{}': escapes the store", name);
    }
    Ok(file)
}
