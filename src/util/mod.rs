//! Utility modules for filesystem, path, and clipboard operations.

pub mod clipboard;
pub mod fs;
pub mod path;
