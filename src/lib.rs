//! Interactive wizard for creating structured secrets.
//!
//! Guides the user through one of several secret types (website login,
//! PIN, generic key/value secret, AWS IAM key, GCP service account),
//! derives a collision-checked store path, optionally generates the value,
//! and writes the assembled secret to a store.
//!
//! ## Modules
//! - `cli`: Command-line handlers
//! - `core`: Naming, generation, service-account parsing, stores
//! - `models`: Data structures (secret, wizard kinds, configuration)
//! - `prompt`: Prompt provider abstraction (terminal and scripted)
//! - `util`: Filesystem, path and clipboard helpers
//! - `wizard`: The per-type creation flows

pub mod cli;
pub mod constants;
pub mod core;
pub mod error;
pub mod models;
pub mod prompt;
pub mod util;
pub mod wizard;
