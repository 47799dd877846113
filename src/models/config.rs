//! Configuration file model (`credwiz.toml`).

use crate::constants;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub generation: GenerationSection,
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub clipboard: ClipboardSection,
}

/// Defaults offered by the generation prompts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationSection {
    #[serde(default = "default_password_length")]
    pub password_length: usize,

    #[serde(default = "default_passphrase_words")]
    pub passphrase_words: usize,

    #[serde(default = "default_pin_length")]
    pub pin_length: usize,

    /// Include symbols in random charset passwords by default.
    #[serde(default)]
    pub symbols: bool,
}

impl Default for GenerationSection {
    fn default() -> Self {
        Self {
            password_length: default_password_length(),
            passphrase_words: default_passphrase_words(),
            pin_length: default_pin_length(),
            symbols: false,
        }
    }
}

fn default_password_length() -> usize {
    constants::DEFAULT_PASSWORD_LENGTH
}

fn default_passphrase_words() -> usize {
    constants::DEFAULT_PASSPHRASE_WORDS
}

fn default_pin_length() -> usize {
    constants::DEFAULT_PIN_LENGTH
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSection {
    /// Mount point name to directory.
    #[serde(default)]
    pub mounts: BTreeMap<String, PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClipboardSection {
    /// Command (argv form) that receives the value on stdin.
    #[serde(default)]
    pub command: Option<Vec<String>>,
}
