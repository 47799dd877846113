//! CLI routing and command dispatch.

use crate::core::config;
use crate::core::paths::StorePaths;
use crate::models::config::ConfigFile;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod create;

/// Shared context passed to all command handlers.
pub struct CliContext {
    pub paths: StorePaths,
    pub config: ConfigFile,
}

#[derive(Parser, Debug)]
#[command(name = "credwiz", version, about = "Interactive wizard for creating structured secrets")]
pub struct Cli {
    /// Store root (default: $CREDWIZ_ROOT or ~/.credwiz)
    #[arg(long, global = true, value_name = "PATH")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let paths = StorePaths::resolve(self.root)?;
        let config = config::load(&paths.config)?;
        tracing::debug!(store = %paths, mounts = config.store.mounts.len(), "loaded configuration");

        let ctx = CliContext { paths, config };

        match self.command {
            Commands::Create(args) => create::run(&ctx, args),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new secret through the interactive wizard
    Create(create::CreateArgs),
}
