//! Data structures shared across the wizards.

pub mod config;
pub mod secret;
pub mod wizard_kind;
