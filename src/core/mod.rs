//! Core logic: naming, generation, service-account parsing, and stores.

pub mod config;
pub mod file_lock;
pub mod generate;
pub mod naming;
pub mod paths;
pub mod sanitize;
pub mod service_account;
pub mod store;
