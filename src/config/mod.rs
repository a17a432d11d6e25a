//! Configuration module for themesync
//!
//! Configuration hierarchy:
//! 1. Environment variables (THEMESYNC_*)
//! 2. `config.yml` in the working directory
//!
//! A missing or invalid configuration is fatal before any asset work starts.

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{apply_overrides, parse_with_warnings, ENV_API_KEY, ENV_PASSWORD, ENV_STORE};
pub use types::{Config, CONFIG_FILE};
