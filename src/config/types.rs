//! Configuration types

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::value_objects::{ConfigWarning, IgnorePatterns};
use crate::error::ThemeSyncResult;

use super::loader;

/// File name of the configuration, relative to the working directory
pub const CONFIG_FILE: &str = "config.yml";

/// Store credentials and sync options read from `config.yml`
///
/// Keys written as Ruby symbols (`:api_key:`) by older tooling are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(alias = ":api_key")]
    pub api_key: String,

    #[serde(alias = ":password")]
    pub password: String,

    /// Store host (`example.myshopify.com`) or full base URL
    #[serde(alias = ":store")]
    pub store: String,

    /// Regexes of keys to leave out of default scopes
    #[serde(
        alias = ":ignore_files",
        deserialize_with = "nullable_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub ignore_files: Vec<String>,
}

/// Accepts `null`, a missing list and `null` entries inside the list
fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(entries.unwrap_or_default().into_iter().flatten().collect())
}

impl Config {
    /// Build a configuration from credentials
    pub fn new(
        api_key: impl Into<String>,
        password: impl Into<String>,
        store: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            password: password.into(),
            store: store.into(),
            ignore_files: Vec::new(),
        }
    }

    /// Load, apply environment overrides and validate `config.yml` in `root`
    pub fn load(root: &Path) -> ThemeSyncResult<(Self, Vec<ConfigWarning>)> {
        loader::load(root)
    }

    /// Load a configuration file and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> ThemeSyncResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (THEMESYNC_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Reject empty credentials
    pub fn validate(&self) -> ThemeSyncResult<()> {
        loader::validate(self)
    }

    /// Compile `ignore_files`
    pub fn ignore_patterns(&self) -> ThemeSyncResult<IgnorePatterns> {
        Ok(IgnorePatterns::compile(&self.ignore_files)?)
    }

    /// Write this configuration as `config.yml` in `root`
    pub fn save(&self, root: &Path, force: bool) -> ThemeSyncResult<()> {
        loader::save(self, root, force)
    }
}
