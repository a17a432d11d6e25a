//! Configuration loading and persistence

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::value_objects::ConfigWarning;
use crate::error::{ThemeSyncError, ThemeSyncResult};
use crate::infrastructure::fs::atomic_write;

use super::types::{Config, CONFIG_FILE};

/// Environment variables that replace file values
pub const ENV_API_KEY: &str = "THEMESYNC_API_KEY";
pub const ENV_PASSWORD: &str = "THEMESYNC_PASSWORD";
pub const ENV_STORE: &str = "THEMESYNC_STORE";

/// Load `config.yml` from `root`, apply environment overrides and validate
///
/// Fails before any asset work when the file is missing, unparsable, lacks a
/// credential or holds an invalid ignore pattern.
pub fn load(root: &Path) -> ThemeSyncResult<(Config, Vec<ConfigWarning>)> {
    let path = root.join(CONFIG_FILE);
    if !path.is_file() {
        return Err(ThemeSyncError::ConfigNotFound { path });
    }

    let (config, warnings) = load_with_warnings(&path)?;
    let config = with_env_overrides(config);
    validate(&config)?;
    config.ignore_patterns()?;

    debug!(path = %path.display(), store = %config.store, "loaded config");
    Ok((config, warnings))
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ThemeSyncResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse YAML content; `path` is only used for messages
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> ThemeSyncResult<(Config, Vec<ConfigWarning>)> {
    if content.trim().is_empty() {
        return Ok((Config::default(), Vec::new()));
    }

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = serde_yaml_ng::Deserializer::from_str(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ThemeSyncError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Apply environment variable overrides (THEMESYNC_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from any variable source; empty values are ignored
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let value = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(api_key) = value(ENV_API_KEY) {
        config.api_key = api_key;
    }
    if let Some(password) = value(ENV_PASSWORD) {
        config.password = password;
    }
    if let Some(store) = value(ENV_STORE) {
        config.store = store;
    }

    config
}

/// Reject empty credentials
pub fn validate(config: &Config) -> ThemeSyncResult<()> {
    let required = [
        ("api_key", &config.api_key),
        ("password", &config.password),
        ("store", &config.store),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ThemeSyncError::MissingCredential { field });
        }
    }
    Ok(())
}

/// Write `config.yml` in `root`
///
/// An existing file is only replaced when `force` is set.
pub fn save(config: &Config, root: &Path, force: bool) -> ThemeSyncResult<()> {
    let path = root.join(CONFIG_FILE);
    if path.exists() && !force {
        return Err(ThemeSyncError::ConfigExists { path });
    }

    let yaml = serde_yaml_ng::to_string(config).map_err(|e| ThemeSyncError::InvalidConfig {
        file: path.clone(),
        message: e.to_string(),
    })?;
    atomic_write(&path, yaml.as_bytes())?;
    Ok(())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["api_key", "password", "store", "ignore_files"];

    let unknown = unknown.trim_start_matches(':');
    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
