//! Local Inventory
//!
//! Enumerates the local files that are candidates for upload.

use std::collections::BTreeSet;
use std::io;
use std::path::PathBuf;

use ignore::WalkBuilder;
use tracing::debug;

use crate::domain::value_objects::{AssetKey, IgnorePatterns};

/// Files never synced, relative to the working directory
pub const DEFAULT_EXCLUSIONS: &[&str] = &["config.yml"];

/// Candidate local theme files
///
/// A key is part of the inventory when it names a regular file below the
/// root, no segment is hidden (dot-prefixed), it is not in the exclusion list
/// and no ignore pattern matches it.
#[derive(Debug, Clone)]
pub struct LocalInventory {
    root: PathBuf,
    exclusions: Vec<String>,
    patterns: IgnorePatterns,
}

impl LocalInventory {
    /// Inventory of `root` with the default exclusions
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclusions: DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
            patterns: IgnorePatterns::empty(),
        }
    }

    /// Filter keys with the configured ignore patterns
    pub fn with_patterns(mut self, patterns: IgnorePatterns) -> Self {
        self.patterns = patterns;
        self
    }

    /// Walk the root and collect every candidate key
    pub fn list(&self) -> io::Result<BTreeSet<AssetKey>> {
        let mut keys = BTreeSet::new();

        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(|entry| {
                entry.depth() == 0 || !entry.file_name().to_string_lossy().starts_with('.')
            })
            .build();

        for entry in walker {
            let entry = entry.map_err(|e| io::Error::other(e.to_string()))?;
            if !entry.path().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            let Ok(key) = AssetKey::from_relative_path(relative) else {
                continue;
            };

            if self.is_filtered(&key) {
                debug!(key = %key, "excluded from local inventory");
                continue;
            }
            keys.insert(key);
        }

        Ok(keys)
    }

    /// Same predicate as [`list`](Self::list) for a single key
    pub fn contains(&self, key: &AssetKey) -> bool {
        !key.is_hidden() && !self.is_filtered(key) && key.to_path(&self.root).is_file()
    }

    /// True if the key is excluded or matches an ignore pattern
    pub fn is_filtered(&self, key: &AssetKey) -> bool {
        self.is_excluded(key) || self.patterns.is_ignored(key.as_str())
    }

    fn is_excluded(&self, key: &AssetKey) -> bool {
        self.exclusions.iter().any(|excluded| excluded == key.as_str())
    }
}
