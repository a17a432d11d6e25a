//! Local File System Implementation
//!
//! Reads and writes theme files below the working directory.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::domain::value_objects::AssetKey;

/// Local working directory
///
/// Keys resolve below `root`; writes are atomic and create parent directories.
#[derive(Debug, Clone)]
pub struct LocalFs {
    root: PathBuf,
}

impl LocalFs {
    /// Create a new LocalFs rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a key
    pub fn path_of(&self, key: &AssetKey) -> PathBuf {
        key.to_path(&self.root)
    }

    /// Read raw bytes of a key
    pub fn read(&self, key: &AssetKey) -> io::Result<Vec<u8>> {
        std::fs::read(self.path_of(key))
    }

    /// Read a key as UTF-8 text
    pub fn read_to_string(&self, key: &AssetKey) -> io::Result<String> {
        std::fs::read_to_string(self.path_of(key))
    }

    /// Write bytes to a key, overwriting any existing file
    pub fn write(&self, key: &AssetKey, content: &[u8]) -> io::Result<()> {
        atomic_write(&self.path_of(key), content)
    }
}

/// Write content to a file atomically
///
/// Uses tempfile + rename so readers never observe a half-written file.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(&parent)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
