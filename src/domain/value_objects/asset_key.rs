//! Asset Key Value Object
//!
//! The path-like identifier shared by a local theme file and its remote asset:
//! - Non-empty
//! - Relative, `/`-separated
//! - No traversal components, so a remote key can never write outside the
//!   working directory

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Error when key validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Key is empty
    Empty,
    /// Key is an absolute path
    AbsoluteNotAllowed,
    /// Key contains traversal components (..)
    ContainsTraversal,
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::Empty => write!(f, "Asset key is empty"),
            KeyError::AbsoluteNotAllowed => write!(f, "Asset key must be relative"),
            KeyError::ContainsTraversal => {
                write!(f, "Asset key contains traversal components (..)")
            }
        }
    }
}

impl std::error::Error for KeyError {}

/// A validated asset key (e.g. `assets/theme.css`, `templates/index.liquid`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetKey(String);

impl AssetKey {
    /// Create a new key after validation
    ///
    /// Backslashes are normalized to `/` and a leading `./` is dropped.
    pub fn new(key: impl AsRef<str>) -> Result<Self, KeyError> {
        let normalized = key.as_ref().replace('\\', "/");
        let normalized = normalized.trim_start_matches("./");

        if normalized.is_empty() {
            return Err(KeyError::Empty);
        }
        if normalized.starts_with('/') || Path::new(normalized).is_absolute() {
            return Err(KeyError::AbsoluteNotAllowed);
        }
        if normalized.split('/').any(|segment| segment == "..") {
            return Err(KeyError::ContainsTraversal);
        }

        Ok(Self(normalized.to_string()))
    }

    /// Build a key from a path relative to the working directory
    pub fn from_relative_path(path: &Path) -> Result<Self, KeyError> {
        let mut segments = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => segments.push(part.to_string_lossy().into_owned()),
                Component::CurDir => {}
                Component::ParentDir => return Err(KeyError::ContainsTraversal),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(KeyError::AbsoluteNotAllowed)
                }
            }
        }
        Self::new(segments.join("/"))
    }

    /// The key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Local path of this key below `root`
    pub fn to_path(&self, root: &Path) -> PathBuf {
        self.0.split('/').fold(root.to_path_buf(), |acc, part| acc.join(part))
    }

    /// Extension without the leading dot (case preserved)
    pub fn extension(&self) -> Option<&str> {
        let file_name = self.0.rsplit('/').next()?;
        match file_name.rfind('.') {
            Some(0) | None => None,
            Some(idx) => Some(&file_name[idx + 1..]),
        }
    }

    /// Replace the extension, keeping the rest of the key
    pub fn with_extension(&self, extension: &str) -> Self {
        let stem_len = match self.extension() {
            Some(ext) => self.0.len() - ext.len() - 1,
            None => self.0.len(),
        };
        Self(format!("{}.{}", &self.0[..stem_len], extension))
    }

    /// True if any segment of the key starts with a dot
    pub fn is_hidden(&self) -> bool {
        self.0.split('/').any(|segment| segment.starts_with('.'))
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AssetKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for AssetKey {
    type Error = KeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for AssetKey {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
