//! Sync options

use std::fmt;

use crate::domain::value_objects::AssetKey;

/// Confirmation token required by `replace`
///
/// The CLI produces it from an interactive prompt or `--yes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceConfirmation {
    Confirmed,
    Declined,
}

impl ReplaceConfirmation {
    pub fn from_answer(confirmed: bool) -> Self {
        if confirmed {
            ReplaceConfirmation::Confirmed
        } else {
            ReplaceConfirmation::Declined
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, ReplaceConfirmation::Confirmed)
    }
}

/// How the watch loop treats local deletes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WatchMode {
    /// Delete the remote asset when its local file goes away
    #[default]
    MirrorDeletes,
    /// Never delete remote assets
    KeepFiles,
}

impl WatchMode {
    pub fn from_keep_files(keep_files: bool) -> Self {
        if keep_files {
            WatchMode::KeepFiles
        } else {
            WatchMode::MirrorDeletes
        }
    }
}

/// Kind of filesystem change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FsEventKind {
    Created,
    Updated,
    Deleted,
}

impl fmt::Display for FsEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsEventKind::Created => write!(f, "created"),
            FsEventKind::Updated => write!(f, "updated"),
            FsEventKind::Deleted => write!(f, "deleted"),
        }
    }
}

/// One observed filesystem change, keyed relative to the working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEvent {
    pub key: AssetKey,
    pub kind: FsEventKind,
}

impl FsEvent {
    pub fn new(key: AssetKey, kind: FsEventKind) -> Self {
        Self { key, kind }
    }
}
