//! Watch event types and debouncing

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use notify::event::{CreateKind, ModifyKind, RemoveKind, RenameMode};
use notify::{Event, EventKind};

use crate::application::sync::{FsEvent, FsEventKind};
use crate::domain::value_objects::AssetKey;

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

/// Watch event types for NDJSON output
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watch started
    WatchStarted { root: String, keep_files: bool },
    /// Debounced change about to be handled
    FileChanged { key: String, kind: FsEventKind },
    /// Error occurred
    Error { message: String },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Map a `notify` event to per-path changes
///
/// Renames become a delete of the old path and a create of the new one.
/// Access, metadata-only and directory events are dropped.
pub fn changes_from(event: &Event) -> Vec<(PathBuf, FsEventKind)> {
    let all = |kind: FsEventKind| -> Vec<(PathBuf, FsEventKind)> {
        event.paths.iter().map(|p| (p.clone(), kind)).collect()
    };

    match &event.kind {
        // directories are not assets; their files report on their own
        EventKind::Create(CreateKind::Folder) | EventKind::Remove(RemoveKind::Folder) => Vec::new(),
        EventKind::Create(_) => all(FsEventKind::Created),
        EventKind::Remove(_) => all(FsEventKind::Deleted),
        EventKind::Modify(ModifyKind::Name(RenameMode::From)) => all(FsEventKind::Deleted),
        EventKind::Modify(ModifyKind::Name(RenameMode::To)) => all(FsEventKind::Created),
        EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => event
            .paths
            .iter()
            .enumerate()
            .map(|(idx, path)| {
                let kind = if idx == 0 {
                    FsEventKind::Deleted
                } else {
                    FsEventKind::Created
                };
                (path.clone(), kind)
            })
            .collect(),
        EventKind::Modify(ModifyKind::Name(_)) => event
            .paths
            .iter()
            .map(|path| {
                let kind = if path.exists() {
                    FsEventKind::Created
                } else {
                    FsEventKind::Deleted
                };
                (path.clone(), kind)
            })
            .collect(),
        EventKind::Modify(ModifyKind::Metadata(_)) => Vec::new(),
        EventKind::Modify(_) => all(FsEventKind::Updated),
        EventKind::Any | EventKind::Access(_) | EventKind::Other => Vec::new(),
    }
}

/// Watcher state for debouncing
///
/// Bursts for the same key collapse into one event: the last kind wins,
/// except that a create followed by updates stays a create.
#[derive(Debug, Default)]
pub struct WatcherState {
    pending: HashMap<AssetKey, FsEventKind>,
    order: Vec<AssetKey>,
    last_change: Option<Instant>,
}

impl WatcherState {
    /// Create a new watcher state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change for `key`
    pub fn add_change(&mut self, key: AssetKey, kind: FsEventKind) {
        match self.pending.get(&key).copied() {
            None => {
                self.order.push(key.clone());
                self.pending.insert(key, kind);
            }
            Some(FsEventKind::Created) if kind == FsEventKind::Updated => {}
            Some(_) => {
                self.pending.insert(key, kind);
            }
        }
        self.last_change = Some(Instant::now());
    }

    /// Check if debounce period has passed and we have pending changes
    pub fn should_sync(&self) -> bool {
        match self.last_change {
            Some(last) => {
                !self.pending.is_empty() && last.elapsed() >= Duration::from_millis(DEBOUNCE_MS)
            }
            None => false,
        }
    }

    /// Take all pending changes in first-seen order, resetting state
    pub fn take_changes(&mut self) -> Vec<FsEvent> {
        let mut pending = std::mem::take(&mut self.pending);
        self.last_change = None;
        std::mem::take(&mut self.order)
            .into_iter()
            .filter_map(|key| pending.remove(&key).map(|kind| FsEvent::new(key, kind)))
            .collect()
    }
}
