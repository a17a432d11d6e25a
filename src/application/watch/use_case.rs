//! Watch Use Case implementation

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, info};

use crate::application::sync::{SyncEngine, WatchMode, WatchOutcome};
use crate::domain::ports::{AssetStore, StyleCompiler};
use crate::domain::value_objects::AssetKey;
use crate::error::{ThemeSyncError, ThemeSyncResult};

use super::event::{changes_from, WatchEvent, WatcherState};

/// Watch Use Case
///
/// Feeds debounced filesystem changes below the engine root into
/// `SyncEngine::handle_fs_event`, one at a time.
/// This is the main entry point for the `themesync watch` command.
pub struct WatchUseCase<'a, S, C>
where
    S: AssetStore,
    C: StyleCompiler,
{
    engine: &'a SyncEngine<S, C>,
    mode: WatchMode,
}

impl<'a, S, C> WatchUseCase<'a, S, C>
where
    S: AssetStore,
    C: StyleCompiler,
{
    /// Create a new WatchUseCase
    pub fn new(engine: &'a SyncEngine<S, C>, mode: WatchMode) -> Self {
        Self { engine, mode }
    }

    /// Start watching (blocking)
    ///
    /// This method blocks until the running flag is set to false.
    /// Use the callback to receive events.
    pub fn start<F>(&self, running: Arc<AtomicBool>, on_event: F) -> ThemeSyncResult<()>
    where
        F: Fn(WatchEvent),
    {
        let root = self.engine.root().to_path_buf();
        // notify reports resolved paths (e.g. /private/var on macOS)
        let canonical_root = root.canonicalize().unwrap_or_else(|_| root.clone());

        on_event(WatchEvent::WatchStarted {
            root: root.display().to_string(),
            keep_files: self.mode == WatchMode::KeepFiles,
        });

        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                let _ = tx.send(res);
            },
            Config::default(),
        )
        .map_err(|e| ThemeSyncError::Watch(e.to_string()))?;

        watcher
            .watch(&root, RecursiveMode::Recursive)
            .map_err(|e| ThemeSyncError::Watch(e.to_string()))?;
        info!(root = %root.display(), "watching");

        // Startup cooldown: drain any initial events from notify (it sometimes sends
        // events for existing files when the watcher is first registered)
        let cooldown_end = Instant::now() + Duration::from_millis(500);
        while Instant::now() < cooldown_end {
            let _ = rx.recv_timeout(Duration::from_millis(50));
        }

        let mut state = WatcherState::new();

        while running.load(Ordering::SeqCst) {
            match rx.recv_timeout(Duration::from_millis(50)) {
                Ok(Ok(event)) => {
                    for (path, kind) in changes_from(&event) {
                        if let Some(key) = self.key_for(&path, &root, &canonical_root) {
                            state.add_change(key, kind);
                        }
                    }
                }
                Ok(Err(err)) => on_event(WatchEvent::Error {
                    message: err.to_string(),
                }),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(ThemeSyncError::Watch("watcher stopped".to_string()));
                }
            }

            if state.should_sync() {
                for change in state.take_changes() {
                    on_event(WatchEvent::FileChanged {
                        key: change.key.to_string(),
                        kind: change.kind,
                    });
                    let outcome = self.engine.handle_fs_event(&change, self.mode);
                    if let WatchOutcome::Uploaded(report) | WatchOutcome::Removed(report) =
                        &outcome
                    {
                        debug!(key = %change.key, ok = report.is_success(), "handled change");
                    }
                }
            }
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    /// Key of a watched path, or `None` for paths the loop never acts on
    ///
    /// Hidden paths (editor swap files, atomic-write temporaries, VCS
    /// metadata) and excluded files are dropped here.
    fn key_for(&self, path: &Path, root: &Path, canonical_root: &Path) -> Option<AssetKey> {
        let relative: PathBuf = path
            .strip_prefix(canonical_root)
            .or_else(|_| path.strip_prefix(root))
            .ok()?
            .to_path_buf();
        let key = AssetKey::from_relative_path(&relative).ok()?;

        if key.is_hidden() || self.engine.inventory().is_filtered(&key) {
            debug!(key = %key, "ignoring change");
            return None;
        }
        Some(key)
    }
}
