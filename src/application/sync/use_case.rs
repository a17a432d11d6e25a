//! Sync Engine
//!
//! Orchestrates the operator-facing operations:
//! 1. Resolve the key list (explicit keys, or the default scope)
//! 2. Run the style stage for `.sass`/`.scss` sources
//! 3. Classify and transfer each asset through the store
//! 4. Report per-asset progress as `SyncEvent`s and notifications
//!
//! Assets are processed one at a time, in input order. A failing asset is
//! reported and the batch moves on.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::{IgnoreRegistry, StyleStage};
use crate::domain::entities::{Asset, AssetPayload};
use crate::domain::ports::{
    AssetStore, CompileOutcome, NoopEventSink, NoopNotifier, Notification, Notifier, Operation,
    StyleCompiler, SyncEvent, SyncEventSink,
};
use crate::domain::services::{
    encode_for_upload, is_style_source, normalize_newlines, visible_remote_keys,
};
use crate::domain::value_objects::{AssetKey, IgnorePatterns};
use crate::error::{ThemeSyncError, ThemeSyncResult};
use crate::infrastructure::fs::{LocalFs, LocalInventory};

use super::options::{FsEvent, FsEventKind, ReplaceConfirmation, WatchMode};
use super::result::{FailureReason, ReplaceReport, SyncReport, WatchOutcome};

/// Sync engine - owns the store, the compiler and the ignore registry
///
/// Parameterized by its ports so tests can run it against an in-memory store
/// and a fake compiler.
pub struct SyncEngine<S, C>
where
    S: AssetStore,
    C: StyleCompiler,
{
    store: S,
    compiler: C,
    fs: LocalFs,
    inventory: LocalInventory,
    remote_patterns: IgnorePatterns,
    ignored: IgnoreRegistry,
    notifier: Box<dyn Notifier>,
    events: Arc<dyn SyncEventSink>,
    quiet: bool,
}

impl<S, C> SyncEngine<S, C>
where
    S: AssetStore,
    C: StyleCompiler,
{
    /// Engine for the working directory `root`
    pub fn new(root: impl Into<PathBuf>, store: S, compiler: C) -> Self {
        let root = root.into();
        Self {
            store,
            compiler,
            fs: LocalFs::new(root.clone()),
            inventory: LocalInventory::new(root),
            remote_patterns: IgnorePatterns::empty(),
            ignored: IgnoreRegistry::new(),
            notifier: Box::new(NoopNotifier),
            events: Arc::new(NoopEventSink),
            quiet: false,
        }
    }

    /// Leave keys matching `patterns` out of default scopes
    pub fn with_ignore_patterns(mut self, patterns: IgnorePatterns) -> Self {
        self.inventory = self.inventory.with_patterns(patterns.clone());
        self.remote_patterns = patterns;
        self
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn with_event_sink(mut self, events: Arc<dyn SyncEventSink>) -> Self {
        self.events = events;
        self
    }

    /// Suppress notifications
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn root(&self) -> &Path {
        self.fs.root()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn inventory(&self) -> &LocalInventory {
        &self.inventory
    }

    pub fn ignore_registry(&self) -> &IgnoreRegistry {
        &self.ignored
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Fetch assets and write them below the root
    ///
    /// Empty `keys` means every visible remote asset.
    pub fn download(&self, keys: &[String]) -> ThemeSyncResult<SyncReport> {
        let keys = self.remote_scope(keys)?;
        let mut report = SyncReport::new(Operation::Download);

        self.started(Operation::Download, keys.len());
        for key in &keys {
            self.download_one(key, &mut report);
        }
        self.completed(&report);

        Ok(report)
    }

    /// Compile, classify and PUT local files
    ///
    /// Empty `keys` means the whole local inventory.
    pub fn upload(&self, keys: &[String]) -> ThemeSyncResult<SyncReport> {
        let keys = self.local_scope(keys)?;
        let mut report = SyncReport::new(Operation::Upload);

        self.started(Operation::Upload, keys.len());
        for key in &keys {
            self.upload_one(key, !self.quiet, &mut report);
        }
        self.completed(&report);

        Ok(report)
    }

    /// Delete every remote asset in scope, then upload every local one
    ///
    /// Delete failures do not stop the upload phase. Without a confirmed
    /// token nothing reaches the store.
    pub fn replace(
        &self,
        keys: &[String],
        confirmation: ReplaceConfirmation,
    ) -> ThemeSyncResult<ReplaceReport> {
        if !confirmation.is_confirmed() {
            return Err(ThemeSyncError::ReplaceNotConfirmed);
        }

        let remote = self.remote_scope(keys)?;
        let local = self.local_scope(keys)?;
        self.started(Operation::Replace, remote.len() + local.len());

        let mut removed = SyncReport::new(Operation::Remove);
        for key in &remote {
            self.remove_one(key, !self.quiet, &mut removed);
        }

        let mut uploaded = SyncReport::new(Operation::Upload);
        for key in &local {
            self.upload_one(key, false, &mut uploaded);
        }

        let (removed_count, uploaded_count) = (removed.succeeded.len(), uploaded.succeeded.len());
        info!(removed = removed_count, uploaded = uploaded_count, "replace finished");
        self.emit(SyncEvent::Replaced {
            removed: removed_count,
            uploaded: uploaded_count,
        });
        self.notify(
            !self.quiet,
            "Replaced Assets",
            format!("{removed_count} Removed\n{uploaded_count} Uploaded"),
        );
        self.emit(SyncEvent::Completed {
            operation: Operation::Replace,
            succeeded: removed_count + uploaded_count,
            failed: removed.failures.len() + uploaded.failures.len(),
            skipped: removed.skipped.len() + uploaded.skipped.len(),
        });

        Ok(ReplaceReport { removed, uploaded })
    }

    /// Delete explicit keys remotely
    ///
    /// Style sources are skipped: only their compiled output exists remotely.
    pub fn remove(&self, keys: &[String]) -> SyncReport {
        let mut report = SyncReport::new(Operation::Remove);

        self.started(Operation::Remove, keys.len());
        for key in keys {
            self.remove_one(key, !self.quiet, &mut report);
        }
        self.completed(&report);

        report
    }

    /// Compile a style source, write its output and mark it ignored
    pub fn compile_style(&self, key: &AssetKey) -> ThemeSyncResult<CompileOutcome> {
        Ok(self.run_style_stage(key, !self.quiet)?)
    }

    /// Watch state machine for one filesystem event
    ///
    /// 1. An ignored key is consumed and nothing else happens.
    /// 2. Created/updated keys in the local inventory are uploaded.
    /// 3. Deleted keys are removed unless remote files are kept.
    pub fn handle_fs_event(&self, event: &FsEvent, mode: WatchMode) -> WatchOutcome {
        if self.ignored.consume_if_ignored(&event.key) {
            debug!(key = %event.key, kind = %event.kind, "suppressed self-generated event");
            self.emit(SyncEvent::Suppressed {
                key: event.key.to_string(),
            });
            return WatchOutcome::Suppressed;
        }

        match event.kind {
            FsEventKind::Created | FsEventKind::Updated => {
                if !self.inventory.contains(&event.key) {
                    debug!(key = %event.key, "not in local inventory");
                    return WatchOutcome::NotInInventory;
                }
                let mut report = SyncReport::new(Operation::Upload);
                self.upload_one(event.key.as_str(), !self.quiet, &mut report);
                WatchOutcome::Uploaded(report)
            }
            FsEventKind::Deleted => {
                if mode == WatchMode::KeepFiles {
                    debug!(key = %event.key, "keeping remote file");
                    return WatchOutcome::KeptRemote;
                }
                let mut report = SyncReport::new(Operation::Remove);
                self.remove_one(event.key.as_str(), !self.quiet, &mut report);
                WatchOutcome::Removed(report)
            }
        }
    }

    // ------------------------------------------------------------------
    // Scopes
    // ------------------------------------------------------------------

    fn remote_scope(&self, keys: &[String]) -> ThemeSyncResult<Vec<String>> {
        if !keys.is_empty() {
            return Ok(keys.to_vec());
        }

        let listed = self.store.list()?;
        debug!(count = listed.len(), "listed remote assets");
        Ok(visible_remote_keys(listed)
            .into_iter()
            .filter(|key| !self.remote_patterns.is_ignored(key))
            .collect())
    }

    fn local_scope(&self, keys: &[String]) -> ThemeSyncResult<Vec<String>> {
        if !keys.is_empty() {
            return Ok(keys.to_vec());
        }

        Ok(self
            .inventory
            .list()?
            .into_iter()
            .map(|key| key.to_string())
            .collect())
    }

    // ------------------------------------------------------------------
    // Per-asset steps
    // ------------------------------------------------------------------

    fn download_one(&self, key: &str, report: &mut SyncReport) {
        let result = AssetKey::new(key)
            .map_err(FailureReason::InvalidKey)
            .and_then(|key| {
                let asset = self.store.get(&key).map_err(FailureReason::Store)?;
                let bytes = match asset.into_parts().1 {
                    AssetPayload::Text(text) => normalize_newlines(&text).into_bytes(),
                    AssetPayload::Binary(bytes) => bytes,
                };
                self.fs
                    .write(&key, &bytes)
                    .map_err(|e| FailureReason::Io(e.to_string()))
            });

        match result {
            Ok(()) => {
                debug!(key, "downloaded");
                report.succeed(key);
                self.emit(SyncEvent::Downloaded {
                    key: key.to_string(),
                });
            }
            Err(reason) => {
                warn!(key, error = %reason, "download failed");
                self.emit(SyncEvent::DownloadFailed {
                    key: key.to_string(),
                    error: reason.to_string(),
                });
                report.fail(key, reason);
            }
        }
    }

    fn upload_one(&self, key: &str, notify: bool, report: &mut SyncReport) {
        let asset = match self.prepare_upload(key, notify) {
            Ok(asset) => asset,
            // already reported by the style stage
            Err(reason @ FailureReason::Compile(_)) => return report.fail(key, reason),
            Err(reason) => return self.upload_failed(key, reason, notify, report),
        };

        match self.store.put(&asset) {
            Ok(()) => {
                debug!(key = %asset.key(), kind = %asset.kind(), "uploaded");
                report.succeed(asset.key().as_str());
                self.emit(SyncEvent::Uploaded {
                    key: asset.key().to_string(),
                    kind: asset.kind(),
                });
                self.notify(notify, "Uploaded Asset", asset.key().to_string());
            }
            Err(err) => {
                self.upload_failed(asset.key().as_str(), FailureReason::Store(err), notify, report)
            }
        }
    }

    /// Read (or compile) a local file into the asset to PUT
    fn prepare_upload(&self, key: &str, notify: bool) -> Result<Asset, FailureReason> {
        let source = AssetKey::new(key).map_err(FailureReason::InvalidKey)?;
        let io_failure = |err: std::io::Error| FailureReason::Io(err.to_string());

        let (key, bytes) = if is_style_source(&source) {
            match self.run_style_stage(&source, notify).map_err(io_failure)? {
                CompileOutcome::Compiled {
                    output_path,
                    output_content,
                } => (output_path, output_content.into_bytes()),
                CompileOutcome::Failed(failure) => return Err(FailureReason::Compile(failure)),
            }
        } else {
            let bytes = self.fs.read(&source).map_err(io_failure)?;
            (source, bytes)
        };

        let payload = encode_for_upload(&key, bytes);
        Ok(Asset::new(key, payload))
    }

    fn upload_failed(
        &self,
        key: &str,
        reason: FailureReason,
        notify: bool,
        report: &mut SyncReport,
    ) {
        let errors = reason.messages();
        warn!(key, error = %reason, "upload failed");
        self.emit(SyncEvent::UploadFailed {
            key: key.to_string(),
            errors: errors.clone(),
        });
        self.notify(notify, "Upload Error", format!("{key}\n{}", errors.join("; ")));
        report.fail(key, reason);
    }

    fn run_style_stage(&self, source: &AssetKey, notify: bool) -> std::io::Result<CompileOutcome> {
        let outcome = StyleStage::new(&self.compiler, &self.fs, &self.ignored).compile(source)?;

        match &outcome {
            CompileOutcome::Compiled { output_path, .. } => {
                info!(source = %source, output = %output_path, "rendered style sheet");
                self.emit(SyncEvent::Rendered {
                    source: source.to_string(),
                    output: output_path.to_string(),
                });
                self.notify(notify, "Rendered SASS", format!("{source} => {output_path}"));
            }
            CompileOutcome::Failed(failure) => {
                warn!(source = %source, error = %failure, "style sheet has errors");
                self.emit(SyncEvent::CompileFailed {
                    key: source.to_string(),
                    failure: failure.clone(),
                });
                self.notify(
                    notify,
                    "Syntax Error",
                    format!("{}:{}\n{}", failure.filename, failure.line, failure.message),
                );
            }
        }

        Ok(outcome)
    }

    fn remove_one(&self, key: &str, notify: bool, report: &mut SyncReport) {
        let target = match AssetKey::new(key) {
            Ok(target) => target,
            Err(err) => {
                return self.remove_failed(key, FailureReason::InvalidKey(err), notify, report)
            }
        };

        if is_style_source(&target) {
            debug!(key, "style sources are not stored remotely");
            report.skip(key);
            self.emit(SyncEvent::Skipped {
                key: key.to_string(),
                reason: "style source".to_string(),
            });
            return;
        }

        match self.store.delete(&target) {
            Ok(()) => {
                debug!(key, "removed");
                report.succeed(key);
                self.emit(SyncEvent::Removed {
                    key: key.to_string(),
                });
                self.notify(notify, "Removed Asset", key);
            }
            Err(err) => self.remove_failed(key, FailureReason::Store(err), notify, report),
        }
    }

    fn remove_failed(
        &self,
        key: &str,
        reason: FailureReason,
        notify: bool,
        report: &mut SyncReport,
    ) {
        let errors = reason.messages();
        warn!(key, error = %reason, "remove failed");
        self.emit(SyncEvent::RemoveFailed {
            key: key.to_string(),
            errors: errors.clone(),
        });
        self.notify(notify, "Remove Error", format!("{key}\n{}", errors.join("; ")));
        report.fail(key, reason);
    }

    // ------------------------------------------------------------------
    // Reporting
    // ------------------------------------------------------------------

    fn emit(&self, event: SyncEvent) {
        self.events.on_event(event);
    }

    fn notify(&self, enabled: bool, title: &str, message: impl Into<String>) {
        if enabled {
            self.notifier.notify(&Notification::new(title, message));
        }
    }

    fn started(&self, operation: Operation, asset_count: usize) {
        info!(%operation, asset_count, "starting");
        self.emit(SyncEvent::Started {
            operation,
            asset_count,
        });
    }

    fn completed(&self, report: &SyncReport) {
        info!(
            operation = %report.operation,
            succeeded = report.succeeded.len(),
            failed = report.failures.len(),
            skipped = report.skipped.len(),
            "finished"
        );
        self.emit(SyncEvent::Completed {
            operation: report.operation,
            succeeded: report.succeeded.len(),
            failed: report.failures.len(),
            skipped: report.skipped.len(),
        });
    }
}
