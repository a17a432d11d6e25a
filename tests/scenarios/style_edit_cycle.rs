//! Scenario: editing a stylesheet while watching.
//!
//! The watcher reports the `.scss` change, the engine compiles and uploads the
//! CSS, and the follow-up event for the compiled file is swallowed exactly
//! once.

use std::fs;
use std::sync::Arc;

use themesync::application::FsEvent;
use themesync::domain::ports::SyncEvent;
use themesync::infrastructure::{GrassCompiler, InMemoryAssetStore, StoreCall};
use themesync::{AssetKey, FsEventKind, SyncEngine, WatchMode, WatchOutcome};

use crate::common::{write_file, RecordingSink, BROKEN_SCSS, THEME_SCSS};

fn change(key: &str, kind: FsEventKind) -> FsEvent {
    FsEvent::new(AssetKey::new(key).unwrap(), kind)
}

#[test]
fn scss_edit_uploads_compiled_css_once() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "assets/theme.scss", THEME_SCSS.as_bytes());
    let sink = Arc::new(RecordingSink::default());
    let engine = SyncEngine::new(dir.path(), InMemoryAssetStore::new(), GrassCompiler::new())
        .with_event_sink(sink.clone());

    let outcome = engine.handle_fs_event(
        &change("assets/theme.scss", FsEventKind::Updated),
        WatchMode::MirrorDeletes,
    );
    assert!(matches!(outcome, WatchOutcome::Uploaded(ref r) if r.is_success()));

    let css = fs::read_to_string(dir.path().join("assets/theme.css")).unwrap();
    assert!(css.contains("color: #ff0000"), "{css}");
    let stored = engine.store().stored("assets/theme.css").unwrap();
    assert_eq!(stored.payload().as_bytes(), css.as_bytes());
    assert!(engine.store().stored("assets/theme.scss").is_none());

    // the watcher now sees the CSS written by the compiler
    let echo = engine.handle_fs_event(
        &change("assets/theme.css", FsEventKind::Updated),
        WatchMode::MirrorDeletes,
    );
    assert_eq!(echo, WatchOutcome::Suppressed);
    assert_eq!(engine.store().puts(), vec!["assets/theme.css".to_string()]);

    // a later manual edit of the CSS is uploaded again
    fs::write(dir.path().join("assets/theme.css"), "a { b: c; }").unwrap();
    let manual = engine.handle_fs_event(
        &change("assets/theme.css", FsEventKind::Updated),
        WatchMode::MirrorDeletes,
    );
    assert!(matches!(manual, WatchOutcome::Uploaded(_)));
    assert_eq!(engine.store().puts().len(), 2);
}

#[test]
fn broken_scss_reports_location_and_skips_upload() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "assets/broken.scss", BROKEN_SCSS.as_bytes());
    let sink = Arc::new(RecordingSink::default());
    let engine = SyncEngine::new(dir.path(), InMemoryAssetStore::new(), GrassCompiler::new())
        .with_event_sink(sink.clone());

    let report = engine.upload(&["assets/broken.scss".to_string()]).unwrap();

    assert!(!report.is_success());
    assert!(engine.store().calls().is_empty());
    assert!(!dir.path().join("assets/broken.css").exists());

    let failure = sink
        .events()
        .into_iter()
        .find_map(|event| match event {
            SyncEvent::CompileFailed { failure, .. } => Some(failure),
            _ => None,
        })
        .expect("compile failure event");
    assert_eq!(failure.filename, "assets/broken.scss");
    assert_eq!(failure.line, 3);
}

#[test]
fn deleting_a_file_mirrors_or_keeps_remote() {
    let dir = tempfile::tempdir().unwrap();
    let store = InMemoryAssetStore::new();
    let engine = SyncEngine::new(dir.path(), store, GrassCompiler::new());
    let deleted = change("snippets/old.liquid", FsEventKind::Deleted);

    let kept = engine.handle_fs_event(&deleted, WatchMode::KeepFiles);
    assert_eq!(kept, WatchOutcome::KeptRemote);
    assert!(engine.store().calls().is_empty());

    let removed = engine.handle_fs_event(&deleted, WatchMode::MirrorDeletes);
    assert!(matches!(removed, WatchOutcome::Removed(_)));
    assert_eq!(
        engine.store().calls(),
        vec![StoreCall::Delete("snippets/old.liquid".to_string())]
    );
}
