//! Scenario: wiping the remote theme and pushing the local copy.

use std::sync::Arc;

use themesync::domain::ports::{FieldErrors, StoreError, SyncEvent};
use themesync::domain::value_objects::IgnorePatterns;
use themesync::infrastructure::{GrassCompiler, InMemoryAssetStore};
use themesync::{Asset, AssetKey, ReplaceConfirmation, SyncEngine, ThemeSyncError};

use crate::common::{write_file, RecordingSink, LAYOUT_LIQUID};

fn store_with(keys: &[&str]) -> InMemoryAssetStore {
    keys.iter().fold(InMemoryAssetStore::new(), |store, key| {
        store.with_asset(Asset::text(AssetKey::new(key).unwrap(), "remote"))
    })
}

#[test]
fn declined_replace_touches_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "layout/theme.liquid", LAYOUT_LIQUID.as_bytes());
    let engine = SyncEngine::new(
        dir.path(),
        store_with(&["templates/index.liquid"]),
        GrassCompiler::new(),
    );

    let err = engine
        .replace(&[], ReplaceConfirmation::Declined)
        .unwrap_err();

    assert!(matches!(err, ThemeSyncError::ReplaceNotConfirmed));
    assert!(engine.store().calls().is_empty());
}

#[test]
fn replace_deletes_remote_then_uploads_local() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "layout/theme.liquid", LAYOUT_LIQUID.as_bytes());
    write_file(dir.path(), "config.yml", b"api_key: k\n");
    let sink = Arc::new(RecordingSink::default());
    let engine = SyncEngine::new(
        dir.path(),
        store_with(&["templates/index.liquid", "layout/theme.liquid"]),
        GrassCompiler::new(),
    )
    .with_event_sink(sink.clone());

    let report = engine
        .replace(&[], ReplaceConfirmation::Confirmed)
        .unwrap();

    assert!(report.is_success());
    assert_eq!(report.removed.succeeded.len(), 2);
    assert_eq!(report.uploaded.succeeded, vec!["layout/theme.liquid".to_string()]);
    assert_eq!(engine.store().keys(), vec!["layout/theme.liquid".to_string()]);
    assert!(sink.events().contains(&SyncEvent::Replaced {
        removed: 2,
        uploaded: 1
    }));
}

#[test]
fn delete_failure_does_not_stop_uploads() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "snippets/cart.liquid", b"{{ cart }}");
    let store = store_with(&["snippets/locked.liquid"]);
    let mut errors = FieldErrors::new();
    errors.insert("asset".to_string(), vec!["cannot be deleted".to_string()]);
    store.fail_on(
        "snippets/locked.liquid",
        StoreError::Rejected {
            status: 403,
            errors,
        },
    );
    let engine = SyncEngine::new(dir.path(), store, GrassCompiler::new());

    let report = engine
        .replace(&[], ReplaceConfirmation::Confirmed)
        .unwrap();

    assert_eq!(report.removed.failures.len(), 1);
    assert_eq!(report.uploaded.succeeded, vec!["snippets/cart.liquid".to_string()]);
    assert!(engine.store().stored("snippets/cart.liquid").is_some());
}

#[test]
fn ignore_patterns_limit_default_scopes() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "layout/theme.liquid", LAYOUT_LIQUID.as_bytes());
    write_file(dir.path(), "assets/vendor.min.js", b"!function(){}");
    let patterns = IgnorePatterns::compile(&["\\.min\\.js$".to_string()]).unwrap();
    let engine = SyncEngine::new(
        dir.path(),
        store_with(&["assets/legacy.min.js", "templates/index.liquid"]),
        GrassCompiler::new(),
    )
    .with_ignore_patterns(patterns);

    let report = engine
        .replace(&[], ReplaceConfirmation::Confirmed)
        .unwrap();

    assert_eq!(report.removed.succeeded, vec!["templates/index.liquid".to_string()]);
    assert_eq!(report.uploaded.succeeded, vec!["layout/theme.liquid".to_string()]);
    assert!(engine.store().stored("assets/legacy.min.js").is_some());
    assert!(engine.store().stored("assets/vendor.min.js").is_none());
}
