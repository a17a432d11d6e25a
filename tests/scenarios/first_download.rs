//! Scenario: a developer pulls an existing theme into an empty directory.

use std::fs;
use std::sync::Arc;

use themesync::infrastructure::{GrassCompiler, InMemoryAssetStore};
use themesync::{Asset, AssetKey, SyncEngine};

use crate::common::{RecordingSink, LAYOUT_LIQUID, PNG_HEADER};

fn remote_theme() -> InMemoryAssetStore {
    let key = |s: &str| AssetKey::new(s).unwrap();
    InMemoryAssetStore::new()
        .with_asset(Asset::text(key("layout/theme.liquid"), LAYOUT_LIQUID.replace('\n', "\r\n")))
        .with_asset(Asset::text(key("assets/app.css.liquid"), "body { color: {{ c }}; }"))
        .with_asset(Asset::text(key("assets/app.css"), "body { color: red; }"))
        .with_asset(Asset::binary(key("assets/logo.png"), PNG_HEADER.to_vec()))
}

#[test]
fn download_everything_into_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let sink = Arc::new(RecordingSink::default());
    let engine = SyncEngine::new(dir.path(), remote_theme(), GrassCompiler::new())
        .with_event_sink(sink.clone());

    let report = engine.download(&[]).unwrap();

    assert!(report.is_success());
    assert_eq!(report.succeeded.len(), 3);

    // text is stored with LF line endings
    let layout = fs::read_to_string(dir.path().join("layout/theme.liquid")).unwrap();
    assert_eq!(layout, LAYOUT_LIQUID);

    // binary bytes are written unchanged
    let logo = fs::read(dir.path().join("assets/logo.png")).unwrap();
    assert_eq!(logo, PNG_HEADER);

    // the generated asset next to its liquid source is not downloaded
    assert!(dir.path().join("assets/app.css.liquid").exists());
    assert!(!dir.path().join("assets/app.css").exists());
}

#[test]
fn download_then_upload_is_a_no_op_for_content() {
    let dir = tempfile::tempdir().unwrap();
    let store = remote_theme();
    let engine = SyncEngine::new(dir.path(), store, GrassCompiler::new());

    engine.download(&[]).unwrap();
    let before = engine.store().stored("layout/theme.liquid").unwrap();
    engine.upload(&[]).unwrap();
    let after = engine.store().stored("layout/theme.liquid").unwrap();

    assert_eq!(after.payload().as_bytes(), LAYOUT_LIQUID.as_bytes());
    assert_ne!(before.payload().as_bytes(), after.payload().as_bytes());
    assert_eq!(
        engine.store().stored("assets/logo.png").unwrap().payload().as_bytes(),
        PNG_HEADER
    );
}
