use anyhow::Result;
use dialoguer::Confirm;
use serde_json::json;

use themesync::domain::ports::{AssetStore, StyleCompiler};
use themesync::{ReplaceConfirmation, SyncEngine};

use super::context::build_engine;
use super::Output;

/// Per-asset failures are reported by the event sink and never change the
/// exit code.
pub fn cmd_download(keys: &[String], quiet: bool, output: Output) -> Result<()> {
    let engine = build_engine(quiet, output)?;
    engine.download(keys)?;
    Ok(())
}

pub fn cmd_upload(keys: &[String], quiet: bool, output: Output) -> Result<()> {
    let engine = build_engine(quiet, output)?;
    engine.upload(keys)?;
    Ok(())
}

pub fn cmd_remove(keys: &[String], quiet: bool, output: Output) -> Result<()> {
    let engine = build_engine(quiet, output)?;
    engine.remove(keys);
    Ok(())
}

pub fn cmd_replace(keys: &[String], quiet: bool, yes: bool, output: Output) -> Result<()> {
    let engine = build_engine(quiet, output)?;
    replace_with(&engine, keys, yes, output, |prompt| {
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    })
}

/// A declined prompt is a normal outcome: nothing is touched and the
/// command still succeeds.
fn replace_with<S, C>(
    engine: &SyncEngine<S, C>,
    keys: &[String],
    yes: bool,
    output: Output,
    ask: impl FnOnce(String) -> Result<bool>,
) -> Result<()>
where
    S: AssetStore,
    C: StyleCompiler,
{
    let answer = yes || ask(replace_prompt(keys))?;
    if !answer {
        if output.json {
            println!("{}", json!({"event": "aborted", "command": "replace"}));
        } else {
            println!("Aborted.");
        }
        return Ok(());
    }

    engine.replace(keys, ReplaceConfirmation::from_answer(answer))?;
    Ok(())
}

fn replace_prompt(keys: &[String]) -> String {
    if keys.is_empty() {
        "Delete every remote asset and upload the local theme?".to_string()
    } else {
        format!("Delete and re-upload {} asset(s)?", keys.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tempfile::tempdir;
    use themesync::infrastructure::{GrassCompiler, InMemoryAssetStore};
    use themesync::{Asset, AssetKey};

    const PLAIN: Output = Output {
        json: false,
        color: false,
    };

    fn engine_with_remote(root: &std::path::Path) -> SyncEngine<InMemoryAssetStore, GrassCompiler> {
        let store = InMemoryAssetStore::new()
            .with_asset(Asset::text(AssetKey::new("layout/theme.liquid").unwrap(), "old"));
        SyncEngine::new(root, store, GrassCompiler::new())
    }

    #[test]
    fn declined_replace_succeeds_without_touching_the_store() {
        let dir = tempdir().unwrap();
        let engine = engine_with_remote(dir.path());

        let result = replace_with(&engine, &[], false, PLAIN, |_| Ok(false));

        assert!(result.is_ok());
        assert!(engine.store().calls().is_empty());
        assert!(engine.store().stored("layout/theme.liquid").is_some());
    }

    #[test]
    fn yes_skips_the_prompt_and_replaces() {
        let dir = tempdir().unwrap();
        let engine = engine_with_remote(dir.path());
        let asked = Cell::new(false);

        replace_with(&engine, &[], true, PLAIN, |_| {
            asked.set(true);
            Ok(false)
        })
        .unwrap();

        assert!(!asked.get());
        assert_eq!(engine.store().deletes(), vec!["layout/theme.liquid".to_string()]);
    }

    #[test]
    fn prompt_failure_is_an_error() {
        let dir = tempdir().unwrap();
        let engine = engine_with_remote(dir.path());

        let result = replace_with(&engine, &[], false, PLAIN, |_| {
            Err(anyhow::anyhow!("not a terminal"))
        });

        assert!(result.is_err());
        assert!(engine.store().calls().is_empty());
    }

    #[test]
    fn prompt_names_the_scope() {
        assert_eq!(
            replace_prompt(&[]),
            "Delete every remote asset and upload the local theme?"
        );
        assert_eq!(
            replace_prompt(&["a.css".to_string(), "b.css".to_string()]),
            "Delete and re-upload 2 asset(s)?"
        );
    }
}
