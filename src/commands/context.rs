//! Engine construction for the sync commands

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use themesync::config::{Config, ConfigWarning, CONFIG_FILE};
use themesync::domain::ports::SyncEventSink;
use themesync::infrastructure::{GrassCompiler, HttpAssetStore, JsonEventSink, LogNotifier};
use themesync::presentation::ConsoleEventSink;
use themesync::SyncEngine;

use super::Output;

pub type CliEngine = SyncEngine<HttpAssetStore, GrassCompiler>;

/// Load `config.yml` from the current directory and wire the engine
pub fn build_engine(quiet: bool, output: Output) -> Result<CliEngine> {
    let root = std::env::current_dir().context("Failed to read the current directory")?;
    let (config, warnings) = Config::load(&root)?;
    if !output.json {
        print_config_warnings(&root.join(CONFIG_FILE), &warnings);
    }

    let store = HttpAssetStore::from_config(&config)?;
    let events: Arc<dyn SyncEventSink> = if output.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::new(output.color, quiet))
    };

    Ok(SyncEngine::new(root, store, GrassCompiler::new())
        .with_ignore_patterns(config.ignore_patterns()?)
        .with_notifier(LogNotifier)
        .with_event_sink(events)
        .with_quiet(quiet))
}

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
