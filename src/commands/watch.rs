use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use themesync::presentation::watch::render_watch_event;
use themesync::{WatchEvent, WatchMode, WatchUseCase};

use super::context::build_engine;
use super::Output;

pub fn cmd_watch(quiet: bool, keep_files: bool, output: Output) -> Result<()> {
    let engine = build_engine(quiet, output)?;
    let use_case = WatchUseCase::new(&engine, WatchMode::from_keep_files(keep_files));

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("Error setting Ctrl+C handler")?;

    use_case.start(running, |event| {
        if output.json {
            println!("{}", event.to_json());
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let rendered = render_watch_event(&timestamp, &event, output.color);
        match event {
            WatchEvent::Error { .. } => eprint!("{rendered}"),
            _ => print!("{rendered}"),
        }
    })?;

    Ok(())
}
