use anyhow::{Context, Result};
use crossterm::style::Stylize;

use themesync::config::{Config, CONFIG_FILE};
use themesync::domain::ports::{Notification, Notifier};
use themesync::infrastructure::LogNotifier;

use super::Output;

pub fn cmd_configure(
    api_key: &str,
    password: &str,
    store: &str,
    force: bool,
    output: Output,
) -> Result<()> {
    let root = std::env::current_dir().context("Failed to read the current directory")?;
    let config = Config::new(api_key, password, store);
    config.save(&root, force)?;

    let path = root.join(CONFIG_FILE);
    LogNotifier.notify(&Notification::new(
        "Configured",
        format!("Wrote {}", path.display()),
    ));

    if output.json {
        println!(
            "{}",
            serde_json::json!({
                "event": "configured",
                "command": "configure",
                "path": path.display().to_string(),
                "store": store,
            })
        );
    } else {
        let line = format!("Configured: {}", path.display());
        if output.color {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }

    Ok(())
}
