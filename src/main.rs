//! themesync CLI
//!
//! Usage: themesync <COMMAND>
//!
//! Commands:
//!   configure  Write config.yml with store credentials
//!   download   Download assets from the store
//!   upload     Upload local files to the store
//!   replace    Delete remote assets, then upload local files
//!   remove     Delete remote assets
//!   watch      Mirror local changes to the store

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let color = themesync::presentation::use_color(cli.color);
    let output = commands::Output {
        json: cli.json,
        color,
    };

    match cli.command {
        Commands::Configure {
            api_key,
            password,
            store,
            force,
        } => commands::configure::cmd_configure(&api_key, &password, &store, force, output),
        Commands::Download { keys, quiet } => commands::sync::cmd_download(&keys, quiet, output),
        Commands::Upload { keys, quiet } => commands::sync::cmd_upload(&keys, quiet, output),
        Commands::Replace { keys, quiet, yes } => {
            commands::sync::cmd_replace(&keys, quiet, yes, output)
        }
        Commands::Remove { keys, quiet } => commands::sync::cmd_remove(&keys, quiet, output),
        Commands::Watch { quiet, keep_files } => {
            commands::watch::cmd_watch(quiet, keep_files, output)
        }
    }
}

/// Log records go to stderr; `RUST_LOG` overrides the `-v` default
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("themesync={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose > 1)
        .init();
}
