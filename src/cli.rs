use clap::{Parser, Subcommand};

use themesync::presentation::ColorWhen;

/// themesync - keep a local theme directory and a remote asset store in sync
#[derive(Parser, Debug)]
#[command(name = "themesync")]
#[command(author, version, about, long_about = None)]
#[command(infer_subcommands = true)]
#[command(after_help = "Run 'themesync configure' in the theme directory first.")]
pub struct Cli {
    /// Emit NDJSON events instead of console lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output (auto, always, never)
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write config.yml with store credentials
    Configure {
        /// Private app API key
        api_key: String,

        /// Private app password
        password: String,

        /// Store host (example.myshopify.com) or base URL
        store: String,

        /// Overwrite an existing config.yml
        #[arg(short, long)]
        force: bool,
    },

    /// Download assets (all when no keys are given)
    Download {
        /// Asset keys, e.g. templates/index.liquid
        keys: Vec<String>,

        /// Suppress notifications and success lines
        #[arg(short, long)]
        quiet: bool,
    },

    /// Upload local files (all when no keys are given)
    Upload {
        /// Asset keys, e.g. assets/theme.scss
        keys: Vec<String>,

        /// Suppress notifications and success lines
        #[arg(short, long)]
        quiet: bool,
    },

    /// Delete remote assets, then upload local files
    Replace {
        /// Restrict the replace to these keys
        keys: Vec<String>,

        /// Suppress notifications and success lines
        #[arg(short, long)]
        quiet: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete remote assets
    Remove {
        /// Asset keys to delete
        #[arg(required = true)]
        keys: Vec<String>,

        /// Suppress notifications and success lines
        #[arg(short, long)]
        quiet: bool,
    },

    /// Watch the working directory and mirror changes to the store
    Watch {
        /// Suppress notifications and success lines
        #[arg(short, long)]
        quiet: bool,

        /// Do not delete remote assets when local files are deleted
        #[arg(long)]
        keep_files: bool,
    },
}
