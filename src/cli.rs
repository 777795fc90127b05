//! Command-line interface definition
//!
//! Lives in the library so `xtask` can generate man pages from it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::render::MAX_THUMBNAIL_SIZE;

/// Environment variable overriding the server URL.
pub const SERVER_ENV: &str = "SKETCHLIST_SERVER";

#[derive(Parser, Debug)]
#[command(name = "sketchlist", author, version, about, long_about = None)]
#[command(
    after_help = "Without a command, opens the interactive gallery (same as `sketchlist browse`)."
)]
pub struct Cli {
    /// Device base URL (overrides the config file)
    #[arg(long, short, global = true, env = SERVER_ENV, value_name = "URL")]
    pub server: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write debug output to the log file
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the sketches stored on the device
    List {
        /// Draw each sketch as a half-block thumbnail
        #[arg(long, short)]
        preview: bool,

        /// Print the listing as JSON
        #[arg(long, conflicts_with = "preview")]
        json: bool,
    },

    /// Delete sketches by name
    Delete {
        /// Names of the sketches to delete
        #[arg(required = true, value_name = "NAME")]
        names: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Export every sketch as a PNG file
    Export {
        /// Directory to write the PNG files to
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Thumbnail edge length in pixels (default: from config)
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_THUMBNAIL_SIZE)))]
        size: Option<u32>,
    },

    /// Browse and delete sketches in an interactive gallery
    Browse,

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
