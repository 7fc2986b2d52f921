//! Command-line interface definitions and parsing
//!
//! With no subcommand fdel opens the interactive shell. Subcommands run a
//! standalone picker, delete paths without the TUI, or manage the config
//! file.
//!
//! # Examples
//!
//! ```bash
//! # Open the shell in ~/Downloads with two files pre-selected
//! fdel --base-dir ~/Downloads old.zip notes.txt
//!
//! # Pick several files and print them as JSON
//! fdel pick --multi --json
//!
//! # Delete without asking
//! fdel delete --yes build.log
//! ```

use crate::picker::PickerMode;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "fdel")]
#[command(about = "The Ultimate Auto File Deleter: pick files in the terminal and delete them", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory the shell starts in (overrides config)
    #[arg(short = 'b', long = "base-dir", value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// List hidden entries in pickers (overrides config)
    #[arg(short = 'a', long = "show-hidden", global = true)]
    pub show_hidden: bool,

    /// Use this config file instead of the default one
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Write diagnostic logs to this file
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Paths to pre-select in the shell
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open a picker and print the confirmed paths
    #[command(visible_alias = "p")]
    Pick {
        /// Pick directories instead of files
        #[arg(short = 'd', long = "directory")]
        directory: bool,

        /// Allow selecting more than one entry
        #[arg(short = 'm', long = "multi")]
        multi: bool,

        /// Dialog title
        #[arg(short = 't', long = "title", value_name = "TITLE")]
        title: Option<String>,

        /// Print a JSON array instead of one path per line
        #[arg(long = "json")]
        json: bool,

        /// Directory the picker starts in
        #[arg(short = 'b', long = "base-dir", value_name = "DIR")]
        base_dir: Option<PathBuf>,

        /// Entries selected when the picker opens
        #[arg(short = 's', long = "preselect", value_name = "PATH")]
        preselect: Vec<PathBuf>,
    },

    /// Delete files and empty directories without opening the shell
    #[command(visible_alias = "rm")]
    Delete {
        /// Only list what would be deleted
        #[arg(short = 'n', long = "dry-run")]
        dry_run: bool,

        /// Do not ask for confirmation
        #[arg(short = 'y', long = "yes")]
        yes: bool,

        /// Paths to delete
        #[arg(value_name = "PATHS", required = true)]
        paths: Vec<PathBuf>,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the config file location
    Path,

    /// Print the effective configuration as TOML
    Show,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Explicit config file, if one was given
    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        self.config.as_deref()
    }
}

impl Commands {
    /// Picker mode requested by `pick`
    #[must_use]
    pub const fn picker_mode(&self) -> Option<PickerMode> {
        match self {
            Self::Pick { directory: true, .. } => Some(PickerMode::Directory),
            Self::Pick { .. } => Some(PickerMode::File),
            _ => None,
        }
    }
}
