// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fzgrep - Interactive fuzzy line search over a directory of text files
///
/// Scores every line in the target directory against a query phrase and
/// reports matching lines per file, ranked by similarity.
#[derive(Parser, Debug)]
#[command(name = "fzgrep")]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Quickstart:\n  fzgrep \"token refresh\" --path ./notes\n  fzgrep            # interactive prompt\n  fzgrep stats      # letter count for the directory"
)]
pub struct Cli {
    /// Search phrase; omit to start the interactive prompt
    pub query: Option<String>,

    /// Directory to search (defaults to the config value or current directory)
    #[arg(short, long, global = true)]
    pub path: Option<PathBuf>,

    /// Minimum score a line must exceed to be reported (0-100)
    #[arg(long, global = true)]
    pub min_score: Option<u8>,

    /// Output format (text or json)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Disable the scan progress bar
    #[arg(long, global = true)]
    pub no_progress: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count ASCII letters across the directory's files
    Stats,
}
