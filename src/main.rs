// SPDX-License-Identifier: MIT OR Apache-2.0

//! fzgrep - Interactive fuzzy line search tool
//!
//! Prompts for a query (or takes one on the command line), scans a directory
//! of text files, and prints matching lines per file ranked by similarity.

mod cli;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, OutputFormat};
use fzgrep::config::{Config, ConfigOutputFormat};
use fzgrep::output;
use fzgrep::search::{self, SearchOptions};
use fzgrep::stats;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load();

    let directory = config.merge_path(cli.path);
    let format = cli
        .format
        .or_else(|| {
            config.output_format().map(|f| match f {
                ConfigOutputFormat::Text => OutputFormat::Text,
                ConfigOutputFormat::Json => OutputFormat::Json,
            })
        })
        .unwrap_or(OutputFormat::Text);
    let options = SearchOptions {
        min_score: config.merge_min_score(cli.min_score),
        // JSON consumers get clean streams; no bar for them.
        progress: !cli.no_progress && format == OutputFormat::Text,
    };

    match cli.command {
        Some(Commands::Stats) => {
            let count = stats::count_chars(&directory)?;
            println!("Letters in files: {}", count);
        }
        None => match cli.query {
            Some(query) => {
                let query = query.trim();
                if query.is_empty() {
                    anyhow::bail!("Enter a phrase or substring to search");
                }
                run_search(&directory, query, options, format)?;
            }
            None => prompt_loop(&directory, options, format)?,
        },
    }

    Ok(())
}

fn run_search(
    directory: &Path,
    query: &str,
    options: SearchOptions,
    format: OutputFormat,
) -> Result<()> {
    let outcome = search::search(directory, query, options)?;
    match format {
        OutputFormat::Json => output::print_outcome_json(&outcome)?,
        OutputFormat::Text => {
            output::print_outcome_text(&outcome, output::use_colors());
        }
    }
    Ok(())
}

/// Read-eval loop: re-prompts on empty input, exits cleanly on EOF.
fn prompt_loop(directory: &Path, options: SearchOptions, format: OutputFormat) -> Result<()> {
    let use_color = output::use_colors();
    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("Enter a phrase or substring to search: ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            println!();
            return Ok(());
        }

        let query = input.trim();
        if query.is_empty() {
            if use_color {
                println!(
                    "{} Enter a phrase or substring to search",
                    "✗".red().bold()
                );
            } else {
                println!("Enter a phrase or substring to search");
            }
            continue;
        }

        run_search(directory, query, options, format)?;
    }
}
