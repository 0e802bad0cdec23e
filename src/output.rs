// SPDX-License-Identifier: MIT OR Apache-2.0

//! Result rendering: per-file text tables and JSON output

use std::io::IsTerminal;

use anyhow::Result;
use colored::Colorize;

use crate::search::{Match, SearchOutcome};

/// Whether stdout should receive colored output.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Print the outcome as pretty JSON.
pub fn print_outcome_json(outcome: &SearchOutcome) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(outcome)?);
    Ok(())
}

/// Print the total line count and one table per matching file.
pub fn print_outcome_text(outcome: &SearchOutcome, use_color: bool) {
    println!("Total lines in files: {}", outcome.total_lines_scanned);

    if outcome.matches_by_file.is_empty() {
        if use_color {
            println!("{} Nothing found", "⚠".yellow().bold());
        } else {
            println!("Nothing found");
        }
        return;
    }

    for (file, matches) in &outcome.matches_by_file {
        println!();
        print_file_table(file, matches, use_color);
    }
}

fn print_file_table(file: &str, matches: &[Match], use_color: bool) {
    if use_color {
        println!(
            "Found {} match(es) in {}",
            matches.len().to_string().cyan(),
            file.blue().bold()
        );
    } else {
        println!("Found {} match(es) in {}", matches.len(), file);
    }

    let line_width = matches
        .iter()
        .map(|m| m.line_number.to_string().len())
        .max()
        .unwrap_or(1)
        .max("Line".len());
    let text_width = matches
        .iter()
        .map(|m| m.text.trim().chars().count())
        .max()
        .unwrap_or(4)
        .clamp("Text".len(), 60);

    let header = format!(
        "  {:>line_width$}  {:>5}  {:<text_width$}  Ref",
        "Line", "Score", "Text"
    );
    if use_color {
        println!("{}", header.dimmed());
    } else {
        println!("{}", header);
    }

    for m in matches {
        let reference = format!("{}#{}", file, m.line_number);
        let row = format!(
            "  {:>line_width$}  {:>5}  {:<text_width$}  ",
            m.line_number,
            m.score,
            m.text.trim()
        );
        if use_color {
            println!("{}{}", row, reference.italic().dimmed());
        } else {
            println!("{}{}", row, reference);
        }
    }
}
