// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fuzzy line search over a flat directory of text files
//!
//! Scans every entry in the target directory, scores each line against the
//! query with a partial-ratio similarity, and ranks qualifying lines per
//! file. One unreadable or non-UTF-8 entry fails the whole scan; no partial
//! results are returned.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use rapidfuzz::fuzz;
use serde::Serialize;
use tracing::debug;

use crate::config::DEFAULT_MIN_SCORE;
use crate::errors::SearchError;

/// One scoring result for a single line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Zero-based position of the line within its file
    pub line_number: usize,
    /// Similarity against the query, 0..=100
    pub score: u8,
    /// Raw line content, whitespace preserved
    pub text: String,
}

/// Result of one directory scan, fully owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// Line counts summed over every file, matching or not
    pub total_lines_scanned: usize,
    /// Per-file matches sorted by score descending; files with no
    /// qualifying matches are absent
    pub matches_by_file: BTreeMap<String, Vec<Match>>,
}

/// Knobs for one search run.
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Score a line must exceed to be kept
    pub min_score: u8,
    /// Render a progress bar while scanning
    pub progress: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            progress: false,
        }
    }
}

/// Scan `directory` and rank every line against `query`.
///
/// Returns the total number of lines scanned plus a per-file list of
/// matches with `score > options.min_score`, sorted by score descending.
/// Equal scores keep their original line order. The caller is expected to
/// reject empty queries before calling.
pub fn search(
    directory: &Path,
    query: &str,
    options: SearchOptions,
) -> Result<SearchOutcome, SearchError> {
    let entries = fs::read_dir(directory).map_err(|source| SearchError::DirectoryNotFound {
        path: directory.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SearchError::DirectoryNotFound {
            path: directory.to_path_buf(),
            source,
        })?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    // Filesystem enumeration order is platform-dependent; sort the names so
    // results are deterministic across runs.
    names.sort();

    let bar = if options.progress {
        file_progress_bar(names.len() as u64)
    } else {
        ProgressBar::hidden()
    };

    let mut outcome = SearchOutcome::default();
    for name in names {
        let path = directory.join(&name);
        let text = fs::read_to_string(&path).map_err(|source| SearchError::FileUnreadable {
            path: path.clone(),
            source,
        })?;

        let mut file_matches = Vec::new();
        let mut line_count = 0usize;
        for (line_number, line) in text.lines().enumerate() {
            line_count += 1;
            let score = partial_ratio(line, query);
            if score > options.min_score {
                file_matches.push(Match {
                    line_number,
                    score,
                    text: line.to_string(),
                });
            }
        }

        outcome.total_lines_scanned += line_count;
        bar.set_message(progress_message(&name, outcome.total_lines_scanned));
        debug!(
            file = %name,
            lines = line_count,
            matches = file_matches.len(),
            "scanned file"
        );

        if !file_matches.is_empty() {
            // Stable sort: equal scores keep ascending line order.
            file_matches.sort_by(|a, b| b.score.cmp(&a.score));
            outcome.matches_by_file.insert(name, file_matches);
        }

        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(outcome)
}

/// Best-aligning substring similarity between the line and the query,
/// as an integer percentage.
///
/// `fuzz::ratio` compares full strings and is normalized to 0.0-1.0, so the
/// partial-ratio strategy is built on top of it: slide a window the length
/// of the shorter string across the longer one, take the best window's
/// ratio, and scale to 0..=100.
fn partial_ratio(line: &str, query: &str) -> u8 {
    let line_chars: Vec<char> = line.chars().collect();
    let query_chars: Vec<char> = query.chars().collect();
    let (needle, haystack) = if line_chars.len() <= query_chars.len() {
        (&line_chars, &query_chars)
    } else {
        (&query_chars, &line_chars)
    };
    if needle.is_empty() {
        return if haystack.is_empty() { 100 } else { 0 };
    }

    let mut best = 0.0f64;
    for window in haystack.windows(needle.len()) {
        let score = fuzz::ratio(window.iter().copied(), needle.iter().copied());
        if score > best {
            best = score;
        }
        if best >= 1.0 {
            break;
        }
    }
    (best * 100.0).round() as u8
}

fn progress_message(file: &str, total_lines: usize) -> String {
    format!("{} ({} lines scanned)", file, total_lines)
}

fn file_progress_bar(total_files: u64) -> ProgressBar {
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} files {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("#>-");
    ProgressBar::new(total_files).with_style(style)
}
