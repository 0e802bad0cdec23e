// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types with helpful suggestions
//!
//! Provides user-friendly error messages with actionable suggestions.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while scanning a directory.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The target directory is missing or cannot be listed
    #[error(
        "Directory not found: '{}'\n\n\
         Suggestion: check that the directory exists and is readable.\n\
         Example: fzgrep --path ./notes \"your query\"",
        path.display()
    )]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory entry could not be opened or decoded as UTF-8 text
    #[error(
        "Cannot read '{}' as UTF-8 text\n\n\
         Every entry in the target directory must be a readable text file.\n\
         Remove or relocate the offending entry and try again.",
        path.display()
    )]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
