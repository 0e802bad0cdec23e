// SPDX-License-Identifier: MIT OR Apache-2.0

//! Directory-level character statistics

use std::fs;
use std::path::Path;

use crate::errors::SearchError;

/// Count the ASCII alphabetic characters across every file in `directory`.
///
/// Shares the search scan's failure policy: one unreadable or non-UTF-8
/// entry fails the whole count.
pub fn count_chars(directory: &Path) -> Result<usize, SearchError> {
    let entries = fs::read_dir(directory).map_err(|source| SearchError::DirectoryNotFound {
        path: directory.to_path_buf(),
        source,
    })?;

    let mut count = 0;
    for entry in entries {
        let entry = entry.map_err(|source| SearchError::DirectoryNotFound {
            path: directory.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let text = fs::read_to_string(&path).map_err(|source| SearchError::FileUnreadable {
            path: path.clone(),
            source,
        })?;
        count += text.chars().filter(|c| c.is_ascii_alphabetic()).count();
    }

    Ok(count)
}
