// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fs;
use std::path::Path;

use fzgrep::errors::SearchError;
use fzgrep::search::{search, SearchOptions};
use fzgrep::stats::count_chars;
use tempfile::TempDir;

fn write_file(path: &Path, content: &str) {
    fs::write(path, content).expect("write file");
}

#[test]
fn matching_lines_are_reported_with_zero_based_numbers() {
    let dir = TempDir::new().expect("tempdir");
    write_file(
        &dir.path().join("a.txt"),
        "hello world\ngoodbye\nhello there\n",
    );

    let outcome = search(dir.path(), "hello", SearchOptions::default()).expect("search");

    assert_eq!(outcome.total_lines_scanned, 3);
    let matches = &outcome.matches_by_file["a.txt"];
    let lines: Vec<usize> = matches.iter().map(|m| m.line_number).collect();
    assert!(lines.contains(&0));
    assert!(lines.contains(&2));
    assert!(!lines.contains(&1));
    assert!(matches.iter().all(|m| m.score > 50));
}

#[test]
fn file_without_resembling_lines_is_absent_from_results() {
    let dir = TempDir::new().expect("tempdir");
    write_file(&dir.path().join("numbers.txt"), "0123 456\n9876 210\n");

    let outcome = search(dir.path(), "hello", SearchOptions::default()).expect("search");

    assert_eq!(outcome.total_lines_scanned, 2);
    assert!(outcome.matches_by_file.is_empty());
}

#[test]
fn empty_directory_yields_empty_outcome() {
    let dir = TempDir::new().expect("tempdir");

    let outcome = search(dir.path(), "hello", SearchOptions::default()).expect("search");

    assert_eq!(outcome.total_lines_scanned, 0);
    assert!(outcome.matches_by_file.is_empty());
}

#[test]
fn invalid_utf8_file_fails_the_whole_scan() {
    let dir = TempDir::new().expect("tempdir");
    write_file(&dir.path().join("good.txt"), "hello\n");
    fs::write(dir.path().join("bad.bin"), [0xff, 0xfe, 0x80, 0x81]).expect("write binary");

    let err = search(dir.path(), "hello", SearchOptions::default()).expect_err("must fail");

    assert!(matches!(err, SearchError::FileUnreadable { .. }));
}

#[test]
fn missing_directory_fails_with_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let missing = dir.path().join("nope");

    let err = search(&missing, "hello", SearchOptions::default()).expect_err("must fail");

    assert!(matches!(err, SearchError::DirectoryNotFound { .. }));
}

#[test]
fn tied_scores_keep_original_line_order() {
    let dir = TempDir::new().expect("tempdir");
    write_file(&dir.path().join("a.txt"), "hello\n4567 89\nhello\n");

    let outcome = search(dir.path(), "hello", SearchOptions::default()).expect("search");

    let matches = &outcome.matches_by_file["a.txt"];
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].score, matches[1].score);
    assert_eq!(matches[0].line_number, 0);
    assert_eq!(matches[1].line_number, 2);
}

#[test]
fn matches_are_sorted_by_score_descending() {
    let dir = TempDir::new().expect("tempdir");
    // "helto" is close to "hello" but not exact; the exact line must rank first.
    write_file(&dir.path().join("a.txt"), "helto 4567\nhello\n");

    let outcome = search(dir.path(), "hello", SearchOptions::default()).expect("search");

    let matches = &outcome.matches_by_file["a.txt"];
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].line_number, 1);
    assert_eq!(matches[0].score, 100);
    assert!(matches[1].score > 50 && matches[1].score < 100);
    assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn min_score_threshold_is_honored() {
    let dir = TempDir::new().expect("tempdir");
    write_file(&dir.path().join("a.txt"), "helto 4567\nhello\n");

    let options = SearchOptions {
        min_score: 99,
        ..SearchOptions::default()
    };
    let outcome = search(dir.path(), "hello", options).expect("search");

    let matches = &outcome.matches_by_file["a.txt"];
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].line_number, 1);
}

#[test]
fn total_line_count_is_independent_of_query() {
    let dir = TempDir::new().expect("tempdir");
    write_file(&dir.path().join("a.txt"), "hello world\ngoodbye\n");
    write_file(&dir.path().join("b.txt"), "one line\n");

    let first = search(dir.path(), "hello", SearchOptions::default()).expect("search");
    let second = search(dir.path(), "0123456", SearchOptions::default()).expect("search");

    assert_eq!(first.total_lines_scanned, 3);
    assert_eq!(second.total_lines_scanned, 3);
}

#[test]
fn repeated_searches_are_idempotent() {
    let dir = TempDir::new().expect("tempdir");
    write_file(&dir.path().join("a.txt"), "hello world\ngoodbye\nhello\n");
    write_file(&dir.path().join("b.txt"), "say hello\n");

    let first = search(dir.path(), "hello", SearchOptions::default()).expect("search");
    let second = search(dir.path(), "hello", SearchOptions::default()).expect("search");

    assert_eq!(first, second);
}

#[test]
fn raw_line_text_is_stored_untrimmed() {
    let dir = TempDir::new().expect("tempdir");
    write_file(&dir.path().join("a.txt"), "   hello   \n");

    let outcome = search(dir.path(), "hello", SearchOptions::default()).expect("search");

    let matches = &outcome.matches_by_file["a.txt"];
    assert_eq!(matches[0].text, "   hello   ");
}

#[test]
fn count_chars_counts_only_ascii_letters() {
    let dir = TempDir::new().expect("tempdir");
    write_file(&dir.path().join("a.txt"), "ab1 c\n");
    write_file(&dir.path().join("b.txt"), "Zé!\n");

    let count = count_chars(dir.path()).expect("count");

    assert_eq!(count, 4);
}

#[test]
fn count_chars_on_missing_directory_fails_with_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let missing = dir.path().join("nope");

    let err = count_chars(&missing).expect_err("must fail");

    assert!(matches!(err, SearchError::DirectoryNotFound { .. }));
}
