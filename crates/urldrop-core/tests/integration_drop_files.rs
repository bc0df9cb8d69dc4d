//! Integration test: drop real files from a temp directory through the handler.

mod common;

use std::collections::BTreeSet;

use common::{write_file, write_shortcut, RecordingSink};
use urldrop_core::source::{files_from_paths, parse_drop_line};
use urldrop_core::{handle, BatchSummary};

#[tokio::test]
async fn mixed_drop_opens_only_valid_shortcuts() {
    let dir = tempfile::tempdir().unwrap();
    let paths = vec![
        write_shortcut(dir.path(), "rust.url", "https://www.rust-lang.org/"),
        write_file(dir.path(), "notes.txt", b"URL=https://not-a-shortcut.example\n"),
        write_shortcut(dir.path(), "DOCS.URL", "https://doc.rust-lang.org/std/"),
        write_file(dir.path(), "broken.url", b"[InternetShortcut]\r\nIconIndex=0\r\n"),
    ];

    let files = files_from_paths(paths);
    let mut sink = RecordingSink::default();
    let summary = handle(&files, &mut sink).await;

    assert_eq!(summary, Some(BatchSummary::Opened(2)));
    assert_eq!(sink.statuses.first().unwrap(), "Processing 4 file(s)...");
    assert_eq!(sink.statuses.last().unwrap(), "Opened 2 tab(s).");
    assert_eq!(sink.completions, vec![2]);
    let opened: BTreeSet<_> = sink.opened.iter().map(String::as_str).collect();
    assert_eq!(
        opened,
        BTreeSet::from(["https://doc.rust-lang.org/std/", "https://www.rust-lang.org/"])
    );
}

#[tokio::test]
async fn missing_file_counts_as_processed() {
    let dir = tempfile::tempdir().unwrap();
    let paths = vec![
        write_shortcut(dir.path(), "a.url", "https://a.example/"),
        dir.path().join("deleted.url"),
        write_shortcut(dir.path(), "b.url", "https://b.example/"),
    ];

    let files = files_from_paths(paths);
    let mut sink = RecordingSink::default();
    let summary = handle(&files, &mut sink).await;

    assert_eq!(summary, Some(BatchSummary::Opened(2)));
    assert_eq!(sink.statuses.last().unwrap(), "Opened 2 tab(s).");
}

#[tokio::test]
async fn directory_dropped_as_shortcut_is_a_read_failure() {
    let dir = tempfile::tempdir().unwrap();
    let odd = dir.path().join("folder.url");
    std::fs::create_dir(&odd).unwrap();

    let files = files_from_paths([odd]);
    let mut sink = RecordingSink::default();
    let summary = handle(&files, &mut sink).await;

    assert_eq!(summary, Some(BatchSummary::NoneValid));
    assert_eq!(sink.statuses.last().unwrap(), "No valid .url files found.");
    assert!(sink.opened.is_empty());
}

#[tokio::test]
async fn pasted_drop_line_with_quoted_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_shortcut(dir.path(), "My Site.url", "https://my.example/");
    let line = format!("'{}'\n", path.display());

    let files = files_from_paths(parse_drop_line(&line));
    let mut sink = RecordingSink::default();
    handle(&files, &mut sink).await;

    assert_eq!(sink.opened, vec!["https://my.example/"]);
}

#[tokio::test]
async fn blank_drop_line_is_an_empty_drop() {
    let files = files_from_paths(parse_drop_line("\n"));
    let mut sink = RecordingSink::default();
    assert_eq!(handle(&files, &mut sink).await, None);
    assert_eq!(sink.statuses, vec!["No files detected."]);
}
