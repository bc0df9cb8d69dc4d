//! Helpers for writing dropped files into a temp directory.

use std::fs;
use std::path::{Path, PathBuf};

use urldrop_core::DropSink;

/// Write a Windows-style internet shortcut pointing at `url`.
pub fn write_shortcut(dir: &Path, name: &str, url: &str) -> PathBuf {
    write_file(
        dir,
        name,
        format!("[InternetShortcut]\r\nIDList=\r\nURL={url}\r\nIconIndex=0\r\n").as_bytes(),
    )
}

pub fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Sink that records every callback.
#[derive(Default)]
pub struct RecordingSink {
    pub statuses: Vec<String>,
    pub opened: Vec<String>,
    pub completions: Vec<usize>,
}

impl DropSink for RecordingSink {
    fn status(&mut self, message: &str) {
        self.statuses.push(message.to_string());
    }

    fn open(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }

    fn complete(&mut self, valid: usize) {
        self.completions.push(valid);
        self.status(&format!("Opened {valid} tab(s)."));
    }
}
