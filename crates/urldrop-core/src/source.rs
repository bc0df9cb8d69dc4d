//! Dropped files backed by the local file system.
//!
//! A terminal has no drop event; dragging files onto its window pastes their
//! paths instead, either shell-quoted (`'/home/me/My Site.url'`), backslash
//! escaped (`/home/me/My\ Site.url`) or as `file://` URIs depending on the
//! terminal. [`parse_drop_line`] turns one such line back into paths.

use std::path::{Path, PathBuf};

use crate::drop_handler::{DroppedFile, ReadFuture};
use crate::error::ReadError;

/// A dropped file on disk.
#[derive(Debug, Clone)]
pub struct PathFile {
    path: PathBuf,
    name: String,
}

impl PathFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DroppedFile for PathFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_text(&self) -> ReadFuture {
        let path = self.path.clone();
        Box::pin(async move {
            let read = tokio::fs::read(&path).await;
            let bytes = read.map_err(|source| ReadError::Io { path, source })?;
            Ok(decode_text(&bytes))
        })
    }
}

/// Decode file bytes as UTF-8 the way a browser text read does: invalid
/// sequences become U+FFFD and a leading byte-order mark is dropped.
pub fn decode_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    match text.strip_prefix('\u{FEFF}') {
        Some(rest) => rest.to_string(),
        None => text.into_owned(),
    }
}

/// Wrap a list of paths as dropped files.
pub fn files_from_paths<I, P>(paths: I) -> Vec<PathFile>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    paths.into_iter().map(PathFile::new).collect()
}

/// Split a pasted drop line into paths.
///
/// Whitespace separates paths unless quoted (`'...'` or `"..."`) or escaped
/// with a backslash (not on Windows, where it is a path separator). Tokens
/// that parse as `file://` URIs are converted to local paths; other tokens are
/// taken verbatim. A blank line yields no paths.
pub fn parse_drop_line(line: &str) -> Vec<PathBuf> {
    split_tokens(line)
        .into_iter()
        .map(|token| file_uri_to_path(&token).unwrap_or_else(|| PathBuf::from(token)))
        .collect()
}

fn file_uri_to_path(token: &str) -> Option<PathBuf> {
    if !token.starts_with("file://") {
        return None;
    }
    url::Url::parse(token).ok()?.to_file_path().ok()
}

fn split_tokens(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = line.trim_end_matches(['\r', '\n']).chars();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) if c == q => quote = None,
            Some('"') if c == '\\' => match chars.next() {
                Some(next @ ('"' | '\\')) => current.push(next),
                Some(next) => {
                    current.push('\\');
                    current.push(next);
                }
                None => current.push('\\'),
            },
            Some(_) => current.push(c),
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    in_token = true;
                }
                '\\' if !cfg!(windows) => {
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                    in_token = true;
                }
                c if c.is_whitespace() => {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                c => {
                    current.push(c);
                    in_token = true;
                }
            },
        }
    }
    if in_token {
        tokens.push(current);
    }
    tokens
}
