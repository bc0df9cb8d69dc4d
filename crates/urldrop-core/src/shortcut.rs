//! Windows internet shortcut (`.url`) parsing.
//!
//! A `.url` file is an INI-style text file; the only part we care about is the
//! `URL=<target>` line:
//!
//! ```text
//! [InternetShortcut]
//! URL=https://example.com/
//! IconIndex=0
//! ```

/// File name suffix that marks a dropped file as a shortcut (compared ASCII case-insensitively).
pub const SHORTCUT_EXTENSION: &str = ".url";

/// Key prefix of the target line. Case-sensitive.
const URL_KEY: &str = "URL=";

/// Line terminators recognized when scanning shortcut text.
const LINE_BREAKS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// True if `name` ends with `.url`, ignoring ASCII case.
///
/// A name that is exactly `.url` qualifies; `shortcut.url.txt` does not.
pub fn has_shortcut_extension(name: &str) -> bool {
    let len = name.len();
    let ext = SHORTCUT_EXTENSION.len();
    len >= ext
        && name.is_char_boundary(len - ext)
        && name[len - ext..].eq_ignore_ascii_case(SHORTCUT_EXTENSION)
}

/// Extracts the target URL from shortcut text.
///
/// Returns the remainder of the first line that starts with `URL=`, trimmed of
/// surrounding whitespace and byte-order marks. Only that first line is considered: if its value is
/// blank the result is `None` even when a later `URL=` line exists.
pub fn extract_url(content: &str) -> Option<&str> {
    let value = content
        .split(LINE_BREAKS)
        .find_map(|line| line.strip_prefix(URL_KEY))?
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
