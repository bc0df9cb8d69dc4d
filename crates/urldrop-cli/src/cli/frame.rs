//! Drop zone frame drawn in the terminal, sized from the pixel preferences.

use urldrop_core::config::Preferences;

/// Approximate terminal cell size used to convert pixel preferences.
const CELL_WIDTH_PX: u32 = 8;
const CELL_HEIGHT_PX: u32 = 16;

const TITLE: &str = "Drop .url files here";
const HINT: &str = "drag files onto this window, then press Enter";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneFrame {
    pub columns: usize,
    pub rows: usize,
}

impl ZoneFrame {
    pub fn from_prefs(prefs: &Preferences) -> Self {
        let min_columns = HINT.len() + 4;
        Self {
            columns: ((prefs.width() / CELL_WIDTH_PX) as usize).max(min_columns),
            rows: ((prefs.height() / CELL_HEIGHT_PX) as usize).max(4),
        }
    }

    /// The frame as text, one line per row, title and hint centered.
    pub fn render(&self) -> String {
        let inner = self.columns - 2;
        let border = format!("+{}+\n", "-".repeat(inner));
        let blank = format!("|{}|\n", " ".repeat(inner));
        let middle = (self.rows - 2) / 2;

        let mut out = String::with_capacity((self.columns + 1) * self.rows);
        out.push_str(&border);
        for row in 0..self.rows - 2 {
            if row + 1 == middle {
                out.push_str(&centered(TITLE, inner));
            } else if row == middle {
                out.push_str(&centered(HINT, inner));
            } else {
                out.push_str(&blank);
            }
        }
        out.push_str(&border);
        out
    }
}

fn centered(text: &str, inner: usize) -> String {
    let left = (inner - text.len()) / 2;
    let right = inner - text.len() - left;
    format!("|{}{}{}|\n", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prefs_frame_size() {
        let frame = ZoneFrame::from_prefs(&Preferences::default());
        assert_eq!(frame, ZoneFrame { columns: 56, rows: 15 });
    }

    #[test]
    fn small_prefs_keep_text_inside() {
        let mut prefs = Preferences::default();
        prefs.drop_zone_width = 100;
        prefs.drop_zone_height = 100;
        let frame = ZoneFrame::from_prefs(&prefs);
        assert_eq!(frame.columns, HINT.len() + 4);
        assert_eq!(frame.rows, 6);
    }

    #[test]
    fn out_of_range_prefs_use_default_frame() {
        let mut prefs = Preferences::default();
        prefs.drop_zone_width = 4_000_000;
        prefs.drop_zone_height = 5;
        let frame = ZoneFrame::from_prefs(&prefs);
        assert_eq!(frame, ZoneFrame { columns: 56, rows: 15 });
    }

    #[test]
    fn render_has_rows_of_equal_width() {
        let frame = ZoneFrame::from_prefs(&Preferences::default());
        let text = frame.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), frame.rows);
        assert!(lines.iter().all(|l| l.len() == frame.columns));
        assert!(text.contains(TITLE));
        assert!(text.contains(HINT));
    }
}
