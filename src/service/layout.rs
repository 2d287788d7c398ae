//! Fixed-width record codec for Correios files.
//!
//! Remessa and retorno layouts address fields by 1-based inclusive column
//! ranges. Text fields are ASCII-folded, upper-cased, truncated to the
//! field width and space-padded on the right; numeric fields are
//! truncated and zero-padded on the left. Reads outside the line and
//! writes outside the record are ignored, matching the tolerant slice
//! semantics retorno files rely on.

use chrono::NaiveDate;
use deunicode::deunicode;

/// Column width of a remessa record.
pub const REMESSA_RECORD_WIDTH: usize = 270;

/// Builder for one fixed-width record line.
#[derive(Debug)]
pub struct RecordBuilder {
    cells: Vec<u8>,
}

impl RecordBuilder {
    /// Create a space-filled record of the given width.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            cells: vec![b' '; width],
        }
    }

    /// Write a text field over the 1-based inclusive column range
    /// `[from, until]`.
    pub fn put_text(&mut self, value: &str, from: usize, until: usize) {
        let Some(width) = field_width(from, until) else {
            return;
        };
        let folded = deunicode(value).to_uppercase();
        let truncated: String = folded.chars().take(width).collect();
        self.write(&format!("{truncated:<width$}"), from);
    }

    /// Write a left-zero-padded numeric field over `[from, until]`.
    pub fn put_number(&mut self, value: impl std::fmt::Display, from: usize, until: usize) {
        let Some(width) = field_width(from, until) else {
            return;
        };
        let text = value.to_string();
        let truncated: String = text.chars().take(width).collect();
        self.write(&format!("{truncated:0>width$}"), from);
    }

    /// Finish the record as a line.
    #[must_use]
    pub fn finish(self) -> String {
        self.cells.iter().map(|&b| b as char).collect()
    }

    fn write(&mut self, text: &str, from: usize) {
        let start = from - 1;
        for (offset, byte) in text.bytes().enumerate() {
            if let Some(cell) = self.cells.get_mut(start + offset) {
                *cell = byte;
            }
        }
    }
}

const fn field_width(from: usize, until: usize) -> Option<usize> {
    if from == 0 || until < from {
        return None;
    }
    Some(until - from + 1)
}

/// Trimmed text at 1-based column `from`, `len` characters wide.
#[must_use]
pub fn read_text(line: &str, from: usize, len: usize) -> String {
    let collected: String = line.chars().skip(from.saturating_sub(1)).take(len).collect();
    collected.trim().to_string()
}

/// Numeric field; `None` when empty or not a number.
#[must_use]
pub fn read_number(line: &str, from: usize, len: usize) -> Option<u32> {
    read_text(line, from, len).parse().ok()
}

/// `YYYYMMDD` date field rendered as `DD/MM/YYYY`; empty when the field
/// does not hold a calendar date.
#[must_use]
pub fn read_date(line: &str, from: usize) -> String {
    let text = read_text(line, from, 8);
    NaiveDate::parse_from_str(&text, "%Y%m%d")
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}
