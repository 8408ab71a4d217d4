// ============================================================
// Layer 4 — Sheet Preprocessor
// ============================================================
// Turns raw calamine cells into the plain strings a Table
// holds.
//
// Two rules only:
//   1. Header names are trimmed of surrounding whitespace —
//      spreadsheet authors often leave "品目 " or a full-width
//      space "　注意点" in the header row. `str::trim` covers
//      Unicode White_Space, so U+3000 is removed too.
//   2. Data cells keep their display text unchanged. Empty
//      cells become "", numbers print without a trailing ".0",
//      and nothing else is coerced or filtered.
//
// Reference: calamine crate documentation (Data, Range)
//            Rust Book §8 (Strings in Rust)

use calamine::Data;

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Normalise one header cell.
    pub fn header(&self, cell: &Data) -> String {
        self.text(cell).trim().to_string()
    }

    /// Display text of one data cell.
    pub fn text(&self, cell: &Data) -> String {
        match cell {
            Data::Empty     => String::new(),
            Data::String(s) => s.clone(),
            other           => other.to_string(),
        }
    }

    /// Split a sheet's rows into (trimmed headers, data rows).
    /// An empty sheet yields `None`.
    pub fn split_rows<'a, I>(&self, mut rows: I) -> Option<(Vec<String>, Vec<Vec<String>>)>
    where
        I: Iterator<Item = &'a [Data]>,
    {
        let headers: Vec<String> = rows.next()?.iter().map(|c| self.header(c)).collect();

        let data = rows
            .map(|row| row.iter().map(|c| self.text(c)).collect())
            .collect();

        Some((headers, data))
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
