// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer talks to the dataset only through
// TableSource, so the search flow can be driven by the real
// spreadsheet loader or by an in-memory table in tests.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::{error::LoadError, table::Table};

// ─── TableSource ──────────────────────────────────────────────────────────────
/// Anything that can produce the classification table.
///
/// Implementations:
///   - SpreadsheetLoader → reads an .xlsx / .ods workbook
///   - (tests) fixed in-memory tables
pub trait TableSource {
    /// Read the whole table. All-or-nothing: either every row
    /// or a LoadError.
    fn load(&self) -> Result<Table, LoadError>;
}
