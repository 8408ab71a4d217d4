// ============================================================
// Layer 4 — Data
// ============================================================
// Everything between the spreadsheet on disk and the Table
// the search layer reads, plus the static quiz bank.
//
//   日田市ごみ分別早見表.xlsx
//       │
//       ▼
//   SpreadsheetLoader  → opens the workbook, picks the sheet
//       │
//       ▼
//   Preprocessor       → trims headers, cells → display text
//       │
//       ▼
//   Table              → rows + resolved column layout
//       │
//       ▼
//   DatasetCache       → loads once, shares Arc<Table>
//
// Reference: calamine crate documentation
//            Rust Book §13 (Iterators and Closures)

/// Reads the classification workbook with calamine
pub mod loader;

/// Header trimming and cell-to-text conversion
pub mod preprocessor;

/// Load-once cache around any TableSource
pub mod cache;

/// The built-in sorting quiz questions
pub mod quiz_bank;
