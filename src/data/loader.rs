// ============================================================
// Layer 4 — Spreadsheet Loader
// ============================================================
// Loads the Hita City sorting table (日田市ごみ分別早見表.xlsx)
// using the calamine crate.
//
// How the workbook maps onto a Table:
//   Workbook
//     └── first worksheet (or the configured sheet name)
//           ├── row 0      → header row, trimmed
//           └── rows 1..N  → data rows, kept as display text
//
// Failure is all-or-nothing and sorted into exactly two
// kinds:
//   - NotFound   → nothing exists at the path
//   - Unreadable → anything else: corrupt archive, unknown
//                  format, permission denied, missing sheet,
//                  empty sheet, missing required column
//
// Reference: calamine crate documentation
//            Rust Book §9 (Error Handling)

use std::{fs, io, path::PathBuf};

use calamine::{open_workbook_auto, Reader};

use crate::data::preprocessor::Preprocessor;
use crate::domain::{
    error::LoadError,
    table::{ColumnNames, Table},
    traits::TableSource,
};

/// Reads the classification table from a spreadsheet file.
/// Implements the TableSource trait from Layer 3.
pub struct SpreadsheetLoader {
    /// Path to the workbook, relative to the working directory
    path:    PathBuf,
    /// Worksheet to read; `None` means the first sheet
    sheet:   Option<String>,
    /// Header names of the columns the lookup needs
    columns: ColumnNames,
}

impl SpreadsheetLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path:    path.into(),
            sheet:   None,
            columns: ColumnNames::default(),
        }
    }

    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = sheet;
        self
    }

    pub fn with_columns(mut self, columns: ColumnNames) -> Self {
        self.columns = columns;
        self
    }
}

impl TableSource for SpreadsheetLoader {
    fn load(&self) -> Result<Table, LoadError> {
        let path = self.path.as_path();

        // Distinguish "missing" from every other failure before
        // handing the path to calamine, which folds both into Io.
        match fs::metadata(path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("Spreadsheet '{}' does not exist", path.display());
                return Err(LoadError::NotFound { path: path.to_path_buf() });
            }
            Err(e) => return Err(LoadError::unreadable(path, e)),
            Ok(meta) if !meta.is_file() => {
                return Err(LoadError::unreadable(path, "not a regular file"));
            }
            Ok(_) => {}
        }

        let mut workbook = open_workbook_auto(path)
            .map_err(|e| LoadError::unreadable(path, e))?;

        let range = match &self.sheet {
            Some(name) => workbook
                .worksheet_range(name)
                .map_err(|e| LoadError::unreadable(path, format!("sheet '{name}': {e}")))?,
            None => workbook
                .worksheet_range_at(0)
                .ok_or_else(|| LoadError::unreadable(path, "workbook has no worksheets"))?
                .map_err(|e| LoadError::unreadable(path, e))?,
        };

        let (headers, rows) = Preprocessor::new()
            .split_rows(range.rows())
            .ok_or_else(|| LoadError::unreadable(path, "worksheet is empty"))?;

        let table = Table::new(headers, rows, &self.columns).map_err(|missing| {
            LoadError::unreadable(path, format!("column '{missing}' not found in header row"))
        })?;

        tracing::info!(
            "Loaded {} rows from '{}'",
            table.len(),
            path.display()
        );
        Ok(table)
    }
}
