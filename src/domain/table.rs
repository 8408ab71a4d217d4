// ============================================================
// Layer 3 — Classification Table
// ============================================================
// The loaded spreadsheet, kept as close to the source as
// possible: trimmed header names plus every row as display
// text. No coercion and no row filtering happen here.
//
// The only structure added on top is a ColumnLayout — the
// positions of the item / category / method / notes columns,
// resolved once by header name when the table is built.
//
// A Table is immutable once constructed; there is no
// method that takes `&mut self`.

use serde::{Deserialize, Serialize};

use crate::domain::item_record::ItemRecord;

/// Header names of the four columns the lookup cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub item:     String,
    pub category: String,
    pub method:   String,
    pub notes:    String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            item:     "品目".to_string(),
            category: "分別区分".to_string(),
            method:   "出し方".to_string(),
            notes:    "注意点".to_string(),
        }
    }
}

/// Column indices resolved from a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub item:     usize,
    pub category: usize,
    pub method:   usize,
    /// The notes column is optional in the source sheet
    pub notes:    Option<usize>,
}

impl ColumnLayout {
    /// Find each named column in `headers`.
    /// Returns the name of the first required column that is missing.
    pub fn resolve(headers: &[String], names: &ColumnNames) -> Result<Self, String> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| find(name).ok_or_else(|| name.to_string());

        Ok(Self {
            item:     require(&names.item)?,
            category: require(&names.category)?,
            method:   require(&names.method)?,
            notes:    find(&names.notes),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows:    Vec<Vec<String>>,
    layout:  ColumnLayout,
}

impl Table {
    /// Build a table from already-normalised headers and rows.
    ///
    /// Fails with the missing column's name when a required
    /// header is absent.
    pub fn new(
        headers: Vec<String>,
        rows:    Vec<Vec<String>>,
        names:   &ColumnNames,
    ) -> Result<Self, String> {
        let layout = ColumnLayout::resolve(&headers, names)?;
        Ok(Self { headers, rows, layout })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first `n` rows, for the sample preview
    pub fn head(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// The item-name cell of row `row` ("" when the row is short)
    pub fn item_name(&self, row: usize) -> &str {
        self.cell(row, self.layout.item)
    }

    /// Materialise row `row` as an ItemRecord.
    pub fn record(&self, row: usize) -> ItemRecord {
        let notes = self
            .layout
            .notes
            .map(|col| self.cell(row, col))
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        ItemRecord::new(
            self.cell(row, self.layout.item),
            self.cell(row, self.layout.category),
            self.cell(row, self.layout.method),
            notes,
        )
    }

    fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_layout_resolves_columns_in_any_order() {
        let headers = strings(&["注意点", "出し方", "品目", "分別区分"]);
        let layout  = ColumnLayout::resolve(&headers, &ColumnNames::default()).unwrap();
        assert_eq!(layout.item, 2);
        assert_eq!(layout.category, 3);
        assert_eq!(layout.method, 1);
        assert_eq!(layout.notes, Some(0));
    }

    #[test]
    fn test_notes_column_is_optional() {
        let headers = strings(&["品目", "分別区分", "出し方"]);
        let layout  = ColumnLayout::resolve(&headers, &ColumnNames::default()).unwrap();
        assert_eq!(layout.notes, None);
    }

    #[test]
    fn test_missing_item_column_is_reported() {
        let headers = strings(&["名前", "分別区分", "出し方"]);
        let err     = ColumnLayout::resolve(&headers, &ColumnNames::default()).unwrap_err();
        assert_eq!(err, "品目");
    }

    #[test]
    fn test_record_reads_cells_by_layout() {
        let table = Table::new(
            strings(&["品目", "分別区分", "出し方", "注意点"]),
            vec![strings(&["空き缶", "空き缶", "黄色の袋", ""])],
            &ColumnNames::default(),
        )
        .unwrap();

        let r = table.record(0);
        assert_eq!(r.item_name, "空き缶");
        assert_eq!(r.disposal_method, "黄色の袋");
        assert_eq!(r.notes, None);
    }

    #[test]
    fn test_short_rows_read_as_empty() {
        let table = Table::new(
            strings(&["品目", "分別区分", "出し方"]),
            vec![strings(&["傘"])],
            &ColumnNames::default(),
        )
        .unwrap();
        assert_eq!(table.record(0).category, "");
    }

    #[test]
    fn test_head_is_clamped() {
        let table = Table::new(
            strings(&["品目", "分別区分", "出し方"]),
            vec![strings(&["a", "b", "c"]); 3],
            &ColumnNames::default(),
        )
        .unwrap();
        assert_eq!(table.head(5).len(), 3);
        assert_eq!(table.head(2).len(), 2);
    }
}
