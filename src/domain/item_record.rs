// ============================================================
// Layer 3 — ItemRecord Domain Type
// ============================================================
// One row of the Hita City sorting table, in domain terms:
//
//   品目     → item_name        (the searchable key)
//   分別区分 → category         (e.g. 燃やせるごみ, 空き缶)
//   出し方   → disposal_method  (which bag, which day)
//   注意点   → notes            (optional)
//
// Item names are NOT unique — the table may list the same
// name twice with different instructions, and search returns
// every such row.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub item_name:       String,
    pub category:        String,
    pub disposal_method: String,
    pub notes:           Option<String>,
}

impl ItemRecord {
    pub fn new(
        item_name:       impl Into<String>,
        category:        impl Into<String>,
        disposal_method: impl Into<String>,
        notes:           Option<String>,
    ) -> Self {
        Self {
            item_name:       item_name.into(),
            category:        category.into(),
            disposal_method: disposal_method.into(),
            notes,
        }
    }

    /// Notes worth showing: present and non-blank after trimming.
    pub fn visible_notes(&self) -> Option<&str> {
        self.notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}
