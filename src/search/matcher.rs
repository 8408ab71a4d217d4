// ============================================================
// Layer 5 — Item Matcher
// ============================================================
// Finds rows of the table whose item name matches a query,
// in two tiers:
//
//   1. Exact tier   — whole name == query   (case-insensitive)
//   2. Partial tier — name contains query   (case-insensitive)
//
// The partial tier only runs when the exact tier is empty, so
// a result is always "all exact hits" or "all partial hits",
// never a mix. Searching 空き缶 therefore returns 空き缶 and
// hides 空き缶類.
//
// The query is literal text. There is no pattern language, so
// "." and "*" only match themselves.
//
// Results keep the table's row order; nothing is re-ranked
// and nothing is truncated.
//
// Reference: Rust Book §8 (Strings), §13 (Iterators)

use crate::domain::{item_record::ItemRecord, table::Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Exact,
    Partial,
}

/// Result of one search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHits {
    /// Which tier produced the rows; `None` when nothing matched
    pub tier:    Option<MatchTier>,
    pub records: Vec<ItemRecord>,
}

impl SearchHits {
    fn none() -> Self {
        Self { tier: None, records: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Search `table` for `query` and return just the matching rows.
pub fn search(table: Option<&Table>, query: &str) -> Vec<ItemRecord> {
    search_hits(table, query).records
}

/// Like `search`, but also reports which tier matched.
pub fn search_hits(table: Option<&Table>, query: &str) -> SearchHits {
    let Some(table) = table else {
        return SearchHits::none();
    };

    let query = query.trim();
    if query.is_empty() {
        return SearchHits::none();
    }

    let needle = fold_case(query);

    // Fold every name once; both tiers reuse it
    let names: Vec<String> = (0..table.len())
        .map(|row| fold_case(table.item_name(row)))
        .collect();

    let exact: Vec<usize> = rows_where(&names, |name| *name == needle);
    if !exact.is_empty() {
        tracing::debug!("'{}': {} exact match(es)", query, exact.len());
        return hits(table, MatchTier::Exact, exact);
    }

    let partial: Vec<usize> = rows_where(&names, |name| name.contains(needle.as_str()));
    tracing::debug!("'{}': {} partial match(es)", query, partial.len());

    if partial.is_empty() {
        SearchHits::none()
    } else {
        hits(table, MatchTier::Partial, partial)
    }
}

/// Lowercase one character at a time. `str::to_lowercase` is
/// context-sensitive (a word-final Σ becomes ς), which would
/// make σ fail to match ΟΔΟΣ.
fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Indices of non-blank names accepted by `pred`, in row order.
fn rows_where(names: &[String], pred: impl Fn(&String) -> bool) -> Vec<usize> {
    names
        .iter()
        .enumerate()
        .filter(|(_, name)| !name.is_empty() && pred(name))
        .map(|(row, _)| row)
        .collect()
}

fn hits(table: &Table, tier: MatchTier, rows: Vec<usize>) -> SearchHits {
    SearchHits {
        tier:    Some(tier),
        records: rows.into_iter().map(|row| table.record(row)).collect(),
    }
}
