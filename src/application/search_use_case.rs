// ============================================================
// Layer 2 — SearchUseCase
// ============================================================
// One request in, one response out. Each interaction on the
// search screen (a query line, a preview request) is handled
// by re-deriving the answer from the current input and the
// cached table:
//
//   Step 1: Get the table from the cache     (Layer 4 - data)
//   Step 2: Treat a blank query as "no input"
//   Step 3: Run the two-tier matcher         (Layer 5 - search)
//   Step 4: Hand a SearchResponse to Layer 1 for rendering
//
// A failed load never panics or aborts: every request just
// gets `Unavailable` back with the cached LoadError.

use std::sync::Arc;

use crate::data::cache::DatasetCache;
use crate::domain::{error::LoadError, table::Table, traits::TableSource};
use crate::search::matcher::{search_hits, SearchHits};

/// What the search screen should show for one request.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResponse {
    /// The dataset could not be loaded
    Unavailable(LoadError),
    /// Query was empty or whitespace
    BlankQuery,
    /// No row matched
    NotFound { query: String },
    /// At least one row matched
    Found { query: String, hits: SearchHits },
}

/// Rows for the sample-data preview.
#[derive(Debug, Clone)]
pub struct Preview {
    table: Arc<Table>,
    rows:  usize,
}

impl Preview {
    pub fn headers(&self) -> &[String] {
        self.table.headers()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        self.table.head(self.rows)
    }
}

pub struct SearchUseCase<S: TableSource> {
    cache:        DatasetCache<S>,
    preview_rows: usize,
}

impl<S: TableSource> SearchUseCase<S> {
    pub fn new(source: S, preview_rows: usize) -> Self {
        Self {
            cache: DatasetCache::new(source),
            preview_rows,
        }
    }

    /// Load (once) and report the dataset state: row count or error.
    pub fn status(&self) -> Result<usize, LoadError> {
        match self.cache.get() {
            Ok(table) => Ok(table.len()),
            Err(e)    => Err(e.clone()),
        }
    }

    /// Handle one query.
    pub fn handle(&self, query: &str) -> SearchResponse {
        let table = match self.cache.get() {
            Ok(table) => Arc::clone(table),
            Err(e)    => return SearchResponse::Unavailable(e.clone()),
        };

        let query = query.trim();
        if query.is_empty() {
            return SearchResponse::BlankQuery;
        }

        let hits = search_hits(Some(&*table), query);
        tracing::info!("Search '{}' → {} result(s)", query, hits.len());

        if hits.is_empty() {
            SearchResponse::NotFound { query: query.to_string() }
        } else {
            SearchResponse::Found { query: query.to_string(), hits }
        }
    }

    /// The first rows of the table, or the load error.
    pub fn preview(&self) -> Result<Preview, LoadError> {
        match self.cache.get() {
            Ok(table) => Ok(Preview { table: Arc::clone(table), rows: self.preview_rows }),
            Err(e)    => Err(e.clone()),
        }
    }
}
