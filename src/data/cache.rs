// ============================================================
// Layer 4 — Dataset Cache
// ============================================================
// Loads the table at most once and hands the same result to
// every later caller.
//
//   first get()  → source.load() runs, result stored
//   later get()  → stored result returned, source untouched
//
// The stored value is the whole Result: a failed load stays
// failed for the lifetime of the cache, and restarting the
// process is the only way to retry. Successful tables are
// shared through an Arc, so readers never copy rows and
// nothing can mutate them.
//
// Reference: std::sync::OnceLock documentation

use std::sync::{Arc, OnceLock};

use crate::domain::{error::LoadError, table::Table, traits::TableSource};

pub type LoadResult = Result<Arc<Table>, LoadError>;

pub struct DatasetCache<S: TableSource> {
    source: S,
    cell:   OnceLock<LoadResult>,
}

impl<S: TableSource> DatasetCache<S> {
    pub fn new(source: S) -> Self {
        Self { source, cell: OnceLock::new() }
    }

    /// The cached load result, loading on first use.
    pub fn get(&self) -> &LoadResult {
        self.cell.get_or_init(|| {
            tracing::debug!("Dataset cache miss, reading source");
            self.source.load().map(Arc::new)
        })
    }

    /// The table if loading succeeded
    pub fn table(&self) -> Option<Arc<Table>> {
        self.get().as_ref().ok().cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::domain::table::ColumnNames;

    /// Counts how many times load() is called
    struct Counting {
        calls: AtomicUsize,
        fail:  bool,
    }

    impl TableSource for Counting {
        fn load(&self) -> Result<Table, LoadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(LoadError::NotFound { path: PathBuf::from("gone.xlsx") });
            }
            Table::new(
                vec!["品目".into(), "分別区分".into(), "出し方".into()],
                vec![vec!["傘".into(), "燃やせないごみ".into(), "透明袋".into()]],
                &ColumnNames::default(),
            )
            .map_err(|m| LoadError::unreadable("t.xlsx", m))
        }
    }

    #[test]
    fn test_source_is_read_once() {
        let cache = DatasetCache::new(Counting { calls: AtomicUsize::new(0), fail: false });
        assert!(!cache.is_loaded());

        let a = cache.table().unwrap();
        let b = cache.table().unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_is_cached() {
        let cache = DatasetCache::new(Counting { calls: AtomicUsize::new(0), fail: true });

        assert!(cache.table().is_none());
        assert!(matches!(cache.get(), Err(LoadError::NotFound { .. })));
        assert_eq!(cache.source.calls.load(Ordering::SeqCst), 1);
    }
}
