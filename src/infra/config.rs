// ============================================================
// Layer 6 — Application Config
// ============================================================
// The data path, column names and display settings, collected
// in one serde struct that can be overridden by an optional
// JSON file:
//
//   {
//     "data_path":    "日田市ごみ分別早見表.xlsx",
//     "sheet":        null,
//     "columns":      { "item": "品目", "category": "分別区分",
//                       "method": "出し方", "notes": "注意点" },
//     "preview_rows": 5,
//     "color":        true,
//     "tally":        "running"
//   }
//
// Every field has a default, so a partial file is fine and
// no file at all gives the stock behaviour. CLI flags are
// applied on top by Layer 1.
//
// Reference: serde / serde_json documentation
//            Rust Book §9 (Error Handling)

use std::{fs, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::application::quiz_use_case::TallyPolicy;
use crate::domain::table::ColumnNames;

/// Spreadsheet read when no path is configured
pub const DEFAULT_DATA_PATH: &str = "日田市ごみ分別早見表.xlsx";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Workbook path, relative to the working directory
    pub data_path: PathBuf,

    /// Worksheet name; `None` reads the first sheet
    pub sheet: Option<String>,

    /// Header names of the lookup columns
    pub columns: ColumnNames,

    /// Rows shown by the sample preview
    pub preview_rows: usize,

    /// Colour category labels with ANSI escapes
    pub color: bool,

    /// How the quiz score is tallied
    pub tally: TallyPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path:    PathBuf::from(DEFAULT_DATA_PATH),
            sheet:        None,
            columns:      ColumnNames::default(),
            preview_rows: 5,
            color:        true,
            tally:        TallyPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Read a config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        let cfg: Self = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config JSON in '{}'", path.display()))?;

        tracing::debug!("Loaded config from '{}'", path.display());
        Ok(cfg)
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None    => Ok(Self::default()),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.data_path, PathBuf::from("日田市ごみ分別早見表.xlsx"));
        assert_eq!(cfg.preview_rows, 5);
        assert_eq!(cfg.columns.item, "品目");
        assert_eq!(cfg.tally, TallyPolicy::Running);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "preview_rows": 10, "columns": { "item": "名称" } }"#).unwrap();

        let cfg = AppConfig::load(&path).unwrap();
        assert_eq!(cfg.preview_rows, 10);
        assert_eq!(cfg.columns.item, "名称");
        assert_eq!(cfg.columns.category, "分別区分");
        assert!(cfg.color);
    }

    #[test]
    fn test_tally_policy_names() {
        let cfg: AppConfig = serde_json::from_str(r#"{ "tally": "final_state" }"#).unwrap();
        assert_eq!(cfg.tally, TallyPolicy::FinalState);
    }

    #[test]
    fn test_roundtrip() {
        let cfg  = AppConfig { sheet: Some("早見表".into()), color: false, ..AppConfig::default() };
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        assert_eq!(serde_json::from_str::<AppConfig>(&json).unwrap(), cfg);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn test_bad_json_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(AppConfig::load_or_default(None).unwrap(), AppConfig::default());
    }
}
