// ============================================================
// Layer 3 — Domain Errors
// ============================================================
// Two error families live here:
//
//   LoadError  — the dataset could not be produced. Exactly two
//                kinds: the file is missing, or it is there but
//                could not be read as a table.
//
//   QuizError  — a caller asked the quiz about a question or an
//                option that does not exist.
//
// LoadError is Clone because the dataset cache hands the same
// failed result to every later caller.
//
// Reference: thiserror crate documentation
//            Rust Book §9 (Error Handling)

use std::path::PathBuf;

use thiserror::Error;

/// Why the classification table is unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The spreadsheet file does not exist
    #[error("Excelファイル '{}' が見つかりません。", .path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be opened or parsed as a table
    #[error("ファイル読み込みエラー: {reason}")]
    Unreadable { path: PathBuf, reason: String },
}

impl LoadError {
    pub fn unreadable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Unreadable {
            path:   path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Misuse of a quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("question {index} does not exist (the quiz has {total} questions)")]
    NoSuchQuestion { index: usize, total: usize },

    #[error("'{option}' is not one of the choices for question {index}")]
    NoSuchOption { index: usize, option: String },

    #[error("invalid quiz question '{prompt}': {reason}")]
    InvalidQuestion { prompt: String, reason: String },
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_file() {
        let e = LoadError::NotFound { path: PathBuf::from("日田市ごみ分別早見表.xlsx") };
        assert_eq!(
            e.to_string(),
            "Excelファイル '日田市ごみ分別早見表.xlsx' が見つかりません。"
        );
    }

    #[test]
    fn test_unreadable_message_carries_reason() {
        let e = LoadError::unreadable("x.xlsx", "invalid zip header");
        assert_eq!(e.to_string(), "ファイル読み込みエラー: invalid zip header");
        assert!(matches!(&e, LoadError::Unreadable { path, .. } if *path == PathBuf::from("x.xlsx")));
    }
}
