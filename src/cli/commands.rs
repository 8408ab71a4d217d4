// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Four subcommands:
//   search — look up an item (one-shot or interactive)
//   sample — show the first rows of the table
//   guide  — show the usage guide
//   quiz   — play the sorting quiz
//
// Global flags override the matching AppConfig fields.
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::infra::config::AppConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the sorting table for an item
    Search(SearchArgs),

    /// Show the first rows of the sorting table
    Sample,

    /// Show how to use the search
    Guide,

    /// Play the waste-sorting quiz
    Quiz(QuizArgs),
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Item name to look up; omit to search interactively
    #[arg(short, long)]
    pub query: Option<String>,
}

#[derive(Args, Debug)]
pub struct QuizArgs {
    /// Ask the questions in random order
    #[arg(long)]
    pub shuffle: bool,

    /// Answer non-interactively, e.g. `--answers 1,3,2,3`
    /// (option numbers or option text, in question order)
    #[arg(long, value_delimiter = ',')]
    pub answers: Vec<String>,
}

/// Flags shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Spreadsheet to read instead of the configured one
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Worksheet name (defaults to the first sheet)
    #[arg(long, global = true)]
    pub sheet: Option<String>,

    /// Disable coloured category labels
    #[arg(long, global = true)]
    pub no_color: bool,
}

impl GlobalArgs {
    /// Load the config file (if any) and apply flag overrides.
    pub fn resolve(&self) -> anyhow::Result<AppConfig> {
        let mut cfg = AppConfig::load_or_default(self.config.as_deref())?;

        if let Some(data) = &self.data {
            cfg.data_path = data.clone();
        }
        if self.sheet.is_some() {
            cfg.sheet = self.sheet.clone();
        }
        if self.no_color {
            cfg.color = false;
        }
        Ok(cfg)
    }
}
