// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. clap parses the
// arguments; each subcommand builds its use case, feeds it
// requests, and hands the responses to the Renderer.
//
//   search [-q Q]   → SearchUseCase  (+ interactive loop)
//   sample / guide  → SearchUseCase / static text
//   quiz            → QuizUseCase    (+ interactive loop)
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;
pub mod render;
pub mod session;

use std::io::{self, Cursor, Write};

use anyhow::Result;
use clap::Parser;
use commands::{Commands, GlobalArgs, QuizArgs, SearchArgs};

use crate::application::{quiz_use_case::QuizUseCase, search_use_case::SearchUseCase};
use crate::data::{loader::SpreadsheetLoader, quiz_bank};
use crate::infra::config::AppConfig;
use render::Renderer;

#[derive(Parser, Debug)]
#[command(
    name = "hita-gomi",
    version,
    about = "Hita City waste-sorting lookup and quiz."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let cfg      = self.global.resolve()?;
        let renderer = Renderer::new(cfg.color);

        tracing::debug!("Resolved config: {:?}", cfg);

        let stdout  = io::stdout();
        let mut out = stdout.lock();

        match self.command {
            Commands::Search(args) => run_search(&cfg, &renderer, args, &mut out),
            Commands::Sample       => {
                renderer.preview(&mut out, &search_use_case(&cfg).preview())?;
                Ok(())
            }
            Commands::Guide        => {
                renderer.guide(&mut out)?;
                Ok(())
            }
            Commands::Quiz(args)   => run_quiz(&cfg, &renderer, args, &mut out),
        }
    }
}

/// Build the search use case over the configured workbook,
/// sheet and column names. Nothing is read until first use.
fn search_use_case(cfg: &AppConfig) -> SearchUseCase<SpreadsheetLoader> {
    let loader = SpreadsheetLoader::new(&cfg.data_path)
        .with_sheet(cfg.sheet.clone())
        .with_columns(cfg.columns.clone());
    SearchUseCase::new(loader, cfg.preview_rows)
}

/// `search` subcommand: answer `-q` once and exit, or run the
/// interactive loop on stdin.
fn run_search(
    cfg:      &AppConfig,
    renderer: &Renderer,
    args:     SearchArgs,
    out:      &mut impl Write,
) -> Result<()> {
    let use_case = search_use_case(cfg);

    match args.query {
        // One request, one response
        Some(query) => {
            let status = use_case.status();
            renderer.load_status(out, &status)?;
            if status.is_ok() {
                renderer.response(out, &use_case.handle(&query))?;
            }
            Ok(())
        }
        None => session::search_loop(&use_case, renderer, io::stdin().lock(), out),
    }
}

/// `quiz` subcommand: optionally shuffle the built-in questions,
/// then play them from `--answers` or from stdin.
fn run_quiz(
    cfg:      &AppConfig,
    renderer: &Renderer,
    args:     QuizArgs,
    out:      &mut impl Write,
) -> Result<()> {
    let mut questions = quiz_bank::builtin_questions()?;
    if args.shuffle {
        quiz_bank::shuffle(&mut questions);
    }
    let mut quiz = QuizUseCase::new(questions, cfg.tally);

    if args.answers.is_empty() {
        session::quiz_loop(&mut quiz, renderer, io::stdin().lock(), out)?;
    } else {
        // Scripted answers are fed through the same loop as typed ones
        let scripted = Cursor::new(args.answers.join("\n") + "\n");
        session::quiz_loop(&mut quiz, renderer, scripted, out)?;
    }
    Ok(())
}
