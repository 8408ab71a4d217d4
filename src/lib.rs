// ============================================================
// hita-gomi — Hita City waste-sorting lookup and quiz
// ============================================================
// Layers, outermost first:
//
//   1. cli         — clap commands, interactive loops, rendering
//   2. application — SearchUseCase, QuizUseCase
//   3. domain      — ItemRecord, Table, QuizQuestion, errors, traits
//   4. data        — spreadsheet loader, preprocessor, cache, quiz bank
//   5. search      — two-tier matcher, category tagging rule
//   6. infra       — JSON config

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod search;
pub mod infra;
