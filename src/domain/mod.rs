// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that define what the
// system talks about: waste items, the loaded table, quiz
// questions, and the ways loading can fail.
//
// Rules for this layer:
//   - NO spreadsheet library types here
//   - NO file I/O or terminal output
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// One classified waste item (a row of the lookup table)
pub mod item_record;

// The in-memory classification table and its column layout
pub mod table;

// A static multiple-choice quiz question
pub mod quiz_question;

// Typed errors for loading and quiz misuse
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
