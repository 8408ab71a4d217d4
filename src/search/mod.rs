// ============================================================
// Layer 5 — Search
// ============================================================
// The only decision logic in the system:
//
//   matcher.rs  — two-tier literal item search over a Table
//   category.rs — fixed-priority category → style rule
//
// Both are pure functions over borrowed data; nothing here
// touches the file system or the terminal.

pub mod matcher;

pub mod category;
