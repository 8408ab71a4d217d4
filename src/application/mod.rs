// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Each use case turns one user interaction into a response
// value. Rendering is Layer 1's job; file access is Layer 4's.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Item lookup over the cached classification table
pub mod search_use_case;

// The sorting quiz: answer checking and score tally
pub mod quiz_use_case;
