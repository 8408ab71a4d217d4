// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any one flow:
//
//   config.rs — AppConfig: data path, sheet, column names,
//               preview size, colour, quiz tally policy.
//               Loaded from an optional JSON file with
//               serde_json; every field has a default.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Optional JSON configuration file
pub mod config;
