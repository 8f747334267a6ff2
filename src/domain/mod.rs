// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust structs
// and traits that define the core concepts of the system.
//
// Rules for this layer:
//   - NO estimator/framework types allowed here
//   - NO file I/O or network calls
//   - NO ML-specific code
//   - Only plain Rust structs, enums, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no artifacts on disk needed)
//   - Easy to understand (no framework noise)
//   - Easy to swap implementations (just implement the trait)
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// One student's row of attributes and scores
pub mod record;

// The hard-coded column partition of the dataset
pub mod schema;

// The per-family evaluation report produced by training
pub mod report;

// Core abstractions (traits) that other layers implement
pub mod traits;
