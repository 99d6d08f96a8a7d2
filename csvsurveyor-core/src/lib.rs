//! Core profiling library for CSVSurveyor.
//!
//! CSVSurveyor scans a CSV export once, infers per-column types, nullability
//! and cardinality, and renders a plain-text report that points out candidate
//! keys and lookup tables. It is meant for a first look at an unfamiliar
//! dataset before a schema is designed.
//!
//! # Guarantees
//! - One sequential pass over at most `max_rows` rows
//! - Bounded memory: 5 samples and 1000 distinct values per column
//! - No network access and no files written

pub mod error;
pub mod logging;
pub mod profile;

// Re-export commonly used types
pub use error::{Result, SurveyError};
pub use logging::init_logging;
pub use profile::{
    ColumnProfile, DataTypeTag, ProfileRun, ProfilerConfig, analyze, generate_report, infer_type,
    write_report,
};
