//! CSV column profiling.
//!
//! This module provides the single-pass profiler and its report:
//! - **Scanner**: reads a CSV file up to a row cap and aggregates per column
//! - **Inference**: classifies each value as integer, decimal, date, time or string
//! - **Models**: bounded per-column aggregates, cardinality and role suggestions
//! - **Report**: fixed-layout text report with entity groupings
//!
//! # Example
//! ```rust,no_run
//! use csvsurveyor_core::profile::{ProfilerConfig, analyze, generate_report};
//!
//! let run = analyze("sample-2025.csv", &ProfilerConfig::default())?;
//! print!("{}", generate_report(&run));
//! # Ok::<(), csvsurveyor_core::SurveyError>(())
//! ```

mod config;
mod groups;
mod inference;
mod models;
mod report;
mod scanner;

// Re-export public API
pub use config::{
    ConfigValidationError, DEFAULT_DISTINCT_CAP, DEFAULT_MAX_ROWS, DEFAULT_SAMPLE_LIMIT,
    ProfilerConfig,
};
pub use groups::{
    ENTITY_GROUPS, EntityGroup, FACILITY_LOCATION, MEASUREMENT_SAMPLE, REFERENCE_LOOKUP,
    VALUE_PREVIEW_LIMIT,
};
pub use inference::infer_type;
pub use models::{
    Cardinality, ColumnProfile, DataTypeTag, ProfileRun, Suggestion, is_null_value,
};
pub use report::{generate_report, list_literal, render_report, write_report};
pub use scanner::{analyze, analyze_file, analyze_reader};
