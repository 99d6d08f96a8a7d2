//! Profiler configuration.
//!
//! Bounds the work and memory of a single profiling run: how many rows are
//! scanned, how many sample values are kept, and how many distinct values
//! are tracked per column.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of data rows scanned.
pub const DEFAULT_MAX_ROWS: usize = 10_000;

/// Default number of distinct sample values kept per column.
pub const DEFAULT_SAMPLE_LIMIT: usize = 5;

/// Default cap on distinct values tracked per column.
pub const DEFAULT_DISTINCT_CAP: usize = 1_000;

/// Profiling run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilerConfig {
    /// Maximum number of data rows to scan (header excluded)
    pub max_rows: usize,
    /// Maximum number of sample values recorded per column
    pub sample_limit: usize,
    /// Maximum number of distinct values tracked per column
    pub distinct_cap: usize,
}

/// Validation errors for profiler configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("max_rows must be at least 1")]
    ZeroMaxRows,
    #[error("sample_limit must be at least 1")]
    ZeroSampleLimit,
    #[error("distinct_cap must be at least 1")]
    ZeroDistinctCap,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            sample_limit: DEFAULT_SAMPLE_LIMIT,
            distinct_cap: DEFAULT_DISTINCT_CAP,
        }
    }
}

impl ProfilerConfig {
    /// Creates a new profiler config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the row cap.
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        if max_rows == 0 {
            tracing::warn!("max_rows 0 clamped to 1");
        }
        self.max_rows = max_rows.max(1);
        self
    }

    /// Builder method to set the per-column sample limit.
    pub fn with_sample_limit(mut self, sample_limit: usize) -> Self {
        if sample_limit == 0 {
            tracing::warn!("sample_limit 0 clamped to 1");
        }
        self.sample_limit = sample_limit.max(1);
        self
    }

    /// Builder method to set the per-column distinct value cap.
    pub fn with_distinct_cap(mut self, distinct_cap: usize) -> Self {
        if distinct_cap == 0 {
            tracing::warn!("distinct_cap 0 clamped to 1");
        }
        self.distinct_cap = distinct_cap.max(1);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns an error if any bound is zero.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.max_rows == 0 {
            return Err(ConfigValidationError::ZeroMaxRows);
        }
        if self.sample_limit == 0 {
            return Err(ConfigValidationError::ZeroSampleLimit);
        }
        if self.distinct_cap == 0 {
            return Err(ConfigValidationError::ZeroDistinctCap);
        }
        Ok(())
    }
}
