//! Error types for CSV profiling.
//!
//! Every failure carries the path of the file being profiled so the CLI can
//! report a single diagnostic line without extra context plumbing.

use std::path::Path;

use thiserror::Error;

use crate::profile::ConfigValidationError;

/// Main error type for CSVSurveyor operations.
#[derive(Debug, Error)]
pub enum SurveyError {
    /// Input file is missing or cannot be opened
    #[error("File not found or unreadable: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O operation failed after the file was opened
    #[error("I/O operation failed: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid UTF-8
    #[error("Encoding error: {context}")]
    Encoding { context: String },

    /// CSV structure could not be parsed
    #[error("CSV parsing failed: {context}")]
    Parse {
        context: String,
        #[source]
        source: csv::Error,
    },

    /// Configuration or validation error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Convenience type alias for Results with SurveyError
pub type Result<T> = std::result::Result<T, SurveyError>;

impl SurveyError {
    /// Creates a file-not-found error for a path that could not be opened.
    pub fn file_not_found(path: &Path, source: std::io::Error) -> Self {
        Self::FileNotFound {
            path: path.display().to_string(),
            source,
        }
    }

    /// Creates a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Classifies a `csv` reader error.
    ///
    /// UTF-8 decoding failures become [`SurveyError::Encoding`]; I/O failures
    /// surfaced by the reader become [`SurveyError::Io`]; everything else is a
    /// [`SurveyError::Parse`]. The record position is appended when known.
    pub fn from_csv(source_name: &str, error: csv::Error) -> Self {
        let location = error
            .position()
            .map(|pos| format!(" (line {}, record {})", pos.line(), pos.record()))
            .unwrap_or_default();

        match error.kind() {
            csv::ErrorKind::Utf8 { err, .. } => Self::Encoding {
                context: format!(
                    "{source_name}: field {} is not valid UTF-8{location}",
                    err.field().saturating_add(1)
                ),
            },
            csv::ErrorKind::Io(_) => Self::Io {
                context: format!("Failed to read {source_name}{location}"),
                source: std::io::Error::from(error),
            },
            _ => Self::Parse {
                context: format!("{source_name}{location}"),
                source: error,
            },
        }
    }
}

impl From<ConfigValidationError> for SurveyError {
    fn from(error: ConfigValidationError) -> Self {
        Self::configuration(error.to_string())
    }
}
