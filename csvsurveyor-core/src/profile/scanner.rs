//! Single-pass CSV scanner.
//!
//! Reads the header row, then feeds every field of up to `max_rows` data rows
//! into the matching [`ColumnProfile`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::Result;
use crate::error::SurveyError;

use super::config::ProfilerConfig;
use super::models::{ColumnProfile, ProfileRun};

const UTF8_BOM: char = '\u{feff}';

/// Profiles a CSV file on disk.
///
/// # Errors
/// - [`SurveyError::FileNotFound`] if the file cannot be opened
/// - [`SurveyError::Encoding`] if the scanned content is not valid UTF-8
/// - [`SurveyError::Configuration`] if `config` fails validation
///
/// Rows with fewer fields than the header are not errors; the missing
/// fields count as empty.
pub fn analyze(path: impl AsRef<Path>, config: &ProfilerConfig) -> Result<ProfileRun> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SurveyError::file_not_found(path, e))?;
    analyze_reader(file, &path.display().to_string(), config)
}

/// Profiles a CSV file with the default sample and distinct limits.
///
/// # Errors
/// Same as [`analyze`].
pub fn analyze_file(path: impl AsRef<Path>, max_rows: usize) -> Result<ProfileRun> {
    analyze(path, &ProfilerConfig::new().with_max_rows(max_rows))
}

/// Profiles CSV data from any reader.
///
/// `source` is only used for the report header and error messages.
///
/// # Errors
/// Same as [`analyze`], minus the file-open failure.
pub fn analyze_reader<R: Read>(
    reader: R,
    source: &str,
    config: &ProfilerConfig,
) -> Result<ProfileRun> {
    config.validate()?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut columns: Vec<ColumnProfile> = reader
        .headers()
        .map_err(|e| SurveyError::from_csv(source, e))?
        .iter()
        .enumerate()
        .map(|(index, name)| {
            if index == 0 {
                ColumnProfile::new(name.trim_start_matches(UTF8_BOM))
            } else {
                ColumnProfile::new(name)
            }
        })
        .collect();

    tracing::info!(
        "Profiling {} ({} columns, up to {} rows)",
        source,
        columns.len(),
        config.max_rows
    );

    let mut total_rows: u64 = 0;

    for record in reader.records().take(config.max_rows) {
        let record = record.map_err(|e| SurveyError::from_csv(source, e))?;
        total_rows = total_rows.saturating_add(1);

        if record.len() < columns.len() {
            tracing::trace!(
                "Row {} has {} of {} fields; missing fields treated as empty",
                total_rows,
                record.len(),
                columns.len()
            );
        }

        for (index, column) in columns.iter_mut().enumerate() {
            column.observe(record.get(index).unwrap_or(""), config);
        }
    }

    if usize::try_from(total_rows).is_ok_and(|rows| rows == config.max_rows) {
        tracing::debug!(
            "Row cap of {} reached for {}; any further rows were not scanned",
            config.max_rows,
            source
        );
    }

    tracing::info!(
        "Profiled {} rows across {} columns",
        total_rows,
        columns.len()
    );

    Ok(ProfileRun {
        source: source.to_string(),
        columns,
        total_rows,
    })
}
