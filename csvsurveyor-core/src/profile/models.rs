//! Column profiling models.
//!
//! A [`ColumnProfile`] is the per-column aggregate built during the single
//! scan; a [`ProfileRun`] is the complete, read-only result handed to the
//! report renderer.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::ProfilerConfig;
use super::inference::infer_type;

/// Inferred primitive type of a single non-null value.
///
/// Variants are declared in label order so ordered sets render sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataTypeTag {
    /// `YYYY-MM-DD` calendar date
    Date,
    /// Floating-point number that is not an integer literal
    Decimal,
    /// Base-10 integer literal
    Integer,
    /// Fallback for anything else
    String,
    /// `HH:MM:SS` time of day
    Time,
}

impl DataTypeTag {
    /// Returns the report label for this tag.
    pub fn label(&self) -> &'static str {
        match self {
            DataTypeTag::Date => "date",
            DataTypeTag::Decimal => "decimal",
            DataTypeTag::Integer => "integer",
            DataTypeTag::String => "string",
            DataTypeTag::Time => "time",
        }
    }
}

impl fmt::Display for DataTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Distinct-count bucket used in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinality {
    /// Fewer than 10 distinct values
    VeryLow(usize),
    /// 10 to 99 distinct values
    Low(usize),
    /// 100 to 999 distinct values
    Medium(usize),
    /// 1000 or more distinct values (the tracking cap was reached)
    High,
}

impl Cardinality {
    /// Buckets a distinct-value count.
    pub fn from_count(count: usize) -> Self {
        match count {
            1000.. => Cardinality::High,
            100..=999 => Cardinality::Medium(count),
            10..=99 => Cardinality::Low(count),
            _ => Cardinality::VeryLow(count),
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cardinality::High => f.write_str("HIGH (1000+)"),
            Cardinality::Medium(count) => write!(f, "MEDIUM ({count})"),
            Cardinality::Low(count) => write!(f, "LOW ({count})"),
            Cardinality::VeryLow(count) => write!(f, "VERY LOW ({count})"),
        }
    }
}

/// Suggested schema role for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suggestion {
    /// Name looks like an identifier or foreign key
    Identifier,
    /// Few distinct values; candidate for a lookup table
    LookupTable,
    /// Every non-null value is distinct
    PrimaryKey,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Suggestion::Identifier => "FOREIGN KEY or IDENTIFIER",
            Suggestion::LookupTable => "LOOKUP/REFERENCE TABLE",
            Suggestion::PrimaryKey => "POTENTIAL PRIMARY KEY",
        })
    }
}

/// Substrings of a lowercased column name that mark it as an identifier.
const IDENTIFIER_MARKERS: [&str; 2] = ["id", "place_id"];

/// Returns true when a raw field value counts as missing.
///
/// Blank and whitespace-only values are null, as are the literal markers
/// `NA` and `NAN` in any letter case.
pub fn is_null_value(value: &str) -> bool {
    value.trim().is_empty()
        || value.eq_ignore_ascii_case("NA")
        || value.eq_ignore_ascii_case("NAN")
}

/// Aggregated observations for a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Header name
    pub name: String,
    /// First distinct non-null values, in first-seen order
    pub sample_values: Vec<String>,
    /// Distinct non-null values, capped by the run configuration
    pub distinct_values: BTreeSet<String>,
    /// Rows where the value was null, blank or an NA marker
    pub null_count: u64,
    /// Rows where the value contributed to samples, distinct values and types
    pub non_null_count: u64,
    /// Union of inferred type tags
    pub type_tags: BTreeSet<DataTypeTag>,
}

impl ColumnProfile {
    /// Creates an empty profile for the named column.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sample_values: Vec::new(),
            distinct_values: BTreeSet::new(),
            null_count: 0,
            non_null_count: 0,
            type_tags: BTreeSet::new(),
        }
    }

    /// Records one field value from a scanned row.
    ///
    /// Null values only bump the null count. Other values are stored as read;
    /// type inference sees the trimmed value.
    pub fn observe(&mut self, value: &str, config: &ProfilerConfig) {
        if is_null_value(value) {
            self.null_count = self.null_count.saturating_add(1);
            return;
        }
        self.non_null_count = self.non_null_count.saturating_add(1);

        if self.sample_values.len() < config.sample_limit
            && !self.sample_values.iter().any(|sample| sample == value)
        {
            self.sample_values.push(value.to_string());
        }

        if self.distinct_values.len() < config.distinct_cap
            && !self.distinct_values.contains(value)
        {
            self.distinct_values.insert(value.to_string());
            if self.distinct_values.len() == config.distinct_cap {
                tracing::trace!(
                    "Column '{}' reached the distinct value cap of {}",
                    self.name,
                    config.distinct_cap
                );
            }
        }

        self.type_tags.insert(infer_type(value));
    }

    /// Number of distinct values captured (never above the cap).
    pub fn distinct_count(&self) -> usize {
        self.distinct_values.len()
    }

    /// True when at least one null value was observed.
    pub fn is_nullable(&self) -> bool {
        self.null_count > 0
    }

    /// Null share of the scanned rows as a percentage.
    ///
    /// Returns 0.0 when no rows were scanned.
    #[allow(clippy::cast_precision_loss)]
    pub fn null_percentage(&self, total_rows: u64) -> f64 {
        if total_rows == 0 {
            return 0.0;
        }
        self.null_count as f64 / total_rows as f64 * 100.0
    }

    /// Cardinality bucket for the captured distinct values.
    pub fn cardinality(&self) -> Cardinality {
        Cardinality::from_count(self.distinct_count())
    }

    /// Sorted, comma-joined type labels, or `unknown` for an all-null column.
    pub fn data_types_label(&self) -> String {
        if self.type_tags.is_empty() {
            return "unknown".to_string();
        }
        self.type_tags
            .iter()
            .map(DataTypeTag::label)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Suggested schema role; the first matching rule wins.
    ///
    /// 1. Name contains `id` (case-insensitive): identifier.
    /// 2. Strictly between 1 and 100 distinct values: lookup table.
    /// 3. Distinct count equals the non-null row count: primary key.
    pub fn suggestion(&self, total_rows: u64) -> Option<Suggestion> {
        let lowered = self.name.to_lowercase();
        if IDENTIFIER_MARKERS
            .iter()
            .any(|marker| lowered.contains(marker))
        {
            return Some(Suggestion::Identifier);
        }

        let distinct = self.distinct_count();
        if distinct > 1 && distinct < 100 {
            return Some(Suggestion::LookupTable);
        }

        let non_null_rows = total_rows.saturating_sub(self.null_count);
        if u64::try_from(distinct).is_ok_and(|count| count == non_null_rows) {
            return Some(Suggestion::PrimaryKey);
        }

        None
    }
}

/// Result of profiling one CSV file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRun {
    /// Path of the profiled file as given by the caller
    pub source: String,
    /// One profile per header column, in header order
    pub columns: Vec<ColumnProfile>,
    /// Data rows scanned (bounded by the row cap)
    pub total_rows: u64,
}

impl ProfileRun {
    /// Header names in file order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    /// Looks up the first column with the given header name.
    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|column| column.name == name)
    }
}
