//! Fixed column groupings for the entity relationship section of the report.
//!
//! The column names are the ones used by the eSMR (electronic Self-Monitoring
//! Report) exports; groups only list columns that exist in the scanned header.

/// A named set of columns that likely belong to the same entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityGroup {
    /// Section heading, printed with a trailing colon
    pub title: &'static str,
    /// Column names in display order
    pub columns: &'static [&'static str],
    /// Whether to list a preview of the distinct values for each column
    pub show_values: bool,
}

/// Number of distinct values previewed for groups with `show_values`.
pub const VALUE_PREVIEW_LIMIT: usize = 10;

/// Facility and monitoring location identifiers.
pub const FACILITY_LOCATION: EntityGroup = EntityGroup {
    title: "FACILITY/LOCATION IDENTIFIERS",
    columns: &[
        "facility_name",
        "facility_place_id",
        "location",
        "location_place_id",
        "receiving_water_body",
        "latitude",
        "longitude",
    ],
    show_values: false,
};

/// Per-sample measurement fields.
pub const MEASUREMENT_SAMPLE: EntityGroup = EntityGroup {
    title: "MEASUREMENT/SAMPLE IDENTIFIERS",
    columns: &[
        "parameter",
        "result",
        "units",
        "sampling_date",
        "sampling_time",
        "smr_document_id",
    ],
    show_values: false,
};

/// Low-cardinality columns that could become lookup tables.
pub const REFERENCE_LOOKUP: EntityGroup = EntityGroup {
    title: "REFERENCE/LOOKUP CANDIDATES",
    columns: &[
        "region",
        "location_place_type",
        "analytical_method",
        "qualifier",
        "qa_codes",
    ],
    show_values: true,
};

/// All groups in report order.
pub const ENTITY_GROUPS: [EntityGroup; 3] =
    [FACILITY_LOCATION, MEASUREMENT_SAMPLE, REFERENCE_LOOKUP];

impl EntityGroup {
    /// Columns of this group present in `header`, in group order.
    pub fn present_in(&self, header: &[&str]) -> Vec<&'static str> {
        self.columns
            .iter()
            .copied()
            .filter(|column| header.contains(column))
            .collect()
    }
}
