//! Plain-text report rendering.
//!
//! The layout is fixed: a banner, one block per column in header order, then
//! the entity relationship section built from [`ENTITY_GROUPS`].

use std::fmt::{self, Write as _};

use super::groups::{ENTITY_GROUPS, EntityGroup, VALUE_PREVIEW_LIMIT};
use super::models::{ColumnProfile, ProfileRun};

const BANNER_WIDTH: usize = 100;
const REPORT_TITLE: &str = "eSMR CSV SCHEMA ANALYSIS";
const RELATIONSHIP_TITLE: &str = "ENTITY RELATIONSHIP ANALYSIS";

/// Renders the full report for a profiling run.
pub fn generate_report(run: &ProfileRun) -> String {
    let mut report = String::new();
    // Writing into a String cannot fail.
    let _ = render_report(run, &mut report);
    report
}

/// Writes the full report to an I/O sink such as stdout.
///
/// # Errors
/// Propagates any write failure from `writer`.
pub fn write_report<W: std::io::Write>(run: &ProfileRun, writer: &mut W) -> std::io::Result<()> {
    writer.write_all(generate_report(run).as_bytes())?;
    writer.flush()
}

/// Renders the report into any formatter sink.
///
/// # Errors
/// Propagates formatter errors from `out`.
pub fn render_report(run: &ProfileRun, out: &mut impl fmt::Write) -> fmt::Result {
    let banner = "=".repeat(BANNER_WIDTH);

    writeln!(out, "{banner}")?;
    writeln!(out, "{REPORT_TITLE}")?;
    writeln!(out, "File: {}", run.source)?;
    writeln!(out, "Rows analyzed: {}", run.total_rows)?;
    writeln!(out, "Columns: {}", run.columns.len())?;
    writeln!(out, "{banner}")?;
    writeln!(out)?;

    for column in &run.columns {
        render_column(column, run.total_rows, out)?;
    }

    writeln!(out, "{banner}")?;
    writeln!(out, "{RELATIONSHIP_TITLE}")?;
    writeln!(out, "{banner}")?;
    writeln!(out)?;

    let header: Vec<&str> = run.column_names().collect();
    for group in &ENTITY_GROUPS {
        render_group(group, run, &header, out)?;
    }

    Ok(())
}

fn render_column(
    column: &ColumnProfile,
    total_rows: u64,
    out: &mut impl fmt::Write,
) -> fmt::Result {
    writeln!(out, "Column: {}", column.name)?;
    writeln!(out, "  Data Type(s): {}", column.data_types_label())?;
    writeln!(
        out,
        "  Nullable: {} ({}/{} = {:.1}% null)",
        python_bool(column.is_nullable()),
        column.null_count,
        total_rows,
        column.null_percentage(total_rows)
    )?;
    writeln!(out, "  Cardinality: {}", column.cardinality())?;
    writeln!(
        out,
        "  Sample Values: {}",
        list_literal(column.sample_values.iter().map(String::as_str))
    )?;
    if let Some(suggestion) = column.suggestion(total_rows) {
        writeln!(out, "  Suggestion: {suggestion}")?;
    }
    writeln!(out)
}

fn render_group(
    group: &EntityGroup,
    run: &ProfileRun,
    header: &[&str],
    out: &mut impl fmt::Write,
) -> fmt::Result {
    writeln!(out, "{}:", group.title)?;
    for name in group.present_in(header) {
        let Some(column) = run.column(name) else {
            continue;
        };
        if group.show_values {
            let preview = column
                .distinct_values
                .iter()
                .take(VALUE_PREVIEW_LIMIT)
                .map(String::as_str);
            writeln!(
                out,
                "  {name}: {} unique values - {}",
                column.distinct_count(),
                list_literal(preview)
            )?;
        } else {
            writeln!(out, "  {name}: {} unique values", column.distinct_count())?;
        }
    }
    writeln!(out)
}

fn python_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Renders values as a bracketed, quoted list: `['a', 'b']`.
///
/// Values are single-quoted unless they contain a single quote and no double
/// quote. Backslashes, the active quote and non-printable characters are
/// escaped as `\xhh`, `\uhhhh` or `\Uhhhhhhhh`.
pub fn list_literal<'a>(values: impl IntoIterator<Item = &'a str>) -> String {
    let items: Vec<String> = values.into_iter().map(quote_value).collect();
    format!("[{}]", items.join(", "))
}

fn quote_value(value: &str) -> String {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(value.len().saturating_add(2));
    quoted.push(quote);
    for ch in value.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c == quote => {
                quoted.push('\\');
                quoted.push(c);
            }
            c if !is_printable(c) => escape_char(&mut quoted, c),
            c => quoted.push(c),
        }
    }
    quoted.push(quote);
    quoted
}

fn escape_char(out: &mut String, ch: char) {
    let code = u32::from(ch);
    let _ = match code {
        0..=0xff => write!(out, "\\x{code:02x}"),
        0x100..=0xffff => write!(out, "\\u{code:04x}"),
        _ => write!(out, "\\U{code:08x}"),
    };
}

/// False for control, separator (other than ASCII space), format,
/// private-use and noncharacter code points.
fn is_printable(ch: char) -> bool {
    if ch == ' ' {
        return true;
    }
    if ch.is_control() || ch.is_whitespace() {
        return false;
    }
    !matches!(
        u32::from(ch),
        0xad
            | 0x600..=0x605
            | 0x61c
            | 0x6dd
            | 0x70f
            | 0x890..=0x891
            | 0x8e2
            | 0x180e
            | 0x200b..=0x200f
            | 0x2028..=0x202e
            | 0x2060..=0x206f
            | 0xe000..=0xf8ff
            | 0xfdd0..=0xfdef
            | 0xfeff
            | 0xfff9..=0xfffb
            | 0xfffe..=0xffff
            | 0x110bd
            | 0x110cd
            | 0x13430..=0x1343f
            | 0x1bca0..=0x1bca3
            | 0x1d173..=0x1d17a
            | 0xe0001
            | 0xe0020..=0xe007f
            | 0xf0000..
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ProfilerConfig, analyze_reader};

    fn report_for(data: &str) -> String {
        let run = analyze_reader(data.as_bytes(), "test.csv", &ProfilerConfig::default()).unwrap();
        generate_report(&run)
    }

    #[test]
    fn test_banner() {
        let report = report_for("id,status\n1,active\n");
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "=".repeat(100));
        assert_eq!(lines[1], "eSMR CSV SCHEMA ANALYSIS");
        assert_eq!(lines[2], "File: test.csv");
        assert_eq!(lines[3], "Rows analyzed: 1");
        assert_eq!(lines[4], "Columns: 2");
        assert_eq!(lines[5], "=".repeat(100));
        assert_eq!(lines[6], "");
    }

    #[test]
    fn test_column_blocks() {
        let report = report_for("id,status\n1,active\n2,active\n3,\n");

        let expected = "\
Column: id
  Data Type(s): integer
  Nullable: False (0/3 = 0.0% null)
  Cardinality: VERY LOW (3)
  Sample Values: ['1', '2', '3']
  Suggestion: FOREIGN KEY or IDENTIFIER

Column: status
  Data Type(s): string
  Nullable: True (1/3 = 33.3% null)
  Cardinality: VERY LOW (1)
  Sample Values: ['active']

";
        assert!(report.contains(expected), "report was:\n{report}");
    }

    #[test]
    fn test_relationship_section() {
        let report = report_for(
            "facility_name,region,parameter,qualifier\n\
             Plant A,1,pH,=\n\
             Plant B,2,pH,<\n\
             Plant A,1,Flow,\n",
        );

        let banner = "=".repeat(100);
        let expected = format!(
            "{banner}\nENTITY RELATIONSHIP ANALYSIS\n{banner}\n\n\
FACILITY/LOCATION IDENTIFIERS:\n  facility_name: 2 unique values\n\n\
MEASUREMENT/SAMPLE IDENTIFIERS:\n  parameter: 2 unique values\n\n\
REFERENCE/LOOKUP CANDIDATES:\n  region: 2 unique values - ['1', '2']\n  qualifier: 2 unique values - ['<', '=']\n\n"
        );
        assert!(report.ends_with(&expected), "report was:\n{report}");
    }

    #[test]
    fn test_empty_groups_still_have_headings() {
        let report = report_for("a\n1\n");

        assert!(report.contains("FACILITY/LOCATION IDENTIFIERS:\n\n"));
        assert!(report.contains("MEASUREMENT/SAMPLE IDENTIFIERS:\n\n"));
        assert!(report.ends_with("REFERENCE/LOOKUP CANDIDATES:\n\n"));
    }

    #[test]
    fn test_reference_preview_limited_to_ten() {
        let mut data = String::from("region\n");
        for i in 0..15 {
            data.push_str(&format!("R{i:02}\n"));
        }
        let report = report_for(&data);

        let line = report
            .lines()
            .find(|line| line.starts_with("  region: "))
            .unwrap();
        assert!(line.starts_with("  region: 15 unique values - ['R00', "));
        assert!(line.ends_with("'R09']"));
    }

    #[test]
    fn test_zero_rows_reports_zero_percent() {
        let report = report_for("notes\n");

        assert!(report.contains("  Nullable: False (0/0 = 0.0% null)"));
        assert!(report.contains("  Data Type(s): unknown"));
        assert!(report.contains("  Sample Values: []"));
        // 0 distinct == 0 non-null rows
        assert!(report.contains("  Suggestion: POTENTIAL PRIMARY KEY"));
    }

    #[test]
    fn test_empty_file_report() {
        let report = report_for("");

        assert!(report.contains("Rows analyzed: 0\nColumns: 0\n"));
        assert!(!report.contains("Column: "));
    }

    #[test]
    fn test_list_literal_quoting() {
        assert_eq!(list_literal(Vec::<&str>::new()), "[]");
        assert_eq!(list_literal(["a", "b c"]), "['a', 'b c']");
        assert_eq!(list_literal(["it's"]), "[\"it's\"]");
        assert_eq!(list_literal(["say \"it's\""]), "['say \"it\\'s\"']");
        assert_eq!(list_literal(["back\\slash"]), "['back\\\\slash']");
        assert_eq!(list_literal(["two\nlines"]), "['two\\nlines']");
    }

    #[test]
    fn test_list_literal_escapes_non_printable() {
        assert_eq!(list_literal(["a\u{1}b"]), "['a\\x01b']");
        assert_eq!(list_literal(["nbsp\u{a0}"]), "['nbsp\\xa0']");
        assert_eq!(list_literal(["zero\u{200b}width"]), "['zero\\u200bwidth']");
        assert_eq!(list_literal(["line\u{2028}sep"]), "['line\\u2028sep']");
        assert_eq!(list_literal(["\u{feff}bom"]), "['\\ufeffbom']");
        assert_eq!(list_literal(["tag\u{e0041}"]), "['tag\\U000e0041']");
        // Printable non-ASCII passes through
        assert_eq!(list_literal(["Café ü 水"]), "['Café ü 水']");
    }

    #[test]
    fn test_write_report_matches_generate() {
        let run = analyze_reader("a\n1\n".as_bytes(), "w.csv", &ProfilerConfig::default()).unwrap();
        let mut buffer: Vec<u8> = Vec::new();
        write_report(&run, &mut buffer).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), generate_report(&run));
    }
}
