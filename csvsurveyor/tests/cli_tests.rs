//! End-to-end tests for the csvsurveyor binary.

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file.flush().unwrap();
    file
}

fn csvsurveyor() -> Command {
    Command::cargo_bin("csvsurveyor").expect("binary should be built")
}

#[test]
fn test_report_for_small_file() {
    let file = csv_file("id,status\n1,active\n2,active\n3,\n");

    csvsurveyor()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("eSMR CSV SCHEMA ANALYSIS"))
        .stdout(predicate::str::contains("Rows analyzed: 3"))
        .stdout(predicate::str::contains("Columns: 2"))
        .stdout(predicate::str::contains(
            "Column: status\n  Data Type(s): string\n  Nullable: True (1/3 = 33.3% null)\n  Cardinality: VERY LOW (1)\n  Sample Values: ['active']\n\n",
        ))
        .stdout(predicate::str::contains("ENTITY RELATIONSHIP ANALYSIS"));
}

#[test]
fn test_max_rows_flag() {
    let file = csv_file("v\n1\n2\n3\n4\n5\n");

    csvsurveyor()
        .args(["--max-rows", "2"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows analyzed: 2"))
        .stdout(predicate::str::contains("Sample Values: ['1', '2']"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let file = csv_file("a\n1\n");

    let output = csvsurveyor()
        .arg("-vv")
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with(&"=".repeat(100)));
    assert!(!stdout.contains("Profiling"));
}

#[test]
fn test_missing_file_fails() {
    csvsurveyor()
        .arg("/no/such/dir/missing.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.csv"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_default_path_missing_fails() {
    let dir = tempfile::tempdir().unwrap();

    csvsurveyor()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("sample-2025.csv"));
}

#[test]
fn test_default_path_is_used() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("sample-2025.csv"), "region\nR1\nR2\n").unwrap();

    csvsurveyor()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("File: sample-2025.csv"))
        .stdout(predicate::str::contains(
            "REFERENCE/LOOKUP CANDIDATES:\n  region: 2 unique values - ['R1', 'R2']",
        ));
}

#[test]
fn test_invalid_utf8_fails() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"name\n\xff\xfe\xfd\n").unwrap();
    file.flush().unwrap();

    csvsurveyor()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("UTF-8"));
}

#[test]
fn test_zero_max_rows_rejected() {
    let file = csv_file("a\n1\n");

    csvsurveyor()
        .args(["--max-rows", "0"])
        .arg(file.path())
        .assert()
        .failure();
}
