//! Integration tests for the parking kiosk CLI.
//!
//! These tests run the actual binary and verify output against expected CSV files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Run the binary with the given input file and return stdout
fn run_kiosk(input_file: &str) -> String {
    let mut cmd = Command::cargo_bin("parking-kiosk").unwrap();
    let assert = cmd.arg(input_file).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

/// Normalize CSV for comparison (trim whitespace, drop blank lines)
fn normalize_csv(csv: &str) -> Vec<String> {
    csv.lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

#[test]
fn test_sample_collecting_below_fee() {
    let output = run_kiosk(&test_data_path("sample_collecting.csv"));
    let expected = fs::read_to_string(test_data_path("expected_collecting.csv")).unwrap();

    assert_eq!(normalize_csv(&output), normalize_csv(&expected));
}

#[test]
fn test_sample_exact_payment() {
    let output = run_kiosk(&test_data_path("sample_exact.csv"));
    let expected = fs::read_to_string(test_data_path("expected_exact.csv")).unwrap();

    assert_eq!(normalize_csv(&output), normalize_csv(&expected));
}

#[test]
fn test_sample_overpayment_breakdown() {
    let output = run_kiosk(&test_data_path("sample_overpay.csv"));
    let expected = fs::read_to_string(test_data_path("expected_overpay.csv")).unwrap();

    assert_eq!(normalize_csv(&output), normalize_csv(&expected));
}

#[test]
fn test_sample_mixed_invalid_rows_and_restart() {
    let output = run_kiosk(&test_data_path("sample_mixed.csv"));
    let expected = fs::read_to_string(test_data_path("expected_mixed.csv")).unwrap();

    assert_eq!(normalize_csv(&output), normalize_csv(&expected));
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("parking-kiosk").unwrap();
    cmd.arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("Error")));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("parking-kiosk").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file"));
}

#[test]
fn test_output_has_correct_header() {
    let output = run_kiosk(&test_data_path("sample_exact.csv"));
    assert!(output.starts_with("paid,fee,state,remaining,change,breakdown"));
}

#[test]
fn test_amounts_have_two_decimal_places() {
    let output = run_kiosk(&test_data_path("sample_overpay.csv"));

    for line in output.lines().skip(1) {
        let parts: Vec<&str> = line.split(',').collect();
        // paid, fee, remaining, change are dollar amounts
        for part in [parts[0], parts[1], parts[3], parts[4]] {
            let dot_pos = part.find('.').expect("amount has a decimal point");
            assert_eq!(
                part.len() - dot_pos - 1,
                2,
                "Expected 2 decimal places in: {}",
                part
            );
        }
    }
}
