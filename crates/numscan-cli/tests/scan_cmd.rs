//! Integration tests for the numscan binary.

use assert_cmd::Command;
use predicates::prelude::*;

mod common;

use common::{encrypted_pdf_with_pages, pdf_with_pages, write_temp_pdf};

fn cmd() -> Command {
    Command::cargo_bin("numscan").unwrap()
}

/// Three pages: plain numbers, suffixed numbers, and a scaled statement.
fn report_pdf() -> tempfile::NamedTempFile {
    write_temp_pdf(&pdf_with_pages(&[
        &["Units sold 1,234.5", "Returns -40"],
        &["Revenue grew to 56.7M", "Staff 310"],
        &["Figures in thousands", "Assets 950"],
    ]))
}

fn stdout_of(assert: assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

// --- Text output ---

#[test]
fn text_lists_top_values() {
    let tmp = report_pdf();
    cmd()
        .arg(tmp.path())
        .args(["--top", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Top 2 scaled values ---"))
        .stdout(predicate::str::contains("1. 56,700,000.00 (page 2) [56.7M]"))
        .stdout(predicate::str::contains("2. 1,234.50 (page 1) [1,234.5]"));
}

#[test]
fn default_top_shows_all_when_fewer_than_ten() {
    let tmp = report_pdf();
    let out = stdout_of(cmd().arg(tmp.path()).assert().success());
    assert!(out.contains("--- Top 5 scaled values ---"));
    assert!(out.contains("3. 950.00 (page 3) [950]"));
    assert!(out.contains("5. -40.00 (page 1) [-40]"));
}

#[test]
fn raw_report_ignores_suffix() {
    let tmp = report_pdf();
    cmd()
        .arg(tmp.path())
        .args(["--top", "1", "--report", "raw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Top 1 raw values ---"))
        .stdout(predicate::str::contains("1. 1,234.50 (page 1) [1,234.5]"));
}

#[test]
fn both_reports_scaled_first() {
    let tmp = report_pdf();
    let out = stdout_of(
        cmd()
            .arg(tmp.path())
            .args(["--top", "1", "--report", "both"])
            .assert()
            .success(),
    );
    let scaled = out.find("scaled values").unwrap();
    let raw = out.find("raw values").unwrap();
    assert!(scaled < raw);
}

#[test]
fn page_scale_flag_multiplies_page() {
    let tmp = report_pdf();
    cmd()
        .arg(tmp.path())
        .args(["--top", "1", "--page-scale", "3=1000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. 950,000,000.00 (page 3) [950]"));
}

#[test]
fn detect_scale_reads_page_heading() {
    let tmp = report_pdf();
    cmd()
        .arg(tmp.path())
        .args(["--top", "3", "--detect-scale"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2. 950,000.00 (page 3) [950]"));
}

#[test]
fn magnitude_ranking_puts_large_negatives_first() {
    let tmp = write_temp_pdf(&pdf_with_pages(&[&["Total: -12.50", "fee 3"]]));
    cmd()
        .arg(tmp.path())
        .args(["--top", "1", "--rank-by", "magnitude"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. -12.50 (page 1) [-12.50]"));
}

#[test]
fn no_suffix_treats_letters_as_text() {
    let tmp = report_pdf();
    cmd()
        .arg(tmp.path())
        .args(["--top", "1", "--no-suffix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. 1,234.50 (page 1) [1,234.5]"));
}

#[test]
fn pages_flag_limits_scan() {
    let tmp = report_pdf();
    let out = stdout_of(
        cmd()
            .arg(tmp.path())
            .args(["--pages", "1"])
            .assert()
            .success(),
    );
    assert!(out.contains("--- Top 2 scaled values ---"));
    assert!(!out.contains("page 2"));
    assert!(!out.contains("page 3"));
}

#[test]
fn document_without_numbers() {
    let tmp = write_temp_pdf(&pdf_with_pages(&[&["no figures here"]]));
    cmd()
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Top 0 scaled values ---"))
        .stdout(predicate::str::contains("(no numbers found)"));
}

#[test]
fn blank_page_warns_on_stderr() {
    let tmp = write_temp_pdf(&pdf_with_pages(&[&[], &["42"]]));
    cmd()
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1. 42.00 (page 2) [42]"))
        .stderr(predicate::str::contains("EMPTY_PAGE"));
}

// --- JSON and CSV ---

#[test]
fn json_output_is_valid() {
    let tmp = report_pdf();
    let out = stdout_of(
        cmd()
            .arg(tmp.path())
            .args(["--top", "2", "--format", "json"])
            .assert()
            .success(),
    );
    let reports: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["report"], "scaled");
    assert_eq!(reports[0]["top"], 2);

    let results = reports[0]["results"].as_array().unwrap();
    assert_eq!(results[0]["raw_text"], "56.7M");
    assert_eq!(results[0]["value"], 56_700_000.0);
    assert_eq!(results[0]["base_value"], 56.7);
    assert_eq!(results[0]["page_number"], 2);
    assert_eq!(results[0]["suffix_applied"], "M");
    assert!(results[1]["suffix_applied"].is_null());
}

#[test]
fn json_both_reports() {
    let tmp = report_pdf();
    let out = stdout_of(
        cmd()
            .arg(tmp.path())
            .args(["--top", "1", "--format", "json", "--report", "both"])
            .assert()
            .success(),
    );
    let reports: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["report"], "scaled");
    assert_eq!(reports[1]["report"], "raw");
    assert_eq!(reports[1]["results"][0]["raw_text"], "1,234.5");
}

#[test]
fn csv_output_has_header_and_rows() {
    let tmp = report_pdf();
    let out = stdout_of(
        cmd()
            .arg(tmp.path())
            .args(["--top", "2", "--format", "csv"])
            .assert()
            .success(),
    );
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "report,rank,value,page,raw,suffix,scale");
    assert_eq!(lines[1], "scaled,1,56700000,2,56.7M,M,");
    assert_eq!(lines[2], "scaled,2,1234.5,1,\"1,234.5\",,");
    assert_eq!(lines.len(), 3);
}

// --- Errors ---

#[test]
fn zero_top_is_config_error() {
    let tmp = report_pdf();
    cmd()
        .arg(tmp.path())
        .args(["--top", "0"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Error: config error"));
}

#[test]
fn negative_top_checked_before_file_is_opened() {
    cmd()
        .args(["/nonexistent/report.pdf", "--top", "-3"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("config error"));
}

#[test]
fn nonpositive_page_scale_is_config_error() {
    let tmp = report_pdf();
    cmd()
        .arg(tmp.path())
        .args(["--page-scale", "1=-5"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn page_out_of_range_is_config_error() {
    let tmp = report_pdf();
    cmd()
        .arg(tmp.path())
        .args(["--pages", "9"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("exceeds document page count"));
}

#[test]
fn invalid_page_selection_is_config_error() {
    let tmp = report_pdf();
    cmd()
        .arg(tmp.path())
        .args(["--pages", "3-1"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn missing_file_is_input_error() {
    cmd()
        .arg("/nonexistent/report.pdf")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("file not found"))
        .stderr(predicate::str::contains("/nonexistent/report.pdf"));
}

#[test]
fn corrupt_file_is_input_error() {
    let tmp = write_temp_pdf(b"this is not a pdf");
    cmd()
        .arg(tmp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: input error"));
}

// --- Encrypted documents ---

#[test]
fn encrypted_file_without_password_is_input_error() {
    let tmp = write_temp_pdf(&encrypted_pdf_with_pages(&[&["Revenue 56.7M"]], "secret"));
    cmd()
        .arg(tmp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("requires a password"));
}

#[test]
fn password_flag_opens_encrypted_file() {
    let tmp = write_temp_pdf(&encrypted_pdf_with_pages(&[&["Revenue 56.7M"]], "secret"));
    cmd()
        .arg(tmp.path())
        .args(["--password", "secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. 56,700,000.00 (page 1) [56.7M]"));
}

#[test]
fn wrong_password_is_input_error() {
    let tmp = write_temp_pdf(&encrypted_pdf_with_pages(&[&["Revenue 56.7M"]], "secret"));
    cmd()
        .arg(tmp.path())
        .args(["--password", "guess"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("password is incorrect"));
}
