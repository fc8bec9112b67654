//! Integration tests for the entrysum binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE: &str = "\
ENTRY SUMMARY
ABC-1234567-8 ABI/A 03/17/2025 02/28/2025
001Widgets, assorted
9903.01.25 0.00 10%1,000.00
";

fn write_sample(content: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file
}

#[test]
fn parse_outputs_json_with_file_hash() {
    let file = write_sample(SAMPLE.as_bytes());

    Command::cargo_bin("entrysum")
        .unwrap()
        .args(["parse", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"fileHash\""))
        .stdout(predicate::str::contains("9903.01.25"))
        .stdout(predicate::str::contains("\"entryNumber\": \"ABC-1234567-8\""));
}

#[test]
fn parse_text_format_reports_refund_total() {
    let file = write_sample(SAMPLE.as_bytes());

    Command::cargo_bin("entrysum")
        .unwrap()
        .args(["parse", file.path().to_str().unwrap(), "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry: ABC-1234567-8"))
        .stdout(predicate::str::contains("Total refund: $1,000.00"));
}

#[test]
fn parse_rejects_unrecognized_documents() {
    let file = write_sample(b"completely unrelated text\n");

    Command::cargo_bin("entrysum")
        .unwrap()
        .args(["parse", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CBP Form 7501"));
}

#[test]
fn parse_rejects_missing_input() {
    Command::cargo_bin("entrysum")
        .unwrap()
        .args(["parse", "/no/such/file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
