//! CLI integration tests.
//!
//! These exercise the binary surface without a network: the `parse`
//! subcommand is fully offline, and the submission commands are driven only
//! far enough to fail on local input validation.

use assert_cmd::Command;
use predicates::prelude::*;

const REPORT_WITH_HIT: &str = "\
BLASTN 2.16.0+

Query= test
Length=50

> NR_046654.1 Homo sapiens RNA
 Score = 84.2 bits (92),  Expect = 2e-15
 Identities = 45/50 (90%), Gaps = 0/50 (0%)
 Strand=Plus/Plus
";

const REPORT_NO_HIT: &str = "Query= test\n\n***** No hits found *****\n";

fn blast_fetch() -> Command {
    Command::cargo_bin("blast-fetch").expect("binary builds")
}

#[test]
fn test_help_lists_subcommands() {
    blast_fetch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("submit"))
        .stdout(predicate::str::contains("fetch"))
        .stdout(predicate::str::contains("parse"));
}

#[test]
fn test_parse_report_with_alignment() {
    blast_fetch()
        .args(["parse", "-"])
        .write_stdin(REPORT_WITH_HIT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Alignment: 45/50"))
        .stdout(predicate::str::contains("Percent Identity: 90%"));
}

#[test]
fn test_parse_report_without_alignment() {
    blast_fetch()
        .args(["parse", "-"])
        .write_stdin(REPORT_NO_HIT)
        .assert()
        .success()
        .stdout(predicate::str::contains("No alignment found."));
}

#[test]
fn test_parse_json_output() {
    blast_fetch()
        .args(["parse", "-", "--format", "json"])
        .write_stdin(REPORT_WITH_HIT)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"matched_bases\": 45"))
        .stdout(predicate::str::contains("\"percent_identity\": 90"));
}

#[test]
fn test_parse_missing_file_fails() {
    blast_fetch()
        .args(["parse", "/no/such/report.txt"])
        .assert()
        .failure();
}

#[test]
fn test_run_rejects_empty_query() {
    // Fails on local input validation before any request is made
    blast_fetch()
        .args(["run", "-"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no sequence found"));
}

#[test]
fn test_missing_subcommand_shows_usage() {
    blast_fetch()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
