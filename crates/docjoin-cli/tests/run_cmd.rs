use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn joins_two_csv_files() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_fixture(&dir, "a.csv", "ID,Name\n1,Alice\n2,Bob\n");
    let b = write_fixture(&dir, "b.csv", "id,Score\n1,90\n3,70\n");

    Command::cargo_bin("docjoin")
        .unwrap()
        .args(["run", a.to_str().unwrap(), b.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Joined 1 row(s) on 'ID' ~ 'id' (inner join)"))
        .stdout(predicate::str::contains("ID,Name,id,Score"))
        .stdout(predicate::str::contains("1,Alice,1,90"));
}

#[test]
fn outer_mode_keeps_unmatched_rows() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_fixture(&dir, "a.csv", "id\n1\n");
    let b = write_fixture(&dir, "b.csv", "id\n2\n");

    Command::cargo_bin("docjoin")
        .unwrap()
        .args([
            "run",
            a.to_str().unwrap(),
            b.to_str().unwrap(),
            "--mode",
            "outer",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Joined 2 row(s)"));
}

#[test]
fn text_files_fall_into_text_mode() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_fixture(&dir, "a.txt", "Total: $100\nInvoice #42\n");
    let b = write_fixture(&dir, "b.txt", "invoice 42 paid\nOther\n");

    Command::cargo_bin("docjoin")
        .unwrap()
        .args(["run", a.to_str().unwrap(), b.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 common line(s):"))
        .stdout(predicate::str::contains("Invoice #42"));
}

#[test]
fn dissimilar_headers_report_no_matching_columns() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_fixture(&dir, "a.csv", "alpha,beta\n1,2\n");
    let b = write_fixture(&dir, "b.csv", "gamma,delta\n3,4\n");

    Command::cargo_bin("docjoin")
        .unwrap()
        .args(["run", a.to_str().unwrap(), b.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching columns found."))
        .stdout(predicate::str::contains("alpha, beta"))
        .stdout(predicate::str::contains("gamma, delta"));
}

#[test]
fn mixed_modes_report_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_fixture(&dir, "a.csv", "id,name\n1,x\n");
    let b = write_fixture(&dir, "b.txt", "free-form narrative\n");

    Command::cargo_bin("docjoin")
        .unwrap()
        .args(["run", a.to_str().unwrap(), b.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No extractable content (first: table, second: lines).",
        ));
}

#[test]
fn json_format_emits_outcome_tag() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_fixture(&dir, "a.csv", "id\n1\n");
    let b = write_fixture(&dir, "b.csv", "id\n1\n");

    Command::cargo_bin("docjoin")
        .unwrap()
        .args([
            "run",
            a.to_str().unwrap(),
            b.to_str().unwrap(),
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"outcome\": \"joined\""));
}

#[test]
fn csv_format_prints_body_only() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_fixture(&dir, "a.csv", "id,v\n1,x\n");
    let b = write_fixture(&dir, "b.csv", "id,w\n1,y\n");

    Command::cargo_bin("docjoin")
        .unwrap()
        .args([
            "run",
            a.to_str().unwrap(),
            b.to_str().unwrap(),
            "--format",
            "csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("id_x,v,id_y,w\n"))
        .stdout(predicate::str::contains("1,x,1,y"));
}

#[test]
fn unreadable_file_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_fixture(&dir, "a.csv", "id\n1\n");
    let missing = dir.path().join("nope.csv");

    Command::cargo_bin("docjoin")
        .unwrap()
        .args(["run", a.to_str().unwrap(), missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading"));
}

#[test]
fn unsupported_extension_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_fixture(&dir, "a.csv", "id\n1\n");
    let blob = dir.path().join("blob.bin");
    fs::write(&blob, [0xFFu8, 0xFE, 0x00, 0x80]).unwrap();

    Command::cargo_bin("docjoin")
        .unwrap()
        .args(["run", a.to_str().unwrap(), blob.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported input format"));
}

#[test]
fn format_override_forces_plaintext() {
    let dir = tempfile::tempdir().unwrap();
    // Both are .csv by name, but forced to plain text they enter text mode.
    let a = write_fixture(&dir, "a.csv", "shared line\n");
    let b = write_fixture(&dir, "b.csv", "shared line\n");

    Command::cargo_bin("docjoin")
        .unwrap()
        .args([
            "run",
            a.to_str().unwrap(),
            b.to_str().unwrap(),
            "--format-a",
            "plaintext",
            "--format-b",
            "plaintext",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 common line(s):"));
}
