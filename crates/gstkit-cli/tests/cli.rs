//! Error-path integration tests.
//!
//! Every failure must reach the calling process as a JSON object on
//! stdout plus a non-zero exit code; these paths are deterministic
//! without Tesseract, Poppler, or a database present.

use assert_cmd::Command;
use predicates::prelude::*;

fn gstkit() -> Command {
    Command::cargo_bin("gstkit").unwrap()
}

#[test]
fn sales_missing_file_reports_json_error() {
    gstkit()
        .args(["sales", "/no/such/invoice.png"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(r#"{"error":"#))
        .stdout(predicate::str::contains("file not found"));
}

#[test]
fn purchase_missing_file_reports_json_error() {
    gstkit()
        .args(["purchase", "/no/such/bill.jpg"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(r#"{"error":"#));
}

#[test]
fn purchase_unreadable_image_reports_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bill.jpg");
    std::fs::write(&path, b"this is not an image").unwrap();

    gstkit()
        .args(["purchase", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(r#"{"error":"#));
}

#[test]
fn sales_pdf_without_rasterizer_is_reported() {
    let dir = tempfile::tempdir().unwrap();

    let config_path = dir.path().join("config.json");
    std::fs::write(
        &config_path,
        r#"{"pdf": {"binary": "definitely-not-a-real-rasterizer"}}"#,
    )
    .unwrap();

    let pdf_path = dir.path().join("invoice.pdf");
    std::fs::write(&pdf_path, b"%PDF-1.4").unwrap();

    gstkit()
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "sales",
            pdf_path.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("PDF support unavailable"));
}

#[test]
fn gstr1_malformed_stdin_reports_json_error() {
    let dir = tempfile::tempdir().unwrap();

    gstkit()
        .current_dir(dir.path())
        .env_remove("DATABASE_URL")
        .arg("gstr1")
        .write_stdin("definitely not json")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("malformed input"));
}

#[test]
fn gstr1_without_database_url_reports_json_error() {
    let dir = tempfile::tempdir().unwrap();

    gstkit()
        .current_dir(dir.path())
        .env_remove("DATABASE_URL")
        .arg("gstr1")
        .write_stdin(r#"{"start": "2024-04-01", "end": "2024-04-30"}"#)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("no database URL configured"));
}

#[test]
fn missing_arguments_are_a_usage_error() {
    // Argument parsing failures stay on clap's contract (usage text on
    // stderr, exit 2); only pipeline failures use the JSON object.
    gstkit().arg("sales").assert().failure().code(2);
}
