use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TAGGED: &str = "<fcel>NIK<nl>NIK : 1234567890123456<nl>Nama : BUDI SANTOSO<nl>Nama : BUDI SANTOSO<nl>Jenis Kelamin : L";

/// `ktp` with its config directory pointed at an empty temp dir.
fn ktp(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ktp").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path());
    cmd
}

#[test]
fn process_file_prints_card_and_writes_sibling() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("ktp_output.txt");
    fs::write(&input, TAGGED).unwrap();

    ktp(&dir)
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("BUDI SANTOSO"))
        .stdout(predicate::str::contains("LAKI-LAKI"))
        .stderr(predicate::str::contains("Missing required field: Alamat"));

    let sibling = dir.path().join("ktp_output_cleaned.json");
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(sibling).unwrap()).unwrap();
    assert_eq!(json["data"]["NIK"], "1234567890123456");
    assert_eq!(json["fields_extracted"], 3);
    assert_eq!(json["validation"]["is_valid"], false);
    assert_eq!(json["raw_text"], TAGGED);
}

#[test]
fn process_no_sibling_flag() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("scan.txt");
    fs::write(&input, TAGGED).unwrap();

    ktp(&dir)
        .args(["process", "--no-sibling"])
        .arg(&input)
        .assert()
        .success();

    assert!(!dir.path().join("scan_cleaned.json").exists());
}

#[test]
fn process_stdin_as_json() {
    let dir = TempDir::new().unwrap();

    let output = ktp(&dir)
        .args(["process", "--format", "json"])
        .write_stdin("Nama : SITI\nRT/RW : 1/2")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["data"]["Nama"], "SITI");
    assert_eq!(json["data"]["RT_RW"], "001/002");
    assert_eq!(json["document_type"], "ktp");
}

#[test]
fn process_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    ktp(&dir)
        .args(["process", "/definitely/not/here.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn batch_requires_input() {
    let dir = TempDir::new().unwrap();

    ktp(&dir).arg("batch").assert().code(1);
}

#[test]
fn batch_writes_reports_and_summary() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    fs::write(dir.path().join("a.txt"), TAGGED).unwrap();
    fs::write(dir.path().join("b.txt"), "Nama : ANI").unwrap();
    fs::write(dir.path().join("notes.md"), "ignored").unwrap();

    let pattern = dir.path().join("*").display().to_string();
    ktp(&dir)
        .args(["batch", &pattern, "--summary", "--output-dir"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Found 2 files"));

    assert!(out.join("a_cleaned.json").exists());
    assert!(out.join("b_cleaned.json").exists());

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    assert_eq!(summary.lines().count(), 3);
    assert!(summary.contains("1234567890123456"));
}

#[test]
fn config_init_set_get_roundtrip() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    let config = config.to_str().unwrap();

    ktp(&dir)
        .args(["--config", config, "config", "init"])
        .assert()
        .success();

    ktp(&dir)
        .args(["--config", config, "config", "set", "extraction.document_type", "sim"])
        .assert()
        .success();

    ktp(&dir)
        .args(["--config", config, "config", "get", "extraction.document_type"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sim\""));

    ktp(&dir)
        .args(["--config", config, "config", "set", "extraction.document_type", "passport"])
        .assert()
        .code(1);
}

#[test]
fn config_set_rejects_unusable_value() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    let config = config.to_str().unwrap();

    ktp(&dir)
        .args(["--config", config, "config", "init"])
        .assert()
        .success();

    ktp(&dir)
        .args(["--config", config, "config", "set", "output.sibling_suffix", ""])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("sibling_suffix must not be empty"));

    // The file on disk is untouched and still usable.
    ktp(&dir)
        .args(["--config", config, "config", "get", "output.sibling_suffix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_cleaned.json"));

    ktp(&dir)
        .args(["--config", config, "config", "set", "output.sibling_suffix", "_x.json"])
        .assert()
        .success();
}

#[test]
fn batch_continues_past_unwritable_report() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    fs::write(dir.path().join("a.txt"), TAGGED).unwrap();
    fs::write(dir.path().join("b.txt"), "Nama : ANI").unwrap();
    fs::create_dir_all(out.join("a_cleaned.json")).unwrap();

    let pattern = dir.path().join("*.txt").display().to_string();

    ktp(&dir)
        .args(["batch", &pattern, "--output-dir"])
        .arg(&out)
        .assert()
        .code(1);

    ktp(&dir)
        .args(["batch", &pattern, "--continue-on-error", "--summary", "--output-dir"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("1 failed"));

    assert!(out.join("b_cleaned.json").is_file());
    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    assert!(summary.contains("cannot write"));
}
