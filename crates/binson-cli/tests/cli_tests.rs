//! Integration tests for the `binson` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the encode, decode,
//! inspect, and stats subcommands through the actual binary, including
//! stdin/stdout piping, file I/O, hex mode, and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

/// Helper: path to the sample.json fixture.
fn sample_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.json")
}

/// Helper: a per-test scratch path under the system temp dir.
fn temp_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("binson-cli-test-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_file(&path);
    path
}

fn binson() -> Command {
    Command::cargo_bin("binson").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Encode subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn encode_stdin_to_raw_stdout() {
    binson()
        .arg("encode")
        .write_stdin(r#"{"co":"u"}"#)
        .assert()
        .success()
        .stdout(predicate::eq(
            &[0x40u8, 0x14, 0x02, b'c', b'o', 0x14, 0x01, b'u', 0x41][..],
        ));
}

#[test]
fn encode_hex_output() {
    binson()
        .args(["encode", "--hex"])
        .write_stdin(r#"{"i": 1}"#)
        .assert()
        .success()
        .stdout("40140169100141\n");
}

#[test]
fn encode_keys_are_sorted() {
    binson()
        .args(["encode", "--hex"])
        .write_stdin(r#"{"b": true, "a": false}"#)
        .assert()
        .success()
        .stdout("40140161451401624441\n");
}

#[test]
fn encode_file_to_file() {
    let out = temp_path("encode.bin");
    binson()
        .args(["encode", "-i", sample_json_path(), "-o"])
        .arg(&out)
        .assert()
        .success();

    let bytes = std::fs::read(&out).expect("output file must exist");
    assert_eq!(bytes.first(), Some(&0x40));
    assert_eq!(bytes.last(), Some(&0x41));
    let _ = std::fs::remove_file(&out);
}

#[test]
fn encode_invalid_json_fails() {
    binson()
        .arg("encode")
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to convert JSON to Binson"));
}

#[test]
fn encode_null_fails() {
    binson()
        .arg("encode")
        .write_stdin(r#"{"a": null}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("null"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Decode subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn decode_hex_to_pretty_json() {
    binson()
        .args(["decode", "--hex"])
        .write_stdin("401402636f14017541")
        .assert()
        .success()
        .stdout("{\n  \"co\": \"u\"\n}\n");
}

#[test]
fn decode_raw_stdin() {
    binson()
        .arg("decode")
        .write_stdin(vec![0x42u8, 0x10, 0x01, 0x18, 0x01, 0xff, 0x43])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"0xff\""));
}

#[test]
fn decode_rejects_trailing_data() {
    binson()
        .args(["decode", "--hex"])
        .write_stdin("404199")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode Binson"))
        .stderr(predicate::str::contains("trailing data"));
}

#[test]
fn decode_allow_trailing() {
    binson()
        .args(["decode", "--hex", "--allow-trailing"])
        .write_stdin("404199")
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn decode_rejects_unsorted_keys() {
    binson()
        .args(["decode", "--hex"])
        .write_stdin("40140162441401614441")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid field name"));
}

#[test]
fn decode_max_depth() {
    binson()
        .args(["decode", "--hex", "--max-depth", "1"])
        .write_stdin("42424343")
        .assert()
        .failure()
        .stderr(predicate::str::contains("depth"));
}

#[test]
fn decode_bad_hex_fails() {
    binson()
        .args(["decode", "--hex"])
        .write_stdin("4g41")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse hex input"));
}

#[test]
fn decode_missing_file_fails() {
    binson()
        .args(["decode", "-i", "/nonexistent/binson/input.bin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Inspect subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn inspect_lists_elements_with_offsets() {
    binson()
        .args(["inspect", "--hex"])
        .write_stdin("401402636f14017541")
        .assert()
        .success()
        .stdout(
            "00000000  begin\n\
             00000001    string1 \"co\"\n\
             00000005    string1 \"u\"\n\
             00000008  end\n",
        );
}

#[test]
fn inspect_rejects_unbalanced_input() {
    binson()
        .args(["inspect", "--hex"])
        .write_stdin("42441180004343")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unbalanced end-array"));
}

#[test]
fn inspect_shows_scalar_payloads() {
    binson()
        .args(["inspect", "--hex"])
        .write_stdin("424411800043")
        .assert()
        .success()
        .stdout(predicate::str::contains("00000001    true"))
        .stdout(predicate::str::contains("00000002    integer2 128"))
        .stdout(predicate::str::contains("00000005  end-array"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Stats subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn stats_from_file() {
    binson()
        .args(["stats", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON size:"))
        .stdout(predicate::str::contains("Binson size:"))
        .stdout(predicate::str::contains("Ratio:"));
}

#[test]
fn stats_exact_sizes() {
    binson()
        .arg("stats")
        .write_stdin(r#"{"i":1}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON size:    7 bytes"))
        .stdout(predicate::str::contains("Binson size:  7 bytes"))
        .stdout(predicate::str::contains("Ratio:        100.0%"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Roundtrip & global flags
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn roundtrip_encode_decode_pipeline() {
    let input = std::fs::read_to_string(sample_json_path()).expect("sample.json fixture must exist");

    let encoded = binson()
        .arg("encode")
        .write_stdin(input.clone())
        .output()
        .expect("encode should run");
    assert!(encoded.status.success(), "encode must succeed");

    let decoded = binson()
        .arg("decode")
        .write_stdin(encoded.stdout)
        .output()
        .expect("decode should run");
    assert!(decoded.status.success(), "decode must succeed");

    let original: serde_json::Value = serde_json::from_str(&input).unwrap();
    let roundtripped: serde_json::Value = serde_json::from_slice(&decoded.stdout).unwrap();
    assert_eq!(original, roundtripped);
}

#[test]
fn verbose_logs_decode_failures_to_stderr() {
    binson()
        .args(["-v", "decode", "--hex"])
        .env_remove("RUST_LOG")
        .write_stdin("99")
        .assert()
        .failure()
        .stderr(predicate::str::contains("binson decode failed"));
}

#[test]
fn verbose_logs_inspect_failures_to_stderr() {
    binson()
        .args(["-v", "inspect", "--hex"])
        .env_remove("RUST_LOG")
        .write_stdin("4043")
        .assert()
        .failure()
        .stderr(predicate::str::contains("binson decode failed"))
        .stderr(predicate::str::contains("unbalanced end-array"));
}

#[test]
fn no_subcommand_shows_usage() {
    binson()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
