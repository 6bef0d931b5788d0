//! CLI integration tests for the ogc-relay command-line interface.
//!
//! These tests verify:
//! - Help text is displayed correctly
//! - Argument parsing works as expected
//! - Invalid inputs are rejected before any request is made
//!
//! Note: These tests do not require a running service - every failing case
//! here fails during input normalization.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command for the ogc-relay binary.
fn relay() -> Command {
    let mut cmd = Command::cargo_bin("ogc-relay").unwrap();
    cmd.env_remove("OGC_SERVICE_URL")
        .env_remove("OGC_USERNAME")
        .env_remove("OGC_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

// ─────────────────────────────────────────────────────────────────────────────
// Help and Version Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_help_lists_adapters() {
    relay()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("get-species-data"))
        .stdout(predicate::str::contains("snap-to-network"))
        .stdout(predicate::str::contains("helcom-annual-indicator"))
        .stdout(predicate::str::contains("helcom-assessment-b"))
        .stdout(predicate::str::contains("adapters"));
}

#[test]
fn test_version_displays() {
    relay()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ogc-relay"));
}

#[test]
fn test_snap_help_shows_underscore_flags() {
    relay()
        .args(["snap-to-network", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--coordinate_csv"))
        .stdout(predicate::str::contains("--coordinate_geojson"))
        .stdout(predicate::str::contains("--ogc_service_url"))
        .stdout(predicate::str::contains("--insecure"))
        .stdout(predicate::str::contains("--params"));
}

#[test]
fn test_helcom_help_shows_renamed_flag() {
    relay()
        .args(["helcom-annual-indicator", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--combined_chlorophylla_is_weighted"));
}

#[test]
fn test_output_is_required() {
    relay()
        .args(["get-species-data", "--species_name", "Salmo trutta"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Adapters listing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_adapters_listing() {
    relay()
        .arg("adapters")
        .assert()
        .success()
        .stdout(predicate::str::contains("/processes/annual-indicator/execution"))
        .stdout(predicate::str::contains("combined_Chlorophylla_IsWeighted"));
}

#[test]
fn test_adapters_json() {
    let output = relay().args(["adapters", "--json"]).output().unwrap();
    assert!(output.status.success());

    let adapters: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = adapters
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        [
            "get-species-data",
            "snap-to-network",
            "helcom-annual-indicator",
            "helcom-assessment-b"
        ]
    );
    assert_eq!(adapters[3]["output"], "passthrough(input_csv)");
}

// ─────────────────────────────────────────────────────────────────────────────
// Input failures
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_geometry_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.json");

    relay()
        .args([
            "snap-to-network",
            "--ogc_service_url",
            "http://127.0.0.1:1",
            "--coordinate_csv",
            "",
            "--coordinate_geojson",
            "",
            "--output",
        ])
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing geometry input"));

    assert!(!output.exists());
}

#[test]
fn test_malformed_coordinate_line_fails() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.json");

    relay()
        .args([
            "snap-to-network",
            "--ogc_service_url",
            "http://127.0.0.1:1",
            "--coordinate_csv",
            "1.0,2.0__cn__5.0",
            "--output",
        ])
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed coordinate line '5.0'"));

    assert!(!output.exists());
}

#[test]
fn test_invalid_boolean_fails() {
    let dir = TempDir::new().unwrap();

    relay()
        .args([
            "helcom-annual-indicator",
            "--combined_chlorophylla_is_weighted",
            "maybe",
            "--output",
        ])
        .arg(dir.path().join("out.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected boolean"));
}

#[test]
fn test_missing_input_csv_fails() {
    let dir = TempDir::new().unwrap();

    relay()
        .args(["helcom-assessment-b", "--output"])
        .arg(dir.path().join("out.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("input_csv"));
}

#[test]
fn test_unknown_params_file_key_fails() {
    let dir = TempDir::new().unwrap();
    let params = dir.path().join("params.toml");
    std::fs::write(&params, "species_name = \"Salmo trutta\"\n").unwrap();

    relay()
        .args(["snap-to-network", "--params"])
        .arg(&params)
        .arg("--output")
        .arg(dir.path().join("out.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown parameter 'species_name'"));
}

#[test]
fn test_unreachable_service_fails() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.json");

    relay()
        .args([
            "get-species-data",
            "--ogc_service_url",
            "http://127.0.0.1:1",
            "--timeout",
            "5",
            "--output",
        ])
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("tool failure"));

    assert!(!output.exists());
}

#[test]
fn test_failure_reported_once() {
    let dir = TempDir::new().unwrap();

    relay()
        .args([
            "get-species-data",
            "--ogc_service_url",
            "http://127.0.0.1:1",
            "--timeout",
            "5",
            "--output",
        ])
        .arg(dir.path().join("out.json"))
        .assert()
        .failure()
        .stderr(predicate::function(|stderr: &str| {
            stderr.matches("tool failure").count() == 1
        }))
        .stderr(predicate::str::contains("Error:").not());
}
