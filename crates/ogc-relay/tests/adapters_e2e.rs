//! End-to-end adapter runs against a mock OGC API Processes server.
//!
//! The binary is driven through `assert_cmd` on the blocking pool while
//! wiremock serves the execution endpoints.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::assert::Assert;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{basic_auth, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the binary with `args` off the async runtime.
async fn run(args: Vec<String>) -> Assert {
    tokio::task::spawn_blocking(move || {
        Command::cargo_bin("ogc-relay")
            .unwrap()
            .env_remove("OGC_SERVICE_URL")
            .env_remove("OGC_USERNAME")
            .env_remove("OGC_PASSWORD")
            .env_remove("RUST_LOG")
            .args(args)
            .assert()
    })
    .await
    .unwrap()
}

fn args(items: &[&str], output: &Path) -> Vec<String> {
    let mut v: Vec<String> = items.iter().map(|s| s.to_string()).collect();
    v.push("--output".to_string());
    v.push(output.display().to_string());
    v
}

#[tokio::test]
async fn test_species_data_writes_json_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/processes/get-species-data/execution"))
        .and(body_json(json!({
            "inputs": {"species_name": "Salmo trutta", "basin_id": "481051"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "FeatureCollection",
            "features": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("species.json");
    run(args(
        &[
            "get-species-data",
            "--ogc_service_url",
            &server.uri(),
            "--species_name",
            "Salmo trutta",
        ],
        &output,
    ))
    .await
    .success();

    let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written, json!({"type": "FeatureCollection", "features": []}));
}

#[tokio::test]
async fn test_snap_to_network_csv_wins_over_geojson() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/processes/snap-to-network/execution"))
        .and(body_json(json!({
            "inputs": {
                "method": "distance",
                "distance": 500,
                "accumulation": 0.5,
                "coordinate_multipoint": {
                    "type": "MultiPoint",
                    "coordinates": [[-43.595833, -13.763611], [-44.885825, -17.25355]]
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "snapped_points",
            "value": {"type": "MultiPoint", "coordinates": [["-43.595833", "-13.763611"]]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("snapped.json");
    run(args(
        &[
            "snap-to-network",
            "--ogc_service_url",
            &server.uri(),
            "--coordinate_csv",
            "-13.763611,-43.595833__cn__-17.25355,-44.885825",
            "--coordinate_geojson",
            r#"{"type": "MultiPoint", "coordinates": [[0.0, 0.0]]}"#,
        ],
        &output,
    ))
    .await
    .success();

    let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["id"], "snapped_points");
}

#[tokio::test]
async fn test_snap_to_network_from_params_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({
            "inputs": {
                "method": "both",
                "distance": 250,
                "accumulation": 0.5,
                "coordinate_multipoint": {
                    "type": "MultiPoint",
                    "coordinates": [[-17.25355, -44.885825]]
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "snapped_points"})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let params = dir.path().join("params.json");
    fs::write(
        &params,
        r#"{
            "method": "both",
            "distance": 250,
            "coordinate_geojson": {"type": "MultiPoint", "coordinates": [[-17.25355, -44.885825]]}
        }"#,
    )
    .unwrap();

    let output = dir.path().join("snapped.json");
    run(args(
        &[
            "snap-to-network",
            "--ogc_service_url",
            &server.uri(),
            "--params",
            &params.display().to_string(),
        ],
        &output,
    ))
    .await
    .success();

    assert!(output.exists());
}

#[tokio::test]
async fn test_snap_to_network_forwards_geojson_as_is() {
    let document = json!({
        "type": "MultiPoint",
        "bbox": [-18.0, -45.0, -17.0, -44.0],
        "coordinates": [[-17.25355, -44.885825, 12.0]]
    });

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/processes/snap-to-network/execution"))
        .and(body_json(json!({
            "inputs": {
                "method": "distance",
                "distance": 500,
                "accumulation": 0.5,
                "coordinate_multipoint": document.clone()
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "snapped_points"})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("snapped.json");
    run(args(
        &[
            "snap-to-network",
            "--ogc_service_url",
            &server.uri(),
            "--coordinate_geojson",
            &document.to_string(),
        ],
        &output,
    ))
    .await
    .success();
}

#[tokio::test]
async fn test_missing_geometry_issues_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("snapped.json");
    run(args(
        &["snap-to-network", "--ogc_service_url", &server.uri()],
        &output,
    ))
    .await
    .failure();

    assert!(!output.exists());
}

#[tokio::test]
async fn test_semantic_failure_exits_non_zero_without_output() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": "InvalidParameterValue"})),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("species.json");
    run(args(
        &["get-species-data", "--ogc_service_url", &server.uri()],
        &output,
    ))
    .await
    .failure()
    .stderr(predicate::str::contains("InvalidParameterValue"));

    assert!(!output.exists());
}

#[tokio::test]
async fn test_transport_failure_exits_non_zero_without_output() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("ok"))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("indicator.csv");
    run(args(
        &["helcom-annual-indicator", "--ogc_service_url", &server.uri()],
        &output,
    ))
    .await
    .failure()
    .stderr(predicate::str::contains("503"));

    assert!(!output.exists());
}

#[tokio::test]
async fn test_annual_indicator_writes_text_with_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/processes/annual-indicator/execution"))
        .and(basic_auth("helcom", "s3cret"))
        .and(body_json(json!({
            "inputs": {"assessmentPeriod": "2016-2021", "combined_Chlorophylla_IsWeighted": true}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("Indicator;Value\nChl-a;0.82\n"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("indicator.csv");
    run(args(
        &[
            "helcom-annual-indicator",
            "--ogc_service_url",
            &server.uri(),
            "--assessment_period",
            "2016-2021",
            "--username",
            "helcom",
            "--password",
            "s3cret",
        ],
        &output,
    ))
    .await
    .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "Indicator;Value\nChl-a;0.82\n");
}

#[tokio::test]
async fn test_assessment_passes_input_through() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("annual.csv");
    let original = "Indicator;Period;Value\r\nChl-a;2011-2016;0.82\n";
    fs::write(&input, original).unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/processes/assessment-b/execution"))
        .and(body_json(json!({
            "inputs": {"assessmentPeriod": "2011-2016", "assessment_indicators_csv": original}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "elsewhere"})))
        .expect(1)
        .mount(&server)
        .await;

    let output = dir.path().join("assessment.csv");
    run(args(
        &[
            "helcom-assessment-b",
            "--ogc_service_url",
            &server.uri(),
            "--input_csv",
            &input.display().to_string(),
        ],
        &output,
    ))
    .await
    .success();

    assert_eq!(fs::read(&output).unwrap(), original.as_bytes());
}

#[tokio::test]
async fn test_assessment_passes_non_utf8_input_through() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("annual.csv");
    let original = b"Station;Value\nK\xf8ge Bugt;0.82\n";
    fs::write(&input, original).unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/processes/assessment-b/execution"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "elsewhere"})))
        .expect(1)
        .mount(&server)
        .await;

    let output = dir.path().join("assessment.csv");
    run(args(
        &[
            "helcom-assessment-b",
            "--ogc_service_url",
            &server.uri(),
            "--input_csv",
            &input.display().to_string(),
        ],
        &output,
    ))
    .await
    .success();

    assert_eq!(fs::read(&output).unwrap(), original);
}
