#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use regionpulse_server::dataset;

#[test]
fn loads_fixture() {
    let ds = dataset::load_from_file("tests/fixtures/telemetry_sample.json").expect("must load");
    assert_eq!(ds.len(), 8);
    assert_eq!(ds.region_count(), 3);
}

#[test]
fn missing_file_is_fatal() {
    let err = dataset::load_from_file("tests/fixtures/absent.json").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "DATASET_UNAVAILABLE");
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn malformed_file_is_fatal() {
    // The config fixture is valid YAML but not a telemetry array.
    let err = dataset::load_from_file("tests/fixtures/regionpulse.yaml").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "DATASET_UNAVAILABLE");
    assert!(err.to_string().contains("regionpulse.yaml"));
}
