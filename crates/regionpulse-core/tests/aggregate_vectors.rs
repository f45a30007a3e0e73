//! Aggregation behaviour against the sample telemetry vector.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use regionpulse_core::{aggregate, Dataset, TelemetryRecord, TelemetryRequest};
use serde_json::json;

fn load() -> Dataset {
    let s = fs::read_to_string("tests/vectors/telemetry_sample.json").unwrap();
    Dataset::from_json_str(&s).expect("sample vector must load")
}

fn request(regions: &[&str], threshold_ms: i64) -> TelemetryRequest {
    TelemetryRequest {
        regions: regions.iter().map(|r| r.to_string()).collect(),
        threshold_ms: threshold_ms as f64,
    }
}

fn decimals(v: f64) -> usize {
    let s = v.to_string();
    s.split_once('.').map(|(_, frac)| frac.len()).unwrap_or(0)
}

#[test]
fn us_east_reference_scenario() {
    let ds = load();
    let report = aggregate(&ds, &request(&["us-east"], 250));

    let body = serde_json::to_value(&report).unwrap();
    assert_eq!(
        body,
        json!({
            "us-east": {
                "avg_latency": 300.0,
                "p95_latency": 480.0,
                "avg_uptime": 98.4,
                "breaches": 2
            }
        })
    );
}

#[test]
fn unmatched_and_empty_requests_yield_empty_object() {
    let ds = load();
    let report = aggregate(&ds, &request(&["eu-west"], 0));
    assert!(report.is_empty());
    assert_eq!(serde_json::to_string(&report).unwrap(), "{}");

    let report = aggregate(&ds, &request(&[], 100));
    assert_eq!(serde_json::to_string(&report).unwrap(), "{}");
}

#[test]
fn region_match_is_exact_and_case_sensitive() {
    let ds = load();
    let report = aggregate(&ds, &request(&["US-EAST", "us-east ", "apac"], 0));
    assert_eq!(report.len(), 1);
    assert!(report.contains("apac"));
}

#[test]
fn keys_follow_request_order_and_duplicates_collapse() {
    let ds = load();
    let report = aggregate(&ds, &request(&["emea", "eu-west", "us-east", "emea", "apac"], 150));

    let keys: Vec<&str> = report.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["emea", "us-east", "apac"]);

    let s = serde_json::to_string(&report).unwrap();
    assert!(s.starts_with(r#"{"emea":"#));
    assert_eq!(s.matches("\"emea\"").count(), 1);
}

#[test]
fn breaches_count_strictly_above_threshold() {
    let ds = load();
    for (threshold, expected) in [(0, 5), (99, 5), (100, 4), (250, 2), (499, 1), (500, 0), (10_000, 0)] {
        let report = aggregate(&ds, &request(&["us-east"], threshold));
        assert_eq!(
            report.get("us-east").unwrap().breaches,
            expected,
            "threshold {threshold}"
        );
    }
}

#[test]
fn negative_threshold_counts_everything() {
    let ds = load();
    let report = aggregate(&ds, &request(&["apac"], -1));
    assert_eq!(report.get("apac").unwrap().breaches, 2);
}

#[test]
fn outputs_have_at_most_two_decimals() {
    let ds = load();
    let report = aggregate(&ds, &request(&["apac", "us-east", "emea"], 200));
    for (region, m) in report.iter() {
        for v in [m.avg_latency, m.p95_latency, m.avg_uptime] {
            assert!(decimals(v) <= 2, "{region}: {v}");
        }
    }
    let apac = report.get("apac").unwrap();
    assert_eq!(apac.avg_latency, 182.14);
    assert_eq!(apac.avg_uptime, 98.77);
    assert_eq!(apac.breaches, 1);
}

#[test]
fn single_sample_region() {
    let ds = load();
    let report = aggregate(&ds, &request(&["emea"], 95));
    let emea = report.get("emea").unwrap();
    assert_eq!(emea.avg_latency, 95.0);
    assert_eq!(emea.p95_latency, 95.0);
    assert_eq!(emea.avg_uptime, 100.0);
    assert_eq!(emea.breaches, 0);
}

#[test]
fn shifting_latencies_shifts_p95_by_the_same_amount() {
    let base = [12.0, 40.0, 7.0, 33.0, 90.0, 61.0, 18.0];
    let build = |shift: f64| {
        Dataset::from_records(base.iter().map(|&l| TelemetryRecord {
            region: "r".into(),
            latency_ms: l + shift,
            uptime_percent: 99.0,
        }))
    };

    let req = request(&["r"], 0);
    let p0 = aggregate(&build(0.0), &req).get("r").unwrap().p95_latency;
    let p1 = aggregate(&build(250.0), &req).get("r").unwrap().p95_latency;
    assert!((p1 - p0 - 250.0).abs() < 1e-9, "p0={p0} p1={p1}");
}

#[test]
fn repeated_requests_are_byte_identical() {
    let ds = load();
    let req = request(&["us-east", "apac", "emea"], 180);
    let a = serde_json::to_vec(&aggregate(&ds, &req)).unwrap();
    let b = serde_json::to_vec(&aggregate(&ds, &req)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn threshold_beyond_i64_counts_no_breaches() {
    let ds = load();
    let body = json!({"regions": ["us-east"], "threshold_ms": 9223372036854775808u64});
    let req = TelemetryRequest::from_value(&body).unwrap();
    let report = aggregate(&ds, &req);
    assert_eq!(report.get("us-east").unwrap().breaches, 0);
}

#[test]
fn huge_latencies_serialize_as_numbers() {
    let ds = Dataset::from_json_str(
        r#"[
            {"region": "a", "latency_ms": 1e308, "uptime_percent": 99},
            {"region": "a", "latency_ms": 1e308, "uptime_percent": 99}
        ]"#,
    )
    .unwrap();
    let report = aggregate(&ds, &request(&["a"], 0));

    let body = serde_json::to_value(&report).unwrap();
    assert_eq!(body["a"]["avg_latency"].as_f64(), Some(1e308));
    assert_eq!(body["a"]["p95_latency"].as_f64(), Some(1e308));
    assert_eq!(body["a"]["avg_uptime"].as_f64(), Some(99.0));
    assert_eq!(body["a"]["breaches"], 2);
}
