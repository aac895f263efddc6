//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use zone_core::{HttpMethod, HttpResponse, ZoneClient, ZoneConfig, ZoneError};

const BASE_URL: &str = "https://192.0.2.1";

fn client() -> ZoneClient {
    ZoneClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        other => panic!("unknown method: {other}"),
    }
}

fn simulated_response(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().as_bytes().to_vec(),
    }
}

/// Check an error against the vector's `expected_error` kind and message.
fn check_error(name: &str, case: &serde_json::Value, err: ZoneError) {
    let kind = case["expected_error"].as_str().unwrap();
    match kind {
        "Protocol" => assert!(matches!(err, ZoneError::Protocol(_)), "{name}: expected Protocol, got {err:?}"),
        "RemoteFailure" => assert!(
            matches!(err, ZoneError::RemoteFailure { .. }),
            "{name}: expected RemoteFailure, got {err:?}"
        ),
        other => panic!("{name}: unknown expected_error: {other}"),
    }
    assert_eq!(err.to_string(), case["expected_message"].as_str().unwrap(), "{name}: message");
}

// ---------------------------------------------------------------------------
// Upsert
// ---------------------------------------------------------------------------

#[test]
fn upsert_test_vectors() {
    let raw = include_str!("../../test-vectors/upsert.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: ZoneConfig = serde_json::from_value(case["input"].clone()).unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_upsert_zone(&input).unwrap();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        let req_body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(req_body, expected_req["body"], "{name}: body");

        // Verify parse
        let result = c.parse_upsert_zone(simulated_response(case));
        if case.get("expected_error").is_some() {
            check_error(name, case, result.unwrap_err());
        } else {
            let outcome = result.unwrap();
            let expected = &case["expected_result"];
            assert_eq!(outcome.vdom.as_deref(), expected["vdom"].as_str(), "{name}: vdom");
            assert_eq!(outcome.mkey.as_deref(), expected["mkey"].as_str(), "{name}: mkey");
            assert_eq!(outcome.status, expected["status"].as_str().unwrap(), "{name}: status");
            assert_eq!(
                outcome.http_status.map(u64::from),
                expected["http_status"].as_u64(),
                "{name}: http_status"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[test]
fn read_test_vectors() {
    let raw = include_str!("../../test-vectors/read.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_read_zone(case["input_name"].as_str().unwrap());
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");
        assert!(req.body.is_none(), "{name}: body should be None");

        // Verify parse
        let result = c.parse_read_zone(simulated_response(case));
        if case.get("expected_error").is_some() {
            check_error(name, case, result.unwrap_err());
        } else if case["expected_absent"].as_bool().unwrap_or(false) {
            assert!(result.unwrap().is_none(), "{name}: expected absent");
        } else {
            let zone = result.unwrap().unwrap();
            let expected: ZoneConfig = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(zone, expected, "{name}: parsed result");
        }
    }
}
