//! Verify request building and response parsing against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Each vector file describes call inputs, the expected request, a simulated
//! response and the expected result or error. Request bodies and results are
//! compared as parsed JSON, not raw strings.

use serde_json::Value;
use zoom_core::{ApiError, Args, HttpMethod, HttpRequest, HttpResponse, ZoomClient, DEFAULT_BASE_URI};

fn client() -> ZoomClient {
    ZoomClient::new("client-id", "client-secret")
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    serde_json::from_value(Value::String(s.to_string()))
        .unwrap_or_else(|_| panic!("unknown method: {s}"))
}

fn input_args(case: &Value) -> Args {
    case["input"].as_object().cloned().unwrap_or_default()
}

fn check_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");

    // Vector paths are written relative to the base URI without its trailing slash.
    let base = DEFAULT_BASE_URI.trim_end_matches('/');
    assert_eq!(req.url, format!("{base}{}", expected["path"].as_str().unwrap()), "{name}: url");

    let expected_headers: Vec<(String, String)> =
        serde_json::from_value(expected["headers"].clone()).unwrap();
    assert_eq!(req.headers, expected_headers, "{name}: headers");

    match expected.get("body") {
        Some(body) => {
            let req_body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn check_result(name: &str, result: Result<Value, ApiError>, case: &Value) {
    if let Some(expected_error) = case.get("expected_error") {
        let err = result.unwrap_err();
        assert!(matches!(err, ApiError::Response { .. }), "{name}: expected response error");
        assert_eq!(err.to_string(), expected_error["message"].as_str().unwrap(), "{name}: message");
        assert_eq!(err.data(), Some(&expected_error["data"]), "{name}: data");
    } else {
        let value = result.unwrap();
        assert_eq!(value, case["expected_result"], "{name}: parsed result");
    }
}

fn simulated_response(case: &Value) -> HttpResponse {
    serde_json::from_value(case["simulated_response"].clone()).unwrap()
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[test]
fn users_test_vectors() {
    let raw = include_str!("../../test-vectors/users.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let req = c.build_get_users(&input_args(case)).unwrap();
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_response(simulated_response(case));
        check_result(name, result, case);
    }
}

// ---------------------------------------------------------------------------
// Meetings
// ---------------------------------------------------------------------------

#[test]
fn meetings_test_vectors() {
    let raw = include_str!("../../test-vectors/meetings.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let user_id = case["input_user_id"].as_str().unwrap();

        let req = c.build_get_meetings(user_id, &input_args(case)).unwrap();
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_response(simulated_response(case));
        check_result(name, result, case);
    }
}
