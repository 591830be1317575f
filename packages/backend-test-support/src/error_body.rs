//! Error body test helpers
//!
//! Every error response from the backend is `{"error": <message>}` with an
//! `x-trace-id` header. These helpers assert that contract without depending
//! on backend types.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use serde_json::Value;

/// Assert that raw response parts carry the stable error contract.
pub fn assert_error_body_from_parts(
    status: StatusCode,
    headers: &actix_web::http::header::HeaderMap,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(status, expected_status);

    let trace_id = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");
    assert!(!trace_id.is_empty(), "x-trace-id header should not be empty");

    let body: Value =
        serde_json::from_slice(body_bytes).expect("Response body should be valid JSON");
    let object = body
        .as_object()
        .expect("Error body should be a JSON object");

    assert_eq!(
        object.len(),
        1,
        "Error body should only carry the `error` field, got {body}"
    );
    assert_eq!(
        object.get("error").and_then(Value::as_str),
        Some(expected_error),
        "Unexpected error message in {body}"
    );
}

/// Assert that a `ServiceResponse` carries the stable error contract.
pub async fn assert_error_body(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_error: &str,
) {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_error_body_from_parts(status, &headers, &body, expected_status, expected_error);
}

/// Like [`assert_error_body`] but only checks that the message contains
/// `expected_fragment`. Validation messages list field names, so exact
/// matching is brittle.
pub async fn assert_error_body_contains(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_fragment: &str,
) {
    assert_eq!(resp.status(), expected_status);
    assert!(
        resp.headers().contains_key("x-trace-id"),
        "x-trace-id header should be present"
    );

    let body: Value = actix_web::test::read_body_json(resp).await;
    let message = body["error"]
        .as_str()
        .expect("error field should be a string");
    assert!(
        message.contains(expected_fragment),
        "Expected error to contain '{expected_fragment}', but got '{message}'"
    );
}
