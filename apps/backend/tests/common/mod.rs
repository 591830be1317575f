#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Read a JSON body, asserting the expected status first.
pub async fn json_with_status(resp: ServiceResponse<BoxBody>, expected: u16) -> Value {
    assert_eq!(resp.status().as_u16(), expected, "unexpected status");
    test::read_body_json(resp).await
}

/// Pull `id` out of a create response.
pub fn created_id(body: &Value) -> String {
    body["id"]
        .as_str()
        .expect("create response should carry an id")
        .to_string()
}
