use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

use crate::support::create_test_app;
use crate::support::state::{test_state, test_state_without_db};

#[actix_web::test]
async fn health_reports_database_ok() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "Restaurant API is running");
    assert_eq!(body["db"], "ok");
    Ok(())
}

#[actix_web::test]
async fn health_stays_up_without_database() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state_without_db().await)
        .with_prod_routes()
        .build()
        .await?;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["db"], "error");
    Ok(())
}

#[actix_web::test]
async fn responses_carry_security_headers_and_request_id() -> Result<(), Box<dyn std::error::Error>>
{
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    let headers = resp.headers();

    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert!(headers.contains_key("strict-transport-security"));
    assert!(headers.contains_key("content-security-policy"));
    let request_id = headers
        .get("x-request-id")
        .expect("x-request-id should be set")
        .to_str()?;
    assert!(!request_id.is_empty());
    Ok(())
}

#[actix_web::test]
async fn unknown_route_is_404() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/kitchen-sink").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[actix_web::test]
async fn routes_without_database_answer_500() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state_without_db().await)
        .with_prod_routes()
        .build()
        .await?;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/foods").to_request()).await;
    backend_test_support::error_body::assert_error_body(
        resp,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Database unavailable",
    )
    .await;
    Ok(())
}
