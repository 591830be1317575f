use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::error_body::assert_error_body;
use backend_test_support::unique_helpers::unique_email;
use restaurant_backend::auth::claims::Role;
use restaurant_backend::validate_token;
use serde_json::{json, Value};

use crate::support::auth::signup_via_api;
use crate::support::create_test_app;
use crate::support::state::{test_security, test_state};

#[actix_web::test]
async fn login_returns_summary_and_fresh_token() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;
    let (email, password, _) = signup_via_api(&app, Role::Admin).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": email, "password": password }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["email"], email.as_str());
    assert_eq!(body["user"]["user_type"], "ADMIN");
    assert!(body["user"].get("phone").is_none());

    let claims = validate_token(body["token"].as_str().expect("token"), &test_security())?;
    assert_eq!(claims.email, email);
    assert_eq!(claims.user_type, Role::Admin);
    Ok(())
}

#[actix_web::test]
async fn wrong_password_and_unknown_email_look_the_same() -> Result<(), Box<dyn std::error::Error>>
{
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;
    let (email, _, _) = signup_via_api(&app, Role::User).await;

    let wrong_password = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": email, "password": "not-the-password" }))
        .to_request();
    let resp = test::call_service(&app, wrong_password).await;
    assert_error_body(resp, StatusCode::UNAUTHORIZED, "Invalid email or password").await;

    let unknown = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": unique_email("ghost"), "password": "whatever" }))
        .to_request();
    let resp = test::call_service(&app, unknown).await;
    assert_error_body(resp, StatusCode::UNAUTHORIZED, "Invalid email or password").await;
    Ok(())
}

#[actix_web::test]
async fn missing_password_fails_validation() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": unique_email("nopw"), "password": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, StatusCode::BAD_REQUEST, "password must be between 1 and 128 characters").await;
    Ok(())
}
