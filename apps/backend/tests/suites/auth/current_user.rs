use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::error_body::assert_error_body;
use backend_test_support::unique_helpers::unique_email;
use restaurant_backend::auth::claims::Role;
use serde_json::Value;

use crate::support::auth::{mint_token, signup_via_api};
use crate::support::create_test_app;
use crate::support::state::{test_security, test_state};

#[actix_web::test]
async fn profile_of_the_caller() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;
    let (email, _, token) = signup_via_api(&app, Role::User).await;

    let req = test::TestRequest::get()
        .uri("/auth/user")
        .insert_header(("token", token.as_str()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], email.as_str());
    assert_eq!(body["first_name"], "Ines");
    assert_eq!(body["phone"], "+351 210 000 000");
    assert!(body.get("password_hash").is_none());
    assert!(body.get("token").is_none());
    Ok(())
}

#[actix_web::test]
async fn token_for_deleted_or_unknown_user_is_404() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;
    let token = mint_token(&unique_email("nobody"), Role::User, &test_security());

    let req = test::TestRequest::get()
        .uri("/auth/user")
        .insert_header(("token", token.as_str()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, StatusCode::NOT_FOUND, "User not found").await;
    Ok(())
}

#[actix_web::test]
async fn profile_requires_a_token() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::get().uri("/auth/user").to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, StatusCode::UNAUTHORIZED, "No Authorization header provided").await;
    Ok(())
}
