use actix_web::http::{Method, StatusCode};
use backend_test_support::error_body::{assert_error_body, assert_error_body_contains};
use serde_json::json;

use super::{create_record, send};
use crate::common::json_with_status;
use crate::support::auth::{admin_token, user_token};
use crate::support::create_test_app;
use crate::support::state::{test_security, test_state};

#[actix_web::test]
async fn menu_dates_are_optional_and_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;
    let admin = admin_token(&test_security());

    let seasonal = create_record(
        &app,
        "/menus",
        &admin,
        "menu",
        json!({
            "name": "Summer",
            "category": "seasonal",
            "start_date": "2026-06-01T00:00:00Z",
            "end_date": "2026-08-31T23:00:00Z",
        }),
    )
    .await;
    let everyday = create_record(
        &app,
        "/menus",
        &admin,
        "menu",
        json!({ "name": "Everyday", "category": "main" }),
    )
    .await;

    let resp = send(&app, Method::GET, &format!("/menus/{seasonal}"), None, None).await;
    let got = json_with_status(resp, 200).await;
    assert_eq!(got["start_date"], "2026-06-01T00:00:00Z");
    assert_eq!(got["end_date"], "2026-08-31T23:00:00Z");

    let resp = send(&app, Method::GET, &format!("/menus/{everyday}"), None, None).await;
    let got = json_with_status(resp, 200).await;
    assert!(got["start_date"].is_null());

    let resp = send(&app, Method::GET, "/menus", None, None).await;
    let list = json_with_status(resp, 200).await;
    assert_eq!(list.as_array().map(Vec::len), Some(2));
    Ok(())
}

#[actix_web::test]
async fn update_and_delete_menu() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;
    let admin = admin_token(&test_security());
    let id = create_record(
        &app,
        "/menus",
        &admin,
        "menu",
        json!({ "name": "Lunch", "category": "main" }),
    )
    .await;

    let resp = send(
        &app,
        Method::PUT,
        &format!("/menus/{id}"),
        Some(&admin),
        Some(json!({ "name": "Brunch", "category": "weekend" })),
    )
    .await;
    assert_eq!(json_with_status(resp, 200).await["message"], "Menu updated successfully");

    let resp = send(&app, Method::GET, &format!("/menus/{id}"), None, None).await;
    assert_eq!(json_with_status(resp, 200).await["category"], "weekend");

    let waiter = user_token(&test_security());
    let resp = send(&app, Method::DELETE, &format!("/menus/{id}"), Some(&waiter), None).await;
    assert_error_body(resp, StatusCode::FORBIDDEN, "Admin access required").await;

    let resp = send(&app, Method::DELETE, &format!("/menus/{id}"), Some(&admin), None).await;
    assert_eq!(json_with_status(resp, 200).await["message"], "Menu deleted successfully");

    let resp = send(&app, Method::DELETE, &format!("/menus/{id}"), Some(&admin), None).await;
    assert_error_body(resp, StatusCode::NOT_FOUND, "Menu not found").await;
    Ok(())
}

#[actix_web::test]
async fn bad_menu_input() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;
    let admin = admin_token(&test_security());

    let resp = send(
        &app,
        Method::POST,
        "/menus",
        Some(&admin),
        Some(json!({ "name": "", "category": "main" })),
    )
    .await;
    assert_error_body(resp, StatusCode::BAD_REQUEST, "name is required").await;

    let resp = send(
        &app,
        Method::POST,
        "/menus",
        Some(&admin),
        Some(json!({ "name": "Late", "category": "main", "start_date": "tomorrow" })),
    )
    .await;
    assert_error_body_contains(resp, StatusCode::BAD_REQUEST, "Invalid request body").await;

    let resp = send(&app, Method::GET, "/menus/123", None, None).await;
    assert_error_body(resp, StatusCode::BAD_REQUEST, "Invalid menu ID").await;
    Ok(())
}
