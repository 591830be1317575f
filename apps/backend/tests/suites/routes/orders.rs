use actix_web::http::{Method, StatusCode};
use backend_test_support::error_body::assert_error_body;
use serde_json::json;

use super::{create_record, send};
use crate::common::json_with_status;
use crate::support::auth::user_token;
use crate::support::create_test_app;
use crate::support::state::{test_security, test_state};

#[actix_web::test]
async fn any_staff_member_manages_orders() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;
    let waiter = user_token(&test_security());
    let table_id = ulid::Ulid::new().to_string();

    let id = create_record(
        &app,
        "/orders",
        &waiter,
        "order",
        json!({ "table_id": table_id, "status": "pending" }),
    )
    .await;

    let resp = send(&app, Method::GET, &format!("/orders/{id}"), Some(&waiter), None).await;
    let got = json_with_status(resp, 200).await;
    assert_eq!(got["status"], "pending");
    assert_eq!(got["table_id"], table_id.as_str());
    assert!(got["order_date"].is_string());

    let resp = send(
        &app,
        Method::PUT,
        &format!("/orders/{id}"),
        Some(&waiter),
        Some(json!({ "table_id": table_id, "status": "served" })),
    )
    .await;
    assert_eq!(json_with_status(resp, 200).await["message"], "Order updated successfully");

    let resp = send(&app, Method::GET, "/orders", Some(&waiter), None).await;
    let list = json_with_status(resp, 200).await;
    assert_eq!(list[0]["status"], "served");

    let resp = send(&app, Method::DELETE, &format!("/orders/{id}"), Some(&waiter), None).await;
    assert_eq!(json_with_status(resp, 200).await["message"], "Order deleted successfully");

    let resp = send(&app, Method::GET, &format!("/orders/{id}"), Some(&waiter), None).await;
    assert_error_body(resp, StatusCode::NOT_FOUND, "Order not found").await;
    Ok(())
}

#[actix_web::test]
async fn orders_are_never_public() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;

    let resp = send(&app, Method::GET, "/orders", None, None).await;
    assert_error_body(resp, StatusCode::UNAUTHORIZED, "No Authorization header provided").await;

    let resp = send(&app, Method::GET, "/orders/bogus", Some("garbage"), None).await;
    assert_error_body(resp, StatusCode::UNAUTHORIZED, "Invalid or expired token").await;
    Ok(())
}

#[actix_web::test]
async fn order_needs_status_and_table() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;
    let waiter = user_token(&test_security());

    let resp = send(
        &app,
        Method::POST,
        "/orders",
        Some(&waiter),
        Some(json!({ "table_id": "", "status": "" })),
    )
    .await;
    assert_error_body(
        resp,
        StatusCode::BAD_REQUEST,
        "status is required; table_id is required",
    )
    .await;

    let resp = send(&app, Method::GET, "/orders/bogus", Some(&waiter), None).await;
    assert_error_body(resp, StatusCode::BAD_REQUEST, "Invalid order ID").await;
    Ok(())
}
