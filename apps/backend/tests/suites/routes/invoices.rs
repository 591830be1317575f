use actix_web::http::{Method, StatusCode};
use backend_test_support::error_body::assert_error_body;
use serde_json::{json, Value};

use super::{create_record, send};
use crate::common::json_with_status;
use crate::support::auth::{admin_token, user_token};
use crate::support::create_test_app;
use crate::support::state::{test_security, test_state};

fn invoice(status: &str) -> Value {
    json!({
        "order_id": "01J00000000000000000000000",
        "payment_method": "card",
        "total_amount": 42.0,
        "payment_status": status,
    })
}

#[actix_web::test]
async fn staff_create_and_read_admin_updates() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;
    let waiter = user_token(&test_security());
    let admin = admin_token(&test_security());

    let id = create_record(&app, "/invoices", &waiter, "invoice", invoice("pending")).await;

    let resp = send(&app, Method::GET, &format!("/invoices/{id}"), Some(&waiter), None).await;
    assert_eq!(json_with_status(resp, 200).await["payment_status"], "pending");

    let resp = send(
        &app,
        Method::PUT,
        &format!("/invoices/{id}"),
        Some(&waiter),
        Some(invoice("paid")),
    )
    .await;
    assert_error_body(resp, StatusCode::FORBIDDEN, "Admin access required").await;

    let resp = send(
        &app,
        Method::PUT,
        &format!("/invoices/{id}"),
        Some(&admin),
        Some(invoice("paid")),
    )
    .await;
    assert_eq!(json_with_status(resp, 200).await["message"], "Invoice updated successfully");

    let resp = send(&app, Method::GET, "/invoices", Some(&waiter), None).await;
    let list = json_with_status(resp, 200).await;
    assert_eq!(list[0]["payment_status"], "paid");
    Ok(())
}

#[actix_web::test]
async fn invoices_cannot_be_deleted() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;
    let admin = admin_token(&test_security());
    let id = create_record(&app, "/invoices", &admin, "invoice", invoice("pending")).await;

    let resp = send(&app, Method::DELETE, &format!("/invoices/{id}"), Some(&admin), None).await;
    assert!(resp.status().is_client_error());

    let resp = send(&app, Method::GET, &format!("/invoices/{id}"), Some(&admin), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    Ok(())
}

#[actix_web::test]
async fn invoice_validation_and_lookup() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;
    let admin = admin_token(&test_security());

    let mut bad = invoice("pending");
    bad["total_amount"] = json!(-1.0);
    let resp = send(&app, Method::POST, "/invoices", Some(&admin), Some(bad)).await;
    assert_error_body(resp, StatusCode::BAD_REQUEST, "total_amount must be greater than 0").await;

    let missing = ulid::Ulid::new().to_string();
    let resp = send(&app, Method::GET, &format!("/invoices/{missing}"), Some(&admin), None).await;
    assert_error_body(resp, StatusCode::NOT_FOUND, "Invoice not found").await;

    let resp = send(
        &app,
        Method::PUT,
        &format!("/invoices/{missing}"),
        Some(&admin),
        Some(invoice("paid")),
    )
    .await;
    assert_error_body(resp, StatusCode::NOT_FOUND, "Invoice not found").await;

    let resp = send(&app, Method::GET, "/invoices/x", Some(&admin), None).await;
    assert_error_body(resp, StatusCode::BAD_REQUEST, "Invalid invoice ID").await;
    Ok(())
}
