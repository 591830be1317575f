use actix_web::http::{Method, StatusCode};
use backend_test_support::error_body::assert_error_body;
use serde_json::{json, Value};

use super::{create_record, send};
use crate::common::json_with_status;
use crate::support::auth::user_token;
use crate::support::create_test_app;
use crate::support::state::{test_security, test_state};

fn item(order_id: &str, quantity: i32) -> Value {
    json!({
        "order_id": order_id,
        "food_id": "01J00000000000000000000000",
        "quantity": quantity,
        "unit_price": 3.25,
    })
}

#[actix_web::test]
async fn list_filters_by_order() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;
    let waiter = user_token(&test_security());
    let first = ulid::Ulid::new().to_string();
    let second = ulid::Ulid::new().to_string();

    create_record(&app, "/order-items", &waiter, "order_item", item(&first, 1)).await;
    create_record(&app, "/order-items", &waiter, "order_item", item(&first, 2)).await;
    create_record(&app, "/order-items", &waiter, "order_item", item(&second, 5)).await;

    let resp = send(
        &app,
        Method::GET,
        &format!("/order-items?order_id={first}"),
        Some(&waiter),
        None,
    )
    .await;
    let filtered = json_with_status(resp, 200).await;
    let filtered = filtered.as_array().expect("array");
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|i| i["order_id"] == first.as_str()));

    let resp = send(&app, Method::GET, "/order-items", Some(&waiter), None).await;
    assert_eq!(json_with_status(resp, 200).await.as_array().map(Vec::len), Some(3));

    let resp = send(&app, Method::GET, "/order-items?order_id=", Some(&waiter), None).await;
    assert_eq!(json_with_status(resp, 200).await.as_array().map(Vec::len), Some(3));
    Ok(())
}

#[actix_web::test]
async fn order_item_crud() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;
    let waiter = user_token(&test_security());
    let order_id = ulid::Ulid::new().to_string();

    let id = create_record(&app, "/order-items", &waiter, "order_item", item(&order_id, 1)).await;

    let resp = send(
        &app,
        Method::PUT,
        &format!("/order-items/{id}"),
        Some(&waiter),
        Some(item(&order_id, 4)),
    )
    .await;
    assert_eq!(
        json_with_status(resp, 200).await["message"],
        "Order item updated successfully"
    );

    let resp = send(&app, Method::GET, &format!("/order-items/{id}"), Some(&waiter), None).await;
    let got = json_with_status(resp, 200).await;
    assert_eq!(got["quantity"], 4);
    assert_eq!(got["unit_price"], 3.25);

    let resp = send(&app, Method::DELETE, &format!("/order-items/{id}"), Some(&waiter), None).await;
    assert_eq!(
        json_with_status(resp, 200).await["message"],
        "Order item deleted successfully"
    );

    let resp = send(&app, Method::GET, &format!("/order-items/{id}"), Some(&waiter), None).await;
    assert_error_body(resp, StatusCode::NOT_FOUND, "Order item not found").await;
    Ok(())
}

#[actix_web::test]
async fn quantity_must_be_positive() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;
    let waiter = user_token(&test_security());

    let resp = send(
        &app,
        Method::POST,
        "/order-items",
        Some(&waiter),
        Some(item("01J00000000000000000000000", 0)),
    )
    .await;
    assert_error_body(resp, StatusCode::BAD_REQUEST, "quantity must be at least 1").await;

    let resp = send(&app, Method::GET, "/order-items/nope", Some(&waiter), None).await;
    assert_error_body(resp, StatusCode::BAD_REQUEST, "Invalid order item ID").await;
    Ok(())
}
