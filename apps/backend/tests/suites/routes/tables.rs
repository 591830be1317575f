use actix_web::http::{Method, StatusCode};
use backend_test_support::error_body::assert_error_body;
use serde_json::json;

use super::{create_record, send};
use crate::common::json_with_status;
use crate::support::auth::admin_token;
use crate::support::create_test_app;
use crate::support::state::{test_security, test_state};

#[actix_web::test]
async fn new_tables_default_to_available() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;
    let admin = admin_token(&test_security());

    let id = create_record(
        &app,
        "/tables",
        &admin,
        "table",
        json!({ "table_number": 4, "capacity": 2 }),
    )
    .await;

    let resp = send(&app, Method::GET, &format!("/tables/{id}"), None, None).await;
    let got = json_with_status(resp, 200).await;
    assert_eq!(got["is_available"], true);
    assert_eq!(got["capacity"], 2);
    Ok(())
}

#[actix_web::test]
async fn update_without_availability_keeps_it() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;
    let admin = admin_token(&test_security());
    let id = create_record(
        &app,
        "/tables",
        &admin,
        "table",
        json!({ "table_number": 7, "capacity": 4, "is_available": false }),
    )
    .await;

    let resp = send(
        &app,
        Method::PUT,
        &format!("/tables/{id}"),
        Some(&admin),
        Some(json!({ "table_number": 7, "capacity": 6 })),
    )
    .await;
    assert_eq!(json_with_status(resp, 200).await["message"], "Table updated successfully");

    let resp = send(&app, Method::GET, &format!("/tables/{id}"), None, None).await;
    let got = json_with_status(resp, 200).await;
    assert_eq!(got["capacity"], 6);
    assert_eq!(got["is_available"], false);
    Ok(())
}

#[actix_web::test]
async fn list_is_ordered_by_table_number() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;
    let admin = admin_token(&test_security());
    for number in [12, 3, 8] {
        create_record(
            &app,
            "/tables",
            &admin,
            "table",
            json!({ "table_number": number, "capacity": 4 }),
        )
        .await;
    }

    let resp = send(&app, Method::GET, "/tables", None, None).await;
    let list = json_with_status(resp, 200).await;
    let numbers: Vec<i64> = list
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|t| t["table_number"].as_i64())
        .collect();
    assert_eq!(numbers, vec![3, 8, 12]);
    Ok(())
}

#[actix_web::test]
async fn capacity_must_be_positive() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;
    let admin = admin_token(&test_security());

    let resp = send(
        &app,
        Method::POST,
        "/tables",
        Some(&admin),
        Some(json!({ "table_number": 1, "capacity": 0 })),
    )
    .await;
    assert_error_body(resp, StatusCode::BAD_REQUEST, "capacity must be at least 1").await;
    Ok(())
}

#[actix_web::test]
async fn delete_table_then_lookup_fails() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await?;
    let admin = admin_token(&test_security());
    let id = create_record(
        &app,
        "/tables",
        &admin,
        "table",
        json!({ "table_number": 9, "capacity": 8 }),
    )
    .await;

    let resp = send(&app, Method::DELETE, &format!("/tables/{id}"), Some(&admin), None).await;
    assert_eq!(json_with_status(resp, 200).await["message"], "Table deleted successfully");

    let resp = send(&app, Method::GET, &format!("/tables/{id}"), None, None).await;
    assert_error_body(resp, StatusCode::NOT_FOUND, "Table not found").await;
    Ok(())
}
