use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod auth;
pub mod foods;
pub mod health;
pub mod invoices;
pub mod menus;
pub mod order_items;
pub mod orders;
pub mod tables;

/// Register every route with its gates. Used by `main` and by the test app
/// builder, so both serve the same surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(auth::configure_routes)
        .configure(foods::configure_routes)
        .configure(menus::configure_routes)
        .configure(tables::configure_routes)
        .configure(orders::configure_routes)
        .configure(order_items::configure_routes)
        .configure(invoices::configure_routes);
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `200 {"message": "<label> <action> successfully"}`
pub(crate) fn done(label: &str, action: &str) -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse {
        message: format!("{label} {action} successfully"),
    })
}

/// `201 {"message": "<label> created successfully", "id": id, <key>: record}`
pub(crate) fn created<T: Serialize>(
    label: &str,
    key: &str,
    id: &str,
    record: &T,
) -> Result<HttpResponse, AppError> {
    let record = serde_json::to_value(record).map_err(|e| {
        tracing::error!(error = %e, key, "Failed to serialize created record");
        AppError::internal(ErrorCode::Internal, "Internal server error")
    })?;

    let mut body = Map::new();
    body.insert(
        "message".to_string(),
        Value::String(format!("{label} created successfully")),
    );
    body.insert("id".to_string(), Value::String(id.to_string()));
    body.insert(key.to_string(), record);

    Ok(HttpResponse::Created().json(Value::Object(body)))
}

/// `404 {"error": "<label> not found"}`
pub(crate) fn not_found(label: &str) -> AppError {
    AppError::not_found(ErrorCode::NotFound, format!("{label} not found"))
}
