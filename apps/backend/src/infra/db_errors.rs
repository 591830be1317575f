//! SeaORM -> AppError translation.
//!
//! Every `DbErr` reaching a handler goes through [`map_db_err`] so that raw
//! driver messages only ever appear in logs (redacted), never in responses.

use tracing::{error, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Extract `table.column` from SQLite "UNIQUE constraint failed: table.column".
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    let marker = "UNIQUE constraint failed: ";
    let start = error_msg.find(marker)? + marker.len();
    error_msg[start..].split_whitespace().next()
}

/// Known unique constraints, by SQLite `table.column` or Postgres index name.
fn unique_conflict(error_msg: &str) -> Option<AppError> {
    let is_email = extract_sqlite_table_column(error_msg) == Some("users.email")
        || error_msg.contains("idx_users_email_unique");

    is_email.then(|| AppError::conflict(ErrorCode::UniqueEmail, "Email already exists"))
}

/// Translate a `DbErr` into an `AppError` with a sanitized, PII-safe detail.
pub fn map_db_err(e: sea_orm::DbErr) -> AppError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return AppError::not_found(ErrorCode::NotFound, "Record not found");
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return AppError::db_unavailable("Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unique constraint violation");
        return unique_conflict(&error_msg).unwrap_or_else(|| {
            AppError::conflict(ErrorCode::UniqueViolation, "Unique constraint violation")
        });
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout");
        return AppError::DbTimeout;
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    AppError::db("Database operation failed")
}
