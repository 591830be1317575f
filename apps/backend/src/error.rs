use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::errors::ErrorCode;
use crate::trace_ctx;

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Payload too large: {detail}")]
    PayloadTooLarge { detail: String },
    #[error("Unauthorized ({code}): {detail}")]
    Unauthorized { code: ErrorCode, detail: String },
    #[error("Forbidden ({code}): {detail}")]
    Forbidden { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Database unavailable: {detail}")]
    DbUnavailable { detail: String },
    #[error("Database timeout")]
    DbTimeout,
    #[error("Internal error ({code}): {detail}")]
    Internal { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Error code for logs and tests; never part of the response body.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::BadRequest { code, .. } => *code,
            AppError::PayloadTooLarge { .. } => ErrorCode::PayloadTooLarge,
            AppError::Unauthorized { code, .. } => *code,
            AppError::Forbidden { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::Db { .. } => ErrorCode::DbError,
            AppError::DbUnavailable { .. } => ErrorCode::DbUnavailable,
            AppError::DbTimeout => ErrorCode::DbTimeout,
            AppError::Internal { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Client-facing message placed in the `error` field.
    pub fn detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. } => detail.clone(),
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::PayloadTooLarge { detail } => detail.clone(),
            AppError::Unauthorized { detail, .. } => detail.clone(),
            AppError::Forbidden { detail, .. } => detail.clone(),
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::Conflict { detail, .. } => detail.clone(),
            AppError::Db { detail } => detail.clone(),
            AppError::DbUnavailable { detail } => detail.clone(),
            AppError::DbTimeout => "Database timeout".to_string(),
            AppError::Internal { detail, .. } => detail.clone(),
            AppError::Config { detail } => detail.clone(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Db { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::DbUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::DbTimeout => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    /// 413 with the byte limit in the message.
    pub fn payload_too_large(limit: usize) -> Self {
        Self::PayloadTooLarge {
            detail: format!("Request body exceeds {limit} bytes"),
        }
    }

    /// 400 for a path id that is not a valid identifier, e.g. "Invalid food ID".
    pub fn invalid_id(resource: &str) -> Self {
        Self::bad_request(ErrorCode::InvalidId, format!("Invalid {resource} ID"))
    }

    pub fn missing_token() -> Self {
        Self::Unauthorized {
            code: ErrorCode::MissingToken,
            detail: "No Authorization header provided".to_string(),
        }
    }

    /// Malformed, badly signed and expired tokens share one client message;
    /// only the code tells them apart.
    pub fn invalid_token(code: ErrorCode) -> Self {
        Self::Unauthorized {
            code,
            detail: "Invalid or expired token".to_string(),
        }
    }

    pub fn invalid_credentials() -> Self {
        Self::Unauthorized {
            code: ErrorCode::InvalidCredentials,
            detail: "Invalid email or password".to_string(),
        }
    }

    pub fn admin_required() -> Self {
        Self::Forbidden {
            code: ErrorCode::InsufficientRole,
            detail: "Admin access required".to_string(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db {
            detail: detail.into(),
        }
    }

    pub fn db_unavailable(detail: impl Into<String>) -> Self {
        Self::DbUnavailable {
            detail: detail.into(),
        }
    }

    pub fn internal(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Internal {
            code,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        crate::infra::db_errors::map_db_err(e)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let trace_id = trace_ctx::trace_id();

        HttpResponse::build(self.status())
            .insert_header(("x-trace-id", trace_id))
            .json(ErrorBody {
                error: self.detail(),
            })
    }
}
