//! Error codes for the restaurant backend.
//!
//! Every `AppError` carries one of these codes. Codes never reach the client
//! body (which is always `{"error": ...}`); they exist for logs and tests.
//! Add new codes here; never pass ad-hoc strings as error codes.

use core::fmt;

/// Centralized error codes, each mapping to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// No `token` header on the request
    MissingToken,
    /// Token is not a parseable signed token
    MalformedToken,
    /// Signature does not verify against the server secret
    InvalidSignature,
    /// Token is past its expiry
    ExpiredToken,
    /// Email/password pair did not match a user
    InvalidCredentials,
    /// Caller lacks the ADMIN role
    InsufficientRole,

    // Request Validation
    /// Body failed field validation
    ValidationError,
    /// General bad request error
    BadRequest,
    /// Path id is not a valid identifier
    InvalidId,
    /// Request body exceeds the accepted size
    PayloadTooLarge,

    // Resource Not Found
    /// User not found
    UserNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Email already registered
    UniqueEmail,
    /// Generic unique constraint violation
    UniqueViolation,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database call exceeded the per-request timeout
    DbTimeout,
    /// Password hashing failed
    HashingFailure,
    /// Token signing failed
    TokenSigningFailure,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Authentication & Authorization
            Self::MissingToken => "MISSING_TOKEN",
            Self::MalformedToken => "MALFORMED_TOKEN",
            Self::InvalidSignature => "INVALID_SIGNATURE",
            Self::ExpiredToken => "EXPIRED_TOKEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InsufficientRole => "INSUFFICIENT_ROLE",

            // Request Validation
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidId => "INVALID_ID",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",

            // Resource Not Found
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            // Conflicts
            Self::UniqueEmail => "UNIQUE_EMAIL",
            Self::UniqueViolation => "UNIQUE_VIOLATION",

            // System Errors
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::HashingFailure => "HASHING_FAILURE",
            Self::TokenSigningFailure => "TOKEN_SIGNING_FAILURE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
