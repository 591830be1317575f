#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod trace_ctx;

pub use auth::claims::{IdentityClaims, Role};
pub use auth::jwt::{generate_all_tokens, validate_token, validate_token_at, TokenError, TokenPair};
pub use auth::password::PasswordHashing;
pub use config::db::{db_url, DbKind, DbOwner};
pub use error::AppError;
pub use errors::ErrorCode;
pub use extractors::{CurrentUser, ResourceId, ValidatedJson};
pub use infra::state::build_state;
pub use middleware::{
    cors_middleware, Authentication, RequestTrace, RequireAdmin, SecurityHeaders,
    StructuredLogger, TraceSpan,
};
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
