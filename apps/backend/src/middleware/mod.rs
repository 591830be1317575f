pub mod authentication;
pub mod cors;
pub mod request_trace;
pub mod require_admin;
pub mod security_headers;
pub mod structured_logger;
pub mod trace_span;

pub use authentication::Authentication;
pub use cors::cors_middleware;
pub use request_trace::{RequestTrace, TraceId};
pub use require_admin::RequireAdmin;
pub use security_headers::SecurityHeaders;
pub use structured_logger::StructuredLogger;
pub use trace_span::TraceSpan;
