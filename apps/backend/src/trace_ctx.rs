//! Trace id of the request being served, as a tokio task-local.
//!
//! Read by `AppError::error_response` for the `x-trace-id` header and by the
//! security and database-error logs.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// `"unknown"` outside a `RequestTrace` scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| "unknown".to_string())
}

pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
