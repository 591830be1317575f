//! Security-relevant events. All go out at warn level with redacted identities.

use tracing::warn;

use crate::auth::claims::Role;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Log a failed login. `reason` never reaches the client.
pub fn login_failed(reason: &str, email: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        email = %Redacted(email),
        reason,
        "Authentication failure"
    );
}

/// Log a token rejected by the authentication gate.
pub fn token_rejected(code: ErrorCode, path: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_TOKEN_REJECTED",
        %trace_id,
        code = %code,
        path,
        "Token rejected"
    );
}

/// Log a non-admin caller stopped at an admin-only route.
pub fn admin_required(email: &str, role: Role, path: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_ADMIN_REQUIRED",
        %trace_id,
        email = %Redacted(email),
        role = %role,
        path,
        "Admin access required"
    );
}
