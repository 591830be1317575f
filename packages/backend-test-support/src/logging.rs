//! Test subscriber, installed once per test binary.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Driver chatter from the in-memory SQLite pool is noise in test output.
const DEFAULT_FILTER: &str = "warn,sqlx=error,sea_orm=error";

/// `TEST_LOG` wins over `RUST_LOG`; safe to call from every `ctor`.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init()
            .ok();
    });
}
