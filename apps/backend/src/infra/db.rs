use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, DbKind, DbOwner};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Upper bound on a single request's database work.
pub const DB_TIMEOUT: Duration = Duration::from_secs(10);

/// Connect, run pending migrations, and return the pool handlers use.
///
/// Postgres migrates through a one-connection owner pool and then opens the
/// application pool. SQLite in-memory must migrate and serve on the same
/// single connection, otherwise each connection would see its own empty database.
pub async fn bootstrap_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    match kind {
        DbKind::SqliteMemory => {
            let mut opt = ConnectOptions::new(db_url(kind, DbOwner::App)?);
            opt.min_connections(1)
                .max_connections(1)
                .sqlx_logging(false);
            let conn = Database::connect(opt).await?;
            migrate(&conn, MigrationCommand::Up).await?;
            info!(db = "sqlite-memory", "database ready");
            Ok(conn)
        }
        DbKind::Postgres => {
            let mut owner_opt = ConnectOptions::new(db_url(kind, DbOwner::Owner)?);
            owner_opt
                .min_connections(1)
                .max_connections(1)
                .sqlx_logging(false);
            let owner = Database::connect(owner_opt).await?;
            migrate(&owner, MigrationCommand::Up).await?;
            owner.close().await?;

            let mut app_opt = ConnectOptions::new(db_url(kind, DbOwner::App)?);
            app_opt
                .min_connections(1)
                .max_connections(16)
                .connect_timeout(Duration::from_secs(5))
                .acquire_timeout(Duration::from_secs(5))
                .sqlx_logging(false);
            let conn = Database::connect(app_opt).await?;
            info!(db = "postgres", "database ready");
            Ok(conn)
        }
    }
}

/// The pool, or `DbUnavailable` when the state was built without one.
pub fn require_db(state: &AppState) -> Result<&DatabaseConnection, AppError> {
    state
        .db()
        .ok_or_else(|| AppError::db_unavailable("Database unavailable"))
}

/// Run `fut` under [`DB_TIMEOUT`]; an overrun becomes `AppError::DbTimeout`.
pub async fn with_timeout<T, F>(fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    match tokio::time::timeout(DB_TIMEOUT, fut).await {
        Ok(result) => result,
        Err(_) => {
            warn!(timeout_secs = DB_TIMEOUT.as_secs(), "Database call timed out");
            Err(AppError::DbTimeout)
        }
    }
}
