use std::env;

use crate::error::AppError;

/// Storage backend the application connects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    /// PostgreSQL configured from `POSTGRES_*` variables
    Postgres,
    /// Private in-memory SQLite; used by tests and local smoke runs
    SqliteMemory,
}

impl DbKind {
    /// Read `DB_KIND` (`postgres` or `sqlite-memory`), defaulting to Postgres.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("DB_KIND").as_deref() {
            Err(_) | Ok("postgres") => Ok(DbKind::Postgres),
            Ok("sqlite-memory") => Ok(DbKind::SqliteMemory),
            Ok(other) => Err(AppError::config(format!(
                "DB_KIND must be 'postgres' or 'sqlite-memory', got '{other}'"
            ))),
        }
    }
}

/// Database owner enum for different access levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application-level access (limited permissions)
    App,
    /// Owner-level access (full permissions for migrations)
    Owner,
}

/// Builds a database URL for the given kind and owner.
pub fn db_url(kind: DbKind, owner: DbOwner) -> Result<String, AppError> {
    match kind {
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
        DbKind::Postgres => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = must_var("RESTAURANT_DB")?;
            let (username, password) = credentials(owner)?;

            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
    }
}

/// Get database credentials based on owner
fn credentials(owner: DbOwner) -> Result<(String, String), AppError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((must_var("DB_OWNER_USER")?, must_var("DB_OWNER_PASSWORD")?)),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
