use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::auth::password::PasswordHashing;

/// Application state shared by every worker. Immutable after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection pool (optional for tests that never touch storage)
    db: Option<DatabaseConnection>,
    /// Token signing and validation settings
    pub security: SecurityConfig,
    /// Password hasher with its cost parameters
    pub passwords: PasswordHashing,
}

impl AppState {
    pub fn new(db: DatabaseConnection, security: SecurityConfig, passwords: PasswordHashing) -> Self {
        Self {
            db: Some(db),
            security,
            passwords,
        }
    }

    /// State without a database; handlers that need one fail with `DbUnavailable`.
    pub fn without_db(security: SecurityConfig, passwords: PasswordHashing) -> Self {
        Self {
            db: None,
            security,
            passwords,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
