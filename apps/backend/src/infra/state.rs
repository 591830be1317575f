use crate::auth::password::PasswordHashing;
use crate::config::db::DbKind;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    passwords: PasswordHashing,
    db_kind: Option<DbKind>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            passwords: PasswordHashing::default(),
            db_kind: None,
        }
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    pub fn with_passwords(mut self, passwords: PasswordHashing) -> Self {
        self.passwords = passwords;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db_kind {
            // single entrypoint: connect + migrate
            Some(kind) => {
                let conn = bootstrap_db(kind).await?;
                Ok(AppState::new(conn, self.security_config, self.passwords))
            }
            None => Ok(AppState::without_db(self.security_config, self.passwords)),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
