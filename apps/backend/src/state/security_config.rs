use std::env;
use std::time::Duration;

use jsonwebtoken::Algorithm;

use crate::error::AppError;

/// Secrets shorter than this are rejected at startup.
pub const MIN_SECRET_LEN: usize = 32;

const DEFAULT_ACCESS_TTL: Duration = Duration::from_secs(24 * 60 * 60);
const DEFAULT_REFRESH_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Configuration for token signing and validation
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Secret key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// Signing algorithm (defaults to HS256)
    pub algorithm: Algorithm,
    /// Lifetime of access tokens
    pub access_ttl: Duration,
    /// Lifetime of refresh tokens
    pub refresh_ttl: Duration,
    /// Grace period past `exp` during which a token still validates
    pub leeway: Duration,
}

impl SecurityConfig {
    /// Create a config with the given secret and default lifetimes.
    /// Does not check the secret length; use [`SecurityConfig::try_new`] for
    /// user-supplied secrets.
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            access_ttl: DEFAULT_ACCESS_TTL,
            refresh_ttl: DEFAULT_REFRESH_TTL,
            leeway: Duration::ZERO,
        }
    }

    /// Create a config, rejecting empty or short secrets.
    pub fn try_new(jwt_secret: impl Into<Vec<u8>>) -> Result<Self, AppError> {
        let secret = jwt_secret.into();
        if secret.len() < MIN_SECRET_LEN {
            return Err(AppError::config(format!(
                "JWT secret must be at least {MIN_SECRET_LEN} bytes (got {})",
                secret.len()
            )));
        }
        Ok(Self::new(secret))
    }

    pub fn with_ttls(mut self, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        self.access_ttl = access_ttl;
        self.refresh_ttl = refresh_ttl;
        self
    }

    pub fn with_leeway(mut self, leeway: Duration) -> Self {
        self.leeway = leeway;
        self
    }

    /// Build from `JWT_SECRET_KEY`, `ACCESS_TOKEN_TTL_SECS`,
    /// `REFRESH_TOKEN_TTL_SECS` and `TOKEN_LEEWAY_SECS`.
    pub fn from_env() -> Result<Self, AppError> {
        let secret = env::var("JWT_SECRET_KEY").map_err(|_| {
            AppError::config("Required environment variable 'JWT_SECRET_KEY' is not set")
        })?;

        let access_ttl = secs_var("ACCESS_TOKEN_TTL_SECS", DEFAULT_ACCESS_TTL)?;
        let refresh_ttl = secs_var("REFRESH_TOKEN_TTL_SECS", DEFAULT_REFRESH_TTL)?;
        let leeway = secs_var("TOKEN_LEEWAY_SECS", Duration::ZERO)?;

        if access_ttl.is_zero() || refresh_ttl.is_zero() {
            return Err(AppError::config("Token lifetimes must be greater than zero"));
        }

        Ok(Self::try_new(secret.into_bytes())?
            .with_ttls(access_ttl, refresh_ttl)
            .with_leeway(leeway))
    }
}

fn secs_var(name: &str, default: Duration) -> Result<Duration, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| AppError::config(format!("{name} must be a whole number of seconds"))),
        Err(_) => Ok(default),
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only_not_for_prod".to_vec())
    }
}
