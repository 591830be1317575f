//! Password hashing and verification using argon2id.
//!
//! Cost parameters are injected through [`PasswordHashing`], which lives in
//! `AppState`; nothing here reads global state.

use std::env;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use tracing::error;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// argon2id hasher with explicit cost parameters.
#[derive(Debug, Clone)]
pub struct PasswordHashing {
    params: Params,
}

impl PasswordHashing {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    /// Cheap parameters for tests. Never use for stored passwords.
    pub fn low_cost() -> Self {
        // Smallest memory cost argon2 accepts for one lane.
        match Params::new(8, 1, 1, None) {
            Ok(params) => Self::new(params),
            Err(_) => Self::default(),
        }
    }

    /// Read `ARGON2_MEMORY_KIB`, `ARGON2_ITERATIONS` and `ARGON2_PARALLELISM`,
    /// falling back to the argon2 crate defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let memory = u32_var("ARGON2_MEMORY_KIB", Params::DEFAULT_M_COST)?;
        let iterations = u32_var("ARGON2_ITERATIONS", Params::DEFAULT_T_COST)?;
        let parallelism = u32_var("ARGON2_PARALLELISM", Params::DEFAULT_P_COST)?;

        let params = Params::new(memory, iterations, parallelism, None)
            .map_err(|e| AppError::config(format!("Invalid argon2 parameters: {e}")))?;
        Ok(Self::new(params))
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash `plaintext` with a fresh random salt into a PHC string.
    pub fn hash_password(&self, plaintext: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                error!(error = %e, "Password hashing failed");
                AppError::internal(ErrorCode::HashingFailure, "Error hashing password")
            })
    }

    /// True only when `digest` is a well-formed hash of `plaintext`.
    /// Mismatches, malformed digests and internal failures all return false.
    pub fn verify_password(&self, digest: &str, plaintext: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(digest) else {
            return false;
        };
        self.argon2()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }
}

impl Default for PasswordHashing {
    fn default() -> Self {
        Self::new(Params::default())
    }
}

fn u32_var(name: &str, default: u32) -> Result<u32, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| AppError::config(format!("{name} must be a positive integer"))),
        Err(_) => Ok(default),
    }
}
