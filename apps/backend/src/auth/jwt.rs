use std::time::{Duration, SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, encode, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::auth::claims::{IdentityClaims, Role};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::security_config::SecurityConfig;

/// Why a presented token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("token has expired")]
    Expired,
}

impl TokenError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TokenError::Malformed => ErrorCode::MalformedToken,
            TokenError::InvalidSignature => ErrorCode::InvalidSignature,
            TokenError::Expired => ErrorCode::ExpiredToken,
        }
    }
}

impl From<TokenError> for AppError {
    fn from(e: TokenError) -> Self {
        AppError::invalid_token(e.code())
    }
}

/// Access and refresh token issued together at signup/login.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

fn epoch_secs(t: SystemTime) -> Result<i64, AppError> {
    t.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .map_err(|_| AppError::internal(ErrorCode::Internal, "Failed to get current time"))
}

fn sign(claims: &IdentityClaims, security: &SecurityConfig) -> Result<String, AppError> {
    encode(
        &Header::new(security.algorithm),
        claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| {
        tracing::error!(error = %e, "Failed to encode token");
        AppError::internal(ErrorCode::TokenSigningFailure, "Error generating tokens")
    })
}

/// Mint an access token (`security.access_ttl`) and a refresh token
/// (`security.refresh_ttl`) carrying the same identity.
pub fn generate_all_tokens(
    email: &str,
    first_name: &str,
    last_name: &str,
    user_type: Role,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<TokenPair, AppError> {
    let iat = epoch_secs(now)?;
    let claims_for = |ttl: Duration| IdentityClaims {
        email: email.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        user_type,
        iat,
        exp: iat + ttl.as_secs().max(1) as i64,
    };

    Ok(TokenPair {
        access_token: sign(&claims_for(security.access_ttl), security)?,
        refresh_token: sign(&claims_for(security.refresh_ttl), security)?,
    })
}

/// Validate a token against the wall clock.
pub fn validate_token(
    token: &str,
    security: &SecurityConfig,
) -> Result<IdentityClaims, TokenError> {
    validate_token_at(token, SystemTime::now(), security)
}

/// Validate a token as of `now`.
///
/// The signature is verified before any claim is read. Expiry is checked
/// here rather than by `jsonwebtoken` so the boundary is exact: a token is
/// valid through `exp + leeway` and expired one second later.
pub fn validate_token_at(
    token: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<IdentityClaims, TokenError> {
    check_structure(token)?;

    let mut validation = Validation::new(security.algorithm);
    validation.validate_exp = false;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp"]);

    let claims = decode::<IdentityClaims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        // Header and payload were decoded above, so a base64 failure here is
        // in the signature segment.
        ErrorKind::InvalidSignature | ErrorKind::Base64(_) => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })?;

    let now_secs = now
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);
    if now_secs > claims.exp.saturating_add(security.leeway.as_secs() as i64) {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}

/// Reject anything that is not three segments with a decodable header and payload.
fn check_structure(token: &str) -> Result<(), TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    let [header, payload, signature] = segments.as_slice() else {
        return Err(TokenError::Malformed);
    };
    if header.is_empty() || payload.is_empty() || signature.is_empty() {
        return Err(TokenError::Malformed);
    }
    if URL_SAFE_NO_PAD.decode(payload).is_err() {
        return Err(TokenError::Malformed);
    }
    decode_header(token).map_err(|_| TokenError::Malformed)?;
    Ok(())
}
