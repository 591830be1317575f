//! Signup, login and profile lookup.

use std::time::SystemTime;

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{error, info};
use validator::Validate;

use crate::auth::claims::Role;
use crate::auth::jwt::{generate_all_tokens, TokenPair};
use crate::auth::password::PasswordHashing;
use crate::entities::users;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::logging::security;
use crate::repos::users as users_repo;
use crate::repos::users::NewUser;
use crate::state::security_config::SecurityConfig;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 2, max = 100, message = "must be between 2 and 100 characters"))]
    pub first_name: String,
    #[validate(length(min = 2, max = 100, message = "must be between 2 and 100 characters"))]
    pub last_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, max = 128, message = "must be between 6 and 128 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "is required"))]
    pub phone: String,
    pub user_type: Role,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 128, message = "must be between 1 and 128 characters"))]
    pub password: String,
}

/// User as returned to clients: no password hash, no stored tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub user_type: Role,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// The subset of the profile echoed by login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub user_type: Role,
}

impl TryFrom<users::Model> for UserProfile {
    type Error = AppError;

    fn try_from(user: users::Model) -> Result<Self, Self::Error> {
        let user_type = stored_role(&user)?;
        Ok(Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone: user.phone,
            user_type,
            created_at: user.created_at,
            updated_at: user.updated_at,
        })
    }
}

impl From<UserProfile> for UserSummary {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            first_name: profile.first_name,
            last_name: profile.last_name,
            user_type: profile.user_type,
        }
    }
}

fn stored_role(user: &users::Model) -> Result<Role, AppError> {
    user.user_type.parse::<Role>().map_err(|e| {
        error!(user_id = %user.id, error = %e, "Stored user has an unknown role");
        AppError::internal(ErrorCode::Internal, "Internal server error")
    })
}

/// Create an account and issue its first token pair. The pair is stored on
/// the record as well as returned.
pub async fn signup(
    conn: &impl ConnectionTrait,
    security: &SecurityConfig,
    passwords: &PasswordHashing,
    req: SignupRequest,
) -> Result<(UserProfile, TokenPair), AppError> {
    if users_repo::count_by_email(conn, &req.email).await? > 0 {
        info!(email = %Redacted(&req.email), "Signup rejected: email already registered");
        return Err(AppError::conflict(ErrorCode::UniqueEmail, "Email already exists"));
    }

    let password_hash = passwords.hash_password(&req.password)?;
    let tokens = generate_all_tokens(
        &req.email,
        &req.first_name,
        &req.last_name,
        req.user_type,
        SystemTime::now(),
        security,
    )?;

    // A concurrent signup for the same email loses at the unique index and
    // surfaces as the same 409 through the DbErr mapping.
    let user = users_repo::insert(
        conn,
        NewUser {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password_hash,
            phone: req.phone,
            user_type: req.user_type,
            token: Some(tokens.access_token.clone()),
            refresh_token: Some(tokens.refresh_token.clone()),
        },
    )
    .await?;

    info!(user_id = %user.id, email = %Redacted(&user.email), "User created");
    Ok((UserProfile::try_from(user)?, tokens))
}

/// Check credentials and issue a fresh token pair. Unknown email and wrong
/// password produce the same error.
pub async fn login(
    conn: &impl ConnectionTrait,
    security: &SecurityConfig,
    passwords: &PasswordHashing,
    req: LoginRequest,
) -> Result<(UserSummary, TokenPair), AppError> {
    let Some(user) = users_repo::find_by_email(conn, &req.email).await? else {
        security::login_failed("unknown_email", &req.email);
        return Err(AppError::invalid_credentials());
    };

    if !passwords.verify_password(&user.password_hash, &req.password) {
        security::login_failed("wrong_password", &req.email);
        return Err(AppError::invalid_credentials());
    }

    let role = stored_role(&user)?;
    let tokens = generate_all_tokens(
        &user.email,
        &user.first_name,
        &user.last_name,
        role,
        SystemTime::now(),
        security,
    )?;

    users_repo::update_tokens(
        conn,
        &user.id,
        &tokens.access_token,
        &tokens.refresh_token,
        OffsetDateTime::now_utc(),
    )
    .await?;

    info!(user_id = %user.id, "Login succeeded");
    Ok((UserProfile::try_from(user)?.into(), tokens))
}

/// Profile of the account behind `email`, or 404 if it no longer exists.
pub async fn profile_by_email(
    conn: &impl ConnectionTrait,
    email: &str,
) -> Result<UserProfile, AppError> {
    let user = users_repo::find_by_email(conn, email)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::UserNotFound, "User not found"))?;
    UserProfile::try_from(user)
}
