use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::infra::db::{require_db, with_timeout};
use crate::middleware::Authentication;
use crate::services::users::{self, LoginRequest, SignupRequest, UserProfile, UserSummary};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: &'static str,
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
    pub user: UserSummary,
}

async fn signup(
    req: ValidatedJson<SignupRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let (user, tokens) = with_timeout(users::signup(
        db,
        &app_state.security,
        &app_state.passwords,
        req.into_inner(),
    ))
    .await?;

    Ok(HttpResponse::Created().json(SignupResponse {
        message: "User created successfully",
        token: tokens.access_token,
        user,
    }))
}

async fn login(
    req: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let (user, tokens) = with_timeout(users::login(
        db,
        &app_state.security,
        &app_state.passwords,
        req.into_inner(),
    ))
    .await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "Login successful",
        token: tokens.access_token,
        user,
    }))
}

/// Profile of the caller, looked up by the email in their token.
async fn current_user(
    caller: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let profile = with_timeout(users::profile_by_email(db, &caller.email)).await?;
    Ok(HttpResponse::Ok().json(profile))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/auth/signup").route(web::post().to(signup)))
        .service(web::resource("/auth/login").route(web::post().to(login)))
        .service(
            web::resource("/auth/user")
                .route(web::get().to(current_user))
                .wrap(Authentication),
        );
}
