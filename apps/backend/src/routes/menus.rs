//! Menus. Reads are public; writes need an admin token.

use actix_web::{guard, web, HttpResponse};
use serde::Deserialize;
use time::OffsetDateTime;
use validator::Validate;

use super::{created, done, not_found};
use crate::entities::menus;
use crate::error::AppError;
use crate::extractors::{ResourceId, ValidatedJson};
use crate::infra::db::{require_db, with_timeout};
use crate::middleware::{Authentication, RequireAdmin};
use crate::repos::menus as menus_repo;
use crate::repos::menus::MenuFields;
use crate::state::app_state::AppState;

const LABEL: &str = "Menu";

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MenuRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "is required"))]
    pub category: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_date: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_date: Option<OffsetDateTime>,
}

impl From<MenuRequest> for MenuFields {
    fn from(req: MenuRequest) -> Self {
        Self {
            name: req.name,
            category: req.category,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

async fn list_menus(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let menus = with_timeout(menus_repo::list(db)).await?;
    Ok(HttpResponse::Ok().json(menus))
}

async fn get_menu(
    id: ResourceId<menus::Entity>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let menu = with_timeout(menus_repo::find_by_id(db, id.as_str()))
        .await?
        .ok_or_else(|| not_found(LABEL))?;
    Ok(HttpResponse::Ok().json(menu))
}

async fn create_menu(
    req: ValidatedJson<MenuRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let menu = with_timeout(menus_repo::insert(db, req.into_inner().into())).await?;
    created(LABEL, "menu", &menu.id, &menu)
}

async fn update_menu(
    id: ResourceId<menus::Entity>,
    req: ValidatedJson<MenuRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    with_timeout(menus_repo::update(db, id.as_str(), req.into_inner().into()))
        .await?
        .ok_or_else(|| not_found(LABEL))?;
    Ok(done(LABEL, "updated"))
}

async fn delete_menu(
    id: ResourceId<menus::Entity>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    if !with_timeout(menus_repo::delete(db, id.as_str())).await? {
        return Err(not_found(LABEL));
    }
    Ok(done(LABEL, "deleted"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/menus")
            .guard(guard::Get())
            .route(web::get().to(list_menus)),
    )
    .service(
        web::resource("/menus/{id}")
            .guard(guard::Get())
            .route(web::get().to(get_menu)),
    )
    .service(
        web::resource("/menus")
            .guard(guard::Post())
            .route(web::post().to(create_menu))
            .wrap(RequireAdmin)
            .wrap(Authentication),
    )
    .service(
        web::resource("/menus/{id}")
            .guard(guard::Any(guard::Put()).or(guard::Delete()))
            .route(web::put().to(update_menu))
            .route(web::delete().to(delete_menu))
            .wrap(RequireAdmin)
            .wrap(Authentication),
    );
}
