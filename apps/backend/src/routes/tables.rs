//! Dining tables. Reads are public; writes need an admin token.

use actix_web::{guard, web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use super::{created, done, not_found};
use crate::entities::tables;
use crate::error::AppError;
use crate::extractors::{ResourceId, ValidatedJson};
use crate::infra::db::{require_db, with_timeout};
use crate::middleware::{Authentication, RequireAdmin};
use crate::repos::tables as tables_repo;
use crate::repos::tables::TableFields;
use crate::state::app_state::AppState;

const LABEL: &str = "Table";

/// New tables start available unless the body says otherwise; an update
/// without `is_available` leaves it as is.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TableRequest {
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub table_number: i32,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub capacity: i32,
    #[serde(default)]
    pub is_available: Option<bool>,
}

impl From<TableRequest> for TableFields {
    fn from(req: TableRequest) -> Self {
        Self {
            table_number: req.table_number,
            capacity: req.capacity,
            is_available: req.is_available,
        }
    }
}

async fn list_tables(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let tables = with_timeout(tables_repo::list(db)).await?;
    Ok(HttpResponse::Ok().json(tables))
}

async fn get_table(
    id: ResourceId<tables::Entity>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let table = with_timeout(tables_repo::find_by_id(db, id.as_str()))
        .await?
        .ok_or_else(|| not_found(LABEL))?;
    Ok(HttpResponse::Ok().json(table))
}

async fn create_table(
    req: ValidatedJson<TableRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let table = with_timeout(tables_repo::insert(db, req.into_inner().into())).await?;
    created(LABEL, "table", &table.id, &table)
}

async fn update_table(
    id: ResourceId<tables::Entity>,
    req: ValidatedJson<TableRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    with_timeout(tables_repo::update(db, id.as_str(), req.into_inner().into()))
        .await?
        .ok_or_else(|| not_found(LABEL))?;
    Ok(done(LABEL, "updated"))
}

async fn delete_table(
    id: ResourceId<tables::Entity>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    if !with_timeout(tables_repo::delete(db, id.as_str())).await? {
        return Err(not_found(LABEL));
    }
    Ok(done(LABEL, "deleted"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/tables")
            .guard(guard::Get())
            .route(web::get().to(list_tables)),
    )
    .service(
        web::resource("/tables/{id}")
            .guard(guard::Get())
            .route(web::get().to(get_table)),
    )
    .service(
        web::resource("/tables")
            .guard(guard::Post())
            .route(web::post().to(create_table))
            .wrap(RequireAdmin)
            .wrap(Authentication),
    )
    .service(
        web::resource("/tables/{id}")
            .guard(guard::Any(guard::Put()).or(guard::Delete()))
            .route(web::put().to(update_table))
            .route(web::delete().to(delete_table))
            .wrap(RequireAdmin)
            .wrap(Authentication),
    );
}
