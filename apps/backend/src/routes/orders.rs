//! Orders. Every route needs a valid token; any role will do.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use super::{created, done, not_found};
use crate::entities::orders;
use crate::error::AppError;
use crate::extractors::{ResourceId, ValidatedJson};
use crate::infra::db::{require_db, with_timeout};
use crate::middleware::Authentication;
use crate::repos::orders as orders_repo;
use crate::repos::orders::OrderFields;
use crate::state::app_state::AppState;

const LABEL: &str = "Order";

/// `order_date` is not accepted from clients; it is the creation time.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OrderRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub table_id: String,
    #[validate(length(min = 1, message = "is required"))]
    pub status: String,
}

impl From<OrderRequest> for OrderFields {
    fn from(req: OrderRequest) -> Self {
        Self {
            table_id: req.table_id,
            status: req.status,
        }
    }
}

async fn list_orders(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let orders = with_timeout(orders_repo::list(db)).await?;
    Ok(HttpResponse::Ok().json(orders))
}

async fn get_order(
    id: ResourceId<orders::Entity>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let order = with_timeout(orders_repo::find_by_id(db, id.as_str()))
        .await?
        .ok_or_else(|| not_found(LABEL))?;
    Ok(HttpResponse::Ok().json(order))
}

async fn create_order(
    req: ValidatedJson<OrderRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let order = with_timeout(orders_repo::insert(db, req.into_inner().into())).await?;
    created(LABEL, "order", &order.id, &order)
}

async fn update_order(
    id: ResourceId<orders::Entity>,
    req: ValidatedJson<OrderRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    with_timeout(orders_repo::update(db, id.as_str(), req.into_inner().into()))
        .await?
        .ok_or_else(|| not_found(LABEL))?;
    Ok(done(LABEL, "updated"))
}

async fn delete_order(
    id: ResourceId<orders::Entity>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    if !with_timeout(orders_repo::delete(db, id.as_str())).await? {
        return Err(not_found(LABEL));
    }
    Ok(done(LABEL, "deleted"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/orders")
            .wrap(Authentication)
            .service(
                web::resource("")
                    .route(web::get().to(list_orders))
                    .route(web::post().to(create_order)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_order))
                    .route(web::put().to(update_order))
                    .route(web::delete().to(delete_order)),
            ),
    );
}
