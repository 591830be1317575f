//! Order line items. Every route needs a valid token; any role will do.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use super::{created, done, not_found};
use crate::entities::order_items;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{ResourceId, ValidatedJson};
use crate::infra::db::{require_db, with_timeout};
use crate::middleware::Authentication;
use crate::repos::order_items as order_items_repo;
use crate::repos::order_items::OrderItemFields;
use crate::state::app_state::AppState;

const LABEL: &str = "Order item";

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OrderItemRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub order_id: String,
    #[validate(length(min = 1, message = "is required"))]
    pub food_id: String,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub quantity: i32,
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    pub unit_price: f64,
}

impl From<OrderItemRequest> for OrderItemFields {
    fn from(req: OrderItemRequest) -> Self {
        Self {
            order_id: req.order_id,
            food_id: req.food_id,
            quantity: req.quantity,
            unit_price: req.unit_price,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct OrderItemsQuery {
    pub order_id: Option<String>,
}

/// `?order_id=` narrows the list to one order; an empty value is ignored.
async fn list_order_items(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let query = web::Query::<OrderItemsQuery>::from_query(http_req.query_string())
        .map_err(|_| AppError::bad_request(ErrorCode::BadRequest, "Invalid query string"))?
        .into_inner();
    let order_id = query.order_id.as_deref().filter(|id| !id.is_empty());

    let db = require_db(&app_state)?;
    let items = with_timeout(order_items_repo::list(db, order_id)).await?;
    Ok(HttpResponse::Ok().json(items))
}

async fn get_order_item(
    id: ResourceId<order_items::Entity>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let item = with_timeout(order_items_repo::find_by_id(db, id.as_str()))
        .await?
        .ok_or_else(|| not_found(LABEL))?;
    Ok(HttpResponse::Ok().json(item))
}

async fn create_order_item(
    req: ValidatedJson<OrderItemRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let item = with_timeout(order_items_repo::insert(db, req.into_inner().into())).await?;
    created(LABEL, "order_item", &item.id, &item)
}

async fn update_order_item(
    id: ResourceId<order_items::Entity>,
    req: ValidatedJson<OrderItemRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    with_timeout(order_items_repo::update(db, id.as_str(), req.into_inner().into()))
        .await?
        .ok_or_else(|| not_found(LABEL))?;
    Ok(done(LABEL, "updated"))
}

async fn delete_order_item(
    id: ResourceId<order_items::Entity>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    if !with_timeout(order_items_repo::delete(db, id.as_str())).await? {
        return Err(not_found(LABEL));
    }
    Ok(done(LABEL, "deleted"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/order-items")
            .wrap(Authentication)
            .service(
                web::resource("")
                    .route(web::get().to(list_order_items))
                    .route(web::post().to(create_order_item)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_order_item))
                    .route(web::put().to(update_order_item))
                    .route(web::delete().to(delete_order_item)),
            ),
    );
}
