//! Food items. Reads are public; writes need an admin token.

use actix_web::{guard, web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use super::{created, done, not_found};
use crate::entities::foods;
use crate::error::AppError;
use crate::extractors::{ResourceId, ValidatedJson};
use crate::infra::db::{require_db, with_timeout};
use crate::middleware::{Authentication, RequireAdmin};
use crate::repos::foods as foods_repo;
use crate::repos::foods::FoodFields;
use crate::state::app_state::AppState;

const LABEL: &str = "Food";

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FoodRequest {
    #[validate(length(min = 2, max = 100, message = "must be between 2 and 100 characters"))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    pub price: f64,
    #[validate(length(min = 1, message = "is required"))]
    pub food_image: String,
    #[validate(length(min = 1, message = "is required"))]
    pub menu_id: String,
}

impl From<FoodRequest> for FoodFields {
    fn from(req: FoodRequest) -> Self {
        Self {
            name: req.name,
            price: req.price,
            food_image: req.food_image,
            menu_id: req.menu_id,
        }
    }
}

async fn list_foods(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let foods = with_timeout(foods_repo::list(db)).await?;
    Ok(HttpResponse::Ok().json(foods))
}

async fn get_food(
    id: ResourceId<foods::Entity>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let food = with_timeout(foods_repo::find_by_id(db, id.as_str()))
        .await?
        .ok_or_else(|| not_found(LABEL))?;
    Ok(HttpResponse::Ok().json(food))
}

async fn create_food(
    req: ValidatedJson<FoodRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let food = with_timeout(foods_repo::insert(db, req.into_inner().into())).await?;
    created(LABEL, "food", &food.id, &food)
}

async fn update_food(
    id: ResourceId<foods::Entity>,
    req: ValidatedJson<FoodRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    with_timeout(foods_repo::update(db, id.as_str(), req.into_inner().into()))
        .await?
        .ok_or_else(|| not_found(LABEL))?;
    Ok(done(LABEL, "updated"))
}

async fn delete_food(
    id: ResourceId<foods::Entity>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    if !with_timeout(foods_repo::delete(db, id.as_str())).await? {
        return Err(not_found(LABEL));
    }
    Ok(done(LABEL, "deleted"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/foods")
            .guard(guard::Get())
            .route(web::get().to(list_foods)),
    )
    .service(
        web::resource("/foods/{id}")
            .guard(guard::Get())
            .route(web::get().to(get_food)),
    )
    .service(
        web::resource("/foods")
            .guard(guard::Post())
            .route(web::post().to(create_food))
            .wrap(RequireAdmin)
            .wrap(Authentication),
    )
    .service(
        web::resource("/foods/{id}")
            .guard(guard::Any(guard::Put()).or(guard::Delete()))
            .route(web::put().to(update_food))
            .route(web::delete().to(delete_food))
            .wrap(RequireAdmin)
            .wrap(Authentication),
    );
}
