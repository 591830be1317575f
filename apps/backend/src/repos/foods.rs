use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryOrder, Set};
use time::OffsetDateTime;

use crate::entities::foods;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct FoodFields {
    pub name: String,
    pub price: f64,
    pub food_image: String,
    pub menu_id: String,
}

pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<foods::Model>, AppError> {
    Ok(foods::Entity::find()
        .order_by_asc(foods::Column::CreatedAt)
        .all(conn)
        .await?)
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: &str,
) -> Result<Option<foods::Model>, AppError> {
    Ok(foods::Entity::find_by_id(id.to_string()).one(conn).await?)
}

pub async fn insert<C: ConnectionTrait>(
    conn: &C,
    fields: FoodFields,
) -> Result<foods::Model, AppError> {
    let now = OffsetDateTime::now_utc();
    let active = foods::ActiveModel {
        id: Set(super::new_id()),
        name: Set(fields.name),
        price: Set(fields.price),
        food_image: Set(fields.food_image),
        menu_id: Set(fields.menu_id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    Ok(active.insert(conn).await?)
}

pub async fn update<C: ConnectionTrait>(
    conn: &C,
    id: &str,
    fields: FoodFields,
) -> Result<Option<foods::Model>, AppError> {
    let Some(existing) = find_by_id(conn, id).await? else {
        return Ok(None);
    };

    let mut active = existing.into_active_model();
    active.name = Set(fields.name);
    active.price = Set(fields.price);
    active.food_image = Set(fields.food_image);
    active.menu_id = Set(fields.menu_id);
    active.updated_at = Set(OffsetDateTime::now_utc());

    Ok(Some(active.update(conn).await?))
}

pub async fn delete<C: ConnectionTrait>(conn: &C, id: &str) -> Result<bool, AppError> {
    let result = foods::Entity::delete_by_id(id.to_string()).exec(conn).await?;
    Ok(super::deleted(result))
}
