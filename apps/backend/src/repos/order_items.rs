use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use time::OffsetDateTime;

use crate::entities::order_items;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct OrderItemFields {
    pub order_id: String,
    pub food_id: String,
    pub quantity: i32,
    pub unit_price: f64,
}

/// All items, or only those of `order_id` when given.
pub async fn list<C: ConnectionTrait>(
    conn: &C,
    order_id: Option<&str>,
) -> Result<Vec<order_items::Model>, AppError> {
    let mut query = order_items::Entity::find();
    if let Some(order_id) = order_id {
        query = query.filter(order_items::Column::OrderId.eq(order_id));
    }

    Ok(query
        .order_by_asc(order_items::Column::CreatedAt)
        .all(conn)
        .await?)
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: &str,
) -> Result<Option<order_items::Model>, AppError> {
    Ok(order_items::Entity::find_by_id(id.to_string())
        .one(conn)
        .await?)
}

pub async fn insert<C: ConnectionTrait>(
    conn: &C,
    fields: OrderItemFields,
) -> Result<order_items::Model, AppError> {
    let now = OffsetDateTime::now_utc();
    let active = order_items::ActiveModel {
        id: Set(super::new_id()),
        order_id: Set(fields.order_id),
        food_id: Set(fields.food_id),
        quantity: Set(fields.quantity),
        unit_price: Set(fields.unit_price),
        created_at: Set(now),
        updated_at: Set(now),
    };

    Ok(active.insert(conn).await?)
}

pub async fn update<C: ConnectionTrait>(
    conn: &C,
    id: &str,
    fields: OrderItemFields,
) -> Result<Option<order_items::Model>, AppError> {
    let Some(existing) = find_by_id(conn, id).await? else {
        return Ok(None);
    };

    let mut active = existing.into_active_model();
    active.order_id = Set(fields.order_id);
    active.food_id = Set(fields.food_id);
    active.quantity = Set(fields.quantity);
    active.unit_price = Set(fields.unit_price);
    active.updated_at = Set(OffsetDateTime::now_utc());

    Ok(Some(active.update(conn).await?))
}

pub async fn delete<C: ConnectionTrait>(conn: &C, id: &str) -> Result<bool, AppError> {
    let result = order_items::Entity::delete_by_id(id.to_string())
        .exec(conn)
        .await?;
    Ok(super::deleted(result))
}
