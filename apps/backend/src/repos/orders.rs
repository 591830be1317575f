use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryOrder, Set};
use time::OffsetDateTime;

use crate::entities::orders;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct OrderFields {
    pub table_id: String,
    pub status: String,
}

pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<orders::Model>, AppError> {
    Ok(orders::Entity::find()
        .order_by_asc(orders::Column::OrderDate)
        .all(conn)
        .await?)
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: &str,
) -> Result<Option<orders::Model>, AppError> {
    Ok(orders::Entity::find_by_id(id.to_string()).one(conn).await?)
}

/// `order_date` is the insert time.
pub async fn insert<C: ConnectionTrait>(
    conn: &C,
    fields: OrderFields,
) -> Result<orders::Model, AppError> {
    let now = OffsetDateTime::now_utc();
    let active = orders::ActiveModel {
        id: Set(super::new_id()),
        table_id: Set(fields.table_id),
        order_date: Set(now),
        status: Set(fields.status),
        created_at: Set(now),
        updated_at: Set(now),
    };

    Ok(active.insert(conn).await?)
}

pub async fn update<C: ConnectionTrait>(
    conn: &C,
    id: &str,
    fields: OrderFields,
) -> Result<Option<orders::Model>, AppError> {
    let Some(existing) = find_by_id(conn, id).await? else {
        return Ok(None);
    };

    let mut active = existing.into_active_model();
    active.table_id = Set(fields.table_id);
    active.status = Set(fields.status);
    active.updated_at = Set(OffsetDateTime::now_utc());

    Ok(Some(active.update(conn).await?))
}

pub async fn delete<C: ConnectionTrait>(conn: &C, id: &str) -> Result<bool, AppError> {
    let result = orders::Entity::delete_by_id(id.to_string()).exec(conn).await?;
    Ok(super::deleted(result))
}
