use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryOrder, Set};
use time::OffsetDateTime;

use crate::entities::tables;
use crate::error::AppError;

/// `is_available: None` means "true" on insert and "unchanged" on update.
#[derive(Debug, Clone)]
pub struct TableFields {
    pub table_number: i32,
    pub capacity: i32,
    pub is_available: Option<bool>,
}

pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<tables::Model>, AppError> {
    Ok(tables::Entity::find()
        .order_by_asc(tables::Column::TableNumber)
        .all(conn)
        .await?)
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: &str,
) -> Result<Option<tables::Model>, AppError> {
    Ok(tables::Entity::find_by_id(id.to_string()).one(conn).await?)
}

pub async fn insert<C: ConnectionTrait>(
    conn: &C,
    fields: TableFields,
) -> Result<tables::Model, AppError> {
    let now = OffsetDateTime::now_utc();
    let active = tables::ActiveModel {
        id: Set(super::new_id()),
        table_number: Set(fields.table_number),
        capacity: Set(fields.capacity),
        is_available: Set(fields.is_available.unwrap_or(true)),
        created_at: Set(now),
        updated_at: Set(now),
    };

    Ok(active.insert(conn).await?)
}

pub async fn update<C: ConnectionTrait>(
    conn: &C,
    id: &str,
    fields: TableFields,
) -> Result<Option<tables::Model>, AppError> {
    let Some(existing) = find_by_id(conn, id).await? else {
        return Ok(None);
    };

    let mut active = existing.into_active_model();
    active.table_number = Set(fields.table_number);
    active.capacity = Set(fields.capacity);
    if let Some(is_available) = fields.is_available {
        active.is_available = Set(is_available);
    }
    active.updated_at = Set(OffsetDateTime::now_utc());

    Ok(Some(active.update(conn).await?))
}

pub async fn delete<C: ConnectionTrait>(conn: &C, id: &str) -> Result<bool, AppError> {
    let result = tables::Entity::delete_by_id(id.to_string()).exec(conn).await?;
    Ok(super::deleted(result))
}
