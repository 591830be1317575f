use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryOrder, Set};
use time::OffsetDateTime;

use crate::entities::menus;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct MenuFields {
    pub name: String,
    pub category: String,
    pub start_date: Option<OffsetDateTime>,
    pub end_date: Option<OffsetDateTime>,
}

pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<menus::Model>, AppError> {
    Ok(menus::Entity::find()
        .order_by_asc(menus::Column::CreatedAt)
        .all(conn)
        .await?)
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: &str,
) -> Result<Option<menus::Model>, AppError> {
    Ok(menus::Entity::find_by_id(id.to_string()).one(conn).await?)
}

pub async fn insert<C: ConnectionTrait>(
    conn: &C,
    fields: MenuFields,
) -> Result<menus::Model, AppError> {
    let now = OffsetDateTime::now_utc();
    let active = menus::ActiveModel {
        id: Set(super::new_id()),
        name: Set(fields.name),
        category: Set(fields.category),
        start_date: Set(fields.start_date),
        end_date: Set(fields.end_date),
        created_at: Set(now),
        updated_at: Set(now),
    };

    Ok(active.insert(conn).await?)
}

pub async fn update<C: ConnectionTrait>(
    conn: &C,
    id: &str,
    fields: MenuFields,
) -> Result<Option<menus::Model>, AppError> {
    let Some(existing) = find_by_id(conn, id).await? else {
        return Ok(None);
    };

    let mut active = existing.into_active_model();
    active.name = Set(fields.name);
    active.category = Set(fields.category);
    active.start_date = Set(fields.start_date);
    active.end_date = Set(fields.end_date);
    active.updated_at = Set(OffsetDateTime::now_utc());

    Ok(Some(active.update(conn).await?))
}

pub async fn delete<C: ConnectionTrait>(conn: &C, id: &str) -> Result<bool, AppError> {
    let result = menus::Entity::delete_by_id(id.to_string()).exec(conn).await?;
    Ok(super::deleted(result))
}
