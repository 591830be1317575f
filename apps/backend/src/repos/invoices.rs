//! Invoices are never deleted, so there is no `delete` here.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryOrder, Set};
use time::OffsetDateTime;

use crate::entities::invoices;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct InvoiceFields {
    pub order_id: String,
    pub payment_method: String,
    pub total_amount: f64,
    pub payment_status: String,
}

pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<invoices::Model>, AppError> {
    Ok(invoices::Entity::find()
        .order_by_asc(invoices::Column::CreatedAt)
        .all(conn)
        .await?)
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: &str,
) -> Result<Option<invoices::Model>, AppError> {
    Ok(invoices::Entity::find_by_id(id.to_string()).one(conn).await?)
}

pub async fn insert<C: ConnectionTrait>(
    conn: &C,
    fields: InvoiceFields,
) -> Result<invoices::Model, AppError> {
    let now = OffsetDateTime::now_utc();
    let active = invoices::ActiveModel {
        id: Set(super::new_id()),
        order_id: Set(fields.order_id),
        payment_method: Set(fields.payment_method),
        total_amount: Set(fields.total_amount),
        payment_status: Set(fields.payment_status),
        created_at: Set(now),
        updated_at: Set(now),
    };

    Ok(active.insert(conn).await?)
}

pub async fn update<C: ConnectionTrait>(
    conn: &C,
    id: &str,
    fields: InvoiceFields,
) -> Result<Option<invoices::Model>, AppError> {
    let Some(existing) = find_by_id(conn, id).await? else {
        return Ok(None);
    };

    let mut active = existing.into_active_model();
    active.order_id = Set(fields.order_id);
    active.payment_method = Set(fields.payment_method);
    active.total_amount = Set(fields.total_amount);
    active.payment_status = Set(fields.payment_status);
    active.updated_at = Set(OffsetDateTime::now_utc());

    Ok(Some(active.update(conn).await?))
}
