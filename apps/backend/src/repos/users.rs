//! Credential store.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
};
use time::OffsetDateTime;

use crate::auth::claims::Role;
use crate::entities::users;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// A user about to be inserted; the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    pub user_type: Role,
    pub token: Option<String>,
    pub refresh_token: Option<String>,
}

pub async fn find_by_email<C: ConnectionTrait>(
    conn: &C,
    email: &str,
) -> Result<Option<users::Model>, AppError> {
    Ok(users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(conn)
        .await?)
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: &str,
) -> Result<Option<users::Model>, AppError> {
    Ok(users::Entity::find_by_id(id.to_string()).one(conn).await?)
}

pub async fn count_by_email<C: ConnectionTrait>(conn: &C, email: &str) -> Result<u64, AppError> {
    Ok(users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .count(conn)
        .await?)
}

/// Insert and return the stored record, id included.
pub async fn insert<C: ConnectionTrait>(conn: &C, user: NewUser) -> Result<users::Model, AppError> {
    let now = OffsetDateTime::now_utc();
    let active = users::ActiveModel {
        id: Set(super::new_id()),
        first_name: Set(user.first_name),
        last_name: Set(user.last_name),
        email: Set(user.email),
        password_hash: Set(user.password_hash),
        phone: Set(user.phone),
        user_type: Set(user.user_type.as_str().to_string()),
        token: Set(user.token),
        refresh_token: Set(user.refresh_token),
        created_at: Set(now),
        updated_at: Set(now),
    };

    Ok(active.insert(conn).await?)
}

/// Overwrite the stored token pair. A missing user is `NotFound`.
pub async fn update_tokens<C: ConnectionTrait>(
    conn: &C,
    id: &str,
    access_token: &str,
    refresh_token: &str,
    updated_at: OffsetDateTime,
) -> Result<(), AppError> {
    let result = users::Entity::update_many()
        .col_expr(users::Column::Token, access_token.into())
        .col_expr(users::Column::RefreshToken, refresh_token.into())
        .col_expr(users::Column::UpdatedAt, updated_at.into())
        .filter(users::Column::Id.eq(id))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::not_found(ErrorCode::UserNotFound, "User not found"));
    }
    Ok(())
}
