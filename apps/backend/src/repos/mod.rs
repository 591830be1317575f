//! Repository functions, generic over `ConnectionTrait`.
//!
//! Each resource module exposes the same handful of free functions
//! (`list`, `find_by_id`, `insert`, `update`, `delete`). `update` and `delete`
//! report a missing row as `Ok(None)` / `Ok(false)` so handlers can build the
//! resource-specific 404.

pub mod foods;
pub mod invoices;
pub mod menus;
pub mod order_items;
pub mod orders;
pub mod tables;
pub mod users;

use sea_orm::DeleteResult;
use ulid::Ulid;

/// Fresh primary key for a new row.
pub(crate) fn new_id() -> String {
    Ulid::new().to_string()
}

pub(crate) fn deleted(result: DeleteResult) -> bool {
    result.rows_affected > 0
}
