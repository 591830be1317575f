use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Users {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    PasswordHash,
    Phone,
    UserType,
    Token,
    RefreshToken,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Menus {
    Table,
    Id,
    Name,
    Category,
    StartDate,
    EndDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Foods {
    Table,
    Id,
    Name,
    Price,
    FoodImage,
    MenuId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Tables {
    Table,
    Id,
    TableNumber,
    Capacity,
    IsAvailable,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Orders {
    Table,
    Id,
    TableId,
    OrderDate,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum OrderItems {
    Table,
    Id,
    OrderId,
    FoodId,
    Quantity,
    UnitPrice,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Invoices {
    Table,
    Id,
    OrderId,
    PaymentMethod,
    TotalAmount,
    PaymentStatus,
    CreatedAt,
    UpdatedAt,
}

fn timestamp_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // users
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Users::FirstName).string().not_null())
                    .col(ColumnDef::new(Users::LastName).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Phone).string().not_null())
                    .col(ColumnDef::new(Users::UserType).string().not_null())
                    .col(ColumnDef::new(Users::Token).text().null())
                    .col(ColumnDef::new(Users::RefreshToken).text().null())
                    .col(timestamp_col(Users::CreatedAt))
                    .col(timestamp_col(Users::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Email is the login key
        manager
            .create_index(
                Index::create()
                    .name("idx_users_email_unique")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // menus
        manager
            .create_table(
                Table::create()
                    .table(Menus::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Menus::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Menus::Name).string().not_null())
                    .col(ColumnDef::new(Menus::Category).string().not_null())
                    .col(
                        ColumnDef::new(Menus::StartDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Menus::EndDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(timestamp_col(Menus::CreatedAt))
                    .col(timestamp_col(Menus::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // foods
        manager
            .create_table(
                Table::create()
                    .table(Foods::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Foods::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Foods::Name).string().not_null())
                    .col(ColumnDef::new(Foods::Price).double().not_null())
                    .col(ColumnDef::new(Foods::FoodImage).string().not_null())
                    .col(ColumnDef::new(Foods::MenuId).string().not_null())
                    .col(timestamp_col(Foods::CreatedAt))
                    .col(timestamp_col(Foods::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_foods_menu_id")
                    .table(Foods::Table)
                    .col(Foods::MenuId)
                    .to_owned(),
            )
            .await?;

        // tables
        manager
            .create_table(
                Table::create()
                    .table(Tables::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tables::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Tables::TableNumber).integer().not_null())
                    .col(ColumnDef::new(Tables::Capacity).integer().not_null())
                    .col(
                        ColumnDef::new(Tables::IsAvailable)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(timestamp_col(Tables::CreatedAt))
                    .col(timestamp_col(Tables::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // orders
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Orders::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Orders::TableId).string().not_null())
                    .col(timestamp_col(Orders::OrderDate))
                    .col(ColumnDef::new(Orders::Status).string().not_null())
                    .col(timestamp_col(Orders::CreatedAt))
                    .col(timestamp_col(Orders::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_orders_table_id")
                    .table(Orders::Table)
                    .col(Orders::TableId)
                    .to_owned(),
            )
            .await?;

        // order_items
        manager
            .create_table(
                Table::create()
                    .table(OrderItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrderItems::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OrderItems::OrderId).string().not_null())
                    .col(ColumnDef::new(OrderItems::FoodId).string().not_null())
                    .col(ColumnDef::new(OrderItems::Quantity).integer().not_null())
                    .col(ColumnDef::new(OrderItems::UnitPrice).double().not_null())
                    .col(timestamp_col(OrderItems::CreatedAt))
                    .col(timestamp_col(OrderItems::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_order_items_order_id")
                    .table(OrderItems::Table)
                    .col(OrderItems::OrderId)
                    .to_owned(),
            )
            .await?;

        // invoices
        manager
            .create_table(
                Table::create()
                    .table(Invoices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Invoices::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Invoices::OrderId).string().not_null())
                    .col(ColumnDef::new(Invoices::PaymentMethod).string().not_null())
                    .col(ColumnDef::new(Invoices::TotalAmount).double().not_null())
                    .col(ColumnDef::new(Invoices::PaymentStatus).string().not_null())
                    .col(timestamp_col(Invoices::CreatedAt))
                    .col(timestamp_col(Invoices::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_invoices_order_id")
                    .table(Invoices::Table)
                    .col(Invoices::OrderId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ix_invoices_order_id")
                    .table(Invoices::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Invoices::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_order_items_order_id")
                    .table(OrderItems::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(OrderItems::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_orders_table_id")
                    .table(Orders::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Tables::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_foods_menu_id")
                    .table(Foods::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Foods::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Menus::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_users_email_unique")
                    .table(Users::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}
