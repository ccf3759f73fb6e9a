use sea_orm_migration::prelude::*;

use crate::m20220101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Ticket::Table)
                .if_not_exists()
                .col(ColumnDef::new(Ticket::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Ticket::UserId).uuid().not_null())
                .col(ColumnDef::new(Ticket::Product).string().not_null())
                .col(ColumnDef::new(Ticket::Description).text().not_null())
                .col(ColumnDef::new(Ticket::Status).string_len(16).not_null().default("new"))
                .col(ColumnDef::new(Ticket::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Ticket::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_ticket_user")
                        .from(Ticket::Table, Ticket::UserId)
                        .to(User::Table, User::Id)
                        .on_update(ForeignKeyAction::Cascade)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_ticket_user")
                .table(Ticket::Table)
                .col(Ticket::UserId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Ticket::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Ticket {
    Table,
    Id,
    UserId,
    Product,
    Description,
    Status,
    CreatedAt,
    UpdatedAt,
}
