use sea_orm_migration::prelude::*;

use crate::m20220101_000002_create_ticket_table::Ticket;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Note::Table)
                .if_not_exists()
                .col(ColumnDef::new(Note::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Note::TicketId).uuid().not_null())
                .col(ColumnDef::new(Note::UserId).uuid().not_null())
                .col(ColumnDef::new(Note::Text).text().not_null())
                .col(ColumnDef::new(Note::IsStaff).boolean().not_null().default(false))
                .col(ColumnDef::new(Note::StaffId).uuid().null())
                .col(ColumnDef::new(Note::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Note::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_note_ticket")
                        .from(Note::Table, Note::TicketId)
                        .to(Ticket::Table, Ticket::Id)
                        .on_update(ForeignKeyAction::Cascade)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_note_ticket")
                .table(Note::Table)
                .col(Note::TicketId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Note::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Note {
    Table,
    Id,
    TicketId,
    UserId,
    Text,
    IsStaff,
    StaffId,
    CreatedAt,
    UpdatedAt,
}
