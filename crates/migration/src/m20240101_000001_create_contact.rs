//! Create `contact` table.
//!
//! Rows are written once by the public contact form and never changed.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(pk_auto(Contact::Id))
                    .col(string_len(Contact::Name, 128))
                    .col(string_len(Contact::Email, 255))
                    .col(string_len_null(Contact::Phone, 32))
                    .col(text(Contact::Message))
                    .col(timestamp_with_time_zone(Contact::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contact::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Contact { Table, Id, Name, Email, Phone, Message, CreatedAt }
