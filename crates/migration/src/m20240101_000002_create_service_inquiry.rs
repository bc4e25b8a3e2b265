//! Create `service_inquiry` table.
//!
//! `status` is the only column updated after insert.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceInquiry::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceInquiry::Id))
                    .col(string_len(ServiceInquiry::Name, 128))
                    .col(string_len(ServiceInquiry::Email, 255))
                    .col(string_len(ServiceInquiry::ServiceType, 64))
                    .col(text(ServiceInquiry::Requirements))
                    .col(string_len(ServiceInquiry::Status, 32).default("pending"))
                    .col(timestamp_with_time_zone(ServiceInquiry::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceInquiry::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceInquiry { Table, Id, Name, Email, ServiceType, Requirements, Status, CreatedAt }
