use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ServiceInquiry: admins triage by status
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_service_inquiry_status")
                    .table(ServiceInquiry::Table)
                    .col(ServiceInquiry::Status)
                    .to_owned(),
            )
            .await?;

        // Contact: listing by submission time
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_contact_created_at")
                    .table(Contact::Table)
                    .col(Contact::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_service_inquiry_status").table(ServiceInquiry::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_contact_created_at").table(Contact::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ServiceInquiry { Table, Status }

#[derive(DeriveIden)]
enum Contact { Table, CreatedAt }
