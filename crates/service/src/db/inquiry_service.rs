use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::info;

use models::service_inquiry::{self, Entity as InquiryEntity, NewServiceInquiry};
use crate::errors::ServiceError;

/// Store a service inquiry with the default status.
pub async fn create_inquiry(db: &DatabaseConnection, input: &NewServiceInquiry) -> Result<service_inquiry::Model, ServiceError> {
    let created = service_inquiry::create(db, input).await?;
    info!(inquiry_id = created.id, service_type = %created.service_type, "inquiry_submitted");
    Ok(created)
}

/// All inquiries, oldest first.
pub async fn list_inquiries(db: &DatabaseConnection) -> Result<Vec<service_inquiry::Model>, ServiceError> {
    let rows = InquiryEntity::find()
        .order_by_asc(service_inquiry::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn get_inquiry(db: &DatabaseConnection, id: i32) -> Result<Option<service_inquiry::Model>, ServiceError> {
    let found = InquiryEntity::find_by_id(id).one(db).await?;
    Ok(found)
}

/// Set the status of inquiry `id`. `None` keeps the current status.
pub async fn update_inquiry_status(
    db: &DatabaseConnection,
    id: i32,
    status: Option<&str>,
) -> Result<service_inquiry::Model, ServiceError> {
    let Some(existing) = get_inquiry(db, id).await? else { return Err(ServiceError::not_found("inquiry")); };
    let Some(status) = status else { return Ok(existing); };
    let status = service_inquiry::validate_status(status)?;
    let mut am: service_inquiry::ActiveModel = existing.into();
    am.status = Set(status);
    let updated = am.update(db).await?;
    info!(inquiry_id = id, status = %updated.status, "inquiry_status_updated");
    Ok(updated)
}

/// Delete an inquiry; returns true if a row was removed.
pub async fn delete_inquiry(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = InquiryEntity::delete_by_id(id).exec(db).await?;
    if res.rows_affected > 0 {
        info!(inquiry_id = id, "inquiry_deleted");
    }
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn input() -> NewServiceInquiry {
        NewServiceInquiry {
            name: "Grace".into(),
            email: "grace@example.com".into(),
            service_type: "consulting".into(),
            requirements: "Two day workshop".into(),
        }
    }

    #[tokio::test]
    async fn inquiry_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let a = create_inquiry(&db, &input()).await?;
        assert_eq!(a.status, "pending");

        let updated = update_inquiry_status(&db, a.id, Some("in_progress")).await?;
        assert_eq!(updated.status, "in_progress");
        let found = get_inquiry(&db, a.id).await?.unwrap();
        assert_eq!(found.status, "in_progress");

        let list_all = list_inquiries(&db).await?;
        assert!(list_all.iter().any(|x| x.id == a.id));

        let deleted = delete_inquiry(&db, a.id).await?;
        assert!(deleted);
        assert!(get_inquiry(&db, a.id).await?.is_none());
        assert!(list_inquiries(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_without_status_keeps_current() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = create_inquiry(&db, &input()).await?;
        let same = update_inquiry_status(&db, a.id, None).await?;
        assert_eq!(same.status, "pending");
        Ok(())
    }

    #[tokio::test]
    async fn missing_inquiry_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(matches!(update_inquiry_status(&db, 999, Some("done")).await, Err(ServiceError::NotFound(_))));
        assert!(!delete_inquiry(&db, 999).await?);
        Ok(())
    }

    #[tokio::test]
    async fn blank_status_rejected() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = create_inquiry(&db, &input()).await?;
        assert!(matches!(update_inquiry_status(&db, a.id, Some("   ")).await, Err(ServiceError::Validation(_))));
        Ok(())
    }
}
