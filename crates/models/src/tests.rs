use configs::DatabaseConfig;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::{admin, contact, db, errors::ModelError, service_inquiry};

/// Setup test database with migrations
async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    db::connect_and_migrate(&DatabaseConfig::in_memory()).await
}

fn sample_contact() -> contact::NewContact {
    contact::NewContact {
        name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        phone: Some("555-0100".into()),
        message: "Please call me back".into(),
    }
}

fn sample_inquiry() -> service_inquiry::NewServiceInquiry {
    service_inquiry::NewServiceInquiry {
        name: "Grace".into(),
        email: "grace@example.com".into(),
        service_type: "web".into(),
        requirements: "A landing page".into(),
    }
}

#[tokio::test]
async fn test_contact_create_and_read() -> anyhow::Result<()> {
    let db = setup_test_db().await?;

    let created = contact::create(&db, &sample_contact()).await?;
    assert!(created.id > 0);
    assert_eq!(created.phone.as_deref(), Some("555-0100"));

    let found = contact::Entity::find_by_id(created.id).one(&db).await?;
    let found = found.expect("contact row");
    assert_eq!(found.name, "Ada Lovelace");
    assert_eq!(found.message, "Please call me back");
    Ok(())
}

#[tokio::test]
async fn test_contact_without_phone() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    let input = contact::NewContact { phone: None, ..sample_contact() };
    let created = contact::create(&db, &input).await?;
    assert_eq!(created.phone, None);
    Ok(())
}

#[tokio::test]
async fn test_contact_validation_leaves_no_row() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    let input = contact::NewContact { message: "  ".into(), ..sample_contact() };
    let err = contact::create(&db, &input).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));

    let input = contact::NewContact { email: "not-an-email".into(), ..sample_contact() };
    assert!(contact::create(&db, &input).await.is_err());

    assert_eq!(contact::Entity::find().count(&db).await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_inquiry_defaults_to_pending() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    let created = service_inquiry::create(&db, &sample_inquiry()).await?;
    assert_eq!(created.status, service_inquiry::DEFAULT_STATUS);

    let second = service_inquiry::create(&db, &sample_inquiry()).await?;
    assert!(second.id > created.id);
    Ok(())
}

#[tokio::test]
async fn test_inquiry_requires_service_type() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    let input = service_inquiry::NewServiceInquiry { service_type: "".into(), ..sample_inquiry() };
    assert!(matches!(service_inquiry::create(&db, &input).await, Err(ModelError::Validation(_))));
    Ok(())
}

#[tokio::test]
async fn test_admin_username_unique() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    let a = admin::create(&db, "root", "$argon2id$fake".into()).await?;
    assert_eq!(a.username, "root");

    let found = admin::find_by_username(&db, "root").await?;
    assert_eq!(found.map(|m| m.id), Some(a.id));
    assert!(admin::find_by_username(&db, "nobody").await?.is_none());

    // unique index rejects the duplicate at the database level
    let dup = admin::create(&db, "root", "$argon2id$other".into()).await;
    assert!(matches!(dup, Err(ModelError::Conflict(_))));
    Ok(())
}

#[tokio::test]
async fn test_admin_serialization_hides_password() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    let a = admin::create(&db, "ops", "$argon2id$hash".into()).await?;
    let v = serde_json::to_value(&a)?;
    assert!(v.get("password").is_none());
    assert_eq!(v["username"], "ops");
    Ok(())
}
