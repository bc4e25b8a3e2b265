use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::info;

use models::contact::{self, Entity as ContactEntity, NewContact};
use crate::errors::ServiceError;

/// Store a contact form submission; validations are in `models::contact`.
pub async fn create_contact(db: &DatabaseConnection, input: &NewContact) -> Result<contact::Model, ServiceError> {
    let created = contact::create(db, input).await?;
    info!(contact_id = created.id, "contact_submitted");
    Ok(created)
}

/// All contacts, oldest first.
pub async fn list_contacts(db: &DatabaseConnection) -> Result<Vec<contact::Model>, ServiceError> {
    let rows = ContactEntity::find()
        .order_by_asc(contact::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}
