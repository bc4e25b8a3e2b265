use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Fields accepted from the contact form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
}

pub async fn create(db: &DatabaseConnection, input: &NewContact) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        name: Set(validate::required("name", &input.name, 128)?),
        email: Set(validate::email(&input.email)?),
        phone: Set(validate::optional("phone", input.phone.as_deref(), 32)?),
        message: Set(validate::text("message", &input.message)?),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(errors::ModelError::from)
}
