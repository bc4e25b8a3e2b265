use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, validate};

/// Status assigned to every new inquiry.
pub const DEFAULT_STATUS: &str = "pending";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_inquiry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub service_type: String,
    #[sea_orm(column_type = "Text")]
    pub requirements: String,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewServiceInquiry {
    pub name: String,
    pub email: String,
    pub service_type: String,
    pub requirements: String,
}

pub fn validate_status(status: &str) -> Result<String, errors::ModelError> {
    validate::required("status", status, 32)
}

pub async fn create(db: &DatabaseConnection, input: &NewServiceInquiry) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        name: Set(validate::required("name", &input.name, 128)?),
        email: Set(validate::email(&input.email)?),
        service_type: Set(validate::required("service_type", &input.service_type, 64)?),
        requirements: Set(validate::text("requirements", &input.requirements)?),
        status: Set(DEFAULT_STATUS.to_string()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(errors::ModelError::from)
}
