use sea_orm::DatabaseConnection;

use models::errors::ModelError;

use crate::auth::domain::{AuthAdmin, Credentials};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_credentials(&self, username: &str) -> Result<Option<Credentials>, AuthError> {
        let res = models::admin::find_by_username(&self.db, username)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(|a| Credentials {
            admin: AuthAdmin { id: a.id, username: a.username },
            password_hash: a.password,
        }))
    }

    async fn create_admin(&self, username: &str, password_hash: String) -> Result<AuthAdmin, AuthError> {
        let created = models::admin::create(&self.db, username, password_hash)
            .await
            .map_err(|e| match e {
                ModelError::Validation(msg) => AuthError::Validation(msg),
                ModelError::Conflict(_) => AuthError::Conflict,
                ModelError::Db(msg) => AuthError::Repository(msg),
            })?;
        Ok(AuthAdmin { id: created.id, username: created.username })
    }
}
