use async_trait::async_trait;

use super::domain::{AuthAdmin, Credentials};
use super::errors::AuthError;

/// Repository abstraction for admin persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_credentials(&self, username: &str) -> Result<Option<Credentials>, AuthError>;
    async fn create_admin(&self, username: &str, password_hash: String) -> Result<AuthAdmin, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAuthRepository {
        admins: Mutex<HashMap<String, Credentials>>, // key: username
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_credentials(&self, username: &str) -> Result<Option<Credentials>, AuthError> {
            let admins = self.admins.lock().map_err(|e| AuthError::Repository(e.to_string()))?;
            Ok(admins.get(username).cloned())
        }

        async fn create_admin(&self, username: &str, password_hash: String) -> Result<AuthAdmin, AuthError> {
            let mut admins = self.admins.lock().map_err(|e| AuthError::Repository(e.to_string()))?;
            if admins.contains_key(username) {
                return Err(AuthError::Conflict);
            }
            let admin = AuthAdmin { id: admins.len() as i32 + 1, username: username.to_string() };
            admins.insert(username.to_string(), Credentials { admin: admin.clone(), password_hash });
            Ok(admin)
        }
    }
}
