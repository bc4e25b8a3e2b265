use serde::{Deserialize, Serialize};

/// Registration input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterInput {
    pub username: String,
    pub password: String,
}

/// Login input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Domain admin (business view, no secret material)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthAdmin {
    pub id: i32,
    pub username: String,
}

/// Stored credentials (hashed)
#[derive(Debug, Clone)]
pub struct Credentials {
    pub admin: AuthAdmin,
    pub password_hash: String,
}

/// Login result (session)
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub admin: AuthAdmin,
    pub token: String,
}
