use thiserror::Error;

/// Failures of the admin register / login / token checks.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid admin input: {0}")]
    Validation(String),
    #[error("username already taken")]
    Conflict,
    /// Unknown username and wrong password both end up here.
    #[error("invalid credentials")]
    Unauthorized,
    #[error("password hash failure: {0}")]
    HashError(String),
    #[error("bad token: {0}")]
    TokenError(String),
    #[error("admin store failure: {0}")]
    Repository(String),
}

impl AuthError {
    /// Numeric code written to logs next to the message.
    pub fn code(&self) -> u16 {
        use AuthError::*;
        match self {
            Validation(_) => 1001,
            Conflict => 1002,
            Unauthorized => 1004,
            HashError(_) => 1101,
            TokenError(_) => 1102,
            Repository(_) => 1200,
        }
    }
}
