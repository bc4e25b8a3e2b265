use std::sync::Arc;

use argon2::{Argon2, password_hash::{PasswordHasher, PasswordVerifier, SaltString}, PasswordHash};
use chrono::Duration;
use rand::rngs::OsRng;
use tracing::{info, debug, warn, instrument};

use super::domain::{RegisterInput, LoginInput, AuthAdmin, AuthSession};
use super::errors::AuthError;
use super::repository::AuthRepository;
use super::token::{self, Claims};

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
}

impl From<&configs::AuthConfig> for AuthConfig {
    fn from(cfg: &configs::AuthConfig) -> Self {
        let minutes = cfg.token_ttl_minutes.clamp(1, configs::MAX_TOKEN_TTL_MINUTES);
        let token_ttl = Duration::try_minutes(minutes).unwrap_or_else(|| Duration::minutes(15));
        Self { jwt_secret: cfg.jwt_secret.clone(), token_ttl }
    }
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
    /// Verified against on unknown usernames so both login failures cost one Argon2 check.
    dummy_hash: Option<String>,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self {
        let salt = SaltString::generate(&mut OsRng);
        let dummy_hash = Argon2::default()
            .hash_password(b"not-a-real-admin-password", &salt)
            .map(|h| h.to_string())
            .ok();
        Self { repo, cfg, dummy_hash }
    }

    /// Register a new admin with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::RegisterInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig { jwt_secret: "secret".into(), token_ttl: chrono::Duration::minutes(15) });
    /// let input = RegisterInput { username: "root".into(), password: "Secret123".into() };
    /// let admin = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(admin.username, "root");
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn register(&self, input: RegisterInput) -> Result<AuthAdmin, AuthError> {
        let username = models::admin::validate_username(&input.username)
            .map_err(|e| AuthError::Validation(e.to_string()))?;
        if input.password.trim().is_empty() {
            return Err(AuthError::Validation("password required".into()));
        }
        if let Some(existing) = self.repo.find_credentials(&username).await? {
            debug!("admin exists: {}", existing.admin.username);
            return Err(AuthError::Conflict);
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(input.password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashError(e.to_string()))?
            .to_string();

        let admin = self.repo.create_admin(&username, hash).await?;
        info!(admin_id = admin.id, username = %admin.username, "admin_registered");
        Ok(admin)
    }

    /// Authenticate an admin and issue a time-bound token.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::{RegisterInput, LoginInput};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig { jwt_secret: "secret".into(), token_ttl: chrono::Duration::minutes(15) });
    /// let _ = tokio_test::block_on(svc.register(RegisterInput { username: "root".into(), password: "Passw0rd".into() }));
    /// let session = tokio_test::block_on(svc.login(LoginInput { username: "root".into(), password: "Passw0rd".into() })).unwrap();
    /// assert_eq!(session.admin.username, "root");
    /// assert!(!session.token.is_empty());
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let Some(cred) = self.repo.find_credentials(input.username.trim()).await? else {
            self.verify_against_dummy(&input.password);
            warn!("login_unknown_admin");
            return Err(AuthError::Unauthorized);
        };

        let parsed = PasswordHash::new(&cred.password_hash).map_err(|e| AuthError::HashError(e.to_string()))?;
        if Argon2::default().verify_password(input.password.as_bytes(), &parsed).is_err() {
            warn!(admin_id = cred.admin.id, "login_wrong_password");
            return Err(AuthError::Unauthorized);
        }

        let token = token::issue(&self.cfg.jwt_secret, &cred.admin, self.cfg.token_ttl)?;
        info!(admin_id = cred.admin.id, "admin_logged_in");
        Ok(AuthSession { admin: cred.admin, token })
    }

    fn verify_against_dummy(&self, password: &str) -> bool {
        let Some(parsed) = self.dummy_hash.as_deref().and_then(|h| PasswordHash::new(h).ok()) else { return false };
        Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok()
    }

    /// Validate a bearer token issued by [`AuthService::login`].
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        token::verify(&self.cfg.jwt_secret, token)
    }
}
