use pm_auth::{JwtValidator, PasswordHasher, TokenIssuer};
use pm_config::{Config, ValidationConfig};

use std::sync::Arc;

use log::{info, warn};
use sqlx::SqlitePool;

/// Shared application state for REST handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// `None` in development mode, where requests name their user via `X-User-Id`
    pub jwt_validator: Option<Arc<JwtValidator>>,
    pub token_issuer: Option<Arc<TokenIssuer>>,
    pub password_hasher: PasswordHasher,
    pub validation: ValidationConfig,
}

impl AppState {
    /// Development-mode state: no session tokens, default hashing and limits.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            jwt_validator: None,
            token_issuer: None,
            password_hasher: PasswordHasher::default(),
            validation: ValidationConfig::default(),
        }
    }

    pub fn from_config(pool: SqlitePool, config: &Config) -> Self {
        let mut state = Self::new(pool);
        state.password_hasher = PasswordHasher::new(config.auth.password_hash_rounds);
        state.validation = config.validation.clone();

        match config.auth.jwt_secret.as_deref() {
            Some(secret) if config.auth.enabled => {
                info!("JWT: HS256 session tokens enabled");
                state = state.with_session_secret(secret.as_bytes(), config.auth.session_ttl_secs);
            }
            _ => warn!("Authentication DISABLED - trusting the X-User-Id header"),
        }

        state
    }

    /// Require bearer tokens signed with `secret` and issue them on sign-in.
    pub fn with_session_secret(mut self, secret: &[u8], ttl_secs: u64) -> Self {
        self.jwt_validator = Some(Arc::new(JwtValidator::with_hs256(secret)));
        self.token_issuer = Some(Arc::new(TokenIssuer::with_hs256(secret, ttl_secs)));
        self
    }

    pub fn auth_enabled(&self) -> bool {
        self.jwt_validator.is_some()
    }
}
