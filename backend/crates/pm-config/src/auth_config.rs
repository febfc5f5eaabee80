use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_PASSWORD_HASH_ROUNDS,
    DEFAULT_SESSION_TTL_SECS, MAX_PASSWORD_HASH_ROUNDS, MIN_JWT_SECRET_LENGTH,
    MIN_PASSWORD_HASH_ROUNDS, MIN_SESSION_TTL_SECS,
};

use serde::Deserialize;

/// Session authentication.
///
/// With `enabled = false` the server trusts the `X-User-Id` header, which is
/// only suitable for local development.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    /// HS256 signing secret, required when enabled
    pub jwt_secret: Option<String>,
    pub session_ttl_secs: u64,
    /// PBKDF2 iterations for newly stored password hashes
    pub password_hash_rounds: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            password_hash_rounds: DEFAULT_PASSWORD_HASH_ROUNDS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.enabled {
            match self.jwt_secret.as_deref() {
                None => {
                    return Err(ConfigError::auth(
                        "auth.enabled requires auth.jwt_secret to be set",
                    ));
                }
                Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_secret must be at least {} characters",
                        MIN_JWT_SECRET_LENGTH
                    )));
                }
                Some(_) => {}
            }
        }

        if self.session_ttl_secs < MIN_SESSION_TTL_SECS {
            return Err(ConfigError::auth(format!(
                "auth.session_ttl_secs must be >= {}, got {}",
                MIN_SESSION_TTL_SECS, self.session_ttl_secs
            )));
        }

        if !(MIN_PASSWORD_HASH_ROUNDS..=MAX_PASSWORD_HASH_ROUNDS)
            .contains(&self.password_hash_rounds)
        {
            return Err(ConfigError::auth(format!(
                "auth.password_hash_rounds must be {}-{}, got {}",
                MIN_PASSWORD_HASH_ROUNDS, MAX_PASSWORD_HASH_ROUNDS, self.password_hash_rounds
            )));
        }

        Ok(())
    }
}
