//! Salted PBKDF2-HMAC-SHA256 password hashing.
//!
//! Stored form: `pbkdf2-sha256$<rounds>$<salt hex>$<hash hex>`. The round
//! count travels with the hash so it can be raised without invalidating
//! existing accounts.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use sha2::Sha256;

pub const DEFAULT_HASH_ROUNDS: u32 = 100_000;

const SCHEME: &str = "pbkdf2-sha256";
const SALT_LEN: usize = 16;
const HASH_LEN: usize = 32;

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    rounds: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_ROUNDS)
    }
}

impl PasswordHasher {
    pub fn new(rounds: u32) -> Self {
        Self {
            rounds: rounds.max(1),
        }
    }

    pub fn hash(&self, password: &str) -> String {
        let salt: [u8; SALT_LEN] = rand::random();
        let hash = derive(password, &salt, self.rounds);

        format!(
            "{}${}${}${}",
            SCHEME,
            self.rounds,
            hex::encode(salt),
            hex::encode(hash)
        )
    }

    /// Returns `Ok(false)` on a wrong password, `Err` only if `stored` is not
    /// a hash this module produced.
    #[track_caller]
    pub fn verify(&self, password: &str, stored: &str) -> AuthErrorResult<bool> {
        let parts: Vec<&str> = stored.split('$').collect();
        let [scheme, rounds, salt, hash] = parts.as_slice() else {
            return Err(malformed("expected four '$'-separated fields"));
        };

        if *scheme != SCHEME {
            return Err(malformed(format!("unsupported scheme '{}'", scheme)));
        }

        let rounds: u32 = rounds
            .parse()
            .map_err(|e| malformed(format!("invalid round count: {}", e)))?;
        let salt = hex::decode(salt).map_err(|e| malformed(format!("invalid salt: {}", e)))?;
        let expected = hex::decode(hash).map_err(|e| malformed(format!("invalid hash: {}", e)))?;

        let actual = derive(password, &salt, rounds);

        Ok(constant_time_eq(&actual, &expected))
    }
}

fn derive(password: &str, salt: &[u8], rounds: u32) -> [u8; HASH_LEN] {
    let mut out = [0u8; HASH_LEN];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, rounds, &mut out);
    out
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |diff, (x, y)| diff | (x ^ y)) == 0
}

#[track_caller]
fn malformed(message: impl Into<String>) -> AuthError {
    AuthError::MalformedHash {
        message: message.into(),
        location: ErrorLocation::from(Location::caller()),
    }
}
