//! Signed identity tokens issued on successful login.
//!
//! Tokens are HS256-signed JWTs containing a [`Claims`] payload. No route
//! in this service requires one; [`validate_token`] exists for clients of
//! the library and for tests.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use showtime_core::types::DbId;
use uuid::Uuid;

use crate::config::ConfigError;

/// Payload of a login token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Storage key of the account that logged in, as a decimal string.
    pub sub: String,
    pub username: String,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
    /// Issue time, seconds since the Unix epoch.
    pub iat: i64,
    /// Random per-login identifier.
    pub jti: String,
}

/// Configuration for token signing.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HS256 key.
    pub secret: String,
    /// Minutes until a token expires.
    pub expiry_mins: i64,
}

/// Default token expiry in minutes.
const DEFAULT_EXPIRY_MINS: i64 = 60;

impl JwtConfig {
    /// Read the signing key and lifetime from the environment.
    ///
    /// | Env Var           | Required | Default |
    /// |-------------------|----------|---------|
    /// | `JWT_SECRET`      | **yes**  | --      |
    /// | `JWT_EXPIRY_MINS` | no       | `60`    |
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let expiry_mins = match std::env::var("JWT_EXPIRY_MINS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("JWT_EXPIRY_MINS", raw))?,
            Err(_) => DEFAULT_EXPIRY_MINS,
        };

        Ok(Self {
            secret,
            expiry_mins,
        })
    }
}

/// Sign a token for an account that just logged in.
pub fn generate_token(
    user_id: DbId,
    username: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let issued_at = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_owned(),
        exp: issued_at + config.expiry_mins * 60,
        iat: issued_at,
        jti: Uuid::new_v4().to_string(),
    };
    let key = EncodingKey::from_secret(config.secret.as_bytes());

    encode(&Header::new(Algorithm::HS256), &claims, &key)
}

/// Check the signature and expiry of a token and return its [`Claims`].
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(config.secret.as_bytes());
    decode::<Claims>(token, &key, &Validation::new(Algorithm::HS256)).map(|data| data.claims)
}
