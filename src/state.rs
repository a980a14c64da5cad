// src/state.rs
use crate::error::AppResult;
use jsonwebtoken::{DecodingKey, EncodingKey};
use sqlx::SqlitePool;

/// Signing material and policy for session tokens. Built once at startup
/// and carried in [`AppState`]; expiry is server-authoritative.
#[derive(Clone)]
pub struct AuthConfig {
    pub encoding_key: EncodingKey,
    pub decoding_key: DecodingKey,
    pub expiry_hours: i64,
}

impl AuthConfig {
    pub fn new(secret: &str, expiry_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry_hours,
        }
    }

    /// Reads `JWT_SECRET` (required) and `JWT_EXPIRY_HOURS` (default 24).
    pub fn from_env() -> AppResult<Self> {
        let secret = std::env::var("JWT_SECRET")?;
        if secret.len() < 32 {
            tracing::warn!("JWT_SECRET is short; use a longer random key");
        }
        let expiry_hours = std::env::var("JWT_EXPIRY_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(24);
        Ok(Self::new(&secret, expiry_hours))
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub auth: AuthConfig,
}

impl axum::extract::FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> SqlitePool {
        state.db_pool.clone()
    }
}

impl axum::extract::FromRef<AppState> for AuthConfig {
    fn from_ref(state: &AppState) -> AuthConfig {
        state.auth.clone()
    }
}
