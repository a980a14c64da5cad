// src/services/auth_service.rs
use crate::{
    error::{AppError, AppResult},
    models::user::{Role, User},
    state::AuthConfig,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{Header, Validation};
use serde::{Deserialize, Serialize};

/// Checks a password against its stored bcrypt hash.
pub async fn verify_password(password: &str, stored_hash: &str) -> AppResult<bool> {
    let password = password.to_string();
    let stored_hash = stored_hash.to_string();
    tokio::task::spawn_blocking(move || bcrypt::verify(&password, &stored_hash))
        .await
        .map_err(|e| {
            tracing::error!("spawn_blocking failed (verify_password): {:?}", e);
            AppError::Internal
        })?
        .map_err(|e| {
            tracing::error!("bcrypt verify failed: {:?}", e);
            AppError::PasswordHashing
        })
}

/// Produces a salted bcrypt hash for a new password.
pub async fn hash_password(password: &str) -> AppResult<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || bcrypt::hash(&password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| {
            tracing::error!("spawn_blocking failed (hash_password): {:?}", e);
            AppError::Internal
        })?
        .map_err(|e| {
            tracing::error!("bcrypt hash failed: {:?}", e);
            AppError::PasswordHashing
        })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id the token was issued for.
    pub sub: i64,
    pub username: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Issues a signed HS256 token for the given user. The expiry is embedded
/// in the token and enforced on every request; there is no server-side
/// session store.
pub fn issue_token(user: &User, auth: &AuthConfig) -> AppResult<String> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(auth.expiry_hours);
    let claims = Claims {
        sub: user.id,
        username: user.username.clone(),
        role: user.role,
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };
    jsonwebtoken::encode(&Header::default(), &claims, &auth.encoding_key).map_err(|e| {
        tracing::error!("failed to sign token: {:?}", e);
        AppError::Internal
    })
}

/// Validates a bearer token and returns its claims.
///
/// Malformed tokens (anything other than three dot-separated segments) are
/// rejected up front, before any signature work or user lookup. Signature,
/// structure and expiry failures all collapse into `Unauthorized`.
pub fn decode_token(token: &str, auth: &AuthConfig) -> AppResult<Claims> {
    let mut segments = token.split('.');
    let well_formed = segments.by_ref().take(3).filter(|s| !s.is_empty()).count() == 3
        && segments.next().is_none();
    if !well_formed {
        tracing::debug!("rejected malformed bearer token");
        return Err(AppError::Unauthorized);
    }

    jsonwebtoken::decode::<Claims>(token, &auth.decoding_key, &Validation::default())
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!("token validation failed: {:?}", e);
            AppError::Unauthorized
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn test_config(expiry_hours: i64) -> AuthConfig {
        AuthConfig::new("test-secret-key-for-unit-tests-only", expiry_hours)
    }

    fn test_user() -> User {
        User {
            id: 7,
            username: "jdoe".into(),
            password_hash: "unused".into(),
            full_name: "John Doe".into(),
            role: Role::Mechanic,
            created_at: NaiveDateTime::default(),
        }
    }

    #[tokio::test]
    async fn hash_then_verify_round_trips() {
        let hash = hash_password("hunter2").await.unwrap();
        assert!(verify_password("hunter2", &hash).await.unwrap());
        assert!(!verify_password("hunter3", &hash).await.unwrap());
    }

    #[test]
    fn token_round_trip_preserves_identity() {
        let config = test_config(24);
        let token = issue_token(&test_user(), &config).unwrap();
        let claims = decode_token(&token, &config).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.username, "jdoe");
        assert_eq!(claims.role, Role::Mechanic);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn malformed_tokens_are_rejected_before_decoding() {
        let config = test_config(24);
        for bad in ["", "abc", "a.b", "a.b.c.d", "..", "a..c"] {
            assert!(matches!(
                decode_token(bad, &config),
                Err(AppError::Unauthorized)
            ));
        }
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let config = test_config(24);
        let other = AuthConfig::new("a-completely-different-secret-key", 24);
        let token = issue_token(&test_user(), &other).unwrap();
        assert!(decode_token(&token, &config).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let config = test_config(-2);
        let token = issue_token(&test_user(), &config).unwrap();
        assert!(matches!(
            decode_token(&token, &config),
            Err(AppError::Unauthorized)
        ));
    }
}
