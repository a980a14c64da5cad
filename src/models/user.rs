// src/models/user.rs
use crate::error::{AppError, AppResult};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Closed authorization tier. Stored lowercase in the `users.role` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Mechanic,
}

impl Role {
    pub fn parse(s: &str) -> Option<Role> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "mechanic" => Some(Role::Mechanic),
            _ => None,
        }
    }
}

/// A row from the `users` table, password hash included. Never serialized
/// directly; responses go through [`PublicUser`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: Role,
    pub created_at: NaiveDateTime,
}

/// User projection safe to return to clients.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub role: Role,
    pub created_at: NaiveDateTime,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub username: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<String>,
}

/// A registration request with all fields present and the role resolved.
#[derive(Debug)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
}

impl RegisterPayload {
    pub fn validate(self) -> AppResult<NewUser> {
        let username = required(self.username)?;
        let password = required(self.password)?;
        let full_name = required(self.full_name)?;
        let role_str = required(self.role)?;
        let role = Role::parse(&role_str).ok_or_else(|| {
            AppError::Validation("Role must be either 'admin' or 'mechanic'".to_string())
        })?;
        Ok(NewUser {
            username,
            password,
            full_name,
            role,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginPayload {
    pub fn validate(self) -> AppResult<(String, String)> {
        Ok((required(self.username)?, required(self.password)?))
    }
}

pub(crate) fn required(value: Option<String>) -> AppResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(
            "Please provide all required fields".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_accepts_known_roles_case_insensitively() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("Mechanic"), Some(Role::Mechanic));
        assert_eq!(Role::parse(" ADMIN "), Some(Role::Admin));
        assert_eq!(Role::parse("manager"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn register_payload_rejects_missing_or_blank_fields() {
        let payload = RegisterPayload {
            username: Some("jdoe".into()),
            password: None,
            full_name: Some("John Doe".into()),
            role: Some("mechanic".into()),
        };
        assert!(payload.validate().is_err());

        let payload = RegisterPayload {
            username: Some("   ".into()),
            password: Some("secret".into()),
            full_name: Some("John Doe".into()),
            role: Some("mechanic".into()),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn register_payload_rejects_unknown_role() {
        let payload = RegisterPayload {
            username: Some("jdoe".into()),
            password: Some("secret".into()),
            full_name: Some("John Doe".into()),
            role: Some("supervisor".into()),
        };
        assert!(matches!(
            payload.validate(),
            Err(AppError::Validation(msg)) if msg.contains("Role")
        ));
    }

    #[test]
    fn register_payload_accepts_complete_input() {
        let payload = RegisterPayload {
            username: Some("jdoe".into()),
            password: Some("secret".into()),
            full_name: Some("John Doe".into()),
            role: Some("admin".into()),
        };
        let new_user = payload.validate().unwrap();
        assert_eq!(new_user.role, Role::Admin);
        assert_eq!(new_user.username, "jdoe");
    }
}
