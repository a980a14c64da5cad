// src/error.rs
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    SqlxMigrate(#[from] sqlx::migrate::MigrateError),

    #[error("Missing environment variable: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Not authorized")]
    Unauthorized,

    #[error("Admin access required")]
    Forbidden,

    #[error("Failed to process password")]
    PasswordHashing,

    #[error("Unexpected internal error")]
    Internal,
}

impl AppError {
    /// Maps a unique-constraint failure from the driver to `Conflict`,
    /// leaving every other database error untouched.
    pub fn conflict_on_unique(err: sqlx::Error, message: &str) -> Self {
        match &err {
            sqlx::Error::Database(db_err)
                if db_err.kind() == sqlx::error::ErrorKind::UniqueViolation =>
            {
                AppError::Conflict(message.to_string())
            }
            _ => AppError::Sqlx(err),
        }
    }

    /// Maps a foreign-key failure (deleting a row still referenced by
    /// service records) to `Conflict`.
    pub fn conflict_on_foreign_key(err: sqlx::Error, message: &str) -> Self {
        match &err {
            sqlx::Error::Database(db_err)
                if db_err.kind() == sqlx::error::ErrorKind::ForeignKeyViolation =>
            {
                AppError::Conflict(message.to_string())
            }
            _ => AppError::Sqlx(err),
        }
    }
}

// All handler-level errors become a JSON `{message}` body with the
// corresponding status; detailed causes only go to the server log.
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::Sqlx(_)
            | AppError::SqlxMigrate(_)
            | AppError::EnvVar(_)
            | AppError::PasswordHashing
            | AppError::Internal => {
                tracing::error!("internal error: {:?}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            // Duplicate unique keys are reported as 400, which is what the
            // frontend expects.
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::InvalidCredentials | AppError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            AppError::Forbidden => (StatusCode::FORBIDDEN, self.to_string()),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

pub type AppResult<T = ()> = Result<T, AppError>;
