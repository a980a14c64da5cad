// src/services/user_service.rs
use crate::{
    error::{AppError, AppResult},
    models::user::{PublicUser, Role, User},
};
use sqlx::SqlitePool;

pub async fn find_by_username(db_pool: &SqlitePool, username: &str) -> AppResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, full_name, role, created_at
        FROM users
        WHERE username = ?1
        "#,
    )
    .bind(username)
    .fetch_optional(db_pool)
    .await?;
    Ok(user)
}

pub async fn find_by_id(db_pool: &SqlitePool, user_id: i64) -> AppResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, full_name, role, created_at
        FROM users
        WHERE id = ?1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db_pool)
    .await?;
    Ok(user)
}

/// Inserts a new user and returns its id. The store's UNIQUE constraint on
/// `username` is the single source of truth for duplicates.
pub async fn create_user(
    db_pool: &SqlitePool,
    username: &str,
    password_hash: &str,
    full_name: &str,
    role: Role,
) -> AppResult<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (username, password_hash, full_name, role)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .bind(full_name)
    .bind(role)
    .execute(db_pool)
    .await
    .map_err(|e| {
        AppError::conflict_on_unique(e, "A user with this username already exists")
    })?;

    let id = result.last_insert_rowid();
    tracing::info!("Created user '{}' (id {})", username, id);
    Ok(id)
}

/// All users without their password hashes, oldest account first.
pub async fn list_users(db_pool: &SqlitePool) -> AppResult<Vec<PublicUser>> {
    let users = sqlx::query_as::<_, PublicUser>(
        r#"
        SELECT id, username, full_name, role, created_at
        FROM users
        ORDER BY id ASC
        "#,
    )
    .fetch_all(db_pool)
    .await?;
    Ok(users)
}
