// src/web/auth_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::user::{LoginPayload, PublicUser, RegisterPayload},
    services::{auth_service, user_service},
    state::AppState,
    web::mw_auth::CurrentUser,
};
use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

// POST /api/auth/register
//
// Creates the account but deliberately returns no token; the caller must
// log in afterwards.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> AppResult<impl IntoResponse> {
    let new_user = payload.validate()?;
    tracing::info!("Registration attempt for '{}'", new_user.username);

    let password_hash = auth_service::hash_password(&new_user.password).await?;
    let id = user_service::create_user(
        &state.db_pool,
        &new_user.username,
        &password_hash,
        &new_user.full_name,
        new_user.role,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully", "id": id })),
    ))
}

// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> AppResult<impl IntoResponse> {
    let (username, password) = payload.validate()?;
    tracing::info!("Login attempt for '{}'", username);

    // Unknown user and wrong password produce the same response, so the
    // endpoint does not leak which usernames exist.
    let user = user_service::find_by_username(&state.db_pool, &username)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !auth_service::verify_password(&password, &user.password_hash).await? {
        tracing::warn!("Wrong password for '{}'", username);
        return Err(AppError::InvalidCredentials);
    }

    let token = auth_service::issue_token(&user, &state.auth)?;
    tracing::info!("Login succeeded for '{}'", user.username);

    Ok(Json(json!({
        "token": token,
        "user": PublicUser::from(user),
    })))
}

// GET /api/auth/me
pub async fn me(Extension(current): Extension<CurrentUser>) -> Json<PublicUser> {
    Json(PublicUser::from(current.0))
}

// GET /api/auth/users (admin only)
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<PublicUser>>> {
    let users = user_service::list_users(&state.db_pool).await?;
    Ok(Json(users))
}
