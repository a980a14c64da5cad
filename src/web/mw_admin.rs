// src/web/mw_admin.rs
use crate::{error::AppError, models::user::Role, web::mw_auth::CurrentUser};
use axum::{
    extract::{Extension, Request},
    middleware::Next,
    response::Response,
};

/// Secondary guard for admin-only routes. Runs after `require_auth`, so the
/// request always carries a [`CurrentUser`].
pub async fn require_admin(
    Extension(current): Extension<CurrentUser>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match current.0.role {
        Role::Admin => Ok(next.run(request).await),
        Role::Mechanic => {
            tracing::warn!(
                "admin access denied for '{}' (role mechanic)",
                current.0.username
            );
            Err(AppError::Forbidden)
        }
    }
}
