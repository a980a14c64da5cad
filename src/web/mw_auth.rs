// src/web/mw_auth.rs
use crate::{
    error::AppError,
    models::user::User,
    services::{auth_service, user_service},
    state::AppState,
};
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

/// The user resolved from the bearer token, inserted into request
/// extensions for handlers and the admin guard.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

/// Rejects the request with 401 unless it carries a valid bearer token
/// whose user still exists. On success the request proceeds with
/// [`CurrentUser`] attached.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers()).ok_or(AppError::Unauthorized)?;
    let claims = auth_service::decode_token(token, &state.auth)?;

    // The token may outlive the account; re-check the store.
    let user = user_service::find_by_id(&state.db_pool, claims.sub)
        .await?
        .ok_or(AppError::Unauthorized)?;

    tracing::debug!("authenticated request for '{}'", user.username);
    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_requires_the_scheme_prefix() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("abc.def.ghi"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }
}
