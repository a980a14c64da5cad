// src/web/service_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::service::{Service, ServicePayload},
    services::catalog_service,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

// GET /api/services
pub async fn list_services(State(state): State<AppState>) -> AppResult<Json<Vec<Service>>> {
    let services = catalog_service::list(&state.db_pool).await?;
    Ok(Json(services))
}

// GET /api/services/{id}
pub async fn get_service(
    State(state): State<AppState>,
    Path(service_code): Path<i64>,
) -> AppResult<Json<Service>> {
    let service = catalog_service::get(&state.db_pool, service_code)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;
    Ok(Json(service))
}

// POST /api/services
pub async fn create_service(
    State(state): State<AppState>,
    Json(payload): Json<ServicePayload>,
) -> AppResult<impl IntoResponse> {
    let (name, price) = payload.validate()?;
    let service_code = catalog_service::create(&state.db_pool, &name, price).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Service created successfully",
            "serviceCode": service_code,
        })),
    ))
}

// PUT /api/services/{id}
pub async fn update_service(
    State(state): State<AppState>,
    Path(service_code): Path<i64>,
    Json(payload): Json<ServicePayload>,
) -> AppResult<impl IntoResponse> {
    let (name, price) = payload.validate()?;

    if catalog_service::get(&state.db_pool, service_code).await?.is_none() {
        return Err(AppError::NotFound("Service not found".to_string()));
    }

    if !catalog_service::update(&state.db_pool, service_code, &name, price).await? {
        return Err(AppError::NotFound("Service not found".to_string()));
    }

    Ok(Json(json!({ "message": "Service updated successfully" })))
}

// DELETE /api/services/{id}
pub async fn delete_service(
    State(state): State<AppState>,
    Path(service_code): Path<i64>,
) -> AppResult<impl IntoResponse> {
    if catalog_service::get(&state.db_pool, service_code).await?.is_none() {
        return Err(AppError::NotFound("Service not found".to_string()));
    }

    if !catalog_service::delete(&state.db_pool, service_code).await? {
        return Err(AppError::NotFound("Service not found".to_string()));
    }

    Ok(Json(json!({ "message": "Service deleted successfully" })))
}
