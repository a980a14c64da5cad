// src/web/car_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::car::{Car, CarPayload},
    services::car_service,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

// GET /api/cars
pub async fn list_cars(State(state): State<AppState>) -> AppResult<Json<Vec<Car>>> {
    let cars = car_service::list(&state.db_pool).await?;
    Ok(Json(cars))
}

// GET /api/cars/{plate_number}
pub async fn get_car(
    State(state): State<AppState>,
    Path(plate_number): Path<String>,
) -> AppResult<Json<Car>> {
    let car = car_service::get(&state.db_pool, &plate_number)
        .await?
        .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;
    Ok(Json(car))
}

// POST /api/cars
pub async fn create_car(
    State(state): State<AppState>,
    Json(payload): Json<CarPayload>,
) -> AppResult<impl IntoResponse> {
    let car = payload.into_new_car()?;

    // Explicit duplicate check so the common case gets a clear message
    // instead of a raw constraint error.
    if car_service::get(&state.db_pool, &car.plate_number)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(
            "Car with this plate number already exists".to_string(),
        ));
    }

    car_service::create(&state.db_pool, &car).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Car created successfully",
            "plateNumber": car.plate_number,
        })),
    ))
}

// PUT /api/cars/{plate_number}
pub async fn update_car(
    State(state): State<AppState>,
    Path(plate_number): Path<String>,
    Json(payload): Json<CarPayload>,
) -> AppResult<impl IntoResponse> {
    let update = payload.into_update()?;

    if car_service::get(&state.db_pool, &plate_number).await?.is_none() {
        return Err(AppError::NotFound("Car not found".to_string()));
    }

    if !car_service::update(&state.db_pool, &plate_number, &update).await? {
        return Err(AppError::NotFound("Car not found".to_string()));
    }

    Ok(Json(json!({ "message": "Car updated successfully" })))
}

// DELETE /api/cars/{plate_number}
pub async fn delete_car(
    State(state): State<AppState>,
    Path(plate_number): Path<String>,
) -> AppResult<impl IntoResponse> {
    if car_service::get(&state.db_pool, &plate_number).await?.is_none() {
        return Err(AppError::NotFound("Car not found".to_string()));
    }

    if !car_service::delete(&state.db_pool, &plate_number).await? {
        return Err(AppError::NotFound("Car not found".to_string()));
    }

    Ok(Json(json!({ "message": "Car deleted successfully" })))
}
