// src/web/record_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::service_record::{Bill, ServiceRecordDetail, ServiceRecordPayload},
    services::{car_service, catalog_service, record_service},
    state::AppState,
    web::mw_auth::CurrentUser,
};
use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

// GET /api/service-records
pub async fn list_records(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ServiceRecordDetail>>> {
    let records = record_service::list(&state.db_pool).await?;
    Ok(Json(records))
}

// GET /api/service-records/{id}
pub async fn get_record(
    State(state): State<AppState>,
    Path(record_number): Path<i64>,
) -> AppResult<Json<ServiceRecordDetail>> {
    let record = record_service::get(&state.db_pool, record_number)
        .await?
        .ok_or_else(|| AppError::NotFound("Service record not found".to_string()))?;
    Ok(Json(record))
}

// POST /api/service-records
//
// The receiving user is always the authenticated caller, never taken from
// the request body.
pub async fn create_record(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(payload): Json<ServiceRecordPayload>,
) -> AppResult<impl IntoResponse> {
    let input = payload.validate()?;

    ensure_references_exist(&state, &input.plate_number, input.service_code).await?;

    let record_number = record_service::create(
        &state.db_pool,
        record_service::NewServiceRecord {
            plate_number: input.plate_number,
            service_code: input.service_code,
            amount_paid: input.amount_paid,
            service_date: input.service_date,
            payment_date: input.payment_date,
            received_by: current.0.id,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Service record created successfully",
            "recordId": record_number,
        })),
    ))
}

// PUT /api/service-records/{id}
pub async fn update_record(
    State(state): State<AppState>,
    Path(record_number): Path<i64>,
    Json(payload): Json<ServiceRecordPayload>,
) -> AppResult<impl IntoResponse> {
    let input = payload.validate()?;

    let existing = record_service::get(&state.db_pool, record_number)
        .await?
        .ok_or_else(|| AppError::NotFound("Service record not found".to_string()))?;

    ensure_references_exist(&state, &input.plate_number, input.service_code).await?;

    // Absent payment date keeps the stored one rather than resetting it.
    let updated = record_service::update(
        &state.db_pool,
        record_number,
        record_service::ServiceRecordUpdate {
            plate_number: input.plate_number,
            service_code: input.service_code,
            amount_paid: input.amount_paid,
            payment_date: input.payment_date.or(Some(existing.payment_date)),
        },
    )
    .await?;

    if !updated {
        return Err(AppError::NotFound("Service record not found".to_string()));
    }

    Ok(Json(json!({ "message": "Service record updated successfully" })))
}

// DELETE /api/service-records/{id}
pub async fn delete_record(
    State(state): State<AppState>,
    Path(record_number): Path<i64>,
) -> AppResult<impl IntoResponse> {
    if record_service::get(&state.db_pool, record_number).await?.is_none() {
        return Err(AppError::NotFound("Service record not found".to_string()));
    }

    if !record_service::delete(&state.db_pool, record_number).await? {
        return Err(AppError::NotFound("Service record not found".to_string()));
    }

    Ok(Json(json!({ "message": "Service record deleted successfully" })))
}

// GET /api/service-records/{id}/bill
pub async fn get_bill(
    State(state): State<AppState>,
    Path(record_number): Path<i64>,
) -> AppResult<Json<Bill>> {
    let bill = record_service::generate_bill(&state.db_pool, record_number)
        .await?
        .ok_or_else(|| AppError::NotFound("Service record not found".to_string()))?;
    Ok(Json(bill))
}

/// A record must point at an existing car and catalog entry, both at
/// creation and update time.
async fn ensure_references_exist(
    state: &AppState,
    plate_number: &str,
    service_code: i64,
) -> AppResult<()> {
    if car_service::get(&state.db_pool, plate_number).await?.is_none() {
        return Err(AppError::NotFound("Car not found".to_string()));
    }
    if catalog_service::get(&state.db_pool, service_code).await?.is_none() {
        return Err(AppError::NotFound("Service not found".to_string()));
    }
    Ok(())
}
