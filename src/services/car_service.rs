// src/services/car_service.rs
use crate::{
    error::{AppError, AppResult},
    models::car::{Car, CarUpdate},
};
use sqlx::SqlitePool;

pub async fn list(db_pool: &SqlitePool) -> AppResult<Vec<Car>> {
    let cars = sqlx::query_as::<_, Car>(
        r#"
        SELECT plate_number, car_type, model, manufacturing_year, driver_phone, mechanic_name
        FROM cars
        ORDER BY plate_number ASC
        "#,
    )
    .fetch_all(db_pool)
    .await?;
    Ok(cars)
}

pub async fn get(db_pool: &SqlitePool, plate_number: &str) -> AppResult<Option<Car>> {
    let car = sqlx::query_as::<_, Car>(
        r#"
        SELECT plate_number, car_type, model, manufacturing_year, driver_phone, mechanic_name
        FROM cars
        WHERE plate_number = ?1
        "#,
    )
    .bind(plate_number)
    .fetch_optional(db_pool)
    .await?;
    Ok(car)
}

pub async fn create(db_pool: &SqlitePool, car: &Car) -> AppResult<()> {
    sqlx::query(
        r#"
        INSERT INTO cars (plate_number, car_type, model, manufacturing_year, driver_phone, mechanic_name)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(&car.plate_number)
    .bind(&car.car_type)
    .bind(&car.model)
    .bind(car.manufacturing_year)
    .bind(&car.driver_phone)
    .bind(&car.mechanic_name)
    .execute(db_pool)
    .await
    .map_err(|e| {
        AppError::conflict_on_unique(e, "Car with this plate number already exists")
    })?;

    tracing::info!("Created car '{}'", car.plate_number);
    Ok(())
}

/// Updates every mutable field; the plate number itself cannot change.
pub async fn update(db_pool: &SqlitePool, plate_number: &str, car: &CarUpdate) -> AppResult<bool> {
    let rows_affected = sqlx::query(
        r#"
        UPDATE cars
        SET car_type = ?1, model = ?2, manufacturing_year = ?3, driver_phone = ?4, mechanic_name = ?5
        WHERE plate_number = ?6
        "#,
    )
    .bind(&car.car_type)
    .bind(&car.model)
    .bind(car.manufacturing_year)
    .bind(&car.driver_phone)
    .bind(&car.mechanic_name)
    .bind(plate_number)
    .execute(db_pool)
    .await?
    .rows_affected();

    Ok(rows_affected > 0)
}

/// Deletes a car. A car still referenced by service records is kept and the
/// attempt is reported as a conflict.
pub async fn delete(db_pool: &SqlitePool, plate_number: &str) -> AppResult<bool> {
    let rows_affected = sqlx::query("DELETE FROM cars WHERE plate_number = ?1")
        .bind(plate_number)
        .execute(db_pool)
        .await
        .map_err(|e| {
            AppError::conflict_on_foreign_key(
                e,
                "Car has service records and cannot be deleted",
            )
        })?
        .rows_affected();

    Ok(rows_affected > 0)
}
