// src/services/catalog_service.rs
//
// The repair-service catalog behind /api/services.
use crate::{
    error::{AppError, AppResult},
    models::service::Service,
};
use sqlx::SqlitePool;

pub async fn list(db_pool: &SqlitePool) -> AppResult<Vec<Service>> {
    let services = sqlx::query_as::<_, Service>(
        r#"
        SELECT service_code, service_name, service_price
        FROM services
        ORDER BY service_code ASC
        "#,
    )
    .fetch_all(db_pool)
    .await?;
    Ok(services)
}

pub async fn get(db_pool: &SqlitePool, service_code: i64) -> AppResult<Option<Service>> {
    let service = sqlx::query_as::<_, Service>(
        r#"
        SELECT service_code, service_name, service_price
        FROM services
        WHERE service_code = ?1
        "#,
    )
    .bind(service_code)
    .fetch_optional(db_pool)
    .await?;
    Ok(service)
}

pub async fn create(db_pool: &SqlitePool, name: &str, price: f64) -> AppResult<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO services (service_name, service_price)
        VALUES (?1, ?2)
        "#,
    )
    .bind(name)
    .bind(price)
    .execute(db_pool)
    .await?;

    let code = result.last_insert_rowid();
    tracing::info!("Created service '{}' (code {})", name, code);
    Ok(code)
}

pub async fn update(
    db_pool: &SqlitePool,
    service_code: i64,
    name: &str,
    price: f64,
) -> AppResult<bool> {
    let rows_affected = sqlx::query(
        r#"
        UPDATE services
        SET service_name = ?1, service_price = ?2
        WHERE service_code = ?3
        "#,
    )
    .bind(name)
    .bind(price)
    .bind(service_code)
    .execute(db_pool)
    .await?
    .rows_affected();

    Ok(rows_affected > 0)
}

pub async fn delete(db_pool: &SqlitePool, service_code: i64) -> AppResult<bool> {
    let rows_affected = sqlx::query("DELETE FROM services WHERE service_code = ?1")
        .bind(service_code)
        .execute(db_pool)
        .await
        .map_err(|e| {
            AppError::conflict_on_foreign_key(
                e,
                "Service has service records and cannot be deleted",
            )
        })?
        .rows_affected();

    Ok(rows_affected > 0)
}
