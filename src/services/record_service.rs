// src/services/record_service.rs
use crate::{
    error::AppResult,
    models::service_record::{Bill, DailyReportRow, ServiceRecordDetail},
};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use sqlx::SqlitePool;

// Shared join shape: every record read denormalizes the car, catalog and
// receiver columns needed for display.
const DETAIL_SELECT: &str = r#"
    SELECT sr.record_number, sr.plate_number, sr.service_code, sr.service_date,
           sr.amount_paid, sr.payment_date, sr.received_by,
           c.car_type, c.model, c.driver_phone, c.mechanic_name,
           s.service_name, s.service_price,
           u.full_name AS receiver_name
    FROM service_records sr
    JOIN cars c ON sr.plate_number = c.plate_number
    JOIN services s ON sr.service_code = s.service_code
    JOIN users u ON sr.received_by = u.id
"#;

/// Options for creating a record. Dates left as `None` default to the
/// current time; `received_by` is always the authenticated caller.
#[derive(Debug)]
pub struct NewServiceRecord {
    pub plate_number: String,
    pub service_code: i64,
    pub amount_paid: f64,
    pub service_date: Option<NaiveDateTime>,
    pub payment_date: Option<NaiveDateTime>,
    pub received_by: i64,
}

/// Replacement values for an existing record. `received_by` is pinned to
/// the original creator and cannot be supplied here.
#[derive(Debug)]
pub struct ServiceRecordUpdate {
    pub plate_number: String,
    pub service_code: i64,
    pub amount_paid: f64,
    pub payment_date: Option<NaiveDateTime>,
}

pub async fn list(db_pool: &SqlitePool) -> AppResult<Vec<ServiceRecordDetail>> {
    let sql = format!("{DETAIL_SELECT} ORDER BY sr.service_date DESC");
    let records = sqlx::query_as::<_, ServiceRecordDetail>(&sql)
        .fetch_all(db_pool)
        .await?;
    Ok(records)
}

pub async fn get(
    db_pool: &SqlitePool,
    record_number: i64,
) -> AppResult<Option<ServiceRecordDetail>> {
    let sql = format!("{DETAIL_SELECT} WHERE sr.record_number = ?1");
    let record = sqlx::query_as::<_, ServiceRecordDetail>(&sql)
        .bind(record_number)
        .fetch_optional(db_pool)
        .await?;
    Ok(record)
}

pub async fn create(db_pool: &SqlitePool, record: NewServiceRecord) -> AppResult<i64> {
    let now = Utc::now().naive_utc();
    let service_date = record.service_date.unwrap_or(now);
    let payment_date = record.payment_date.unwrap_or(now);

    let result = sqlx::query(
        r#"
        INSERT INTO service_records
            (plate_number, service_code, service_date, amount_paid, payment_date, received_by)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(&record.plate_number)
    .bind(record.service_code)
    .bind(service_date)
    .bind(record.amount_paid)
    .bind(payment_date)
    .bind(record.received_by)
    .execute(db_pool)
    .await?;

    let record_number = result.last_insert_rowid();
    tracing::info!(
        "Created service record {} for car '{}'",
        record_number,
        record.plate_number
    );
    Ok(record_number)
}

pub async fn update(
    db_pool: &SqlitePool,
    record_number: i64,
    record: ServiceRecordUpdate,
) -> AppResult<bool> {
    let payment_date = record.payment_date.unwrap_or_else(|| Utc::now().naive_utc());

    let rows_affected = sqlx::query(
        r#"
        UPDATE service_records
        SET plate_number = ?1, service_code = ?2, amount_paid = ?3, payment_date = ?4
        WHERE record_number = ?5
        "#,
    )
    .bind(&record.plate_number)
    .bind(record.service_code)
    .bind(record.amount_paid)
    .bind(payment_date)
    .bind(record_number)
    .execute(db_pool)
    .await?
    .rows_affected();

    Ok(rows_affected > 0)
}

pub async fn delete(db_pool: &SqlitePool, record_number: i64) -> AppResult<bool> {
    let rows_affected = sqlx::query("DELETE FROM service_records WHERE record_number = ?1")
        .bind(record_number)
        .execute(db_pool)
        .await?
        .rows_affected();

    Ok(rows_affected > 0)
}

/// Records whose service date falls within the inclusive calendar-date
/// range, newest first.
pub async fn get_by_date_range(
    db_pool: &SqlitePool,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<ServiceRecordDetail>> {
    let sql = format!(
        "{DETAIL_SELECT} WHERE date(sr.service_date) BETWEEN ?1 AND ?2 \
         ORDER BY sr.service_date DESC"
    );
    let records = sqlx::query_as::<_, ServiceRecordDetail>(&sql)
        .bind(start)
        .bind(end)
        .fetch_all(db_pool)
        .await?;
    Ok(records)
}

/// Records for one calendar date, with the reduced daily-report columns.
pub async fn get_daily(db_pool: &SqlitePool, date: NaiveDate) -> AppResult<Vec<DailyReportRow>> {
    let rows = sqlx::query_as::<_, DailyReportRow>(
        r#"
        SELECT sr.record_number, sr.plate_number, c.car_type, c.model,
               s.service_name, sr.amount_paid, sr.payment_date,
               u.full_name AS receiver_name
        FROM service_records sr
        JOIN cars c ON sr.plate_number = c.plate_number
        JOIN services s ON sr.service_code = s.service_code
        JOIN users u ON sr.received_by = u.id
        WHERE date(sr.service_date) = ?1
        ORDER BY sr.service_date DESC
        "#,
    )
    .bind(date)
    .fetch_all(db_pool)
    .await?;
    Ok(rows)
}

/// Joined single-record projection for receipt display, `None` if the
/// record does not exist.
pub async fn generate_bill(db_pool: &SqlitePool, record_number: i64) -> AppResult<Option<Bill>> {
    let bill = sqlx::query_as::<_, Bill>(
        r#"
        SELECT sr.record_number, sr.plate_number, c.car_type, c.model,
               c.driver_phone, c.mechanic_name,
               s.service_name, s.service_price,
               sr.amount_paid, sr.payment_date,
               u.full_name AS receiver_name
        FROM service_records sr
        JOIN cars c ON sr.plate_number = c.plate_number
        JOIN services s ON sr.service_code = s.service_code
        JOIN users u ON sr.received_by = u.id
        WHERE sr.record_number = ?1
        "#,
    )
    .bind(record_number)
    .fetch_optional(db_pool)
    .await?;
    Ok(bill)
}
