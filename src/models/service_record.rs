// src/models/service_record.rs
use crate::error::{AppError, AppResult};
use crate::models::user::required;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A service record joined with its car, service and receiving user.
/// Display fields are denormalized at read time; nothing is stored twice.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecordDetail {
    pub record_number: i64,
    pub plate_number: String,
    pub service_code: i64,
    pub service_date: NaiveDateTime,
    pub amount_paid: f64,
    pub payment_date: NaiveDateTime,
    pub received_by: i64,
    #[serde(rename = "type")]
    pub car_type: String,
    pub model: String,
    pub driver_phone: String,
    pub mechanic_name: String,
    pub service_name: String,
    pub service_price: f64,
    pub receiver_name: String,
}

/// Column subset used by the daily report.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DailyReportRow {
    pub record_number: i64,
    pub plate_number: String,
    #[serde(rename = "type")]
    pub car_type: String,
    pub model: String,
    pub service_name: String,
    pub amount_paid: f64,
    pub payment_date: NaiveDateTime,
    pub receiver_name: String,
}

/// Joined projection of one record with everything a printed receipt shows.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub record_number: i64,
    pub plate_number: String,
    #[serde(rename = "type")]
    pub car_type: String,
    pub model: String,
    pub driver_phone: String,
    pub mechanic_name: String,
    pub service_name: String,
    pub service_price: f64,
    pub amount_paid: f64,
    pub payment_date: NaiveDateTime,
    pub receiver_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecordPayload {
    pub plate_number: Option<String>,
    pub service_code: Option<i64>,
    pub amount_paid: Option<f64>,
    pub service_date: Option<NaiveDateTime>,
    pub payment_date: Option<NaiveDateTime>,
}

/// Validated record input. `service_date` and `payment_date` stay optional
/// by design: when absent the store fills in the current time.
#[derive(Debug)]
pub struct RecordInput {
    pub plate_number: String,
    pub service_code: i64,
    pub amount_paid: f64,
    pub service_date: Option<NaiveDateTime>,
    pub payment_date: Option<NaiveDateTime>,
}

impl ServiceRecordPayload {
    pub fn validate(self) -> AppResult<RecordInput> {
        fn missing() -> AppError {
            AppError::Validation("Please provide all required fields".to_string())
        }
        let plate_number = required(self.plate_number)?;
        let service_code = self.service_code.ok_or_else(missing)?;
        let amount_paid = self.amount_paid.ok_or_else(missing)?;
        if amount_paid < 0.0 {
            return Err(AppError::Validation(
                "Amount paid must not be negative".to_string(),
            ));
        }
        Ok(RecordInput {
            plate_number,
            service_code,
            amount_paid,
            service_date: self.service_date,
            payment_date: self.payment_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_requires_plate_code_and_amount() {
        let payload = ServiceRecordPayload {
            plate_number: Some("RAB 123 A".into()),
            service_code: None,
            amount_paid: Some(60000.0),
            service_date: None,
            payment_date: None,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn validate_keeps_optional_dates_unset() {
        let payload = ServiceRecordPayload {
            plate_number: Some("RAB 123 A".into()),
            service_code: Some(3),
            amount_paid: Some(60000.0),
            service_date: None,
            payment_date: None,
        };
        let input = payload.validate().unwrap();
        assert!(input.service_date.is_none());
        assert!(input.payment_date.is_none());
    }
}
