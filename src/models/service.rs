// src/models/service.rs
use crate::error::{AppError, AppResult};
use crate::models::user::required;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One entry of the repair-service catalog.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub service_code: i64,
    pub service_name: String,
    pub service_price: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePayload {
    pub service_name: Option<String>,
    pub service_price: Option<f64>,
}

impl ServicePayload {
    pub fn validate(self) -> AppResult<(String, f64)> {
        let name = required(self.service_name)?;
        let price = self.service_price.ok_or_else(|| {
            AppError::Validation("Please provide all required fields".to_string())
        })?;
        if price < 0.0 {
            return Err(AppError::Validation(
                "Service price must not be negative".to_string(),
            ));
        }
        Ok((name, price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_name_or_price() {
        assert!(ServicePayload {
            service_name: None,
            service_price: Some(1000.0),
        }
        .validate()
        .is_err());
        assert!(ServicePayload {
            service_name: Some("Oil Change".into()),
            service_price: None,
        }
        .validate()
        .is_err());
    }

    #[test]
    fn rejects_negative_price() {
        assert!(ServicePayload {
            service_name: Some("Oil Change".into()),
            service_price: Some(-1.0),
        }
        .validate()
        .is_err());
    }
}
