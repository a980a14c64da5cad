// src/models/car.rs
use crate::error::{AppError, AppResult};
use crate::models::user::required;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `cars` table. The plate number is the primary key and
/// never changes after creation.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub plate_number: String,
    #[serde(rename = "type")]
    pub car_type: String,
    pub model: String,
    pub manufacturing_year: i64,
    pub driver_phone: String,
    pub mechanic_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarPayload {
    pub plate_number: Option<String>,
    #[serde(rename = "type")]
    pub car_type: Option<String>,
    pub model: Option<String>,
    pub manufacturing_year: Option<i64>,
    pub driver_phone: Option<String>,
    pub mechanic_name: Option<String>,
}

/// Mutable car fields, used by the update path (plate number excluded).
#[derive(Debug)]
pub struct CarUpdate {
    pub car_type: String,
    pub model: String,
    pub manufacturing_year: i64,
    pub driver_phone: String,
    pub mechanic_name: String,
}

impl CarPayload {
    pub fn into_new_car(mut self) -> AppResult<Car> {
        let plate_number = required(self.plate_number.take())?;
        let update = self.into_update()?;
        Ok(Car {
            plate_number,
            car_type: update.car_type,
            model: update.model,
            manufacturing_year: update.manufacturing_year,
            driver_phone: update.driver_phone,
            mechanic_name: update.mechanic_name,
        })
    }

    pub fn into_update(self) -> AppResult<CarUpdate> {
        let car_type = required(self.car_type)?;
        let model = required(self.model)?;
        let manufacturing_year = self.manufacturing_year.ok_or_else(|| {
            AppError::Validation("Please provide all required fields".to_string())
        })?;
        let driver_phone = required(self.driver_phone)?;
        let mechanic_name = required(self.mechanic_name)?;
        Ok(CarUpdate {
            car_type,
            model,
            manufacturing_year,
            driver_phone,
            mechanic_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> CarPayload {
        CarPayload {
            plate_number: Some("RAB 123 A".into()),
            car_type: Some("Sedan".into()),
            model: Some("Corolla".into()),
            manufacturing_year: Some(2018),
            driver_phone: Some("0788000001".into()),
            mechanic_name: Some("Eric".into()),
        }
    }

    #[test]
    fn new_car_requires_every_field() {
        let mut payload = full_payload();
        payload.driver_phone = None;
        assert!(payload.into_new_car().is_err());

        let car = full_payload().into_new_car().unwrap();
        assert_eq!(car.plate_number, "RAB 123 A");
        assert_eq!(car.manufacturing_year, 2018);
    }

    #[test]
    fn update_ignores_plate_number() {
        let mut payload = full_payload();
        payload.plate_number = None;
        assert!(payload.into_update().is_ok());
    }
}
