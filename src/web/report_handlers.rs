// src/web/report_handlers.rs
use crate::{
    error::{AppError, AppResult},
    services::report_service::{self, DailyReport, RangeReport},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DailyParams {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

// GET /api/reports/daily?date=YYYY-MM-DD
pub async fn daily_report(
    State(state): State<AppState>,
    Query(params): Query<DailyParams>,
) -> AppResult<Json<DailyReport>> {
    let date = parse_date(params.date, "Please provide a date")?;
    let report = report_service::daily_report(&state.db_pool, date).await?;
    Ok(Json(report))
}

// GET /api/reports/range?startDate=YYYY-MM-DD&endDate=YYYY-MM-DD
pub async fn range_report(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> AppResult<Json<RangeReport>> {
    let start = parse_date(params.start_date, "Please provide start and end dates")?;
    let end = parse_date(params.end_date, "Please provide start and end dates")?;
    if start > end {
        return Err(AppError::Validation(
            "Start date must not be after end date".to_string(),
        ));
    }
    let report = report_service::range_report(&state.db_pool, start, end).await?;
    Ok(Json(report))
}

fn parse_date(value: Option<String>, missing_message: &str) -> AppResult<NaiveDate> {
    let raw = value.ok_or_else(|| AppError::Validation(missing_message.to_string()))?;
    raw.parse().map_err(|_| {
        AppError::Validation(format!("Invalid date '{raw}', expected YYYY-MM-DD"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates_only() {
        assert_eq!(
            parse_date(Some("2024-06-01".into()), "missing").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert!(parse_date(Some("01/06/2024".into()), "missing").is_err());
        assert!(parse_date(None, "missing").is_err());
    }
}
