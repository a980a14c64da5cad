// src/services/report_service.rs
//
// Derived reporting over service records. Totals and per-service groups are
// recomputed from the raw rows on every call; nothing is cached.
use crate::{
    error::AppResult,
    models::service_record::{DailyReportRow, ServiceRecordDetail},
    services::record_service,
};
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::SqlitePool;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    pub date: NaiveDate,
    pub total_amount: f64,
    pub records: Vec<DailyReportRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_amount: f64,
    pub service_groups: BTreeMap<String, ServiceGroup>,
    pub records: Vec<ServiceRecordDetail>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ServiceGroup {
    pub count: u32,
    pub total: f64,
}

pub async fn daily_report(db_pool: &SqlitePool, date: NaiveDate) -> AppResult<DailyReport> {
    let records = record_service::get_daily(db_pool, date).await?;
    let total_amount = total_amount(records.iter().map(|r| r.amount_paid));
    Ok(DailyReport {
        date,
        total_amount,
        records,
    })
}

pub async fn range_report(
    db_pool: &SqlitePool,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> AppResult<RangeReport> {
    let records = record_service::get_by_date_range(db_pool, start_date, end_date).await?;
    let total_amount = total_amount(records.iter().map(|r| r.amount_paid));
    let service_groups = group_by_service(&records);
    Ok(RangeReport {
        start_date,
        end_date,
        total_amount,
        service_groups,
        records,
    })
}

fn total_amount(amounts: impl IntoIterator<Item = f64>) -> f64 {
    amounts.into_iter().sum()
}

/// Buckets records by service name, counting them and summing amounts paid.
fn group_by_service(records: &[ServiceRecordDetail]) -> BTreeMap<String, ServiceGroup> {
    let mut groups: BTreeMap<String, ServiceGroup> = BTreeMap::new();
    for record in records {
        let group = groups
            .entry(record.service_name.clone())
            .or_insert(ServiceGroup {
                count: 0,
                total: 0.0,
            });
        group.count += 1;
        group.total += record.amount_paid;
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn record(service_name: &str, amount_paid: f64) -> ServiceRecordDetail {
        ServiceRecordDetail {
            record_number: 1,
            plate_number: "RAB 123 A".into(),
            service_code: 3,
            service_date: NaiveDateTime::default(),
            amount_paid,
            payment_date: NaiveDateTime::default(),
            received_by: 1,
            car_type: "Sedan".into(),
            model: "Corolla".into(),
            driver_phone: "0788000001".into(),
            mechanic_name: "Eric".into(),
            service_name: service_name.into(),
            service_price: amount_paid,
            receiver_name: "John Doe".into(),
        }
    }

    #[test]
    fn total_is_the_arithmetic_sum_of_amounts() {
        assert_eq!(total_amount([60000.0, 40000.0]), 100000.0);
        assert_eq!(total_amount(std::iter::empty()), 0.0);
    }

    #[test]
    fn groups_count_and_sum_per_service_name() {
        let records = vec![
            record("Oil Change", 60000.0),
            record("Oil Change", 60000.0),
            record("Chain replacement", 40000.0),
        ];
        let groups = group_by_service(&records);

        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups["Oil Change"],
            ServiceGroup {
                count: 2,
                total: 120000.0
            }
        );
        assert_eq!(
            groups["Chain replacement"],
            ServiceGroup {
                count: 1,
                total: 40000.0
            }
        );
    }

    #[test]
    fn empty_record_set_yields_no_groups() {
        assert!(group_by_service(&[]).is_empty());
    }
}
