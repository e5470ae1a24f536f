//! In-memory `VesselStore` that mirrors the Postgres statements' semantics.

#![allow(dead_code)]

use std::collections::BTreeMap;

use async_trait::async_trait;
use time::{Date, Duration, PrimitiveDateTime, Time, macros::format_description};
use vessels::{
    errors::AppError,
    models::{ArrivalRow, MonthlyRow, SummaryRow},
    store::{ArrivalFilter, VesselStore},
};

pub struct InMemoryStore {
    rows: Vec<ArrivalRow>,
    failure: Option<String>,
}

impl InMemoryStore {
    pub fn new(rows: Vec<ArrivalRow>) -> Self {
        Self {
            rows,
            failure: None,
        }
    }

    /// A store whose every call fails like a broken connection would.
    pub fn failing(message: &str) -> Self {
        Self {
            rows: Vec::new(),
            failure: Some(message.to_string()),
        }
    }

    fn matching(&self, filter: &ArrivalFilter) -> Result<Vec<ArrivalRow>, AppError> {
        if let Some(message) = &self.failure {
            return Err(protocol_error(message.clone()));
        }

        let start = filter.start_date.as_deref().map(parse_date).transpose()?;
        let end = filter.end_date.as_deref().map(parse_date).transpose()?;

        Ok(self
            .rows
            .iter()
            .filter(|row| row.chokepoint == filter.chokepoint)
            .filter(|row| start.is_none_or(|start| row.date >= start))
            .filter(|row| end.is_none_or(|end| row.date <= end))
            .cloned()
            .collect())
    }
}

fn protocol_error(message: String) -> AppError {
    AppError::Database(sqlx::Error::Protocol(message))
}

fn parse_date(value: &str) -> Result<Date, AppError> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|_| protocol_error(format!("invalid input syntax for type date: \"{value}\"")))
}

#[async_trait]
impl VesselStore for InMemoryStore {
    async fn list_arrivals(
        &self,
        filter: &ArrivalFilter,
        limit: i64,
    ) -> Result<Vec<ArrivalRow>, AppError> {
        let mut rows = self.matching(filter)?;
        if limit < 0 {
            return Err(protocol_error("LIMIT must not be negative".to_string()));
        }
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn summarize(&self, filter: &ArrivalFilter) -> Result<Option<SummaryRow>, AppError> {
        let rows = self.matching(filter)?;
        if rows.is_empty() {
            return Ok(Some(SummaryRow::default()));
        }

        let sum = |f: fn(&ArrivalRow) -> i32| -> Option<i64> {
            Some(rows.iter().map(|r| i64::from(f(r))).sum())
        };
        let total_vessels: i64 = rows.iter().map(|r| i64::from(r.vessel_count)).sum();

        Ok(Some(SummaryRow {
            days_with_data: rows.len() as i64,
            total_vessels: Some(total_vessels),
            avg_daily_vessels: Some(total_vessels as f64 / rows.len() as f64),
            total_container: sum(|r| r.container),
            total_dry_bulk: sum(|r| r.dry_bulk),
            total_general_cargo: sum(|r| r.general_cargo),
            total_roro: sum(|r| r.roro),
            total_tanker: sum(|r| r.tanker),
            latest_date: rows.iter().map(|r| r.date).max(),
        }))
    }

    async fn monthly_breakdown(
        &self,
        filter: &ArrivalFilter,
    ) -> Result<Vec<MonthlyRow>, AppError> {
        let mut months: BTreeMap<Date, Vec<ArrivalRow>> = BTreeMap::new();
        for row in self.matching(filter)? {
            let month = row.date.replace_day(1).expect("day 1 is always valid");
            months.entry(month).or_default().push(row);
        }

        Ok(months
            .into_iter()
            .map(|(month, rows)| {
                let sum = |f: fn(&ArrivalRow) -> i32| -> i64 {
                    rows.iter().map(|r| i64::from(f(r))).sum()
                };
                let total_vessels = sum(|r| r.vessel_count);
                MonthlyRow {
                    month,
                    days_with_data: rows.len() as i64,
                    total_vessels,
                    avg_vessels: total_vessels as f64 / rows.len() as f64,
                    peak_vessels: rows.iter().map(|r| r.vessel_count).max().unwrap_or(0),
                    min_vessels: rows.iter().map(|r| r.vessel_count).min().unwrap_or(0),
                    total_container: sum(|r| r.container),
                    total_dry_bulk: sum(|r| r.dry_bulk),
                    total_general_cargo: sum(|r| r.general_cargo),
                    total_roro: sum(|r| r.roro),
                    total_tanker: sum(|r| r.tanker),
                }
            })
            .collect())
    }
}

/// Builds a row with the vessel count split across the categories.
pub fn arrival(chokepoint: &str, date: Date, vessel_count: i32) -> ArrivalRow {
    let next_day = date + Duration::days(1);
    ArrivalRow {
        date,
        chokepoint: chokepoint.to_string(),
        vessel_count,
        container: vessel_count * 3 / 10,
        dry_bulk: vessel_count / 4,
        general_cargo: vessel_count / 10,
        roro: vessel_count / 20,
        tanker: vessel_count / 4,
        collected_at: PrimitiveDateTime::new(next_day, Time::from_hms(2, 0, 0).unwrap()).assume_utc(),
    }
}

/// `days` consecutive daily rows starting at `first`, with counts 50, 51, ...
pub fn daily_series(chokepoint: &str, first: Date, days: i64) -> Vec<ArrivalRow> {
    (0..days)
        .map(|offset| arrival(chokepoint, first + Duration::days(offset), 50 + offset as i32))
        .collect()
}
