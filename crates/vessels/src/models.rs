use serde::Serialize;
use sqlx::FromRow;
use time::{Date, OffsetDateTime, format_description::well_known::Rfc3339};
use utoipa::ToSchema;

/// One `vessel_arrivals` row: a chokepoint's arrivals for a single day.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ArrivalRow {
    pub date: Date,
    pub chokepoint: String,
    pub vessel_count: i32,
    pub container: i32,
    pub dry_bulk: i32,
    pub general_cargo: i32,
    pub roro: i32,
    pub tanker: i32,
    pub collected_at: OffsetDateTime,
}

/// Aggregate over a filtered set of rows. Every column except the count is
/// NULL when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct SummaryRow {
    pub days_with_data: i64,
    pub total_vessels: Option<i64>,
    pub avg_daily_vessels: Option<f64>,
    pub total_container: Option<i64>,
    pub total_dry_bulk: Option<i64>,
    pub total_general_cargo: Option<i64>,
    pub total_roro: Option<i64>,
    pub total_tanker: Option<i64>,
    pub latest_date: Option<Date>,
}

/// Aggregate over one calendar month of a filtered set of rows.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct MonthlyRow {
    /// First day of the month.
    pub month: Date,
    pub days_with_data: i64,
    pub total_vessels: i64,
    pub avg_vessels: f64,
    pub peak_vessels: i32,
    pub min_vessels: i32,
    pub total_container: i64,
    pub total_dry_bulk: i64,
    pub total_general_cargo: i64,
    pub total_roro: i64,
    pub total_tanker: i64,
}

/// Daily arrival record as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VesselArrival {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub chokepoint: String,
    pub vessel_count: i32,
    pub container: i32,
    pub dry_bulk: i32,
    pub general_cargo: i32,
    pub roro: i32,
    pub tanker: i32,
    /// Ingestion timestamp, RFC 3339.
    pub collected_at: String,
}

impl TryFrom<ArrivalRow> for VesselArrival {
    type Error = time::error::Format;

    fn try_from(row: ArrivalRow) -> Result<Self, Self::Error> {
        Ok(Self {
            date: row.date.to_string(),
            collected_at: row.collected_at.format(&Rfc3339)?,
            chokepoint: row.chokepoint,
            vessel_count: row.vessel_count,
            container: row.container,
            dry_bulk: row.dry_bulk,
            general_cargo: row.general_cargo,
            roro: row.roro,
            tanker: row.tanker,
        })
    }
}

/// Aggregated statistics for a chokepoint over the requested range.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VesselSummary {
    pub chokepoint: String,
    pub total_vessels: i64,
    pub avg_daily_vessels: f64,
    pub total_container: i64,
    pub total_dry_bulk: i64,
    pub total_general_cargo: i64,
    pub total_roro: i64,
    pub total_tanker: i64,
    pub days_with_data: i64,
    /// Most recent date in range, `YYYY-MM-DD`.
    pub latest_date: String,
}

impl VesselSummary {
    /// Builds the summary, or `None` when the aggregate covered no rows.
    pub fn from_row(chokepoint: String, row: SummaryRow) -> Option<Self> {
        if row.days_with_data == 0 {
            return None;
        }

        Some(Self {
            chokepoint,
            total_vessels: row.total_vessels.unwrap_or(0),
            avg_daily_vessels: row.avg_daily_vessels.unwrap_or(0.0),
            total_container: row.total_container.unwrap_or(0),
            total_dry_bulk: row.total_dry_bulk.unwrap_or(0),
            total_general_cargo: row.total_general_cargo.unwrap_or(0),
            total_roro: row.total_roro.unwrap_or(0),
            total_tanker: row.total_tanker.unwrap_or(0),
            days_with_data: row.days_with_data,
            latest_date: row.latest_date.map(|d| d.to_string()).unwrap_or_default(),
        })
    }
}

/// Per-category vessel totals.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VesselTypeTotals {
    pub container: i64,
    pub dry_bulk: i64,
    pub general_cargo: i64,
    pub roro: i64,
    pub tanker: i64,
}

/// Statistics for one calendar month.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MonthlyVesselStats {
    /// Month, `YYYY-MM`.
    pub month: String,
    pub days_with_data: i64,
    pub total_vessels: i64,
    pub avg_vessels: f64,
    pub peak_vessels: i32,
    pub min_vessels: i32,
    pub vessel_types: VesselTypeTotals,
}

impl From<MonthlyRow> for MonthlyVesselStats {
    fn from(row: MonthlyRow) -> Self {
        Self {
            month: format!("{:04}-{:02}", row.month.year(), u8::from(row.month.month())),
            days_with_data: row.days_with_data,
            total_vessels: row.total_vessels,
            avg_vessels: round2(row.avg_vessels),
            peak_vessels: row.peak_vessels,
            min_vessels: row.min_vessels,
            vessel_types: VesselTypeTotals {
                container: row.total_container,
                dry_bulk: row.total_dry_bulk,
                general_cargo: row.total_general_cargo,
                roro: row.total_roro,
                tanker: row.total_tanker,
            },
        }
    }
}

/// Roll-up across the months of a monthly breakdown.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MonthlySummary {
    pub total_vessels: i64,
    pub months_analyzed: usize,
    pub average_monthly_vessels: f64,
    pub peak_month: Option<String>,
    pub lowest_month: Option<String>,
}

impl MonthlySummary {
    pub fn from_months(months: &[MonthlyVesselStats]) -> Self {
        let total_vessels: i64 = months.iter().map(|m| m.total_vessels).sum();
        let average_monthly_vessels = if months.is_empty() {
            0.0
        } else {
            round2(total_vessels as f64 / months.len() as f64)
        };

        // Ties resolve to the earliest month.
        let peak_month = months
            .iter()
            .reduce(|best, m| if m.total_vessels > best.total_vessels { m } else { best })
            .map(|m| m.month.clone());
        let lowest_month = months
            .iter()
            .reduce(|best, m| if m.total_vessels < best.total_vessels { m } else { best })
            .map(|m| m.month.clone());

        Self {
            total_vessels,
            months_analyzed: months.len(),
            average_monthly_vessels,
            peak_month,
            lowest_month,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    fn month(month: Date, total_vessels: i64) -> MonthlyVesselStats {
        MonthlyVesselStats::from(MonthlyRow {
            month,
            days_with_data: 30,
            total_vessels,
            avg_vessels: total_vessels as f64 / 30.0,
            peak_vessels: 80,
            min_vessels: 20,
            total_container: 10,
            total_dry_bulk: 10,
            total_general_cargo: 10,
            total_roro: 10,
            total_tanker: 10,
        })
    }

    #[test]
    fn test_arrival_formats_dates() {
        let row = ArrivalRow {
            date: date!(2024 - 01 - 05),
            chokepoint: "suez".into(),
            vessel_count: 72,
            container: 20,
            dry_bulk: 18,
            general_cargo: 9,
            roro: 4,
            tanker: 21,
            collected_at: datetime!(2024-01-06 02:30 UTC),
        };

        let arrival = VesselArrival::try_from(row).unwrap();
        assert_eq!(arrival.date, "2024-01-05");
        assert_eq!(arrival.collected_at, "2024-01-06T02:30:00Z");
        assert_eq!(arrival.vessel_count, 72);
    }

    #[test]
    fn test_summary_empty_aggregate_is_none() {
        assert!(VesselSummary::from_row("nowhere".into(), SummaryRow::default()).is_none());
    }

    #[test]
    fn test_summary_from_row() {
        let row = SummaryRow {
            days_with_data: 3,
            total_vessels: Some(210),
            avg_daily_vessels: Some(70.0),
            total_container: Some(60),
            total_dry_bulk: Some(50),
            total_general_cargo: Some(30),
            total_roro: Some(10),
            total_tanker: Some(55),
            latest_date: Some(date!(2024 - 01 - 03)),
        };

        let summary = VesselSummary::from_row("suez".into(), row).unwrap();
        assert_eq!(summary.days_with_data, 3);
        assert_eq!(summary.latest_date, "2024-01-03");
        assert_eq!(summary.total_tanker, 55);
    }

    #[test]
    fn test_monthly_stats_month_label_and_rounding() {
        let stats = month(date!(2024 - 03 - 01), 100);
        assert_eq!(stats.month, "2024-03");
        assert_eq!(stats.avg_vessels, 3.33);
    }

    #[test]
    fn test_monthly_summary_peak_and_lowest() {
        let months = vec![
            month(date!(2024 - 01 - 01), 2000),
            month(date!(2024 - 02 - 01), 2500),
            month(date!(2024 - 03 - 01), 1800),
        ];

        let summary = MonthlySummary::from_months(&months);
        assert_eq!(summary.total_vessels, 6300);
        assert_eq!(summary.months_analyzed, 3);
        assert_eq!(summary.average_monthly_vessels, 2100.0);
        assert_eq!(summary.peak_month.as_deref(), Some("2024-02"));
        assert_eq!(summary.lowest_month.as_deref(), Some("2024-03"));
    }

    #[test]
    fn test_monthly_summary_ties_keep_earliest() {
        let months = vec![
            month(date!(2024 - 01 - 01), 500),
            month(date!(2024 - 02 - 01), 500),
        ];

        let summary = MonthlySummary::from_months(&months);
        assert_eq!(summary.peak_month.as_deref(), Some("2024-01"));
        assert_eq!(summary.lowest_month.as_deref(), Some("2024-01"));
    }

    #[test]
    fn test_monthly_summary_empty() {
        let summary = MonthlySummary::from_months(&[]);
        assert_eq!(summary.months_analyzed, 0);
        assert_eq!(summary.average_monthly_vessels, 0.0);
        assert!(summary.peak_month.is_none());
    }
}
