//! Configuration types for test data generation.

use serde::{Deserialize, Serialize};
use time::Date;

/// Share of daily traffic per vessel category. Shares need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryMix {
    pub container: f64,
    pub dry_bulk: f64,
    pub general_cargo: f64,
    pub roro: f64,
    pub tanker: f64,
}

/// Traffic characteristics of a single chokepoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChokepointProfile {
    pub name: String,
    /// Mean vessels per weekday.
    pub mean_daily: f64,
    /// Standard deviation of the daily count.
    pub std_dev: f64,
    pub mix: CategoryMix,
}

impl ChokepointProfile {
    pub fn new(name: &str, mean_daily: f64, std_dev: f64, mix: CategoryMix) -> Self {
        Self {
            name: name.to_string(),
            mean_daily,
            std_dev,
            mix,
        }
    }
}

/// Rough traffic profiles for well-known chokepoints.
pub fn known_chokepoints() -> Vec<ChokepointProfile> {
    let mix = |container, dry_bulk, general_cargo, roro, tanker| CategoryMix {
        container,
        dry_bulk,
        general_cargo,
        roro,
        tanker,
    };

    vec![
        ChokepointProfile::new("suez", 70.0, 9.0, mix(0.30, 0.28, 0.08, 0.05, 0.27)),
        ChokepointProfile::new("panama", 36.0, 5.0, mix(0.25, 0.30, 0.08, 0.07, 0.28)),
        ChokepointProfile::new("malacca", 230.0, 20.0, mix(0.35, 0.25, 0.08, 0.04, 0.27)),
        ChokepointProfile::new("hormuz", 105.0, 12.0, mix(0.10, 0.12, 0.05, 0.03, 0.68)),
        ChokepointProfile::new("bab-el-mandeb", 60.0, 10.0, mix(0.28, 0.27, 0.09, 0.05, 0.30)),
        ChokepointProfile::new("bosporus", 110.0, 11.0, mix(0.12, 0.35, 0.20, 0.08, 0.25)),
        ChokepointProfile::new("gibraltar", 280.0, 25.0, mix(0.30, 0.25, 0.12, 0.08, 0.25)),
        ChokepointProfile::new("dover", 400.0, 30.0, mix(0.25, 0.15, 0.15, 0.25, 0.20)),
    ]
}

/// Configuration for seeding operations.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub chokepoints: Vec<ChokepointProfile>,
    /// Number of consecutive days to generate per chokepoint.
    pub days: u32,
    /// Last generated day (inclusive).
    pub end_date: Date,
    /// Rows inserted per transaction.
    pub batch_size: usize,
    /// RNG seed for reproducible data.
    pub seed: u64,
}

impl SeedConfig {
    pub fn new(end_date: Date) -> Self {
        Self {
            chokepoints: known_chokepoints(),
            days: 365,
            end_date,
            batch_size: 500,
            seed: 12345,
        }
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
