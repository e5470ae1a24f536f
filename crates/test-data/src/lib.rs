//! Synthetic vessel arrival data.
//!
//! Generates plausible daily arrival rows for a set of chokepoints and seeds
//! them into `vessel_arrivals` for local development and integration testing.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let config = SeedConfig::new(date!(2024 - 12 - 31)).with_days(90);
//! let rows = generate_rows(&config);
//! let seeder = Seeder::new(pool);
//! seeder.migrate().await?;
//! seeder.seed_arrivals(&rows).await?;
//! ```

pub mod config;
pub mod db;
pub mod generators;

use rand::{SeedableRng, rngs::StdRng};
use vessels::models::ArrivalRow;

use crate::{config::SeedConfig, generators::ArrivalGenerator};

/// Generates every row described by `config`, chokepoint by chokepoint.
pub fn generate_rows(config: &SeedConfig) -> Vec<ArrivalRow> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    config
        .chokepoints
        .iter()
        .flat_map(|profile| {
            ArrivalGenerator::new(profile.clone()).generate_range(
                config.end_date,
                config.days,
                &mut rng,
            )
        })
        .collect()
}

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{CategoryMix, ChokepointProfile, SeedConfig, known_chokepoints};
    pub use crate::db::{SeedError, Seeder};
    pub use crate::generate_rows;
    pub use crate::generators::ArrivalGenerator;
}
