//! Database integration for seeding test data.
//!
//! The [`Seeder`] applies the schema migration and inserts generated rows
//! into `vessel_arrivals` in batches.

mod seeder;

pub use seeder::{SeedError, Seeder};
