//! Entity generators for test data.
//!
//! - [`ArrivalGenerator`]: daily per-chokepoint arrival rows with weekday
//!   variation and a per-chokepoint category mix

pub mod arrival;

pub use arrival::ArrivalGenerator;
