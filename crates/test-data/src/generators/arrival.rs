//! Daily vessel arrival generation.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use time::{Date, Duration, PrimitiveDateTime, Time, Weekday, macros::time};

use vessels::models::ArrivalRow;

use crate::config::ChokepointProfile;

/// Weekend traffic relative to weekdays.
const WEEKEND_FACTOR: f64 = 0.9;

/// Time (UTC) on the following day at which a day's row is collected.
const COLLECTION_TIME: Time = time!(02:00);

/// Generates daily arrival rows for one chokepoint.
pub struct ArrivalGenerator {
    profile: ChokepointProfile,
    traffic: Option<Normal<f64>>,
}

impl ArrivalGenerator {
    /// Creates a generator for `profile`. An invalid deviation disables noise.
    pub fn new(profile: ChokepointProfile) -> Self {
        let traffic = Normal::new(0.0, profile.std_dev).ok();
        Self { profile, traffic }
    }

    /// Generates the row for a single day.
    pub fn generate(&self, date: Date, rng: &mut impl Rng) -> ArrivalRow {
        let factor = match date.weekday() {
            Weekday::Saturday | Weekday::Sunday => WEEKEND_FACTOR,
            _ => 1.0,
        };
        let noise = self.traffic.map_or(0.0, |traffic| traffic.sample(rng));
        let expected = self.profile.mean_daily * factor + noise;
        let vessel_count = expected.round().max(0.0) as i32;

        let mix = &self.profile.mix;
        let share = |fraction: f64| (f64::from(vessel_count) * fraction).floor().max(0.0) as i32;

        let collected_at =
            PrimitiveDateTime::new(date + Duration::days(1), COLLECTION_TIME).assume_utc();

        ArrivalRow {
            date,
            chokepoint: self.profile.name.clone(),
            vessel_count,
            container: share(mix.container),
            dry_bulk: share(mix.dry_bulk),
            general_cargo: share(mix.general_cargo),
            roro: share(mix.roro),
            tanker: share(mix.tanker),
            collected_at,
        }
    }

    /// Generates `days` consecutive rows ending at `end_date` (inclusive),
    /// oldest first.
    pub fn generate_range(&self, end_date: Date, days: u32, rng: &mut impl Rng) -> Vec<ArrivalRow> {
        let first = end_date - Duration::days(i64::from(days.saturating_sub(1)));
        (0..i64::from(days))
            .map(|offset| self.generate(first + Duration::days(offset), rng))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CategoryMix, known_chokepoints};
    use rand::{SeedableRng, rngs::StdRng};
    use time::macros::date;

    fn suez() -> ChokepointProfile {
        known_chokepoints()
            .into_iter()
            .find(|p| p.name == "suez")
            .unwrap()
    }

    #[test]
    fn test_range_is_consecutive_and_ends_on_end_date() {
        let generator = ArrivalGenerator::new(suez());
        let mut rng = StdRng::seed_from_u64(7);
        let rows = generator.generate_range(date!(2024 - 03 - 02), 5, &mut rng);

        assert_eq!(rows.len(), 5);
        assert_eq!(rows.first().unwrap().date, date!(2024 - 02 - 27));
        assert_eq!(rows.last().unwrap().date, date!(2024 - 03 - 02));
        assert!(rows.windows(2).all(|w| w[1].date - w[0].date == Duration::days(1)));
        assert!(rows.iter().all(|r| r.chokepoint == "suez"));
    }

    #[test]
    fn test_categories_never_exceed_vessel_count() {
        let generator = ArrivalGenerator::new(suez());
        let mut rng = StdRng::seed_from_u64(42);
        for row in generator.generate_range(date!(2024 - 12 - 31), 120, &mut rng) {
            assert!(row.vessel_count >= 0);
            for count in [row.container, row.dry_bulk, row.general_cargo, row.roro, row.tanker] {
                assert!(count >= 0 && count <= row.vessel_count);
            }
        }
    }

    #[test]
    fn test_same_seed_same_rows() {
        let generator = ArrivalGenerator::new(suez());
        let a = generator.generate_range(date!(2024 - 06 - 30), 30, &mut StdRng::seed_from_u64(1));
        let b = generator.generate_range(date!(2024 - 06 - 30), 30, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_deviation_is_deterministic_with_weekend_dip() {
        let profile = ChokepointProfile::new(
            "test-strait",
            100.0,
            0.0,
            CategoryMix {
                container: 0.5,
                dry_bulk: 0.2,
                general_cargo: 0.1,
                roro: 0.1,
                tanker: 0.1,
            },
        );
        let generator = ArrivalGenerator::new(profile);
        let mut rng = StdRng::seed_from_u64(0);

        // 2024-01-05 is a Friday, 2024-01-06 a Saturday.
        let friday = generator.generate(date!(2024 - 01 - 05), &mut rng);
        let saturday = generator.generate(date!(2024 - 01 - 06), &mut rng);
        assert_eq!(friday.vessel_count, 100);
        assert_eq!(friday.container, 50);
        assert_eq!(saturday.vessel_count, 90);
        assert_eq!(
            saturday.collected_at.date(),
            date!(2024 - 01 - 07)
        );
    }
}
