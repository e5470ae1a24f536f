//! Database seeding utilities.

use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use vessels::models::ArrivalRow;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Database seeder for inserting generated test data.
pub struct Seeder {
    pool: PgPool,
    batch_size: usize,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            batch_size: 500,
        }
    }

    /// Sets the batch size for bulk operations.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Applies the `vessel_arrivals` schema migration.
    pub async fn migrate(&self) -> Result<(), SeedError> {
        sqlx::migrate!("../vessels/migrations")
            .run(&self.pool)
            .await?;
        Ok(())
    }

    /// Seeds arrival rows, skipping (chokepoint, date) pairs that already exist.
    /// Returns the number of rows actually inserted.
    pub async fn seed_arrivals(&self, rows: &[ArrivalRow]) -> Result<u64, SeedError> {
        info!("Seeding {} vessel arrivals...", rows.len());

        let mut inserted = 0;
        for (i, chunk) in rows.chunks(self.batch_size).enumerate() {
            inserted += self.insert_arrival_batch(chunk).await?;
            info!(
                "  Seeded {}/{} vessel arrivals",
                i * self.batch_size + chunk.len(),
                rows.len()
            );
        }

        info!("Seeded {} new vessel arrivals", inserted);
        Ok(inserted)
    }

    /// Inserts a batch of rows in one transaction.
    async fn insert_arrival_batch(&self, rows: &[ArrivalRow]) -> Result<u64, SeedError> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for row in rows {
            let result = sqlx::query(
                r#"
                INSERT INTO vessel_arrivals
                    (date, chokepoint, vessel_count, container, dry_bulk,
                     general_cargo, roro, tanker, collected_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                ON CONFLICT (chokepoint, date) DO NOTHING
                "#,
            )
            .bind(row.date)
            .bind(&row.chokepoint)
            .bind(row.vessel_count)
            .bind(row.container)
            .bind(row.dry_bulk)
            .bind(row.general_cargo)
            .bind(row.roro)
            .bind(row.tanker)
            .bind(row.collected_at)
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
