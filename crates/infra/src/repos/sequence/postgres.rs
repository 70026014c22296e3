use super::ISequenceRepo;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::error;

pub struct PostgresSequenceRepo {
    pool: PgPool,
}

impl PostgresSequenceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ISequenceRepo for PostgresSequenceRepo {
    async fn next(&self, prefix: &str, day: NaiveDate) -> anyhow::Result<i64> {
        // Single round trip increment-and-get, the upsert takes a row lock
        // so concurrent submissions serialize on the counter row instead of
        // racing a read-then-write.
        let value: (i64,) = sqlx::query_as(
            r#"
            INSERT INTO day_sequences(prefix, day, value)
            VALUES($1, $2, 1)
            ON CONFLICT (prefix, day)
            DO UPDATE SET value = day_sequences.value + 1
            RETURNING value
            "#,
        )
        .bind(prefix)
        .bind(day)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to allocate next sequence value for prefix: {} and day: {}. DB returned error: {:?}",
                prefix, day, e
            );
            e
        })?;

        Ok(value.0)
    }
}
