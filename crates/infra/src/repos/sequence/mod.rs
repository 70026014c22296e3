mod inmemory;
mod postgres;

use chrono::NaiveDate;
pub use inmemory::InMemorySequenceRepo;
pub use postgres::PostgresSequenceRepo;

/// Atomic per-day counters backing the human readable booking and contact
/// numbers. `next` hands out 1, 2, 3, ... for a given `(prefix, day)` pair
/// and never hands out the same value twice, even under concurrent
/// submissions. Each prefix is an independent sequence space and every new
/// day starts over at 1.
#[async_trait::async_trait]
pub trait ISequenceRepo: Send + Sync {
    async fn next(&self, prefix: &str, day: NaiveDate) -> anyhow::Result<i64>;
}

#[cfg(test)]
mod tests {
    use crate::SparkleContext;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn sequence_increments_by_one_within_a_day() {
        let ctx = SparkleContext::create_inmemory();
        let day = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();

        let first = ctx.repos.sequences.next("BK", day).await.unwrap();
        let second = ctx.repos.sequences.next("BK", day).await.unwrap();
        let third = ctx.repos.sequences.next("BK", day).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, first + 1);
        assert_eq!(third, second + 1);
    }

    #[tokio::test]
    async fn sequence_resets_on_day_boundary() {
        let ctx = SparkleContext::create_inmemory();
        let day = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let next_day = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();

        for _ in 0..5 {
            ctx.repos.sequences.next("BK", day).await.unwrap();
        }
        assert_eq!(ctx.repos.sequences.next("BK", next_day).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn prefixes_are_independent_sequence_spaces() {
        let ctx = SparkleContext::create_inmemory();
        let day = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();

        assert_eq!(ctx.repos.sequences.next("BK", day).await.unwrap(), 1);
        assert_eq!(ctx.repos.sequences.next("BK", day).await.unwrap(), 2);
        assert_eq!(ctx.repos.sequences.next("CT", day).await.unwrap(), 1);
    }
}
