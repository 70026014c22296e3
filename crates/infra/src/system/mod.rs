use chrono::{NaiveDate, Utc};

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;
    /// The current calendar date, used to scope the per-day sequences
    fn today(&self) -> NaiveDate;
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Frozen clock for tests that depend on the current date, e.g. the day
/// boundary of the sequence allocator.
pub struct FrozenSys {
    pub timestamp_millis: i64,
    pub date: NaiveDate,
}

impl ISys for FrozenSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.timestamp_millis
    }

    fn today(&self) -> NaiveDate {
        self.date
    }
}
