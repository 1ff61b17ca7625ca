use chrono::{DateTime, Local, NaiveDate, Utc};

/// Time source for the booking flow. Injected so validation and record
/// timestamps are deterministic under test.
pub trait Clock: Send + Sync {
    /// Current calendar day in the visitor's local timezone. Date recency
    /// is compared at day granularity against this value.
    fn today(&self) -> NaiveDate;

    /// Current instant in UTC, used for record timestamps.
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
