use chrono::{DateTime, Utc};

/// Time source - the current block time.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
