//! Time related utils.

use chrono::Utc;

use crate::{Error, Result};

/// DateTime is the alias of `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Build a datetime from unix seconds.
pub fn from_unix_seconds(secs: i64) -> Result<DateTime> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| Error::unexpected(format!("unix timestamp {secs} is out of range")))
}
