//! Fixed-format timestamps used by every stub.
//!
//! The API serialises datetimes as `YYYY-MM-DDTHH:MM:SS.ffffffZ` in UTC. Stub
//! defaults are literal strings in that format, and structured date/time
//! overrides are converted into it before they reach a stub.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// strftime pattern matching the API's datetime serialisation
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// A structured date/time value that can be rendered as an API timestamp.
///
/// Implemented for naive datetimes (taken as UTC), naive dates (midnight UTC)
/// and zone-aware datetimes (converted to UTC first).
pub trait Timestamp {
    /// The instant as a naive UTC datetime
    fn to_naive_utc(&self) -> NaiveDateTime;

    /// Render using [`TIMESTAMP_FORMAT`]
    fn to_api_timestamp(&self) -> String {
        format_timestamp(&self.to_naive_utc())
    }
}

impl Timestamp for NaiveDateTime {
    fn to_naive_utc(&self) -> NaiveDateTime {
        *self
    }
}

impl Timestamp for NaiveDate {
    fn to_naive_utc(&self) -> NaiveDateTime {
        self.and_time(NaiveTime::default())
    }
}

impl<Tz: TimeZone> Timestamp for DateTime<Tz> {
    fn to_naive_utc(&self) -> NaiveDateTime {
        self.naive_utc()
    }
}

/// Format a naive UTC datetime as an API timestamp
pub fn format_timestamp(datetime: &NaiveDateTime) -> String {
    datetime.format(TIMESTAMP_FORMAT).to_string()
}
