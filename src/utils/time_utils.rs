use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const MS_IN_Y: i64 = Self::MS_IN_D * 365;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
    pub const YEAR_FORMAT: &str = "%Y";

    /// Whole days covered by `days` expressed in milliseconds.
    pub const fn days_to_ms(days: i64) -> i64 {
        days * Self::MS_IN_D
    }
}

/// UTC calendar day a timestamp falls on. `None` only for timestamps chrono cannot represent.
pub fn utc_day_of(epoch_ms: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(epoch_ms).map(|dt| dt.date_naive())
}

pub fn epoch_ms_to_utc(epoch_ms: i64) -> String {
    // Used for display purposes
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string(),
        None => String::new(),
    }
}

pub fn epoch_ms_to_year(epoch_ms: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => dt.format(TimeUtils::YEAR_FORMAT).to_string(),
        None => String::new(),
    }
}

/// UTC year of a timestamp (falls back to the Unix epoch year when out of range)
pub fn year_of(epoch_ms: i64) -> i32 {
    DateTime::from_timestamp_millis(epoch_ms)
        .map(|dt| dt.year())
        .unwrap_or(1970)
}

/// Midnight UTC on 1 January of `year`, in milliseconds.
pub fn start_of_year_ms(year: i32) -> Option<i64> {
    match Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0) {
        chrono::LocalResult::Single(dt) => Some(dt.timestamp_millis()),
        _ => None,
    }
}

pub fn utc_now_as_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}
