//! Calendar to Julian Day conversion.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Convert a proleptic Gregorian date and time to a Julian Day.
///
/// `hour` and `minute` are real-valued so that fractional UTC offsets carry
/// through. Out-of-range fields are not rejected; they produce a well-defined
/// but meaningless day count.
pub fn to_julian_day(year: i32, month: u32, day: u32, hour: f64, minute: f64) -> f64 {
    let mut y = year as f64;
    let mut m = month as f64;
    if m <= 2.0 {
        y -= 1.0;
        m += 12.0;
    }
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    let day_fraction = (hour + minute / 60.0) / 24.0;

    (365.25 * (y + 4716.0)).floor()
        + (30.6001 * (m + 1.0)).floor()
        + day as f64
        + day_fraction
        + b
        - 1524.5
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}

/// Convert a UTC datetime to a Julian Day.
pub fn julian_day_from_datetime(dt: DateTime<Utc>) -> f64 {
    let minute = dt.minute() as f64 + dt.second() as f64 / 60.0;
    to_julian_day(dt.year(), dt.month(), dt.day(), dt.hour() as f64, minute)
}
