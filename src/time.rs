// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Helper functions around time. The catalogue keys its observations by
//! Modified Julian Date (MJD = Julian Date − 2400000.5); users supply
//! calendar dates.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use hifitime::Epoch;
use thiserror::Error;

use crate::constants::DATE_FORMATS;

/// Convert a calendar timestamp (treated as UTC) to an MJD day fraction.
pub fn datetime_to_mjd(dt: NaiveDateTime) -> f64 {
    let epoch = Epoch::from_gregorian_utc(
        dt.year(),
        dt.month() as u8,
        dt.day() as u8,
        dt.hour() as u8,
        dt.minute() as u8,
        dt.second() as u8,
        dt.nanosecond(),
    );
    epoch.to_mjd_utc_days()
}

/// Convert an MJD day fraction back to a calendar timestamp (UTC).
pub fn mjd_to_datetime(mjd: f64) -> NaiveDateTime {
    let (year, month, day, hour, minute, second, nanos) =
        Epoch::from_mjd_utc(mjd).to_gregorian_utc();
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .and_then(|date| date.and_hms_nano_opt(hour as u32, minute as u32, second as u32, nanos))
        .expect("hifitime only emits valid Gregorian timestamps")
}

#[derive(Error, Debug)]
#[error(
    "Couldn't parse '{0}' as a date. Supported formats: {formats}",
    formats = DATE_FORMATS.join(", ")
)]
pub struct DateParseError(String);

/// Parse a user-supplied calendar date, trying each supported format in
/// turn. Date-only strings resolve to midnight UTC.
pub fn parse_date(s: &str) -> Result<NaiveDateTime, DateParseError> {
    let trimmed = s.trim();
    for format in DATE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt);
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date.and_hms_opt(0, 0, 0).expect("midnight is always valid"));
        }
    }
    Err(DateParseError(s.to_string()))
}
