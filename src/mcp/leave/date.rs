//! Validation of requested leave dates.
//!
//! Leave dates travel as `DD-MM-YYYY` text (e.g. `31-12-2025`). A date is
//! acceptable for a leave application when it:
//! - has exactly that shape (two-digit day and month, four-digit year)
//! - names a real calendar date
//! - falls in a year between 2000 and 2050 inclusive
//! - is not earlier than today

use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;
use thiserror::Error;

pub const LEAVE_DATE_FORMAT: &str = "%d-%m-%Y";

pub const LEAVE_YEARS: RangeInclusive<i32> = 2000..=2050;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRejection {
    #[error("expected a date in DD-MM-YYYY format")]
    Malformed,

    #[error("not a real calendar date")]
    NotACalendarDate,

    #[error("year {0} is outside the bookable range 2000-2050")]
    YearOutOfRange(i32),

    #[error("date is earlier than today ({today})")]
    InThePast { today: NaiveDate },
}

/// Parses `DD-MM-YYYY` text into a calendar date without any range checks.
pub fn parse_calendar_date(text: &str) -> Result<NaiveDate, DateRejection> {
    if !has_leave_date_shape(text) {
        return Err(DateRejection::Malformed);
    }
    NaiveDate::parse_from_str(text, LEAVE_DATE_FORMAT).map_err(|_| DateRejection::NotACalendarDate)
}

/// Parses and validates a requested leave date against `today`.
pub fn parse_leave_date(text: &str, today: NaiveDate) -> Result<NaiveDate, DateRejection> {
    let date = parse_calendar_date(text)?;

    if !LEAVE_YEARS.contains(&date.year()) {
        return Err(DateRejection::YearOutOfRange(date.year()));
    }
    if date < today {
        return Err(DateRejection::InThePast { today });
    }
    Ok(date)
}

#[must_use]
pub fn is_valid_leave_date(text: &str, today: NaiveDate) -> bool {
    parse_leave_date(text, today).is_ok()
}

// chrono alone would also accept "1-1-2030" or "+2030" style years.
fn has_leave_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
