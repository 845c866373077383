//! Date formatting and interval helpers
//!
//! Thin wrappers over chrono that produce the SQL and display formats the
//! rest of the application prints.

use crate::error::UtilsError;
use chrono::{Datelike, Days, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub const SQL_DATE: &str = "%Y-%m-%d";
pub const SQL_DATE_TIME: &str = "%Y-%m-%d %H:%M:%S";
pub const DAY_MONTH_YEAR: &str = "%d %m %Y";

/// Which end of the day to align a timestamp to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayBoundary {
    Start,
    End,
}

/// Calendar components of a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

pub fn sql_date(date: &NaiveDateTime) -> String {
    date.format(SQL_DATE).to_string()
}

pub fn sql_date_time(date: &NaiveDateTime) -> String {
    date.format(SQL_DATE_TIME).to_string()
}

/// SQL timestamp moved to 00:00:00 or 23:59:59 of the same day.
pub fn sql_date_time_aligned(date: &NaiveDateTime, boundary: DayBoundary) -> String {
    sql_date_time(&align_to_day(date, boundary))
}

pub fn align_to_day(date: &NaiveDateTime, boundary: DayBoundary) -> NaiveDateTime {
    let time = match boundary {
        DayBoundary::Start => NaiveTime::MIN,
        DayBoundary::End => NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN),
    };
    date.date().and_time(time)
}

pub fn day_month_year(date: &NaiveDateTime) -> String {
    date.format(DAY_MONTH_YEAR).to_string()
}

pub fn explode_date(date: &NaiveDateTime) -> DateParts {
    DateParts {
        year: date.year(),
        month: date.month(),
        day: date.day(),
        hour: date.hour(),
        minute: date.minute(),
        second: date.second(),
    }
}

/// Add a clock interval. Negative components move backwards.
pub fn add_time_interval(
    date: &NaiveDateTime,
    hours: i64,
    minutes: i64,
    seconds: i64,
) -> Result<NaiveDateTime, UtilsError> {
    let interval = Duration::try_hours(hours)
        .zip(Duration::try_minutes(minutes))
        .zip(Duration::try_seconds(seconds))
        .and_then(|((h, m), s)| h.checked_add(&m)?.checked_add(&s))
        .ok_or_else(|| UtilsError::DateOutOfRange {
            message: format!("interval {}h {}m {}s is too large", hours, minutes, seconds),
        })?;

    date.checked_add_signed(interval)
        .ok_or_else(|| UtilsError::DateOutOfRange {
            message: format!("{} + {}s", sql_date_time(date), interval.num_seconds()),
        })
}

/// Add a calendar interval: years and months first, then days.
///
/// Month arithmetic clamps to the end of a shorter month, so 2024-01-31
/// plus one month is 2024-02-29, not the rolled-over 2024-03-02.
pub fn add_date_interval(
    date: &NaiveDateTime,
    years: i32,
    months: i32,
    days: i64,
) -> Result<NaiveDateTime, UtilsError> {
    let out_of_range = || UtilsError::DateOutOfRange {
        message: format!(
            "{} + {}y {}m {}d",
            sql_date_time(date),
            years,
            months,
            days
        ),
    };

    let total_months = i64::from(years) * 12 + i64::from(months);
    let shifted = if total_months >= 0 {
        date.checked_add_months(Months::new(
            u32::try_from(total_months).map_err(|_| out_of_range())?,
        ))
    } else {
        date.checked_sub_months(Months::new(
            u32::try_from(-total_months).map_err(|_| out_of_range())?,
        ))
    }
    .ok_or_else(out_of_range)?;

    let day_count = Days::new(days.unsigned_abs());
    if days >= 0 {
        shifted.checked_add_days(day_count)
    } else {
        shifted.checked_sub_days(day_count)
    }
    .ok_or_else(out_of_range)
}

/// Parse `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` or a bare `YYYY-MM-DD` (midnight).
pub fn parse_date_time(input: &str) -> Result<NaiveDateTime, UtilsError> {
    let trimmed = input.trim();
    NaiveDateTime::parse_from_str(trimmed, SQL_DATE_TIME)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| NaiveDate::parse_from_str(trimmed, SQL_DATE).map(|d| d.and_time(NaiveTime::MIN)))
        .map_err(|_| UtilsError::DateParse {
            input: input.to_string(),
        })
}
