use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::model::Parcel;

/// Relative window selected on the dashboard. The window always runs from its
/// start up to "now", with no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeKey {
    Today,
    Week,
    Month,
    Quarter,
    Year,
}

impl RangeKey {
    pub fn as_str(self) -> &'static str {
        match self {
            RangeKey::Today => "today",
            RangeKey::Week => "week",
            RangeKey::Month => "month",
            RangeKey::Quarter => "quarter",
            RangeKey::Year => "year",
        }
    }
}

impl FromStr for RangeKey {
    type Err = AppError;

    /// Unknown keys are an error, never a silent fallback to month.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(RangeKey::Today),
            "week" => Ok(RangeKey::Week),
            "month" => Ok(RangeKey::Month),
            "quarter" => Ok(RangeKey::Quarter),
            "year" => Ok(RangeKey::Year),
            other => Err(AppError::UnknownRangeKey(other.to_string())),
        }
    }
}

impl fmt::Display for RangeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).unwrap_or_default()
}

/// First day of the month `offset` months away from (`year`, `month`).
/// Negative offsets go back in time.
pub fn shift_month(year: i32, month: u32, offset: i32) -> NaiveDate {
    let index = year * 12 + month as i32 - 1 + offset;
    let y = index.div_euclid(12);
    let m = index.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(y, m, 1).unwrap_or_default()
}

/// Inclusive lower bound of the window for `range` at instant `now`.
/// Weeks start on Monday.
pub fn range_start(range: RangeKey, now: NaiveDateTime) -> NaiveDateTime {
    let today = now.date();
    let start = match range {
        RangeKey::Today => today,
        RangeKey::Week => {
            today - Duration::days(today.weekday().num_days_from_monday() as i64)
        }
        RangeKey::Month => shift_month(today.year(), today.month(), 0),
        RangeKey::Quarter => {
            let first_month = (today.month() - 1) / 3 * 3 + 1;
            shift_month(today.year(), first_month, 0)
        }
        RangeKey::Year => shift_month(today.year(), 1, 0),
    };
    midnight(start)
}

/// Parcels created on or after the start of `range`. Parcels whose creation
/// timestamp cannot be parsed never fall inside a window.
pub fn filter_by_date_range(
    parcels: &[Parcel],
    range: RangeKey,
    now: NaiveDateTime,
) -> Vec<&Parcel> {
    let start = range_start(range, now);
    parcels
        .iter()
        .filter(|p| p.created_at().is_some_and(|created| created >= start))
        .collect()
}

/// "Jan 5" style label used by the daily series.
pub fn day_label(dt: NaiveDateTime) -> String {
    dt.format("%b %-d").to_string()
}

/// Three-letter month abbreviation ("Jan").
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b").to_string()
}

/// "2026-01" style key.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}
