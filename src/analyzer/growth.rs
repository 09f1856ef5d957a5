use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;

use super::temporal::{month_key, month_label, shift_month};
use crate::model::{ApiLogEntry, Customer};

/// Number of points in the customer-growth chart.
pub const GROWTH_MONTHS: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPoint {
    /// Three-letter month abbreviation.
    pub month: String,
    pub month_key: String,
    /// Customers created before the end of this month (running total).
    pub cumulative_customers: usize,
    pub api_calls_in_month: usize,
}

/// Twelve calendar months ending with the month that contains `reference`.
pub fn build_monthly_series(
    customers: &[Customer],
    api_logs: &[ApiLogEntry],
    reference: NaiveDateTime,
) -> Vec<MonthlyPoint> {
    build_monthly_series_n(customers, api_logs, reference, GROWTH_MONTHS)
}

/// Oldest-to-newest monthly points over [start, end) month boundaries.
///
/// Customers and logs whose timestamp does not parse are left out of every
/// month. The customer count is cumulative, so it never decreases from one
/// point to the next.
pub fn build_monthly_series_n(
    customers: &[Customer],
    api_logs: &[ApiLogEntry],
    reference: NaiveDateTime,
    months: usize,
) -> Vec<MonthlyPoint> {
    let created: Vec<NaiveDateTime> = customers.iter().filter_map(Customer::created_at).collect();
    let logged: Vec<NaiveDateTime> = api_logs.iter().filter_map(ApiLogEntry::logged_at).collect();

    let year = reference.year();
    let month = reference.month();

    (0..months as i32)
        .rev()
        .map(|back| {
            let start_date = shift_month(year, month, -back);
            let end_date = shift_month(year, month, 1 - back);
            let start = start_date.and_hms_opt(0, 0, 0).unwrap_or_default();
            let end = end_date.and_hms_opt(0, 0, 0).unwrap_or_default();

            MonthlyPoint {
                month: month_label(start_date),
                month_key: month_key(start_date),
                cumulative_customers: created.iter().filter(|c| **c < end).count(),
                api_calls_in_month: logged.iter().filter(|t| **t >= start && **t < end).count(),
            }
        })
        .collect()
}
