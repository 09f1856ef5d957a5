//! One-pass parcel summary behind the dashboard cards and breakdown charts.
use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

use super::stats::pct;
use super::temporal::day_label;
use crate::model::{Parcel, ParcelStatus};

// ─── Data Structures ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    pub delivered: usize,
    pub in_transit: usize,
    pub failed: usize,
    pub delivery_rate: f64,
    pub by_status: Vec<BucketCount>,
    pub by_carrier: Vec<BucketCount>,
    pub by_country: Vec<BucketCount>,
    pub top_customers: Vec<CustomerVolume>,
    pub daily: Vec<DailyCount>,
    /// Parcels left out of `daily` because their creation timestamp is
    /// missing or unparseable. They still count in `total` and the breakdowns.
    pub undated: usize,
}

/// A named group and its tally. `key` is the literal field value; a parcel
/// without the field lands in the `None` bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketCount {
    pub key: Option<String>,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerVolume {
    pub customer_id: String,
    pub customer_name: Option<String>,
    pub count: usize,
    /// Share of the listed customers' combined volume, not of all parcels.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCount {
    pub label: String,
    pub parcels: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLimits {
    pub top_customers: usize,
    pub daily_series_days: usize,
}

impl Default for SummaryLimits {
    fn default() -> Self {
        SummaryLimits {
            top_customers: 5,
            daily_series_days: 14,
        }
    }
}

impl Summary {
    /// Count for a literal status value, 0 when absent.
    pub fn status_count(&self, status: &str) -> usize {
        self.by_status
            .iter()
            .find(|b| b.key.as_deref() == Some(status))
            .map(|b| b.count)
            .unwrap_or(0)
    }

    /// Delivery rate as shown on the card: one decimal, or a bare "0" when
    /// there is nothing to rate.
    pub fn delivery_rate_label(&self) -> String {
        if self.total == 0 {
            "0".to_string()
        } else {
            format!("{:.1}", self.delivery_rate)
        }
    }
}

// ─── Tally ───────────────────────────────────────────────────────────────────

/// Counter that remembers the order in which keys were first seen.
pub(crate) struct Tally<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K: Eq + Hash + Clone> Tally<K> {
    pub(crate) fn new() -> Self {
        Tally {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Entries in first-seen order.
    pub(crate) fn into_entries(self) -> Vec<(K, usize)> {
        self.entries
    }

    /// Entries by descending count; equal counts keep first-seen order.
    pub(crate) fn into_ranked(self) -> Vec<(K, usize)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

fn into_buckets(tally: Tally<Option<String>>, total: usize) -> Vec<BucketCount> {
    tally
        .into_ranked()
        .into_iter()
        .map(|(key, count)| BucketCount {
            key,
            count,
            percentage: pct(count, total),
        })
        .collect()
}

// ─── Builder ─────────────────────────────────────────────────────────────────

/// Summarizes parcels with the dashboard's default limits (top 5 customers,
/// 14 daily buckets).
pub fn summarize<'a, I>(parcels: I) -> Summary
where
    I: IntoIterator<Item = &'a Parcel>,
{
    summarize_with(parcels, SummaryLimits::default())
}

/// Summarizes parcels in a single pass over the input.
///
/// The daily series keeps the order in which day labels are first met while
/// iterating, then keeps only the last `daily_series_days` of them. It is not
/// sorted by date: with newest-first input the series reads newest-first.
pub fn summarize_with<'a, I>(parcels: I, limits: SummaryLimits) -> Summary
where
    I: IntoIterator<Item = &'a Parcel>,
{
    let mut total = 0usize;
    let mut undated = 0usize;
    let mut statuses: Tally<Option<String>> = Tally::new();
    let mut carriers: Tally<Option<String>> = Tally::new();
    let mut countries: Tally<Option<String>> = Tally::new();
    let mut days: Tally<String> = Tally::new();
    let mut customers: Vec<CustomerVolume> = Vec::new();
    let mut customer_index: HashMap<&str, usize> = HashMap::new();

    for parcel in parcels {
        total += 1;
        statuses.add(parcel.status.clone());
        carriers.add(parcel.carrier.clone());
        countries.add(parcel.destination_country.clone());

        if let Some(id) = parcel.customer_id.as_deref().filter(|id| !id.is_empty()) {
            match customer_index.get(id) {
                Some(&i) => customers[i].count += 1,
                None => {
                    customer_index.insert(id, customers.len());
                    customers.push(CustomerVolume {
                        customer_id: id.to_string(),
                        customer_name: parcel.customer_name.clone(),
                        count: 1,
                        percentage: 0.0,
                    });
                }
            }
        }

        match parcel.created_at() {
            Some(created) => days.add(day_label(created)),
            None => undated += 1,
        }
    }

    let by_status = into_buckets(statuses, total);
    let by_carrier = into_buckets(carriers, total);
    let by_country = into_buckets(countries, total);

    let count_of = |status: ParcelStatus| -> usize {
        by_status
            .iter()
            .find(|b| b.key.as_deref() == Some(status.as_str()))
            .map(|b| b.count)
            .unwrap_or(0)
    };
    let delivered = count_of(ParcelStatus::Delivered);
    let in_transit = count_of(ParcelStatus::InTransit);
    let failed = count_of(ParcelStatus::Failed);

    customers.sort_by(|a, b| b.count.cmp(&a.count));
    customers.truncate(limits.top_customers);
    let top_sum: usize = customers.iter().map(|c| c.count).sum();
    for c in &mut customers {
        c.percentage = pct(c.count, top_sum);
    }

    let mut daily: Vec<DailyCount> = days
        .into_entries()
        .into_iter()
        .map(|(label, parcels)| DailyCount { label, parcels })
        .collect();
    if daily.len() > limits.daily_series_days {
        daily.drain(..daily.len() - limits.daily_series_days);
    }

    Summary {
        total,
        delivered,
        in_transit,
        failed,
        delivery_rate: pct(delivered, total),
        by_status,
        by_carrier,
        by_country,
        top_customers: customers,
        daily,
        undated,
    }
}
