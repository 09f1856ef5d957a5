use std::collections::HashMap;

use serde::Serialize;

use crate::model::{Customer, Parcel, ParcelStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerParcelStats {
    pub total: usize,
    pub delivered: usize,
}

/// Parcel totals per customer id. Parcels without a customer id are skipped.
pub fn customer_parcel_stats(parcels: &[Parcel]) -> HashMap<String, CustomerParcelStats> {
    let mut stats: HashMap<String, CustomerParcelStats> = HashMap::new();
    for parcel in parcels {
        let Some(id) = parcel.customer_id.as_deref() else {
            continue;
        };
        let entry = stats.entry(id.to_string()).or_default();
        entry.total += 1;
        if parcel.has_status(ParcelStatus::Delivered) {
            entry.delivered += 1;
        }
    }
    stats
}

/// Customers whose stored status is literally `active`. A customer without a
/// status is displayed as active but is not counted here.
pub fn active_customer_count(customers: &[Customer]) -> usize {
    customers
        .iter()
        .filter(|c| c.status.as_deref() == Some("active"))
        .count()
}
