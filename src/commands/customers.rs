use serde::Serialize;

use super::{CUSTOMER_WINDOW, LIST_PARCEL_WINDOW};
use crate::analyzer::{customer_parcel_stats, CustomerParcelStats};
use crate::filters::search_customers;
use crate::model::{Customer, CustomerStatus};
use crate::source::SortSpec;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRow {
    pub customer: Customer,
    /// Display status; `None` for a stored value the table has no badge for.
    pub status: Option<CustomerStatus>,
    pub parcels: CustomerParcelStats,
}

/// Customer table rows matching `query`, newest customers first, each with
/// the parcel totals found in the parcel window.
pub fn list_customers(state: &AppState, query: &str) -> Vec<CustomerRow> {
    let customers = state
        .source
        .customers
        .list(Some(&SortSpec::desc("created_date")), Some(CUSTOMER_WINDOW));
    let parcels = state
        .source
        .parcels
        .list(Some(&SortSpec::desc("created_date")), Some(LIST_PARCEL_WINDOW));
    let stats = customer_parcel_stats(&parcels);

    search_customers(&customers, query)
        .into_iter()
        .map(|c| CustomerRow {
            status: c.status_kind(),
            parcels: stats.get(&c.id).copied().unwrap_or_default(),
            customer: c.clone(),
        })
        .collect()
}
