use serde::Deserialize;

use crate::model::Parcel;

/// Criteria of the parcel list page. Unset or empty criteria match everything.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParcelFilters {
    /// Case-insensitive substring of the tracking number.
    pub tracking_number: Option<String>,
    /// Exact customer id.
    pub customer: Option<String>,
    pub carrier: Option<String>,
    pub status: Option<String>,
    /// Exact destination country value.
    pub country: Option<String>,
}

fn active(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|s| !s.is_empty())
}

fn equals(criterion: &Option<String>, value: &Option<String>) -> bool {
    match active(criterion) {
        Some(wanted) => value.as_deref() == Some(wanted),
        None => true,
    }
}

impl ParcelFilters {
    pub fn is_empty(&self) -> bool {
        active(&self.tracking_number).is_none()
            && active(&self.customer).is_none()
            && active(&self.carrier).is_none()
            && active(&self.status).is_none()
            && active(&self.country).is_none()
    }

    pub fn matches(&self, parcel: &Parcel) -> bool {
        if let Some(needle) = active(&self.tracking_number) {
            let needle = needle.to_lowercase();
            let found = parcel
                .tracking_number
                .as_deref()
                .is_some_and(|t| t.to_lowercase().contains(&needle));
            if !found {
                return false;
            }
        }
        equals(&self.customer, &parcel.customer_id)
            && equals(&self.carrier, &parcel.carrier)
            && equals(&self.status, &parcel.status)
            && equals(&self.country, &parcel.destination_country)
    }
}

/// Parcels matching `filters`, in input order.
pub fn filter_parcels<'a>(parcels: &'a [Parcel], filters: &ParcelFilters) -> Vec<&'a Parcel> {
    parcels.iter().filter(|p| filters.matches(p)).collect()
}
