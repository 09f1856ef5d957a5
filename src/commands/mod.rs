pub mod api_logs;
pub mod customers;
pub mod dashboard;
pub mod parcels;

// Newest-first windows each view reads from the snapshot.
pub(crate) const DASHBOARD_PARCEL_WINDOW: usize = 1000;
pub(crate) const LIST_PARCEL_WINDOW: usize = 2000;
pub(crate) const CUSTOMER_WINDOW: usize = 500;
pub(crate) const API_LOG_WINDOW: usize = 1000;
