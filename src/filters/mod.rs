pub mod api_logs;
pub mod customers;
pub mod pagination;
pub mod parcels;

pub use api_logs::{distinct_sources, filter_api_logs, ApiLogFilters, DirectionFilter, StatusClass};
pub use customers::search_customers;
pub use pagination::{paginate, Page};
pub use parcels::{filter_parcels, ParcelFilters};
