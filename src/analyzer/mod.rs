pub mod api_logs;
pub mod customers;
pub mod growth;
pub mod stats;
pub mod summary;
pub mod temporal;

pub use api_logs::{api_log_stats, ApiLogStats};
pub use customers::{active_customer_count, customer_parcel_stats, CustomerParcelStats};
pub use growth::{build_monthly_series, build_monthly_series_n, MonthlyPoint, GROWTH_MONTHS};
pub use summary::{
    summarize, summarize_with, BucketCount, CustomerVolume, DailyCount, Summary, SummaryLimits,
};
pub use temporal::{filter_by_date_range, range_start, RangeKey};
