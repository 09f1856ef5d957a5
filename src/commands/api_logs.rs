use serde::Serialize;

use super::API_LOG_WINDOW;
use crate::analyzer::{api_log_stats, ApiLogStats};
use crate::filters::{distinct_sources, filter_api_logs, ApiLogFilters};
use crate::model::ApiLogEntry;
use crate::source::SortSpec;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLogPage {
    pub logs: Vec<ApiLogEntry>,
    /// Computed over the whole log window, not just the filtered rows.
    pub stats: ApiLogStats,
    pub sources: Vec<String>,
}

pub fn list_api_logs(state: &AppState, filters: &ApiLogFilters) -> ApiLogPage {
    let window = state
        .source
        .api_logs
        .list(Some(&SortSpec::desc("timestamp")), Some(API_LOG_WINDOW));

    ApiLogPage {
        logs: filter_api_logs(&window, filters).into_iter().cloned().collect(),
        stats: api_log_stats(&window),
        sources: distinct_sources(&window),
    }
}
