use serde::Serialize;

use super::LIST_PARCEL_WINDOW;
use crate::error::AppError;
use crate::filters::{filter_parcels, paginate, Page, ParcelFilters};
use crate::model::{country_name, ApiLogEntry, Parcel, TrackingEvent};
use crate::source::{Criteria, SortSpec};
use crate::state::AppState;

/// One page of the parcel table. Filters apply to the newest-first window of
/// the snapshot before paging.
pub fn list_parcels(state: &AppState, filters: &ParcelFilters, page: usize) -> Page<Parcel> {
    let window = state
        .source
        .parcels
        .list(Some(&SortSpec::desc("created_date")), Some(LIST_PARCEL_WINDOW));
    let matching: Vec<Parcel> = if filters.is_empty() {
        window
    } else {
        filter_parcels(&window, filters).into_iter().cloned().collect()
    };
    paginate(matching, page, state.config.page_size)
}

// ─── Detail ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelDetail {
    pub parcel: Parcel,
    pub status_label: &'static str,
    pub country_name: Option<String>,
    pub events: Vec<TimelineEvent>,
    pub api_logs: Vec<ApiLogEntry>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    #[serde(flatten)]
    pub event: TrackingEvent,
    pub label: String,
}

/// A parcel with its tracking timeline and API traffic, both newest first.
pub fn parcel_detail(state: &AppState, parcel_id: &str) -> Result<ParcelDetail, AppError> {
    let parcel = state
        .source
        .parcels
        .get(parcel_id)
        .cloned()
        .ok_or_else(|| AppError::ParcelNotFound(parcel_id.to_string()))?;

    let by_parcel = Criteria::new().eq("parcel_id", parcel_id);
    let events = state
        .source
        .tracking_events
        .filter(&by_parcel, Some(&SortSpec::desc("event_timestamp")))
        .into_iter()
        .map(|event| TimelineEvent {
            label: event.event_kind().label(),
            event,
        })
        .collect();
    let api_logs = state
        .source
        .api_logs
        .filter(&by_parcel, Some(&SortSpec::desc("timestamp")));

    Ok(ParcelDetail {
        status_label: parcel.status_kind().label(),
        country_name: parcel
            .destination_country
            .as_deref()
            .map(|c| country_name(c).to_string()),
        events,
        api_logs,
        parcel,
    })
}
