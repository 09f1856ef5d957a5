use std::str::FromStr;

use serde::Deserialize;

use crate::analyzer::summary::Tally;
use crate::error::AppError;
use crate::model::{ApiLogEntry, Direction};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionFilter {
    #[default]
    All,
    Inbound,
    Outbound,
}

impl FromStr for DirectionFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(DirectionFilter::All),
            "inbound" => Ok(DirectionFilter::Inbound),
            "outbound" => Ok(DirectionFilter::Outbound),
            other => Err(AppError::UnknownFilter {
                kind: "direction",
                value: other.to_string(),
            }),
        }
    }
}

/// Response class: success is any 2xx code, error is any other code. Logs
/// without a code pass either filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    #[default]
    All,
    Success,
    Error,
}

impl FromStr for StatusClass {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusClass::All),
            "success" => Ok(StatusClass::Success),
            "error" => Ok(StatusClass::Error),
            other => Err(AppError::UnknownFilter {
                kind: "status",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiLogFilters {
    /// Case-insensitive substring of the tracking number or the endpoint.
    pub search: Option<String>,
    pub direction: DirectionFilter,
    pub status: StatusClass,
    /// Exact source label; `None` or "all" keeps every source.
    pub source: Option<String>,
}

impl ApiLogFilters {
    pub fn matches(&self, log: &ApiLogEntry) -> bool {
        if let Some(needle) = self.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = needle.to_lowercase();
            let hit = |field: &Option<String>| {
                field
                    .as_deref()
                    .is_some_and(|v| v.to_lowercase().contains(&needle))
            };
            if !hit(&log.tracking_number) && !hit(&log.endpoint) {
                return false;
            }
        }

        let direction_ok = match self.direction {
            DirectionFilter::All => true,
            DirectionFilter::Inbound => log.direction_kind() == Some(Direction::Inbound),
            DirectionFilter::Outbound => log.direction_kind() == Some(Direction::Outbound),
        };
        if !direction_ok {
            return false;
        }

        // A log without a status code is in neither class, so neither filter
        // hides it
        let status_ok = match (self.status, log.status_code) {
            (StatusClass::All, _) | (_, None) => true,
            (StatusClass::Success, Some(_)) => log.is_success(),
            (StatusClass::Error, Some(_)) => !log.is_success(),
        };
        if !status_ok {
            return false;
        }

        match self.source.as_deref() {
            None | Some("all") | Some("") => true,
            Some(source) => log.source.as_deref() == Some(source),
        }
    }
}

/// Logs matching `filters`, in input order.
pub fn filter_api_logs<'a>(logs: &'a [ApiLogEntry], filters: &ApiLogFilters) -> Vec<&'a ApiLogEntry> {
    logs.iter().filter(|l| filters.matches(l)).collect()
}

/// Source labels in the order they first appear; blanks are skipped.
pub fn distinct_sources(logs: &[ApiLogEntry]) -> Vec<String> {
    let mut seen: Tally<&str> = Tally::new();
    for source in logs.iter().filter_map(|l| l.source.as_deref()) {
        if !source.is_empty() {
            seen.add(source);
        }
    }
    seen.into_entries()
        .into_iter()
        .map(|(s, _)| s.to_string())
        .collect()
}
