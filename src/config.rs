use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analyzer::temporal::RangeKey;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    pub top_customers: usize,
    pub daily_series_days: usize,
    pub growth_months: usize,
    pub page_size: usize,
    pub recent_parcels: usize,
    pub top_countries: usize,
    pub default_range: RangeKey,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            top_customers: 5,
            daily_series_days: 14,
            growth_months: 12,
            page_size: 20,
            recent_parcels: 10,
            top_countries: 8,
            default_range: RangeKey::Month,
        }
    }
}

fn positive(key: &str, value: &Value, default: usize) -> usize {
    match value.as_u64().filter(|n| *n > 0) {
        Some(n) => n as usize,
        None => {
            log::warn!("Ignoring {} {}: keeping {}", key, value, default);
            default
        }
    }
}

/// Reads a JSON object of overrides. Keys that are unknown, or whose value has
/// the wrong shape, keep their default.
pub fn config_from_json(text: &str) -> Result<DashboardConfig, AppError> {
    let value: Value = serde_json::from_str(text)?;
    let mut config = DashboardConfig::default();

    let Value::Object(map) = value else {
        return Err(AppError::Custom(
            "Configuration must be a JSON object".to_string(),
        ));
    };

    for (key, value) in &map {
        match key.as_str() {
            "topCustomers" => config.top_customers = positive(key, value, 5),
            "dailySeriesDays" => config.daily_series_days = positive(key, value, 14),
            "growthMonths" => config.growth_months = positive(key, value, 12),
            "pageSize" => config.page_size = positive(key, value, 20),
            "recentParcels" => config.recent_parcels = positive(key, value, 10),
            "topCountries" => config.top_countries = positive(key, value, 8),
            "defaultRange" => {
                match value.as_str().map(str::parse::<RangeKey>) {
                    Some(Ok(range)) => config.default_range = range,
                    _ => log::warn!("Ignoring defaultRange {}: keeping month", value),
                }
            }
            other => log::warn!("Unknown configuration key {:?} ignored", other),
        }
    }

    Ok(config)
}

/// Loads the configuration file if one is given, defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<DashboardConfig, AppError> {
    match path {
        Some(p) => {
            let text = std::fs::read_to_string(p)?;
            let config = config_from_json(&text)?;
            log::info!("Configuration loaded from {}", p.display());
            Ok(config)
        }
        None => Ok(DashboardConfig::default()),
    }
}
