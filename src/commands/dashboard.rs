use chrono::NaiveDateTime;
use serde::Serialize;

use super::{API_LOG_WINDOW, CUSTOMER_WINDOW, DASHBOARD_PARCEL_WINDOW};
use crate::analyzer::{
    active_customer_count, build_monthly_series_n, filter_by_date_range, summarize_with,
    MonthlyPoint, RangeKey, Summary, SummaryLimits,
};
use crate::model::{country_name, Parcel};
use crate::source::SortSpec;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    pub range: RangeKey,
    pub summary: Summary,
    pub delivery_rate_label: String,
    pub active_customers: usize,
    pub growth: Vec<MonthlyPoint>,
    pub top_countries: Vec<CountryShare>,
    pub recent_parcels: Vec<Parcel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryShare {
    pub code: Option<String>,
    pub name: Option<String>,
    pub count: usize,
    pub percentage: f64,
}

/// Dashboard figures for `range`, computed against `now`.
///
/// The summary covers the parcels created inside the range. Growth, the active
/// customer card and the recent-parcel table ignore the range, as the page does.
pub fn build_dashboard(state: &AppState, range: RangeKey, now: NaiveDateTime) -> DashboardPayload {
    let config = &state.config;
    let parcels = state
        .source
        .parcels
        .list(Some(&SortSpec::desc("created_date")), Some(DASHBOARD_PARCEL_WINDOW));
    let customers = state
        .source
        .customers
        .list(Some(&SortSpec::desc("created_date")), Some(CUSTOMER_WINDOW));
    let api_logs = state
        .source
        .api_logs
        .list(Some(&SortSpec::desc("timestamp")), Some(API_LOG_WINDOW));

    let in_range = filter_by_date_range(&parcels, range, now);
    let summary = summarize_with(
        in_range,
        SummaryLimits {
            top_customers: config.top_customers,
            daily_series_days: config.daily_series_days,
        },
    );

    let top_countries = summary
        .by_country
        .iter()
        .take(config.top_countries)
        .map(|b| CountryShare {
            code: b.key.clone(),
            name: b.key.as_deref().map(|code| country_name(code).to_string()),
            count: b.count,
            percentage: b.percentage,
        })
        .collect();

    let growth = build_monthly_series_n(&customers, &api_logs, now, config.growth_months);

    log::info!(
        "Dashboard built for range {}: {} of {} parcels in range",
        range,
        summary.total,
        parcels.len()
    );

    DashboardPayload {
        range,
        delivery_rate_label: summary.delivery_rate_label(),
        active_customers: active_customer_count(&customers),
        growth,
        top_countries,
        recent_parcels: parcels.into_iter().take(config.recent_parcels).collect(),
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::model::Customer;
    use crate::source::SnapshotSource;
    use chrono::NaiveDate;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn parcel(id: &str, created: &str, status: &str, country: &str) -> Parcel {
        Parcel {
            id: id.to_string(),
            created_date: Some(created.to_string()),
            status: Some(status.to_string()),
            destination_country: Some(country.to_string()),
            ..Default::default()
        }
    }

    fn state(parcels: Vec<Parcel>, customers: Vec<Customer>) -> AppState {
        AppState::new(
            SnapshotSource::new(parcels, customers, Vec::new(), Vec::new()),
            DashboardConfig::default(),
        )
    }

    #[test]
    fn test_range_limits_summary_not_recent_table() {
        let s = state(
            vec![
                parcel("old", "2025-11-02T09:00:00", "delivered", "DE"),
                parcel("new", "2026-01-06T09:00:00", "in_transit", "FR"),
            ],
            Vec::new(),
        );
        let payload = build_dashboard(&s, RangeKey::Month, dt("2026-01-10 12:00:00"));
        assert_eq!(payload.summary.total, 1);
        assert_eq!(payload.delivery_rate_label, "0.0");
        let recent: Vec<&str> = payload.recent_parcels.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(recent, vec!["new", "old"]);
    }

    #[test]
    fn test_top_countries_named_and_capped() {
        let codes = ["DE", "FR", "NL", "BE", "ES", "IT", "PL", "AT", "CZ", "XX"];
        let parcels = codes
            .iter()
            .enumerate()
            .map(|(i, c)| parcel(&format!("p{i}"), "2026-01-06T09:00:00", "delivered", c))
            .collect();
        let payload = build_dashboard(&state(parcels, Vec::new()), RangeKey::Year, dt("2026-01-10 12:00:00"));
        assert_eq!(payload.top_countries.len(), 8);
        let first = &payload.top_countries[0];
        assert_eq!(first.code.as_deref(), Some("DE"));
        assert_eq!(first.name.as_deref(), Some("Germany"));
        assert_eq!(first.percentage, 10.0);
    }

    #[test]
    fn test_active_customers_and_growth() {
        let customers = vec![
            Customer {
                id: "c1".into(),
                status: Some("active".into()),
                created_date: Some("2025-12-01T00:00:00Z".into()),
                ..Default::default()
            },
            Customer {
                id: "c2".into(),
                status: None,
                created_date: Some("2026-01-03T00:00:00Z".into()),
                ..Default::default()
            },
        ];
        let payload = build_dashboard(&state(Vec::new(), customers), RangeKey::Today, dt("2026-01-10 12:00:00"));
        assert_eq!(payload.active_customers, 1);
        assert_eq!(payload.growth.len(), 12);
        let last = payload.growth.last().unwrap();
        assert_eq!(last.month_key, "2026-01");
        assert_eq!(last.cumulative_customers, 2);
        assert_eq!(payload.growth[10].cumulative_customers, 1);
        assert_eq!(payload.summary.total, 0);
        assert_eq!(payload.delivery_rate_label, "0");
    }

    #[test]
    fn test_config_limits_apply() {
        let mut s = state(
            (0..15)
                .map(|d| {
                    let day = NaiveDate::from_ymd_opt(2026, 1, d + 1).unwrap();
                    parcel(&format!("p{d}"), &format!("{day}T08:00:00"), "delivered", "DE")
                })
                .collect(),
            Vec::new(),
        );
        s.config.recent_parcels = 3;
        s.config.daily_series_days = 5;
        s.config.growth_months = 6;
        let payload = build_dashboard(&s, RangeKey::Year, dt("2026-01-20 12:00:00"));
        assert_eq!(payload.recent_parcels.len(), 3);
        assert_eq!(payload.summary.daily.len(), 5);
        assert_eq!(payload.growth.len(), 6);
    }
}
