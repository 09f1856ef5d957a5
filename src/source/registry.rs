use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::collection::Collection;
use super::record::{Criteria, Record, SortSpec};
use crate::error::AppError;
use crate::model::{ApiLogEntry, Customer, Parcel, TrackingEvent};

/// The entities a snapshot carries. Lookups by name go through this enum;
/// there is no catch-all for names it does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityKind {
    Parcel,
    Customer,
    ApiLog,
    TrackingEvent,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Parcel,
        EntityKind::Customer,
        EntityKind::ApiLog,
        EntityKind::TrackingEvent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Parcel => "Parcel",
            EntityKind::Customer => "Customer",
            EntityKind::ApiLog => "ApiLog",
            EntityKind::TrackingEvent => "TrackingEvent",
        }
    }

    /// File stem of the entity inside a snapshot directory.
    pub fn file_stem(&self) -> &'static str {
        match self {
            EntityKind::Parcel => "parcels",
            EntityKind::Customer => "customers",
            EntityKind::ApiLog => "api_logs",
            EntityKind::TrackingEvent => "tracking_events",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| AppError::UnknownEntity(s.to_string()))
    }
}

/// Every collection of a loaded snapshot.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSource {
    pub parcels: Collection<Parcel>,
    pub customers: Collection<Customer>,
    pub api_logs: Collection<ApiLogEntry>,
    pub tracking_events: Collection<TrackingEvent>,
}

fn to_json<T: Record>(records: Vec<T>) -> Result<serde_json::Value, AppError> {
    Ok(serde_json::to_value(records)?)
}

impl SnapshotSource {
    pub fn new(
        parcels: Vec<Parcel>,
        customers: Vec<Customer>,
        api_logs: Vec<ApiLogEntry>,
        tracking_events: Vec<TrackingEvent>,
    ) -> Self {
        SnapshotSource {
            parcels: Collection::new(parcels),
            customers: Collection::new(customers),
            api_logs: Collection::new(api_logs),
            tracking_events: Collection::new(tracking_events),
        }
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Parcel => self.parcels.len(),
            EntityKind::Customer => self.customers.len(),
            EntityKind::ApiLog => self.api_logs.len(),
            EntityKind::TrackingEvent => self.tracking_events.len(),
        }
    }

    /// `list` on the collection named by `kind`, as a JSON array.
    pub fn list_json(
        &self,
        kind: EntityKind,
        sort: Option<&SortSpec>,
        limit: Option<usize>,
    ) -> Result<serde_json::Value, AppError> {
        match kind {
            EntityKind::Parcel => to_json(self.parcels.list(sort, limit)),
            EntityKind::Customer => to_json(self.customers.list(sort, limit)),
            EntityKind::ApiLog => to_json(self.api_logs.list(sort, limit)),
            EntityKind::TrackingEvent => to_json(self.tracking_events.list(sort, limit)),
        }
    }

    /// `filter` on the collection named by `kind`, as a JSON array.
    pub fn filter_json(
        &self,
        kind: EntityKind,
        criteria: &Criteria,
        sort: Option<&SortSpec>,
    ) -> Result<serde_json::Value, AppError> {
        match kind {
            EntityKind::Parcel => to_json(self.parcels.filter(criteria, sort)),
            EntityKind::Customer => to_json(self.customers.filter(criteria, sort)),
            EntityKind::ApiLog => to_json(self.api_logs.filter(criteria, sort)),
            EntityKind::TrackingEvent => to_json(self.tracking_events.filter(criteria, sort)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> SnapshotSource {
        SnapshotSource::new(
            vec![
                Parcel {
                    id: "p1".into(),
                    carrier: Some("DHL".into()),
                    created_date: Some("2026-01-05".into()),
                    ..Default::default()
                },
                Parcel {
                    id: "p2".into(),
                    carrier: Some("UPS".into()),
                    created_date: Some("2026-01-06".into()),
                    ..Default::default()
                },
            ],
            vec![Customer {
                id: "c1".into(),
                ..Default::default()
            }],
            Vec::new(),
            Vec::new(),
        )
    }

    #[test]
    fn test_entity_kind_parse() {
        assert_eq!("ApiLog".parse::<EntityKind>().unwrap(), EntityKind::ApiLog);
        for kind in EntityKind::ALL {
            assert_eq!(kind.to_string().parse::<EntityKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_entity_rejected() {
        let err = "Invoice".parse::<EntityKind>().unwrap_err();
        assert!(matches!(err, AppError::UnknownEntity(ref name) if name == "Invoice"));
        // Names are exact, not case-folded
        assert!("parcel".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_count_per_kind() {
        let s = source();
        assert_eq!(s.count(EntityKind::Parcel), 2);
        assert_eq!(s.count(EntityKind::Customer), 1);
        assert_eq!(s.count(EntityKind::TrackingEvent), 0);
    }

    #[test]
    fn test_list_json_uses_camel_case() {
        let s = source();
        let sort = SortSpec::desc("created_date");
        let value = s.list_json(EntityKind::Parcel, Some(&sort), Some(1)).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 1);
        assert_eq!(arr[0]["id"], "p2");
        assert_eq!(arr[0]["createdDate"], "2026-01-06");
    }

    #[test]
    fn test_filter_json() {
        let s = source();
        let value = s
            .filter_json(EntityKind::Parcel, &Criteria::new().eq("carrier", "DHL"), None)
            .unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["id"], "p1");
    }
}
