use super::record::{Criteria, Record, SortSpec};

/// In-memory records of one entity, read-only once loaded.
#[derive(Debug, Clone)]
pub struct Collection<T: Record> {
    records: Vec<T>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Collection { records: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    pub fn new(records: Vec<T>) -> Self {
        Collection { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records ordered by `sort` (stable; load order otherwise), truncated to
    /// `limit`.
    pub fn list(&self, sort: Option<&SortSpec>, limit: Option<usize>) -> Vec<T> {
        let mut out: Vec<T> = self.records.clone();
        sorted_truncated(&mut out, sort, limit);
        out
    }

    /// Records matching every criterion, ordered by `sort`.
    pub fn filter(&self, criteria: &Criteria, sort: Option<&SortSpec>) -> Vec<T> {
        let mut out: Vec<T> = self
            .records
            .iter()
            .filter(|r| criteria.matches(*r))
            .cloned()
            .collect();
        sorted_truncated(&mut out, sort, None);
        out
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }
}

fn sorted_truncated<T: Record>(records: &mut Vec<T>, sort: Option<&SortSpec>, limit: Option<usize>) {
    if let Some(spec) = sort {
        records.sort_by(|a, b| spec.compare(a, b));
    }
    if let Some(n) = limit {
        records.truncate(n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TrackingEvent;

    fn event(id: &str, parcel: &str, ts: &str) -> TrackingEvent {
        TrackingEvent {
            id: id.to_string(),
            parcel_id: Some(parcel.to_string()),
            event_timestamp: Some(ts.to_string()),
            ..Default::default()
        }
    }

    fn sample() -> Collection<TrackingEvent> {
        Collection::new(vec![
            event("e1", "p1", "2026-01-02T08:00:00Z"),
            event("e2", "p2", "2026-01-03T08:00:00Z"),
            event("e3", "p1", "2026-01-04T08:00:00Z"),
        ])
    }

    fn ids(events: &[TrackingEvent]) -> Vec<&str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_list_keeps_load_order_without_sort() {
        let c = sample();
        assert_eq!(ids(&c.list(None, None)), vec!["e1", "e2", "e3"]);
        assert_eq!(ids(&c.list(None, Some(2))), vec!["e1", "e2"]);
    }

    #[test]
    fn test_list_sorted_and_limited() {
        let c = sample();
        let sort = SortSpec::desc("event_timestamp");
        assert_eq!(ids(&c.list(Some(&sort), Some(2))), vec!["e3", "e2"]);
    }

    #[test]
    fn test_filter_by_field() {
        let c = sample();
        let sort = SortSpec::desc("event_timestamp");
        let hits = c.filter(&Criteria::new().eq("parcel_id", "p1"), Some(&sort));
        assert_eq!(ids(&hits), vec!["e3", "e1"]);
    }

    #[test]
    fn test_get() {
        let c = sample();
        assert_eq!(c.get("e2").and_then(|e| e.parcel_id.as_deref()), Some("p2"));
        assert!(c.get("missing").is_none());
    }

    #[test]
    fn test_default_is_empty() {
        let c: Collection<TrackingEvent> = Collection::default();
        assert!(c.is_empty());
        assert_eq!(c.len(), 0);
        assert!(c.list(None, Some(5)).is_empty());
    }
}
