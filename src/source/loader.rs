use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::record::Record;
use super::registry::{EntityKind, SnapshotSource};
use crate::error::AppError;

/// Loads a snapshot directory. Each entity is read from `<stem>.json` (an
/// array of objects) or, failing that, `<stem>.csv` (header row, comma
/// separated). Fields of the wrong type are kept as text or dropped to `None`;
/// only rows that are not records at all are skipped, with a warning.
pub fn load_snapshot(dir: &Path) -> Result<SnapshotSource, AppError> {
    if !dir.is_dir() {
        return Err(AppError::Custom(format!(
            "Snapshot directory not found: {}",
            dir.display()
        )));
    }

    let source = SnapshotSource::new(
        load_entity(dir, EntityKind::Parcel)?,
        load_entity(dir, EntityKind::Customer)?,
        load_entity(dir, EntityKind::ApiLog)?,
        load_entity(dir, EntityKind::TrackingEvent)?,
    );

    log::info!(
        "Snapshot loaded from {}: {} parcels, {} customers, {} api logs, {} tracking events",
        dir.display(),
        source.count(EntityKind::Parcel),
        source.count(EntityKind::Customer),
        source.count(EntityKind::ApiLog),
        source.count(EntityKind::TrackingEvent),
    );
    Ok(source)
}

fn load_entity<T: Record>(dir: &Path, kind: EntityKind) -> Result<Vec<T>, AppError> {
    let stem = kind.file_stem();
    let json_path = dir.join(format!("{stem}.json"));
    if json_path.is_file() {
        return load_json(&json_path, kind);
    }
    let csv_path = dir.join(format!("{stem}.csv"));
    if csv_path.is_file() {
        return load_csv(&csv_path, kind);
    }
    log::warn!("No {stem}.json or {stem}.csv in {}, {kind} collection is empty", dir.display());
    Ok(Vec::new())
}

fn load_json<T: Record>(path: &Path, kind: EntityKind) -> Result<Vec<T>, AppError> {
    let reader = BufReader::new(File::open(path)?);
    let rows: Vec<serde_json::Value> = serde_json::from_reader(reader)?;

    let mut records = Vec::with_capacity(rows.len());
    for (idx, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<T>(row) {
            Ok(record) => records.push(record),
            Err(err) => log::warn!("{}: skipped {kind} #{idx}: {err}", path.display()),
        }
    }
    Ok(records)
}

fn load_csv<T: Record>(path: &Path, kind: EntityKind) -> Result<Vec<T>, AppError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut records = Vec::new();
    for (idx, result) in rdr.deserialize::<T>().enumerate() {
        match result {
            Ok(record) => records.push(record),
            // +2: 1-based, plus the header row
            Err(err) => log::warn!("{}: skipped {kind} on line {}: {err}", path.display(), idx + 2),
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_json_and_csv() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("parcels.json"),
            r#"[
                {"id": "p1", "tracking_number": "DHL1", "status": "delivered", "created_date": "2026-01-05T10:00:00Z"},
                {"id": "p2", "carrier": "UPS"}
            ]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("api_logs.csv"),
            "id,direction,method,endpoint,status_code,response_time_ms,source,timestamp\n\
             l1,inbound,POST,/v1/parcels,201,120,shop-api,2026-01-05T10:00:00Z\n\
             l2,outbound,GET,/v1/track,,,dhl-webhook,\n",
        )
        .unwrap();

        let source = load_snapshot(dir.path()).unwrap();
        assert_eq!(source.parcels.len(), 2);
        assert_eq!(
            source.parcels.get("p1").and_then(|p| p.status.as_deref()),
            Some("delivered")
        );
        assert_eq!(source.api_logs.len(), 2);
        let l1 = source.api_logs.get("l1").unwrap();
        assert_eq!(l1.status_code, Some(201));
        assert_eq!(l1.response_time_ms, Some(120.0));
        let l2 = source.api_logs.get("l2").unwrap();
        assert_eq!(l2.status_code, None);
        assert!(source.customers.is_empty());
        assert!(source.tracking_events.is_empty());
    }

    #[test]
    fn test_json_preferred_over_csv() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("customers.json"), r#"[{"id": "from-json"}]"#).unwrap();
        fs::write(dir.path().join("customers.csv"), "id\nfrom-csv\n").unwrap();
        let source = load_snapshot(dir.path()).unwrap();
        assert!(source.customers.get("from-json").is_some());
        assert!(source.customers.get("from-csv").is_none());
    }

    #[test]
    fn test_non_object_rows_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("customers.json"),
            r#"[{"id": "c1"}, 42, "c2", {"id": "c3"}]"#,
        )
        .unwrap();
        let source = load_snapshot(dir.path()).unwrap();
        assert_eq!(source.customers.len(), 2);
        assert!(source.customers.get("c3").is_some());
    }

    #[test]
    fn test_wrongly_typed_fields_still_count() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("parcels.json"),
            r#"[
                {"id": "p1", "status": "delivered", "created_date": "2026-01-05T10:00:00Z"},
                {"id": "p2", "status": 5, "created_date": 1736000000000},
                {"id": null, "carrier": "DHL"}
            ]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("customers.json"),
            r#"[{"id": "c1", "api_calls_this_month": "many"}]"#,
        )
        .unwrap();

        let source = load_snapshot(dir.path()).unwrap();
        assert_eq!(source.parcels.len(), 3);
        assert_eq!(source.customers.get("c1").and_then(|c| c.api_calls_this_month), None);

        let parcels = source.parcels.list(None, None);
        let summary = crate::analyzer::summarize(&parcels);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.undated, 2);
        assert_eq!(summary.delivered, 1);
        assert_eq!(summary.status_count("5"), 1);
    }

    #[test]
    fn test_malformed_json_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("parcels.json"), "{not json").unwrap();
        assert!(matches!(load_snapshot(dir.path()), Err(AppError::Serde(_))));
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(load_snapshot(&missing).is_err());
    }
}
