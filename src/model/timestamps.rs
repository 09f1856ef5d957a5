use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Local date-time layouts accepted after RFC 3339 has been ruled out.
/// `%.f` makes the fractional part optional.
const LOCAL_DT_FMTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a snapshot timestamp into a UTC-naive datetime.
///
/// Accepts RFC 3339 (any offset, normalized to UTC), ISO local date-times
/// with or without fractional seconds, and bare `YYYY-MM-DD` dates (midnight).
/// Returns None for empty or unparseable strings.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }
    for fmt in LOCAL_DT_FMTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Same as [`parse_timestamp`] for optional fields.
pub fn parse_opt_timestamp(s: Option<&str>) -> Option<NaiveDateTime> {
    s.and_then(parse_timestamp)
}
