/// Serde-compatible deserializers for use with `#[serde(deserialize_with = "de::...")]`.
///
/// Snapshot rows come from a schemaless backend, so a field can hold a value of
/// the wrong type. These helpers keep such a row instead of rejecting it: a
/// scalar of any type becomes its text, and anything that cannot be read as a
/// value becomes `None`. Timestamps and enums are interpreted later, where an
/// unreadable value is simply left out of date buckets.
pub mod de {
    use std::fmt;
    use std::str::FromStr;

    use serde::de::{IgnoredAny, MapAccess, SeqAccess, Visitor};
    use serde::Deserializer;

    struct OptText;

    impl<'de> Visitor<'de> for OptText {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a scalar value or null")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(OptText)
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_string<E>(self, v: String) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(None)
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(None)
        }
    }

    /// "x" → Some("x"), 5 → Some("5"), null or an empty CSV cell → None,
    /// arrays and objects → None.
    pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(OptText)
    }

    /// Record id: any scalar as text, "" when null or unreadable.
    pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        opt_string(deserializer).map(Option::unwrap_or_default)
    }

    /// 201 → Some(201), "201" → Some(201), "n/a" → None
    pub fn opt_parsed<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
    {
        Ok(opt_string(deserializer)?.and_then(|s| s.trim().parse::<T>().ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::de;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Default)]
    #[serde(default)]
    struct Row {
        #[serde(deserialize_with = "de::id")]
        id: String,
        #[serde(deserialize_with = "de::opt_string")]
        label: Option<String>,
        #[serde(deserialize_with = "de::opt_parsed")]
        code: Option<u16>,
        #[serde(deserialize_with = "de::opt_parsed")]
        latency: Option<f64>,
    }

    fn row(json: &str) -> Row {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_scalars_become_text() {
        let r = row(r#"{"id": 42, "label": 1736000000000}"#);
        assert_eq!(r.id, "42");
        assert_eq!(r.label.as_deref(), Some("1736000000000"));
        assert_eq!(row(r#"{"label": true}"#).label.as_deref(), Some("true"));
        assert_eq!(row(r#"{"label": ""}"#).label.as_deref(), Some(""));
    }

    #[test]
    fn test_null_and_containers_become_none() {
        let r = row(r#"{"id": null, "label": null}"#);
        assert_eq!(r.id, "");
        assert!(r.label.is_none());
        assert!(row(r#"{"label": [1, 2]}"#).label.is_none());
        assert!(row(r#"{"label": {"a": 1}}"#).label.is_none());
        assert!(row("{}").label.is_none());
    }

    #[test]
    fn test_numbers_from_numbers_or_text() {
        let r = row(r#"{"code": "201", "latency": 95.5}"#);
        assert_eq!(r.code, Some(201));
        assert_eq!(r.latency, Some(95.5));
        let r = row(r#"{"code": "n/a", "latency": [1]}"#);
        assert_eq!(r.code, None);
        assert_eq!(r.latency, None);
        assert_eq!(row(r#"{"code": 70000}"#).code, None);
    }

    #[test]
    fn test_csv_empty_cell_is_none() {
        let data = "id,label,code,latency\nr1,,404,\n";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        let rows: Vec<Row> = rdr.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows[0].id, "r1");
        assert!(rows[0].label.is_none());
        assert_eq!(rows[0].code, Some(404));
        assert!(rows[0].latency.is_none());
    }
}
