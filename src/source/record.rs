use std::borrow::Cow;
use std::cmp::Ordering;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppError;
use crate::model::{parse_timestamp, ApiLogEntry, Customer, Parcel, TrackingEvent};

/// A snapshot record addressable by field name, the way the backend's list and
/// filter calls address them.
pub trait Record: Clone + Serialize + DeserializeOwned {
    fn id(&self) -> &str;

    /// Text value of a wire field (snake_case name), None when unset or
    /// unknown.
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;
}

fn text(v: &Option<String>) -> Option<Cow<'_, str>> {
    v.as_deref().map(Cow::Borrowed)
}

fn number<T: ToString>(v: Option<T>) -> Option<Cow<'static, str>> {
    v.map(|n| Cow::Owned(n.to_string()))
}

impl Record for Parcel {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "id" => Some(Cow::Borrowed(&self.id)),
            "tracking_number" => text(&self.tracking_number),
            "carrier" => text(&self.carrier),
            "status" => text(&self.status),
            "destination_country" => text(&self.destination_country),
            "destination_city" => text(&self.destination_city),
            "customer_id" => text(&self.customer_id),
            "customer_name" => text(&self.customer_name),
            "created_date" => text(&self.created_date),
            "shipped_date" => text(&self.shipped_date),
            _ => None,
        }
    }
}

impl Record for Customer {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "id" => Some(Cow::Borrowed(&self.id)),
            "company_name" => text(&self.company_name),
            "contact_email" => text(&self.contact_email),
            "country" => text(&self.country),
            "status" => text(&self.status),
            "created_date" => text(&self.created_date),
            "api_calls_this_month" => number(self.api_calls_this_month),
            _ => None,
        }
    }
}

impl Record for ApiLogEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "id" => Some(Cow::Borrowed(&self.id)),
            "direction" => text(&self.direction),
            "method" => text(&self.method),
            "endpoint" => text(&self.endpoint),
            "status_code" => number(self.status_code),
            "response_time_ms" => number(self.response_time_ms),
            "source" => text(&self.source),
            "timestamp" => text(&self.timestamp),
            "tracking_number" => text(&self.tracking_number),
            "parcel_id" => text(&self.parcel_id),
            _ => None,
        }
    }
}

impl Record for TrackingEvent {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "id" => Some(Cow::Borrowed(&self.id)),
            "parcel_id" => text(&self.parcel_id),
            "event_type" => text(&self.event_type),
            "description" => text(&self.description),
            "location" => text(&self.location),
            "event_timestamp" => text(&self.event_timestamp),
            _ => None,
        }
    }
}

/// `"-created_date"` sorts descending, `"created_date"` ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub descending: bool,
}

impl SortSpec {
    pub fn desc(field: &str) -> Self {
        SortSpec {
            field: field.to_string(),
            descending: true,
        }
    }

    /// Orders two records on this field. Timestamps come first, then numbers,
    /// then other text, then missing values, whatever the direction; the
    /// direction only applies among values of the same kind.
    pub fn compare<T: Record>(&self, a: &T, b: &T) -> Ordering {
        let x = a.field(&self.field);
        let y = b.field(&self.field);
        let x = SortKey::of(x.as_deref());
        let y = SortKey::of(y.as_deref());
        x.rank().cmp(&y.rank()).then_with(|| {
            let ord = x.cmp_same_kind(&y);
            if self.descending {
                ord.reverse()
            } else {
                ord
            }
        })
    }
}

enum SortKey<'a> {
    Time(NaiveDateTime),
    Number(f64),
    Text(&'a str),
    Missing,
}

impl<'a> SortKey<'a> {
    fn of(value: Option<&'a str>) -> Self {
        let Some(v) = value else {
            return SortKey::Missing;
        };
        if let Some(t) = parse_timestamp(v) {
            SortKey::Time(t)
        } else if let Ok(n) = v.trim().parse::<f64>() {
            SortKey::Number(n)
        } else {
            SortKey::Text(v)
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Time(_) => 0,
            SortKey::Number(_) => 1,
            SortKey::Text(_) => 2,
            SortKey::Missing => 3,
        }
    }

    fn cmp_same_kind(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Time(a), SortKey::Time(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl FromStr for SortSpec {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (field, descending) = match s.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        if field.is_empty() {
            return Err(AppError::Custom(format!("Invalid sort: {:?}", s)));
        }
        Ok(SortSpec {
            field: field.to_string(),
            descending,
        })
    }
}

/// Field-equality criteria, all of which must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    terms: Vec<(String, String)>,
}

impl Criteria {
    pub fn new() -> Self {
        Criteria::default()
    }

    pub fn eq(mut self, field: &str, value: &str) -> Self {
        self.terms.push((field.to_string(), value.to_string()));
        self
    }

    /// Builds criteria from `field=value` terms. The value may be empty; the
    /// field may not.
    pub fn from_terms<'a, I>(terms: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        terms.into_iter().try_fold(Criteria::new(), |criteria, term| {
            match term.split_once('=') {
                Some((field, value)) if !field.trim().is_empty() => {
                    Ok(criteria.eq(field.trim(), value))
                }
                _ => Err(AppError::Custom(format!(
                    "Invalid criterion {:?}: expected field=value",
                    term
                ))),
            }
        })
    }

    pub fn matches<T: Record>(&self, record: &T) -> bool {
        self.terms
            .iter()
            .all(|(field, value)| record.field(field).as_deref() == Some(value.as_str()))
    }
}
