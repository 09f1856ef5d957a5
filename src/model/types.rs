use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::deserializers::de;
use super::status::{CustomerStatus, Direction, ParcelStatus, TrackingEventType};
use super::timestamps::parse_opt_timestamp;

// Records are read with the backend's snake_case field names and written back
// out in camelCase like every other payload. Every field is optional on the
// wire, and a value of the wrong type never rejects the record.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    rename_all(serialize = "camelCase", deserialize = "snake_case"),
    default
)]
pub struct Parcel {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(deserialize_with = "de::opt_string")]
    pub tracking_number: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub carrier: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub status: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub destination_country: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub destination_city: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub customer_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub customer_name: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub created_date: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipped_date: Option<String>,
}

impl Parcel {
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        parse_opt_timestamp(self.created_date.as_deref())
    }

    /// Presentation status: unknown or missing values read as pending.
    pub fn status_kind(&self) -> ParcelStatus {
        ParcelStatus::from_value(self.status.as_deref())
    }

    /// Literal comparison against the stored status value.
    pub fn has_status(&self, status: ParcelStatus) -> bool {
        self.status.as_deref() == Some(status.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    rename_all(serialize = "camelCase", deserialize = "snake_case"),
    default
)]
pub struct Customer {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(deserialize_with = "de::opt_string")]
    pub company_name: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub contact_email: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub country: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub status: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub created_date: Option<String>,
    #[serde(deserialize_with = "de::opt_parsed")]
    pub api_calls_this_month: Option<u64>,
}

impl Customer {
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        parse_opt_timestamp(self.created_date.as_deref())
    }

    pub fn status_kind(&self) -> Option<CustomerStatus> {
        CustomerStatus::from_value(self.status.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    rename_all(serialize = "camelCase", deserialize = "snake_case"),
    default
)]
pub struct ApiLogEntry {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(deserialize_with = "de::opt_string")]
    pub direction: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub method: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub endpoint: Option<String>,
    #[serde(deserialize_with = "de::opt_parsed")]
    pub status_code: Option<u16>,
    #[serde(deserialize_with = "de::opt_parsed")]
    pub response_time_ms: Option<f64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub request_body: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub response_body: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub source: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub timestamp: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub tracking_number: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub parcel_id: Option<String>,
}

impl ApiLogEntry {
    pub fn logged_at(&self) -> Option<NaiveDateTime> {
        parse_opt_timestamp(self.timestamp.as_deref())
    }

    pub fn direction_kind(&self) -> Option<Direction> {
        self.direction.as_deref().and_then(Direction::parse)
    }

    /// 2xx responses. A log without a status code is not a success.
    pub fn is_success(&self) -> bool {
        matches!(self.status_code, Some(200..=299))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    rename_all(serialize = "camelCase", deserialize = "snake_case"),
    default
)]
pub struct TrackingEvent {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(deserialize_with = "de::opt_string")]
    pub parcel_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub event_type: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub location: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub event_timestamp: Option<String>,
}

impl TrackingEvent {
    pub fn event_kind(&self) -> TrackingEventType {
        TrackingEventType::from_value(self.event_type.as_deref())
    }
}
