use serde::Serialize;

/// Lifecycle status of a parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParcelStatus {
    Pending,
    PickedUp,
    InTransit,
    OutForDelivery,
    Delivered,
    Failed,
    Returned,
}

impl ParcelStatus {
    pub const ALL: [ParcelStatus; 7] = [
        ParcelStatus::Pending,
        ParcelStatus::PickedUp,
        ParcelStatus::InTransit,
        ParcelStatus::OutForDelivery,
        ParcelStatus::Delivered,
        ParcelStatus::Failed,
        ParcelStatus::Returned,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ParcelStatus::Pending => "pending",
            ParcelStatus::PickedUp => "picked_up",
            ParcelStatus::InTransit => "in_transit",
            ParcelStatus::OutForDelivery => "out_for_delivery",
            ParcelStatus::Delivered => "delivered",
            ParcelStatus::Failed => "failed",
            ParcelStatus::Returned => "returned",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ParcelStatus::Pending => "Pending",
            ParcelStatus::PickedUp => "Picked Up",
            ParcelStatus::InTransit => "In Transit",
            ParcelStatus::OutForDelivery => "Out for Delivery",
            ParcelStatus::Delivered => "Delivered",
            ParcelStatus::Failed => "Failed",
            ParcelStatus::Returned => "Returned",
        }
    }

    /// Strict lookup of a stored status value.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }

    /// Presentation lookup: anything unrecognized shows as pending.
    pub fn from_value(s: Option<&str>) -> Self {
        s.and_then(Self::parse).unwrap_or(ParcelStatus::Pending)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    Active,
    Inactive,
    Suspended,
}

impl CustomerStatus {
    /// A customer without a status is shown as active; unknown values have no
    /// presentation.
    pub fn from_value(s: Option<&str>) -> Option<Self> {
        match s {
            None | Some("") | Some("active") => Some(CustomerStatus::Active),
            Some("inactive") => Some(CustomerStatus::Inactive),
            Some("suspended") => Some(CustomerStatus::Suspended),
            Some(_) => None,
        }
    }
}

/// Direction of an API exchange relative to the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Inbound,
    Outbound,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Inbound => "inbound",
            Direction::Outbound => "outbound",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        [Direction::Inbound, Direction::Outbound]
            .into_iter()
            .find(|d| d.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingEventType {
    Created,
    PickedUp,
    DepartedFacility,
    ArrivedFacility,
    CustomsClearance,
    OutForDelivery,
    Delivered,
    DeliveryAttempt,
    Exception,
    Returned,
}

impl TrackingEventType {
    pub const ALL: [TrackingEventType; 10] = [
        TrackingEventType::Created,
        TrackingEventType::PickedUp,
        TrackingEventType::DepartedFacility,
        TrackingEventType::ArrivedFacility,
        TrackingEventType::CustomsClearance,
        TrackingEventType::OutForDelivery,
        TrackingEventType::Delivered,
        TrackingEventType::DeliveryAttempt,
        TrackingEventType::Exception,
        TrackingEventType::Returned,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TrackingEventType::Created => "created",
            TrackingEventType::PickedUp => "picked_up",
            TrackingEventType::DepartedFacility => "departed_facility",
            TrackingEventType::ArrivedFacility => "arrived_facility",
            TrackingEventType::CustomsClearance => "customs_clearance",
            TrackingEventType::OutForDelivery => "out_for_delivery",
            TrackingEventType::Delivered => "delivered",
            TrackingEventType::DeliveryAttempt => "delivery_attempt",
            TrackingEventType::Exception => "exception",
            TrackingEventType::Returned => "returned",
        }
    }

    /// Unknown event types render like `created`.
    pub fn from_value(s: Option<&str>) -> Self {
        s.and_then(|v| Self::ALL.into_iter().find(|t| t.as_str() == v))
            .unwrap_or(TrackingEventType::Created)
    }

    /// "departed_facility" → "departed facility"
    pub fn label(self) -> String {
        self.as_str().replace('_', " ")
    }
}

const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("DE", "Germany"),
    ("FR", "France"),
    ("NL", "Netherlands"),
    ("BE", "Belgium"),
    ("ES", "Spain"),
    ("IT", "Italy"),
    ("PL", "Poland"),
    ("AT", "Austria"),
    ("CZ", "Czech Republic"),
    ("PT", "Portugal"),
    ("GB", "United Kingdom"),
    ("IE", "Ireland"),
    ("DK", "Denmark"),
    ("SE", "Sweden"),
    ("NO", "Norway"),
    ("FI", "Finland"),
    ("CH", "Switzerland"),
    ("HU", "Hungary"),
    ("RO", "Romania"),
    ("SK", "Slovakia"),
];

/// English name for a destination country code. Unknown codes (and values
/// that are already names) come back unchanged.
pub fn country_name(code: &str) -> &str {
    COUNTRY_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parcel_status_roundtrip_names() {
        for st in ParcelStatus::ALL {
            assert_eq!(ParcelStatus::parse(st.as_str()), Some(st));
        }
    }

    #[test]
    fn test_parcel_status_fallback_pending() {
        assert_eq!(ParcelStatus::from_value(Some("lost_at_sea")), ParcelStatus::Pending);
        assert_eq!(ParcelStatus::from_value(None), ParcelStatus::Pending);
        assert_eq!(ParcelStatus::from_value(Some("Delivered")), ParcelStatus::Pending);
        assert_eq!(
            ParcelStatus::from_value(Some("out_for_delivery")).label(),
            "Out for Delivery"
        );
    }

    #[test]
    fn test_customer_status_default_active() {
        assert_eq!(CustomerStatus::from_value(None), Some(CustomerStatus::Active));
        assert_eq!(
            CustomerStatus::from_value(Some("suspended")),
            Some(CustomerStatus::Suspended)
        );
        assert_eq!(CustomerStatus::from_value(Some("banned")), None);
    }

    #[test]
    fn test_event_type_label_and_fallback() {
        assert_eq!(
            TrackingEventType::from_value(Some("departed_facility")).label(),
            "departed facility"
        );
        assert_eq!(
            TrackingEventType::from_value(Some("teleported")),
            TrackingEventType::Created
        );
    }

    #[test]
    fn test_country_name() {
        assert_eq!(country_name("DE"), "Germany");
        assert_eq!(country_name("CZ"), "Czech Republic");
        assert_eq!(country_name("Belgium"), "Belgium");
        assert_eq!(country_name("XX"), "XX");
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!(Direction::parse("inbound"), Some(Direction::Inbound));
        assert_eq!(Direction::parse("all"), None);
        assert_eq!(Direction::Outbound.as_str(), "outbound");
    }
}
