pub mod deserializers;
pub mod status;
pub mod timestamps;
pub mod types;

pub use status::{country_name, CustomerStatus, Direction, ParcelStatus, TrackingEventType};
pub use timestamps::parse_timestamp;
pub use types::{ApiLogEntry, Customer, Parcel, TrackingEvent};
