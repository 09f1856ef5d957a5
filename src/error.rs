use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Unknown date range: {0:?} (expected today, week, month, quarter or year)")]
    UnknownRangeKey(String),

    #[error("Unknown entity: {0:?}")]
    UnknownEntity(String),

    #[error("Unknown {kind} filter: {value:?}")]
    UnknownFilter { kind: &'static str, value: String },

    #[error("Invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    #[error("Parcel not found: {0}")]
    ParcelNotFound(String),

    #[error("{0}")]
    Custom(String),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
