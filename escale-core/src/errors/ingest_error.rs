//! Voyage ingestion errors.

/// Errors raised while loading voyage records or building itineraries.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to parse voyage records: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed timestamp {value:?}: {message}")]
    Timestamp { value: String, message: String },

    #[error("no voyages found for vessel {vessel}")]
    UnknownVessel { vessel: u64 },
}
