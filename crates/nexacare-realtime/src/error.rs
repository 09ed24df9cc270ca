use thiserror::Error;

#[derive(Debug, Error)]
pub enum RealtimeError {
    #[error("database connection failed: {0}")]
    Connection(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("change event decode failed: {0}")]
    EventDecode(#[from] serde_json::Error),
}
