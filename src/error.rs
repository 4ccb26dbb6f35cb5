//! Error types and handling for lazy streams
//!
//! Reaching the end of a stream is never an error: enumerators signal it with
//! `None`. The variants here cover misuse of field selection and the bounded
//! drain operations.

/// Main error type for stream operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StreamError {
    /// A selected field is not present on the element being projected
    #[error("missing field: {field}")]
    MissingField { field: String },
    /// Field selection was applied to an element that is not a record
    #[error("expected a record, found {found}")]
    NotARecord { found: &'static str },
    /// The element could not be turned into a record
    #[error("serialization error: {0}")]
    Serialization(String),
    /// A bounded drain produced more items than its buffer allows
    #[error("capacity exceeded: more than {limit} items")]
    CapacityExceeded { limit: usize },
    /// The drain buffer could not be grown
    #[error("allocation failed: cannot reserve {requested} more items")]
    AllocationFailed { requested: usize },
    /// Custom error with message
    #[error("stream error: {0}")]
    Custom(String),
}

impl From<serde_json::Error> for StreamError {
    fn from(err: serde_json::Error) -> Self {
        StreamError::Serialization(err.to_string())
    }
}

/// Result type for stream operations
pub type StreamResult<T> = Result<T, StreamError>;
