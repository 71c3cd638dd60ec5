/// Error types for building Google Pay requests.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// JSON serialization/deserialization errors.
    #[error("Serde JSON error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    /// A card network value that does not encode as a JSON string.
    #[error("Card network at index {index} is not a string: {value}")]
    UnencodableCardNetwork { index: usize, value: String },
}

/// A specialized `Result` type for request building operations.
pub type Result<T> = std::result::Result<T, Error>;
