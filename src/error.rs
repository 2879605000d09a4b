use thiserror::Error;

pub type Result<T> = std::result::Result<T, MarqueeError>;

#[derive(Debug, Error)]
pub enum MarqueeError {
    #[error("User not found: {0}")]
    UserNotFound(u64),

    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Blank {field} supplied for new user")]
    EmptyInput { field: &'static str },

    #[error("Index {index} out of range for {column} column of length {len}")]
    InvalidIndex {
        column: String,
        index: usize,
        len: usize,
    },

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: String, end: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Date parse error: {0}")]
    DateParseError(#[from] chrono::ParseError),
}
