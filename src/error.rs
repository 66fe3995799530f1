//! Error types for line bidding

use thiserror::Error;

/// Main error type for parsing, assignment export and the HTTP layer
#[derive(Error, Debug)]
pub enum LineBidError {
    /// Nothing usable could be extracted from the submitted bid text
    #[error("No valid bid data found. {0}")]
    ParseFailure(String),

    /// Results payload posted back for export was not valid JSON
    #[error("Invalid results data: {0}")]
    InvalidResults(#[from] serde_json::Error),

    /// CSV writer failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for line bidding operations
pub type LineBidResult<T> = Result<T, LineBidError>;
