//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading raw purchase data
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid HTTP response: {0}")]
    InvalidResponse(String),

    #[error("Input is not valid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors that can occur while turning raw JSON into purchase records
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid purchase data: {0}")]
    InvalidFormat(String),

    #[error("Malformed purchase record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },
}

/// Errors that can occur during aggregation
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Decimal overflow while totalling purchase {purchase_id}")]
    Overflow { purchase_id: String },
}

/// Errors that can occur during report rendering and file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
