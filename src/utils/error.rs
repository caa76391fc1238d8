//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Why a single record failed validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),

    #[error("fraud flag is not binary: {0:?}")]
    InvalidFraudFlag(String),

    #[error("unknown gender code: {0:?}")]
    UnknownGender(String),

    #[error("amount is not a non-negative number: {0:?}")]
    InvalidAmount(String),
}

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid record on line {line}: {source}")]
    InvalidRecord {
        line: usize,
        #[source]
        source: RecordError,
    },
}

/// Errors that can occur during aggregation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AggregateError {
    #[error("Invalid record at index {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: RecordError,
    },
}

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Nothing to plot: {0}")]
    EmptyData(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
