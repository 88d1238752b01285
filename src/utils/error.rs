//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while decoding result records
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read result file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Binary decoding failed: {0}")]
    Binary(#[from] bincode::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Result buffer is empty")]
    EmptyBuffer,
}

/// Errors that can occur while aggregating records into series
#[derive(Error, Debug, PartialEq)]
pub enum AnalysisError {
    #[error("No result records were supplied")]
    EmptyInput,

    #[error("Metric {metric} does not apply to {variant} results")]
    UnknownMetric {
        metric: String,
        variant: &'static str,
    },

    #[error("Record #{index} has no final statistics")]
    MissingFinalStats { index: usize },

    #[error("Iteration {iteration} holds {len} values but execution {execution} was requested")]
    ExecutionOutOfRange {
        iteration: usize,
        execution: usize,
        len: usize,
    },

    #[error("Metric {metric} is normalized by population size, which is 0")]
    InvalidPopulation { metric: String },

    #[error("Cannot chart {first} and {other} results together")]
    MixedVariants {
        first: &'static str,
        other: &'static str,
    },
}

/// Errors that can occur during chart rendering
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Chart has no data points to draw")]
    EmptyChart,

    #[error("Invalid chart dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
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
