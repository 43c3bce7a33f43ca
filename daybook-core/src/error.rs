//! Error types for daybook.

use thiserror::Error;

/// Reasons an authoring form is rejected before any overlap check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingField,

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),

    #[error("End time must be after start time")]
    EndNotAfterStart,

    #[error("Unknown category '{0}'. Expected one of: default, work, personal, other")]
    InvalidColor(String),
}

/// Errors that can occur in daybook operations.
#[derive(Error, Debug)]
pub enum DaybookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("This time slot overlaps with an existing event: {title} ({time_range})")]
    Overlap { title: String, time_range: String },

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for daybook operations.
pub type DaybookResult<T> = Result<T, DaybookError>;
