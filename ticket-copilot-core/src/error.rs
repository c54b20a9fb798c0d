//! Error types shared by processor implementations and the runner.

use thiserror::Error;

/// A processor payload that could not be turned into a [`crate::contract::TicketResult`].
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The payload was not valid JSON text
    #[error("result is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload was JSON but not an object
    #[error("result is not a JSON object (got {0})")]
    NotAnObject(&'static str),

    /// A required key was absent
    #[error("result is missing required field '{0}'")]
    MissingField(&'static str),

    /// A key was present with an unusable value
    #[error("result field '{field}' is invalid: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

/// Failure while constructing or calling a ticket processor.
#[derive(Error, Debug)]
pub enum ProcessorError {
    /// The processor could not be constructed
    #[error("processor initialisation failed: {0}")]
    Init(String),

    /// The request never produced a usable response
    #[error("processor request failed: {0}")]
    Transport(String),

    /// The processor answered with an explicit error
    #[error("processor rejected the ticket: {0}")]
    Rejected(String),

    /// The processor answered with a malformed result
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

