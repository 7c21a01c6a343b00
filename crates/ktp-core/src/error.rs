//! Error types for the ktp-core library.
//!
//! The text pipeline itself never fails on malformed OCR output; a record
//! that is incomplete is reported through [`crate::ValidationResult`]. The
//! errors here cover input-contract violations at the boundary and the
//! configuration/I/O plumbing around the pipeline.

use thiserror::Error;

/// Main error type for the ktp library.
#[derive(Error, Debug)]
pub enum KtpError {
    /// The caller broke the input contract.
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised when the pipeline is handed something it cannot accept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// No text at all was supplied (as opposed to an empty string).
    #[error("no OCR text supplied")]
    MissingText,

    /// The document type name is not one of the supported types.
    #[error("unknown document type: {0}")]
    UnknownDocumentType(String),

    /// The extraction strategy name is not recognised.
    #[error("unknown extraction strategy: {0}")]
    UnknownStrategy(String),
}

/// Result type for the ktp library.
pub type Result<T> = std::result::Result<T, KtpError>;
