//! Core library for Indonesian identity document OCR post-processing.
//!
//! This crate provides:
//! - Cleanup of raw vision-language OCR output (markup tokens, repeated lines)
//! - Field extraction for KTP and SIM documents, by whole-text pattern search
//!   or line-anchored caption matching
//! - Per-field normalization (NIK digits, gender tokens, RT/RW padding)
//! - Structural validation with separate errors and warnings
//!
//! The pipeline is synchronous and stateless: [`extract`] is a pure function
//! of its input text.

pub mod cleaning;
pub mod error;
pub mod extraction;
pub mod models;

pub use cleaning::{clean, NormalizedText};
pub use error::{InputError, KtpError, Result};
pub use extraction::{DocumentParser, ExtractionStrategy, FieldExtractor};
pub use models::config::KtpConfig;
pub use models::fields::{DocumentType, FieldKey, FieldMap};
pub use models::report::{ExtractionReport, ValidationResult};

/// Extract a validated record from raw OCR text using the document type's
/// default strategy.
pub fn extract(raw_text: &str, document_type: DocumentType) -> ExtractionReport {
    DocumentParser::new(document_type).parse(raw_text)
}

/// Extract a validated record with an explicit strategy.
pub fn extract_with(
    raw_text: &str,
    document_type: DocumentType,
    strategy: ExtractionStrategy,
) -> ExtractionReport {
    DocumentParser::new(document_type)
        .with_strategy(strategy)
        .parse(raw_text)
}

/// Like [`extract`], for callers whose text may be missing altogether.
///
/// `None` is an input-contract violation and fails fast; an empty string is
/// valid input and yields an (invalid) report.
pub fn extract_optional(
    raw_text: Option<&str>,
    document_type: DocumentType,
) -> std::result::Result<ExtractionReport, InputError> {
    raw_text
        .map(|text| extract(text, document_type))
        .ok_or(InputError::MissingText)
}
