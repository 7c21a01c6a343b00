//! Data models for extracted identity documents.

pub mod config;
pub mod fields;
pub mod report;

pub use config::{ExtractionConfig, KtpConfig, OutputConfig};
pub use fields::{DocumentType, FieldKey, FieldMap};
pub use report::{ExtractionReport, ValidationResult};
