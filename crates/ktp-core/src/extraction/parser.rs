//! End-to-end document parser: cleanup, extraction, normalization and
//! validation.

use tracing::{debug, info};

use super::rules::{normalize_fields, validate_fields};
use super::ExtractionStrategy;
use crate::cleaning::{self, NormalizedText};
use crate::models::config::ExtractionConfig;
use crate::models::fields::{DocumentType, FieldMap};
use crate::models::report::ExtractionReport;

/// Runs the whole pipeline for one document type.
///
/// The parser holds no state between calls; `parse` is a pure function of
/// its input and may be called from several threads at once.
#[derive(Debug, Clone, Copy)]
pub struct DocumentParser {
    document_type: DocumentType,
    strategy: ExtractionStrategy,
}

impl DocumentParser {
    /// Create a parser using the document type's default strategy.
    pub fn new(document_type: DocumentType) -> Self {
        Self {
            document_type,
            strategy: document_type.default_strategy(),
        }
    }

    /// Create a parser from the extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new(config.document_type).with_strategy(config.effective_strategy())
    }

    /// Set the extraction strategy.
    pub fn with_strategy(mut self, strategy: ExtractionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn strategy(&self) -> ExtractionStrategy {
        self.strategy
    }

    /// Strip markup and collapse adjacent duplicate lines.
    pub fn normalize_text(&self, raw: &str) -> NormalizedText {
        cleaning::clean(raw)
    }

    /// Raw field map for already cleaned text, before normalization.
    pub fn extract_fields(&self, text: &NormalizedText) -> FieldMap {
        self.strategy.extractor(self.document_type).extract(text)
    }

    /// Parse raw OCR output into a validated report.
    pub fn parse(&self, raw: &str) -> ExtractionReport {
        info!(
            "Parsing {} document from {} characters of text ({})",
            self.document_type,
            raw.chars().count(),
            self.strategy
        );

        let text = self.normalize_text(raw);
        debug!("Kept {} lines after cleanup", text.len());

        let raw_fields = self.extract_fields(&text);
        debug!("Matched {} raw fields", raw_fields.len());

        let fields = normalize_fields(raw_fields);
        let validation = validate_fields(&fields, self.document_type);

        debug!(
            "Extracted {} fields: {} errors, {} warnings",
            fields.len(),
            validation.errors().len(),
            validation.warnings().len()
        );

        ExtractionReport::new(fields, validation, raw, self.document_type, self.strategy)
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new(DocumentType::default())
    }
}
