//! Unanchored whole-text field search.

use tracing::trace;

use super::patterns::{pattern_table, FieldPattern};
use crate::cleaning::NormalizedText;
use crate::extraction::FieldExtractor;
use crate::models::fields::{DocumentType, FieldMap};

/// Runs every pattern of a table against the whole text, case-insensitively.
///
/// Each pattern contributes at most one field: the first capture group of its
/// first match, trimmed. Suited to loosely labelled free text where captions
/// and values are not one-per-line.
pub struct PatternSearchExtractor {
    table: &'static [FieldPattern],
}

impl PatternSearchExtractor {
    /// Create an extractor over the table for `document_type`.
    pub fn new(document_type: DocumentType) -> Self {
        Self {
            table: pattern_table(document_type),
        }
    }
}

impl FieldExtractor for PatternSearchExtractor {
    fn extract(&self, text: &NormalizedText) -> FieldMap {
        let text = text.to_text();

        self.table
            .iter()
            .filter_map(|pattern| {
                let value = pattern.regex.captures(&text)?.get(1)?.as_str().trim();
                trace!("{} matched {:?}", pattern.key, value);
                Some((pattern.key, value.to_string()))
            })
            .collect()
    }
}
