//! Field extraction from cleaned OCR text.

mod parser;
pub mod rules;

pub use parser::DocumentParser;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cleaning::NormalizedText;
use crate::error::InputError;
use crate::models::fields::{DocumentType, FieldMap};
use rules::{LineAnchoredExtractor, PatternSearchExtractor};

/// Trait for the strategies that turn cleaned text into a raw field map.
pub trait FieldExtractor {
    /// Extract every detectable field. Fields that are not found are absent
    /// from the map; this never fails.
    fn extract(&self, text: &NormalizedText) -> FieldMap;
}

/// How fields are located in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStrategy {
    /// Search the whole text for each field pattern, unanchored.
    PatternSearch,
    /// Match a caption at the start of each line and take the rest of it.
    LineAnchored,
}

impl ExtractionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionStrategy::PatternSearch => "pattern_search",
            ExtractionStrategy::LineAnchored => "line_anchored",
        }
    }

    /// Extractor for this strategy over the tables of `document_type`.
    pub fn extractor(&self, document_type: DocumentType) -> Box<dyn FieldExtractor> {
        match self {
            ExtractionStrategy::PatternSearch => {
                Box::new(PatternSearchExtractor::new(document_type))
            }
            ExtractionStrategy::LineAnchored => Box::new(LineAnchoredExtractor::new(document_type)),
        }
    }
}

impl fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtractionStrategy {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "pattern_search" | "pattern" | "search" => Ok(ExtractionStrategy::PatternSearch),
            "line_anchored" | "line" | "label" => Ok(ExtractionStrategy::LineAnchored),
            _ => Err(InputError::UnknownStrategy(s.to_string())),
        }
    }
}
