//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::fields::DocumentType;
use crate::error::{KtpError, Result};
use crate::extraction::ExtractionStrategy;

/// Main configuration for the ktp pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KtpConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Document type assumed when the caller does not name one.
    pub document_type: DocumentType,

    /// Strategy override; `None` uses the document type's default.
    pub strategy: Option<ExtractionStrategy>,
}

impl ExtractionConfig {
    /// Strategy to run for the configured document type.
    pub fn effective_strategy(&self) -> ExtractionStrategy {
        self.strategy
            .unwrap_or_else(|| self.document_type.default_strategy())
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Write `<stem><suffix>` next to the input file.
    pub write_sibling_json: bool,

    /// Suffix replacing the input extension for the sibling file.
    pub sibling_suffix: String,

    /// Pretty-print JSON output.
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            write_sibling_json: true,
            sibling_suffix: "_cleaned.json".to_string(),
            pretty_json: true,
        }
    }
}

impl KtpConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file. An invalid configuration is
    /// rejected before anything is written.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<()> {
        if self.output.sibling_suffix.trim().is_empty() {
            return Err(KtpError::Config(
                "output.sibling_suffix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
