//! Validation results and the assembled extraction report.

use serde::Serialize;

use super::fields::{DocumentType, FieldKey, FieldMap};
use crate::extraction::ExtractionStrategy;

const CARD_WIDTH: usize = 60;
const LABEL_WIDTH: usize = 20;

/// Outcome of validating a [`FieldMap`].
///
/// `is_valid` is true exactly when `errors` is empty. Warnings never affect
/// validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// The sole artifact returned by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionReport {
    data: FieldMap,
    validation: ValidationResult,
    fields_extracted: usize,
    raw_text: String,
    document_type: DocumentType,
    strategy: ExtractionStrategy,
}

impl ExtractionReport {
    /// Assemble a report. The field count is derived from `data`.
    pub fn new(
        data: FieldMap,
        validation: ValidationResult,
        raw_text: impl Into<String>,
        document_type: DocumentType,
        strategy: ExtractionStrategy,
    ) -> Self {
        Self {
            fields_extracted: data.len(),
            data,
            validation,
            raw_text: raw_text.into(),
            document_type,
            strategy,
        }
    }

    pub fn data(&self) -> &FieldMap {
        &self.data
    }

    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    pub fn fields_extracted(&self) -> usize {
        self.fields_extracted
    }

    /// The unprocessed OCR text, kept for audit.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn strategy(&self) -> ExtractionStrategy {
        self.strategy
    }

    pub fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }

    /// Render the fields as a card-shaped text block.
    pub fn to_card(&self) -> String {
        let data = &self.data;
        let mut output = Vec::new();

        output.push("=".repeat(CARD_WIDTH));
        output.push(format!("{:^width$}", self.document_type.title(), width = CARD_WIDTH));
        output.push("=".repeat(CARD_WIDTH));
        output.push(String::new());

        for key in [FieldKey::Provinsi, FieldKey::Kota] {
            if let Some(value) = data.get(key) {
                output.push(format!("{}: {}", key.label(), value));
            }
        }

        output.push(String::new());
        output.push("-".repeat(CARD_WIDTH));

        for key in [FieldKey::Nik, FieldKey::NomorSim, FieldKey::Nama] {
            push_row(&mut output, data, key, 0);
        }

        match (data.get(FieldKey::TempatLahir), data.get(FieldKey::TanggalLahir)) {
            (Some(place), Some(date)) => {
                output.push(row("Tempat/Tgl Lahir", &format!("{}, {}", place, date), 0));
            }
            (Some(_), None) => push_row(&mut output, data, FieldKey::TempatLahir, 0),
            (None, Some(_)) => push_row(&mut output, data, FieldKey::TanggalLahir, 0),
            (None, None) => push_row(&mut output, data, FieldKey::TempatTanggalLahir, 0),
        }

        if let Some(gender) = data.get(FieldKey::JenisKelamin) {
            let blood = data.get(FieldKey::GolDarah).unwrap_or("-");
            output.push(row(
                FieldKey::JenisKelamin.label(),
                &format!("{:<20} Gol. Darah: {}", gender, blood),
                0,
            ));
        }

        push_row(&mut output, data, FieldKey::Alamat, 0);
        for key in [FieldKey::RtRw, FieldKey::Kelurahan, FieldKey::Kecamatan] {
            push_row(&mut output, data, key, 4);
        }

        for key in [
            FieldKey::Agama,
            FieldKey::StatusPerkawinan,
            FieldKey::Pekerjaan,
            FieldKey::Kewarganegaraan,
            FieldKey::Golongan,
            FieldKey::BerlakuHingga,
        ] {
            push_row(&mut output, data, key, 0);
        }

        output.push(String::new());
        output.push("=".repeat(CARD_WIDTH));

        output.join("\n")
    }
}

fn row(label: &str, value: &str, indent: usize) -> String {
    let pad = " ".repeat(indent);
    format!(
        "{}{:<width$}: {}",
        pad,
        label,
        value,
        width = LABEL_WIDTH - indent
    )
}

fn push_row(output: &mut Vec<String>, data: &FieldMap, key: FieldKey, indent: usize) {
    if let Some(value) = data.get(key) {
        output.push(row(key.label(), value, indent));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ExtractionReport {
        let data = FieldMap::new()
            .with(FieldKey::Nik, "1234567890123456")
            .with(FieldKey::Nama, "BUDI SANTOSO")
            .with(FieldKey::TempatLahir, "JAKARTA")
            .with(FieldKey::TanggalLahir, "01-01-1990")
            .with(FieldKey::JenisKelamin, "LAKI-LAKI")
            .with(FieldKey::RtRw, "005/012");
        let validation = ValidationResult::new(vec!["Missing required field: Alamat".into()], vec![]);
        ExtractionReport::new(
            data,
            validation,
            "raw",
            DocumentType::Ktp,
            ExtractionStrategy::LineAnchored,
        )
    }

    #[test]
    fn test_validity_follows_errors() {
        assert!(ValidationResult::new(vec![], vec!["w".into()]).is_valid());
        assert!(!ValidationResult::new(vec!["e".into()], vec![]).is_valid());
    }

    #[test]
    fn test_report_counts_fields() {
        let report = sample_report();
        assert_eq!(report.fields_extracted(), 6);
        assert!(!report.is_valid());
        assert_eq!(report.raw_text(), "raw");
    }

    #[test]
    fn test_report_json_shape() {
        let value = serde_json::to_value(sample_report()).unwrap();

        assert_eq!(value["data"]["NIK"], "1234567890123456");
        assert_eq!(value["validation"]["is_valid"], false);
        assert_eq!(value["fields_extracted"], 6);
        assert_eq!(value["document_type"], "ktp");
        assert_eq!(value["strategy"], "line_anchored");
    }

    #[test]
    fn test_card_joins_birth_place_and_date() {
        let card = sample_report().to_card();

        assert!(card.contains("KARTU TANDA PENDUDUK (KTP)"));
        assert!(card.contains("Tempat/Tgl Lahir    : JAKARTA, 01-01-1990"));
        assert!(card.contains("Gol. Darah: -"));
        assert!(card.contains("    RT/RW           : 005/012"));
        assert!(!card.contains("Agama"));
    }
}
