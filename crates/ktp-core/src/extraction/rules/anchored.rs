//! Line-anchored caption matching.

use tracing::trace;

use super::labels::{first_match, label_table, LabelRule};
use crate::cleaning::NormalizedText;
use crate::extraction::FieldExtractor;
use crate::models::fields::{DocumentType, FieldKey, FieldMap};

/// Assigns each line to the first caption that starts it and takes the rest
/// of the line as the value.
///
/// Lines without a known caption are ignored. When several lines carry the
/// same field, the last one wins.
pub struct LineAnchoredExtractor {
    table: &'static [LabelRule],
}

impl LineAnchoredExtractor {
    /// Create an extractor over the caption table for `document_type`.
    pub fn new(document_type: DocumentType) -> Self {
        Self {
            table: label_table(document_type),
        }
    }

    /// Field and value carried by a single line, if any.
    pub fn match_line(&self, line: &str) -> Option<(FieldKey, String)> {
        let (rule, end) = first_match(self.table, line)?;

        // Only the first caption is tried; an empty remainder drops the line.
        let value = line[end..]
            .trim_start_matches(|c: char| c == ':' || c == '-' || c.is_whitespace())
            .trim();

        if value.is_empty() {
            trace!("{} caption without value: {:?}", rule.key, line);
            return None;
        }

        trace!("{} <- {:?}", rule.key, value);
        Some((rule.key, value.to_string()))
    }
}

impl FieldExtractor for LineAnchoredExtractor {
    fn extract(&self, text: &NormalizedText) -> FieldMap {
        text.lines()
            .iter()
            .filter_map(|line| self.match_line(line))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(text: &str) -> FieldMap {
        LineAnchoredExtractor::new(DocumentType::Ktp).extract(&NormalizedText::from_text(text))
    }

    #[test]
    fn test_basic_lines() {
        let fields = extract(
            "NIK : 1234 5678 9012 3456\nNama: BUDI SANTOSO\nJenis Kelamin - L\nAgama islam",
        );

        let expected = FieldMap::new()
            .with(FieldKey::Nik, "1234 5678 9012 3456")
            .with(FieldKey::Nama, "BUDI SANTOSO")
            .with(FieldKey::JenisKelamin, "L")
            .with(FieldKey::Agama, "islam");
        assert_eq!(fields, expected);
    }

    #[test]
    fn test_caption_without_value_is_skipped() {
        let fields = extract("NIK\nNIK :\nNama : BUDI");
        assert_eq!(fields.get(FieldKey::Nik), None);
        assert_eq!(fields.get(FieldKey::Nama), Some("BUDI"));
    }

    #[test]
    fn test_later_line_overwrites_earlier() {
        let fields = extract("Nama : BUDI\nAgama : ISLAM\nNama : BUDI SANTOSO");
        assert_eq!(fields.get(FieldKey::Nama), Some("BUDI SANTOSO"));
    }

    #[test]
    fn test_only_matched_span_removed() {
        // The caption text repeated inside the value must survive.
        let fields = extract("Alamat : JL. ALAMAT INDAH NO. 5");
        assert_eq!(fields.get(FieldKey::Alamat), Some("JL. ALAMAT INDAH NO. 5"));
    }

    #[test]
    fn test_combined_birth_field() {
        let fields = extract("Tempat/Tgl Lahir : JAKARTA, 01-01-1990");
        assert_eq!(
            fields.get(FieldKey::TempatTanggalLahir),
            Some("JAKARTA, 01-01-1990")
        );
        assert!(!fields.contains(FieldKey::TempatLahir));
    }

    #[test]
    fn test_unlabelled_lines_ignored() {
        let fields = extract("KARTU TANDA PENDUDUK\nSEUMUR HIDUP\n");
        assert!(fields.is_empty());
    }

    #[test]
    fn test_sim_table() {
        let fields = LineAnchoredExtractor::new(DocumentType::Sim).extract(
            &NormalizedText::from_text("No. SIM : 1234-5678-901234\nGolongan : C\nBerlaku s/d : 01-01-2030"),
        );
        assert_eq!(fields.get(FieldKey::NomorSim), Some("1234-5678-901234"));
        assert_eq!(fields.get(FieldKey::Golongan), Some("C"));
        assert_eq!(fields.get(FieldKey::BerlakuHingga), Some("01-01-2030"));
    }
}
