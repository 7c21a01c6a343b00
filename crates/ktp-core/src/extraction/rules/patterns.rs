//! Regex tables for whole-text field search, plus the value-shape patterns
//! shared by normalization and validation.
//!
//! Tables are ordered lists: every entry is evaluated independently, in the
//! order given, against the whole text. Free-text value classes use
//! `[ \t]` instead of `\s` so a captured value never runs into the next line.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::fields::{DocumentType, FieldKey};

/// A field and the pattern whose first capture group holds its value.
#[derive(Debug)]
pub struct FieldPattern {
    pub key: FieldKey,
    pub regex: Regex,
}

impl FieldPattern {
    fn new(key: FieldKey, pattern: &str) -> Self {
        Self {
            key,
            regex: Regex::new(pattern).unwrap(),
        }
    }
}

lazy_static! {
    pub static ref KTP_PATTERNS: Vec<FieldPattern> = vec![
        FieldPattern::new(FieldKey::Provinsi, r"(?i)PROVINSI\s+([A-Z][A-Z \t]*)"),
        FieldPattern::new(FieldKey::Kota, r"(?i)(?:KOTA|KABUPATEN)\s+([A-Z][A-Z \t]*)"),
        FieldPattern::new(FieldKey::Nik, r"(?i)NIK\s*:?\s*([0-9]{16})"),
        FieldPattern::new(FieldKey::Nama, r"(?i)NAMA\s*:?\s*([A-Z][A-Z .'\t]*)"),
        FieldPattern::new(FieldKey::TempatLahir, r"(?i)TEMPAT.*LAHIR\s*:?\s*([A-Z][A-Z \t]*),"),
        FieldPattern::new(FieldKey::TanggalLahir, r",\s*([0-9]{2}-[0-9]{2}-[0-9]{4})"),
        FieldPattern::new(
            FieldKey::JenisKelamin,
            r"(?i)JENIS\s*KELAMIN\s*:?\s*(LAKI-LAKI|PEREMPUAN)",
        ),
        FieldPattern::new(FieldKey::GolDarah, r"(?i)GOL.*DARAH\s*:?\s*((?:AB|A|B|O)[+-]?|-)"),
        FieldPattern::new(FieldKey::Alamat, r"(?i)ALAMAT\s*:?\s*([A-Z0-9][A-Z0-9 \t,.]*)"),
        FieldPattern::new(FieldKey::RtRw, r"(?i)RT\s*/\s*RW\s*:?\s*([0-9]{3}/[0-9]{3})"),
        FieldPattern::new(FieldKey::Kelurahan, r"(?i)KEL\s*/\s*DESA\s*:?\s*([A-Z][A-Z \t]*)"),
        FieldPattern::new(FieldKey::Kecamatan, r"(?i)KECAMATAN\s*:?\s*([A-Z][A-Z \t]*)"),
        FieldPattern::new(
            FieldKey::Agama,
            r"(?i)AGAMA\s*:?\s*(ISLAM|KRISTEN|KATOLIK|HINDU|BUDDHA|KONGHUCU)",
        ),
        FieldPattern::new(
            FieldKey::StatusPerkawinan,
            r"(?i)STATUS\s*PERKAWINAN\s*:?\s*(BELUM[ \t]+KAWIN|KAWIN|CERAI[ \t]+HIDUP|CERAI[ \t]+MATI|CERAI)",
        ),
        FieldPattern::new(FieldKey::Pekerjaan, r"(?i)PEKERJAAN\s*:?\s*([A-Z][A-Z \t/]*)"),
        FieldPattern::new(FieldKey::Kewarganegaraan, r"(?i)KEWARGANEGARAAN\s*:?\s*(WNI|WNA)"),
        FieldPattern::new(
            FieldKey::BerlakuHingga,
            r"(?i)BERLAKU\s*HINGGA\s*:?\s*([0-9]{2}-[0-9]{2}-[0-9]{4}|[A-Z][A-Z \t]*)",
        ),
    ];

    pub static ref SIM_PATTERNS: Vec<FieldPattern> = vec![
        FieldPattern::new(
            FieldKey::NomorSim,
            r"(?i)(?:NO\.?|NOMOR)\s*SIM\s*:?\s*([0-9][0-9 \t-]{10,18}[0-9])",
        ),
        FieldPattern::new(FieldKey::Nama, r"(?i)NAMA\s*:?\s*([A-Z][A-Z .'\t]*)"),
        FieldPattern::new(FieldKey::TempatLahir, r"(?i)TEMPAT.*LAHIR\s*:?\s*([A-Z][A-Z \t]*),"),
        FieldPattern::new(FieldKey::TanggalLahir, r",\s*([0-9]{2}-[0-9]{2}-[0-9]{4})"),
        FieldPattern::new(
            FieldKey::JenisKelamin,
            r"(?i)JENIS\s*KELAMIN\s*:?\s*(LAKI-LAKI|PEREMPUAN|PRIA|WANITA)",
        ),
        FieldPattern::new(FieldKey::GolDarah, r"(?i)GOL.*DARAH\s*:?\s*((?:AB|A|B|O)[+-]?|-)"),
        FieldPattern::new(FieldKey::Alamat, r"(?i)ALAMAT\s*:?\s*([A-Z0-9][A-Z0-9 \t,./]*)"),
        FieldPattern::new(FieldKey::Pekerjaan, r"(?i)PEKERJAAN\s*:?\s*([A-Z][A-Z \t/]*)"),
        FieldPattern::new(
            FieldKey::Golongan,
            r"(?i)(?:GOLONGAN|GOL\.?)[ \t]*(?:SIM)?[ \t]*:[ \t]*((?:B1|B2|A|C|D)(?:[ \t]+UMUM)?)\b",
        ),
        FieldPattern::new(
            FieldKey::BerlakuHingga,
            r"(?i)BERLAKU\s*(?:HINGGA|S/D|SAMPAI)\s*:?\s*([0-9]{2}-[0-9]{2}-[0-9]{4})",
        ),
    ];

    /// `<PLACE>, <DD-MM-YYYY>` at the start of a combined birth value.
    pub static ref BIRTH_PLACE_DATE: Regex = Regex::new(
        r"(?i)^([A-Z][A-Z \t.']*?)[ \t]*,?[ \t]*([0-9]{2}-[0-9]{2}-[0-9]{4})"
    ).unwrap();

    /// Two numbers separated by a slash, e.g. `5 / 12`.
    pub static ref RT_RW_VALUE: Regex = Regex::new(
        r"^\s*([0-9]+)\s*/\s*([0-9]+)\s*$"
    ).unwrap();

    /// Whole-value `DD-MM-YYYY`.
    pub static ref DATE_DMY: Regex = Regex::new(
        r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$"
    ).unwrap();
}

/// Whole-text search table for a document type.
pub fn pattern_table(document_type: DocumentType) -> &'static [FieldPattern] {
    match document_type {
        DocumentType::Ktp => &KTP_PATTERNS,
        DocumentType::Sim => &SIM_PATTERNS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_compile() {
        assert_eq!(KTP_PATTERNS.len(), 17);
        assert!(!SIM_PATTERNS.is_empty());
    }

    #[test]
    fn test_ktp_table_order() {
        let keys: Vec<FieldKey> = KTP_PATTERNS.iter().map(|p| p.key).collect();
        assert_eq!(&keys[..3], &[FieldKey::Provinsi, FieldKey::Kota, FieldKey::Nik]);
        assert_eq!(keys.last(), Some(&FieldKey::BerlakuHingga));
    }

    #[test]
    fn test_birth_place_date() {
        let caps = BIRTH_PLACE_DATE.captures("JAKARTA, 01-01-1990").unwrap();
        assert_eq!(&caps[1], "JAKARTA");
        assert_eq!(&caps[2], "01-01-1990");

        let caps = BIRTH_PLACE_DATE.captures("TANJUNG PRIOK 17-08-1985").unwrap();
        assert_eq!(&caps[1], "TANJUNG PRIOK");
        assert_eq!(&caps[2], "17-08-1985");

        assert!(BIRTH_PLACE_DATE.captures("JAKARTA, 1 JAN 1990").is_none());
    }

    #[test]
    fn test_rt_rw_value() {
        assert!(RT_RW_VALUE.is_match("5/12"));
        assert!(RT_RW_VALUE.is_match(" 005 / 012 "));
        assert!(!RT_RW_VALUE.is_match("abc"));
        assert!(!RT_RW_VALUE.is_match("5-12"));
    }

    #[test]
    fn test_date_shape() {
        assert!(DATE_DMY.is_match("01-01-1990"));
        assert!(!DATE_DMY.is_match("1-1-1990"));
        assert!(!DATE_DMY.is_match("01-01-1990 extra"));
    }
}
