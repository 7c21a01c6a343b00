//! Caption tables for line-anchored extraction.
//!
//! Each table is a priority list. A line is assigned to the first rule whose
//! caption matches at the start of the line, so a caption that is a prefix
//! of another caption must come after it (combined `Tempat/Tgl Lahir` before
//! plain `Tempat Lahir`, `Golongan Darah` before `Golongan`).

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::fields::{DocumentType, FieldKey};

/// Trailing separator accepted after every caption.
const SEPARATOR: &str = r"\s*[:\-]?\s*";

/// A caption pattern and the field it introduces.
#[derive(Debug)]
pub struct LabelRule {
    pub key: FieldKey,
    pub regex: Regex,
}

impl LabelRule {
    fn new(caption: &str, key: FieldKey) -> Self {
        Self {
            key,
            regex: Regex::new(&format!("(?i)^{}{}", caption, SEPARATOR)).unwrap(),
        }
    }
}

lazy_static! {
    pub static ref KTP_LABELS: Vec<LabelRule> = vec![
        LabelRule::new(r"NIK", FieldKey::Nik),
        LabelRule::new(r"Nomor\s*Induk\s*Kependudukan", FieldKey::Nik),
        LabelRule::new(r"Name", FieldKey::Nama),
        LabelRule::new(r"Nama", FieldKey::Nama),
        LabelRule::new(r"Tempat\s*/?\s*Tgl\.?\s*Lahir", FieldKey::TempatTanggalLahir),
        LabelRule::new(r"Tempat\s*/\s*Tanggal\s*Lahir", FieldKey::TempatTanggalLahir),
        LabelRule::new(r"Tempat\s*Lahir", FieldKey::TempatLahir),
        LabelRule::new(r"Tanggal\s*Lahir", FieldKey::TanggalLahir),
        LabelRule::new(r"Jenis\s*Kelamin", FieldKey::JenisKelamin),
        LabelRule::new(r"Gender", FieldKey::JenisKelamin),
        LabelRule::new(r"Gol(?:\.|ongan)?\s*Darah", FieldKey::GolDarah),
        LabelRule::new(r"Alamat", FieldKey::Alamat),
        LabelRule::new(r"RT\s*/?\s*RW", FieldKey::RtRw),
        LabelRule::new(r"Kel\s*/?\s*Desa", FieldKey::Kelurahan),
        LabelRule::new(r"Kelurahan", FieldKey::Kelurahan),
        LabelRule::new(r"Kecamatan", FieldKey::Kecamatan),
        LabelRule::new(r"Agama", FieldKey::Agama),
        LabelRule::new(r"Status\s*Perkawinan", FieldKey::StatusPerkawinan),
        LabelRule::new(r"Pekerjaan", FieldKey::Pekerjaan),
        LabelRule::new(r"Kewarganegaraan", FieldKey::Kewarganegaraan),
        LabelRule::new(r"Berlaku\s*Hingga", FieldKey::BerlakuHingga),
        LabelRule::new(r"Provinsi", FieldKey::Provinsi),
        LabelRule::new(r"Kota", FieldKey::Kota),
        LabelRule::new(r"Kabupaten", FieldKey::Kota),
    ];

    pub static ref SIM_LABELS: Vec<LabelRule> = vec![
        LabelRule::new(r"(?:No\.?|Nomor)\s*SIM", FieldKey::NomorSim),
        LabelRule::new(r"Name", FieldKey::Nama),
        LabelRule::new(r"Nama", FieldKey::Nama),
        LabelRule::new(r"Tempat\s*/?\s*Tgl\.?\s*Lahir", FieldKey::TempatTanggalLahir),
        LabelRule::new(r"Tempat\s*/\s*Tanggal\s*Lahir", FieldKey::TempatTanggalLahir),
        LabelRule::new(r"Tempat\s*Lahir", FieldKey::TempatLahir),
        LabelRule::new(r"Tanggal\s*Lahir", FieldKey::TanggalLahir),
        LabelRule::new(r"Jenis\s*Kelamin", FieldKey::JenisKelamin),
        LabelRule::new(r"Gender", FieldKey::JenisKelamin),
        LabelRule::new(r"Gol(?:\.|ongan)?\s*Darah", FieldKey::GolDarah),
        LabelRule::new(r"Alamat", FieldKey::Alamat),
        LabelRule::new(r"Pekerjaan", FieldKey::Pekerjaan),
        LabelRule::new(r"Golongan(?:\s*SIM)?", FieldKey::Golongan),
        LabelRule::new(r"Berlaku\s*(?:Hingga|s/d|Sampai)", FieldKey::BerlakuHingga),
    ];
}

/// Line-anchored caption table for a document type.
pub fn label_table(document_type: DocumentType) -> &'static [LabelRule] {
    match document_type {
        DocumentType::Ktp => &KTP_LABELS,
        DocumentType::Sim => &SIM_LABELS,
    }
}

/// First rule in `table` whose caption starts `line`.
pub fn first_match<'t>(table: &'t [LabelRule], line: &str) -> Option<(&'t LabelRule, usize)> {
    table
        .iter()
        .find_map(|rule| rule.regex.find(line).map(|m| (rule, m.end())))
}
