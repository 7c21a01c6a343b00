//! Field keys, field maps and document types.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::extraction::ExtractionStrategy;

/// Canonical name of a structured field.
///
/// The declaration order is the output order: maps keyed by `FieldKey`
/// iterate (and serialize) in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldKey {
    #[serde(rename = "Provinsi")]
    Provinsi,
    #[serde(rename = "Kota")]
    Kota,
    #[serde(rename = "NIK")]
    Nik,
    #[serde(rename = "Nomor_SIM")]
    NomorSim,
    #[serde(rename = "Nama")]
    Nama,
    /// Birth place and date in one value, split during normalization.
    #[serde(rename = "Tempat_Tanggal_Lahir")]
    TempatTanggalLahir,
    #[serde(rename = "Tempat_Lahir")]
    TempatLahir,
    #[serde(rename = "Tanggal_Lahir")]
    TanggalLahir,
    #[serde(rename = "Jenis_Kelamin")]
    JenisKelamin,
    #[serde(rename = "Gol_Darah")]
    GolDarah,
    #[serde(rename = "Alamat")]
    Alamat,
    #[serde(rename = "RT_RW")]
    RtRw,
    #[serde(rename = "Kelurahan")]
    Kelurahan,
    #[serde(rename = "Kecamatan")]
    Kecamatan,
    #[serde(rename = "Agama")]
    Agama,
    #[serde(rename = "Status_Perkawinan")]
    StatusPerkawinan,
    #[serde(rename = "Pekerjaan")]
    Pekerjaan,
    #[serde(rename = "Kewarganegaraan")]
    Kewarganegaraan,
    /// Licence class (SIM A, B1, C, ...).
    #[serde(rename = "Golongan")]
    Golongan,
    #[serde(rename = "Berlaku_Hingga")]
    BerlakuHingga,
}

impl FieldKey {
    /// All keys in output order.
    pub const ALL: [FieldKey; 20] = [
        FieldKey::Provinsi,
        FieldKey::Kota,
        FieldKey::Nik,
        FieldKey::NomorSim,
        FieldKey::Nama,
        FieldKey::TempatTanggalLahir,
        FieldKey::TempatLahir,
        FieldKey::TanggalLahir,
        FieldKey::JenisKelamin,
        FieldKey::GolDarah,
        FieldKey::Alamat,
        FieldKey::RtRw,
        FieldKey::Kelurahan,
        FieldKey::Kecamatan,
        FieldKey::Agama,
        FieldKey::StatusPerkawinan,
        FieldKey::Pekerjaan,
        FieldKey::Kewarganegaraan,
        FieldKey::Golongan,
        FieldKey::BerlakuHingga,
    ];

    /// Canonical identifier, as used in JSON output and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Provinsi => "Provinsi",
            FieldKey::Kota => "Kota",
            FieldKey::Nik => "NIK",
            FieldKey::NomorSim => "Nomor_SIM",
            FieldKey::Nama => "Nama",
            FieldKey::TempatTanggalLahir => "Tempat_Tanggal_Lahir",
            FieldKey::TempatLahir => "Tempat_Lahir",
            FieldKey::TanggalLahir => "Tanggal_Lahir",
            FieldKey::JenisKelamin => "Jenis_Kelamin",
            FieldKey::GolDarah => "Gol_Darah",
            FieldKey::Alamat => "Alamat",
            FieldKey::RtRw => "RT_RW",
            FieldKey::Kelurahan => "Kelurahan",
            FieldKey::Kecamatan => "Kecamatan",
            FieldKey::Agama => "Agama",
            FieldKey::StatusPerkawinan => "Status_Perkawinan",
            FieldKey::Pekerjaan => "Pekerjaan",
            FieldKey::Kewarganegaraan => "Kewarganegaraan",
            FieldKey::Golongan => "Golongan",
            FieldKey::BerlakuHingga => "Berlaku_Hingga",
        }
    }

    /// Caption printed on the physical card.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::Provinsi => "Provinsi",
            FieldKey::Kota => "Kota/Kabupaten",
            FieldKey::Nik => "NIK",
            FieldKey::NomorSim => "Nomor SIM",
            FieldKey::Nama => "Nama",
            FieldKey::TempatTanggalLahir => "Tempat/Tgl Lahir",
            FieldKey::TempatLahir => "Tempat Lahir",
            FieldKey::TanggalLahir => "Tanggal Lahir",
            FieldKey::JenisKelamin => "Jenis Kelamin",
            FieldKey::GolDarah => "Gol. Darah",
            FieldKey::Alamat => "Alamat",
            FieldKey::RtRw => "RT/RW",
            FieldKey::Kelurahan => "Kel/Desa",
            FieldKey::Kecamatan => "Kecamatan",
            FieldKey::Agama => "Agama",
            FieldKey::StatusPerkawinan => "Status Perkawinan",
            FieldKey::Pekerjaan => "Pekerjaan",
            FieldKey::Kewarganegaraan => "Kewarganegaraan",
            FieldKey::Golongan => "Golongan",
            FieldKey::BerlakuHingga => "Berlaku Hingga",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detected fields and their values.
///
/// A key is present only if it was detected. Built by collecting
/// `(FieldKey, String)` pairs in document order; when a key repeats, the
/// later pair replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(BTreeMap<FieldKey, String>);

impl FieldMap {
    /// Create an empty field map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful in tests and callers assembling
    /// a map by hand.
    pub fn with(mut self, key: FieldKey, value: impl Into<String>) -> Self {
        self.0.insert(key, value.into());
        self
    }

    /// Value of a field, if detected.
    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    /// Whether the field was detected.
    pub fn contains(&self, key: FieldKey) -> bool {
        self.0.contains_key(&key)
    }

    /// Number of detected fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate fields in [`FieldKey`] order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub(crate) fn insert(&mut self, key: FieldKey, value: String) {
        self.0.insert(key, value);
    }

    pub(crate) fn remove(&mut self, key: FieldKey) -> Option<String> {
        self.0.remove(&key)
    }

    /// Replace a present value in place; absent keys are left absent.
    pub(crate) fn update(&mut self, key: FieldKey, f: impl FnOnce(&str) -> String) {
        if let Some(value) = self.0.get_mut(&key) {
            *value = f(value);
        }
    }
}

impl FromIterator<(FieldKey, String)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (FieldKey, String)>>(iter: I) -> Self {
        let mut map = BTreeMap::new();
        for (key, value) in iter {
            // Later matches win.
            map.insert(key, value);
        }
        Self(map)
    }
}

/// Supported identity document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// Kartu Tanda Penduduk, the national identity card.
    #[default]
    Ktp,
    /// Surat Izin Mengemudi, the driver's licence.
    Sim,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Ktp => "ktp",
            DocumentType::Sim => "sim",
        }
    }

    /// Title used in the card view.
    pub fn title(&self) -> &'static str {
        match self {
            DocumentType::Ktp => "KARTU TANDA PENDUDUK (KTP)",
            DocumentType::Sim => "SURAT IZIN MENGEMUDI (SIM)",
        }
    }

    /// Strategy used when the caller does not pick one.
    pub fn default_strategy(&self) -> ExtractionStrategy {
        match self {
            DocumentType::Ktp | DocumentType::Sim => ExtractionStrategy::LineAnchored,
        }
    }

    /// Fields whose absence makes a record invalid, in reporting order.
    pub fn mandatory_fields(&self) -> &'static [FieldKey] {
        match self {
            DocumentType::Ktp => &[
                FieldKey::Nik,
                FieldKey::Nama,
                FieldKey::TempatLahir,
                FieldKey::TanggalLahir,
                FieldKey::JenisKelamin,
                FieldKey::Alamat,
                FieldKey::Agama,
                FieldKey::Kewarganegaraan,
            ],
            DocumentType::Sim => &[
                FieldKey::NomorSim,
                FieldKey::Nama,
                FieldKey::TempatLahir,
                FieldKey::TanggalLahir,
                FieldKey::JenisKelamin,
                FieldKey::Alamat,
                FieldKey::BerlakuHingga,
            ],
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ktp" => Ok(DocumentType::Ktp),
            "sim" => Ok(DocumentType::Sim),
            _ => Err(InputError::UnknownDocumentType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_match_wins() {
        let map: FieldMap = vec![
            (FieldKey::Nama, "BUDI".to_string()),
            (FieldKey::Nik, "1".to_string()),
            (FieldKey::Nama, "BUDI SANTOSO".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(FieldKey::Nama), Some("BUDI SANTOSO"));
    }

    #[test]
    fn test_field_map_serializes_canonical_names_in_key_order() {
        let map = FieldMap::new()
            .with(FieldKey::RtRw, "005/012")
            .with(FieldKey::Nik, "1234567890123456");

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"NIK":"1234567890123456","RT_RW":"005/012"}"#);

        let back: FieldMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn test_as_str_matches_serde_name() {
        for key in FieldKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }

    #[test]
    fn test_document_type_parsing() {
        assert_eq!("KTP".parse::<DocumentType>(), Ok(DocumentType::Ktp));
        assert_eq!(" sim ".parse::<DocumentType>(), Ok(DocumentType::Sim));
        assert_eq!(
            "passport".parse::<DocumentType>(),
            Err(InputError::UnknownDocumentType("passport".to_string()))
        );
    }
}
