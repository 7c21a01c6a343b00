//! Structural validation of normalized fields.

use chrono::NaiveDate;

use super::normalize::{FEMALE, MALE};
use super::patterns::DATE_DMY;
use crate::models::fields::{DocumentType, FieldKey, FieldMap};
use crate::models::report::ValidationResult;

/// Number of digits in a valid NIK.
pub const NIK_LENGTH: usize = 16;

/// Validate `fields` against the rules for `document_type`.
///
/// Checks run in a fixed order (mandatory fields, NIK, birth date, gender)
/// and messages are reported in that order. Only errors affect validity.
pub fn validate_fields(fields: &FieldMap, document_type: DocumentType) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for &key in document_type.mandatory_fields() {
        if fields.get(key).is_none_or(str::is_empty) {
            errors.push(format!("Missing required field: {}", key));
        }
    }

    if let Some(nik) = fields.get(FieldKey::Nik) {
        errors.extend(nik_errors(nik));
    }

    if let Some(date) = fields.get(FieldKey::TanggalLahir) {
        if let Some(warning) = birth_date_warning(date) {
            warnings.push(warning);
        }
    }

    if let Some(gender) = fields.get(FieldKey::JenisKelamin) {
        if gender != MALE && gender != FEMALE {
            warnings.push(format!("Unexpected gender value: {}", gender));
        }
    }

    ValidationResult::new(errors, warnings)
}

/// Length and digit checks for a NIK; both may fail at once.
pub fn nik_errors(nik: &str) -> Vec<String> {
    let mut errors = Vec::new();

    let length = nik.chars().count();
    if length != NIK_LENGTH {
        errors.push(format!("NIK must be {} digits, got {}", NIK_LENGTH, length));
    }

    if !nik.chars().all(|c| c.is_ascii_digit()) {
        errors.push("NIK must contain only digits".to_string());
    }

    errors
}

fn birth_date_warning(date: &str) -> Option<String> {
    if !DATE_DMY.is_match(date) {
        return Some(format!("Date format should be DD-MM-YYYY, got: {}", date));
    }

    if NaiveDate::parse_from_str(date, "%d-%m-%Y").is_err() {
        return Some(format!(
            "{} is not a valid calendar date: {}",
            FieldKey::TanggalLahir,
            date
        ));
    }

    None
}
