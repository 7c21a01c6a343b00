//! Deterministic per-field cleanup of extracted values.
//!
//! Every rule is idempotent, so normalizing an already normalized map is a
//! no-op. Values that do not have the expected shape pass through unchanged.

use super::patterns::{BIRTH_PLACE_DATE, RT_RW_VALUE};
use crate::models::fields::{FieldKey, FieldMap};

/// Canonical male gender token.
pub const MALE: &str = "LAKI-LAKI";

/// Canonical female gender token.
pub const FEMALE: &str = "PEREMPUAN";

/// Fields that are always upper-cased.
pub const UPPERCASE_FIELDS: [FieldKey; 4] = [
    FieldKey::Agama,
    FieldKey::StatusPerkawinan,
    FieldKey::Kewarganegaraan,
    FieldKey::BerlakuHingga,
];

/// Normalize every known field of `fields`.
pub fn normalize_fields(mut fields: FieldMap) -> FieldMap {
    split_birth_compound(&mut fields);

    fields.update(FieldKey::Nik, digits_only);
    fields.update(FieldKey::JenisKelamin, canonical_gender);
    fields.update(FieldKey::RtRw, pad_rt_rw);

    for key in UPPERCASE_FIELDS {
        fields.update(key, str::to_uppercase);
    }

    fields
}

/// Split `Tempat_Tanggal_Lahir` into place and date when neither separate
/// field was extracted. The combined key is only consumed on a successful
/// split.
pub fn split_birth_compound(fields: &mut FieldMap) {
    if fields.contains(FieldKey::TempatLahir) || fields.contains(FieldKey::TanggalLahir) {
        return;
    }

    let Some(combined) = fields.get(FieldKey::TempatTanggalLahir) else {
        return;
    };

    let Some(caps) = BIRTH_PLACE_DATE.captures(combined) else {
        return;
    };

    let place = caps[1].trim().to_string();
    let date = caps[2].to_string();

    fields.insert(FieldKey::TempatLahir, place);
    fields.insert(FieldKey::TanggalLahir, date);
    fields.remove(FieldKey::TempatTanggalLahir);
}

/// Keep only ASCII digits.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Map free-form gender text onto [`MALE`] or [`FEMALE`].
///
/// Female markers are tested first because `FEMALE` contains `MALE`.
/// `PRIA`/`WANITA` are the captions printed on SIM cards. Unrecognised
/// values are returned unchanged.
pub fn canonical_gender(value: &str) -> String {
    let upper = value.trim().to_uppercase();

    if upper.contains("PEREMPUAN")
        || upper.contains("WANITA")
        || upper.contains("FEMALE")
        || upper == "P"
    {
        FEMALE.to_string()
    } else if upper.contains("LAKI")
        || upper.contains("PRIA")
        || upper.contains("MALE")
        || upper == "L"
    {
        MALE.to_string()
    } else {
        value.to_string()
    }
}

/// Zero-pad both halves of an `RT/RW` pair to three digits.
pub fn pad_rt_rw(value: &str) -> String {
    match RT_RW_VALUE.captures(value) {
        Some(caps) => format!("{:0>3}/{:0>3}", &caps[1], &caps[2]),
        None => value.to_string(),
    }
}
