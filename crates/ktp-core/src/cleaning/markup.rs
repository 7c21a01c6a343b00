//! Removal of the OCR engine's pseudo-XML layout tokens.

use lazy_static::lazy_static;
use regex::Regex;

/// Table-cell tokens that carry no text of their own.
const CELL_TOKENS: [&str; 2] = ["<fcel>", "<lcel>"];

/// Token the engine emits in place of a line break.
const NEW_LINE_TOKEN: &str = "<nl>";

lazy_static! {
    /// Any remaining `<...>` token on a single line.
    static ref ANY_TAG: Regex = Regex::new(r"<.*?>").unwrap();
}

/// Strip engine markup from raw OCR output.
///
/// Cell tokens are dropped, `<nl>` becomes `\n`, and any other
/// angle-bracket token is removed last so the line-break substitution is
/// not swallowed by the catch-all.
pub fn strip_markup(raw: &str) -> String {
    let mut text = raw.to_string();

    for token in CELL_TOKENS {
        text = text.replace(token, "");
    }
    text = text.replace(NEW_LINE_TOKEN, "\n");

    ANY_TAG.replace_all(&text, "").into_owned()
}
