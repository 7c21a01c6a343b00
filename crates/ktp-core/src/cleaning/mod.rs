//! Text cleanup applied before field extraction.

pub mod dedup;
pub mod markup;

pub use dedup::{collapse_duplicates, NormalizedText};
pub use markup::strip_markup;

/// Strip markup and collapse adjacent duplicate lines.
pub fn clean(raw: &str) -> NormalizedText {
    NormalizedText::from_text(&strip_markup(raw))
}
