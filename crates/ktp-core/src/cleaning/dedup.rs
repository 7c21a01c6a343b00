//! Suppression of immediately repeated lines.

use std::fmt;

/// Drop blank lines and lines identical to the previously kept line.
///
/// Lines are trimmed before comparison. Only adjacent repeats are removed:
/// `A, A, B, A` becomes `A, B, A`.
pub fn collapse_duplicates<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut kept: Vec<String> = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if kept.last().is_some_and(|prev| prev == line) {
            continue;
        }
        kept.push(line.to_string());
    }

    kept
}

/// Cleaned text as an ordered list of non-empty, trimmed lines with no
/// adjacent duplicates. Order follows the document's reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    lines: Vec<String>,
}

impl NormalizedText {
    /// Split `text` into lines and collapse adjacent duplicates.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: collapse_duplicates(text.lines()),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines joined with `\n`, for whole-text matching.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_only() {
        assert_eq!(collapse_duplicates(["A", "A", "B", "A"]), vec!["A", "B", "A"]);
    }

    #[test]
    fn test_blank_lines_do_not_separate_duplicates() {
        // The blank line is dropped, so the two NAMA lines become adjacent.
        assert_eq!(
            collapse_duplicates(["NAMA", "   ", "NAMA", "NIK"]),
            vec!["NAMA", "NIK"]
        );
    }

    #[test]
    fn test_comparison_after_trim() {
        let text = NormalizedText::from_text("  Nama : BUDI\nNama : BUDI  \n\nAgama : ISLAM\n");
        assert_eq!(text.lines(), ["Nama : BUDI", "Agama : ISLAM"]);
        assert_eq!(text.to_text(), "Nama : BUDI\nAgama : ISLAM");
    }

    #[test]
    fn test_empty_text() {
        let text = NormalizedText::from_text("");
        assert!(text.is_empty());
        assert_eq!(text.to_text(), "");
    }
}
