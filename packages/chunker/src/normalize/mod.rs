//! Text normalization for PDF-extracted statute text.
//!
//! Entry points:
//!
//! - [`normalize`]: full cleanup of a segment, returning the cleaned text and
//!   whether it is still in force.
//! - [`compose`]: diacritic composition and keyword despacing only, for
//!   splitting that still needs the original line breaks.
//! - [`normalize_layout`]: the same layout cleanup without touching
//!   invalidation markup, applied once to a whole document so that markers
//!   survive until each segment is checked on its own.

mod despace;
mod invalidation;

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

pub use despace::fix_spaced_keywords;
pub use invalidation::{
    detect_invalidated_text, has_invalidation_marker, invalidation_spans, is_invalidated,
    is_struck_citation, strip_invalidation_markup,
};

/// Any run of whitespace, newlines included.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Result of normalizing a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Cleaned text.
    pub text: String,

    /// False when the input carried invalidation markers.
    pub is_valid: bool,
}

impl Normalized {
    /// Length of the cleaned text in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Collapse whitespace runs to a single space and trim the edges.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// One cleanup pass: compose, despace, strip invalidation markup, collapse.
fn normalize_pass(text: &str) -> Normalized {
    let composed: String = text.nfc().collect();
    let despaced = fix_spaced_keywords(&composed);
    let (stripped, is_valid) = detect_invalidated_text(&despaced);
    Normalized {
        text: collapse_whitespace(&stripped),
        is_valid,
    }
}

/// Fully normalize text and report whether it is still in force.
///
/// Stripping markup can bring together letters that form a new spaced
/// keyword or marker, so passes repeat until the text is stable. Every pass
/// either shortens the text or only rewrites whitespace, so this terminates.
///
/// # Examples
/// ```
/// use qanun_chunker::normalize::normalize;
///
/// let result = normalize("M a d d ə  7.\n\nMətn   burada.");
/// assert_eq!(result.text, "Maddə 7. Mətn burada.");
/// assert!(result.is_valid);
///
/// let result = normalize("Maddə 8. (ləğv edilib)");
/// assert_eq!(result.text, "Maddə 8.");
/// assert!(!result.is_valid);
/// ```
pub fn normalize(text: &str) -> Normalized {
    let mut current = normalize_pass(text);
    loop {
        let next = normalize_pass(&current.text);
        if next.text == current.text {
            return current;
        }
        current = Normalized {
            text: next.text,
            is_valid: current.is_valid && next.is_valid,
        };
    }
}

/// Compose diacritics and rejoin spaced keywords, keeping line structure.
pub fn compose(text: &str) -> String {
    let composed: String = text.nfc().collect();
    fix_spaced_keywords(&composed)
}

/// Normalize the layout of a whole document, keeping invalidation markup.
pub fn normalize_layout(text: &str) -> String {
    collapse_whitespace(&compose(text))
}
