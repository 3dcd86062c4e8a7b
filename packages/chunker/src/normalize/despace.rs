//! Rejoining of letter-spaced heading keywords.
//!
//! PDF extraction of bold or tracked headings often yields "M a d d ə" instead
//! of "Maddə". Structure and invalidation detection only know the canonical
//! keywords, so this runs before either.

use regex::Regex;
use std::sync::LazyLock;

/// Spaced keyword pattern and its canonical form.
///
/// Matching is case-insensitive. The dotted/dotless i pair is spelled out
/// because `İ` has no simple case folding to `i`.
const SPACED_KEYWORDS: &[(&str, &str)] = &[
    (r"(?i)M\s+a\s+d\s+d\s+ə", "Maddə"),
    (r"(?i)F\s+ə\s+s\s+[iİı]\s+l", "Fəsil"),
    (r"(?i)B\s+ə\s+n\s+d", "Bənd"),
    (r"(?i)H\s+[iİı]\s+s\s+s\s+ə", "Hissə"),
    (r"(?i)B\s+ö\s+l\s+ü\s+m", "Bölüm"),
];

#[allow(clippy::expect_used)] // Static patterns that are guaranteed to be valid
static SPACED_KEYWORD_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    SPACED_KEYWORDS
        .iter()
        .map(|(pattern, canonical)| (Regex::new(pattern).expect("valid regex"), *canonical))
        .collect()
});

/// Rewrite letter-spaced heading keywords to their canonical form.
///
/// # Examples
/// ```
/// use qanun_chunker::normalize::fix_spaced_keywords;
///
/// assert_eq!(fix_spaced_keywords("M a d d ə 5."), "Maddə 5.");
/// assert_eq!(fix_spaced_keywords("F Ə S İ L II"), "Fəsil II");
/// ```
pub fn fix_spaced_keywords(text: &str) -> String {
    let mut result = text.to_string();
    for (pattern, canonical) in SPACED_KEYWORD_PATTERNS.iter() {
        if pattern.is_match(&result) {
            result = pattern.replace_all(&result, *canonical).into_owned();
        }
    }
    result
}
