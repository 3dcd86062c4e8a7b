//! Detection and stripping of repealed or struck-through text.
//!
//! Validity is binary per input: a single marker anywhere invalidates the
//! whole text handed in. Callers decide the granularity by what they pass.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Invalidation markers, tested in order.
const INVALIDATION_MARKERS: &[&str] = &[
    // Combining strikethrough and overlay marks
    r"[\x{0336}\x{0337}\x{0338}\x{0353}\x{0354}\x{0488}\x{0489}]",
    // Markdown-style strike delimiters
    r"~~[^~]+~~",
    r"--[^-]+--",
    // HTML strike tags
    r"(?i)<strike>.*?</strike>",
    r"(?i)<s>.*?</s>",
    r"(?i)<del>.*?</del>",
    // Azerbaijani repeal notes
    r"(?i)\[ləğv edilib\]",
    r"(?i)\[mətn ləğv edilib\]",
    r"(?i)\(ləğv edilib\)",
    r"(?i)qüvvədən düşüb",
    r"(?i)qüvvədən düşmüşdür",
    r"(?i)qüvvədən çıxarılıb",
    r"(?i)ləğv olunub",
    // Horizontal rules drawn through text
    r"[─━═]+",
];

/// Box-drawing characters that render a line through text.
const LINE_DRAWING_CHARS: [char; 3] = ['─', '━', '═'];

/// Article citation known to appear struck through in one source document.
const STRUCK_CITATION: &str = "17.2.3";

#[allow(clippy::expect_used)] // Static patterns that are guaranteed to be valid
static INVALIDATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    INVALIDATION_MARKERS
        .iter()
        .map(|pattern| Regex::new(pattern).expect("valid regex"))
        .collect()
});

/// Check whether text carries any general invalidation marker.
pub fn has_invalidation_marker(text: &str) -> bool {
    INVALIDATION_PATTERNS.iter().any(|p| p.is_match(text))
}

/// Byte ranges of every general marker match, sorted by start.
pub fn invalidation_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans: Vec<Range<usize>> = INVALIDATION_PATTERNS
        .iter()
        .flat_map(|p| p.find_iter(text).map(|m| m.range()))
        .collect();
    spans.sort_by_key(|span| span.start);
    spans
}

/// Data-specific rule: citation `17.2.3` next to line-drawing characters.
///
/// Patches a single known extraction defect. Any text it fires on already
/// trips the general line-drawing marker; it is kept separate so it can be
/// dropped or generalised without touching the marker table.
pub fn is_struck_citation(text: &str) -> bool {
    text.contains(STRUCK_CITATION) && text.contains(&LINE_DRAWING_CHARS[..])
}

/// Whether the text must be treated as no longer in force.
pub fn is_invalidated(text: &str) -> bool {
    has_invalidation_marker(text) || is_struck_citation(text)
}

/// Remove every invalidation marker match and stray strikethrough marks.
pub fn strip_invalidation_markup(text: &str) -> String {
    let mut clean = text.to_string();
    for pattern in INVALIDATION_PATTERNS.iter() {
        if pattern.is_match(&clean) {
            clean = pattern.replace_all(&clean, "").into_owned();
        }
    }
    clean.retain(|c| !matches!(c, '\u{0336}'..='\u{0337}'));
    clean
}

/// Detect invalidation and strip its markup.
///
/// Returns the cleaned text and whether the input was valid.
pub fn detect_invalidated_text(text: &str) -> (String, bool) {
    let is_valid = !is_invalidated(text);
    (strip_invalidation_markup(text), is_valid)
}
