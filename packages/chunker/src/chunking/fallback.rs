//! Splitting for documents without recognisable headings.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::FALLBACK_MIN_PIECES;
use crate::normalize::invalidation_spans;

/// Blank line, possibly containing whitespace.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

fn non_blank<'t>(pieces: impl Iterator<Item = &'t str>) -> Vec<String> {
    pieces
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split into fixed windows of `size` characters, without overlap.
///
/// A window that would end inside an invalidation marker is stretched to the
/// end of the marker, so the marker stays whole and invalidates its window.
fn fixed_windows(text: &str, size: usize) -> Vec<String> {
    let size = size.max(1);
    let spans = invalidation_spans(text);
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect();
    let last = bounds.len() - 1;

    let mut windows = Vec::new();
    let mut start = 0;
    while start < last {
        let mut end = (start + size).min(last);
        while let Some(span) = spans
            .iter()
            .find(|span| span.start < bounds[end] && bounds[end] < span.end)
        {
            end = bounds.partition_point(|&offset| offset < span.end);
        }

        let window = &text[bounds[start]..bounds[end]];
        if !window.trim().is_empty() {
            windows.push(window.to_string());
        }
        start = end;
    }
    windows
}

/// Split unstructured text into segments.
///
/// Tries blank-line paragraphs, then single lines, then fixed windows of
/// `chunk_size` characters; a tier is used only when the previous one gives
/// fewer than five pieces. Windows never cut an invalidation marker in two.
/// Non-blank input always yields at least one segment.
///
/// # Examples
/// ```
/// use qanun_chunker::chunking::fallback_split;
///
/// let text = "bir\n\niki\n\nüç\n\ndörd\n\nbeş";
/// assert_eq!(fallback_split(text, 800).len(), 5);
///
/// let text = "x".repeat(25);
/// assert_eq!(fallback_split(&text, 10).len(), 3);
/// ```
pub fn fallback_split(text: &str, chunk_size: usize) -> Vec<String> {
    let paragraphs = non_blank(PARAGRAPH_BREAK.split(text));
    if paragraphs.len() >= FALLBACK_MIN_PIECES {
        return paragraphs;
    }

    let lines = non_blank(text.split('\n'));
    if lines.len() >= FALLBACK_MIN_PIECES {
        return lines;
    }

    fixed_windows(text, chunk_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_paragraph_tier() {
        let text = "a\n\nb\n  \nc\n\nd\n\ne\n\nf";
        assert_eq!(fallback_split(text, 100), vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_line_tier_when_few_paragraphs() {
        let text = "bir\niki\nüç\n\ndörd\nbeş";
        assert_eq!(
            fallback_split(text, 100),
            vec!["bir", "iki", "üç", "dörd", "beş"]
        );
    }

    #[test]
    fn test_window_tier_counts_characters() {
        let text = "ş".repeat(25);
        let pieces = fallback_split(&text, 10);
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[0].chars().count(), 10);
        assert_eq!(pieces[2].chars().count(), 5);
    }

    #[test]
    fn test_window_is_stretched_over_a_marker() {
        let text = format!("{}(ləğv edilib){}", "x".repeat(8), "y".repeat(10));
        let pieces = fallback_split(&text, 10);

        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0], "xxxxxxxx(ləğv edilib)");
        assert_eq!(pieces[1], "y".repeat(10));
    }

    #[test]
    fn test_non_blank_input_yields_a_segment() {
        assert_eq!(fallback_split("tək", 800), vec!["tək"]);
        assert!(fallback_split("   \n  ", 800).is_empty());
    }
}
