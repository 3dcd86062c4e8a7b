//! Boundary discovery and heading classification.

use std::collections::BTreeSet;

use regex::Regex;

use super::patterns::{
    ARTICLE_NUMBER_PATTERNS, ARTICLE_PATTERNS, CHAPTER_PATTERNS, SECTION_PATTERNS,
};

/// A segment recognised as a structural heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Heading {
    /// Chapter heading with its matched label.
    Chapter(String),

    /// Section or part heading with its matched label.
    Section(String),

    /// Article heading with its label and dotted number, if any.
    Article {
        label: String,
        number: Option<String>,
    },
}

impl Heading {
    /// The matched label text.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Chapter(label) | Self::Section(label) => label,
            Self::Article { label, .. } => label,
        }
    }
}

/// Recognises chapter, section and article headings.
///
/// Stateless; the compiled pattern families are shared process-wide.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructureMatcher;

/// First match of the first pattern in the family that matches anywhere.
fn first_match(patterns: &[Regex], text: &str) -> Option<String> {
    patterns
        .iter()
        .find_map(|pattern| pattern.find(text))
        .map(|m| m.as_str().to_string())
}

impl StructureMatcher {
    /// Create a matcher.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Byte offsets where any heading pattern of any family starts.
    ///
    /// Offsets are deduplicated and ascending, and always fall on character
    /// boundaries of `text`.
    pub fn find_boundaries(&self, text: &str) -> BTreeSet<usize> {
        CHAPTER_PATTERNS
            .iter()
            .chain(SECTION_PATTERNS.iter())
            .chain(ARTICLE_PATTERNS.iter())
            .flat_map(|pattern| pattern.find_iter(text).map(|m| m.start()))
            .collect()
    }

    /// Cut text at the given boundaries.
    ///
    /// Text before the first boundary and after the last one form segments of
    /// their own. Segments are trimmed; empty ones are dropped.
    pub fn segments<'t>(&self, text: &'t str, boundaries: &BTreeSet<usize>) -> Vec<&'t str> {
        let mut cuts: Vec<usize> = Vec::with_capacity(boundaries.len() + 2);
        cuts.push(0);
        cuts.extend(boundaries.iter().copied().filter(|&b| b > 0 && b < text.len()));
        cuts.push(text.len());

        cuts.windows(2)
            .map(|w| text[w[0]..w[1]].trim())
            .filter(|segment| !segment.is_empty())
            .collect()
    }

    /// Classify a segment by fixed family priority.
    ///
    /// Chapter patterns are tried first, then section, then article. The
    /// first family with a match anywhere in the segment wins, even when a
    /// lower family matches earlier in the text.
    pub fn classify(&self, segment: &str) -> Option<Heading> {
        if let Some(label) = first_match(&CHAPTER_PATTERNS, segment) {
            return Some(Heading::Chapter(label));
        }
        if let Some(label) = first_match(&SECTION_PATTERNS, segment) {
            return Some(Heading::Section(label));
        }
        first_match(&ARTICLE_PATTERNS, segment).map(|label| {
            let number = self.article_number(&label);
            Heading::Article { label, number }
        })
    }

    /// Extract a dotted number ("127.1.1") from an article label.
    pub fn article_number(&self, label: &str) -> Option<String> {
        ARTICLE_NUMBER_PATTERNS.iter().find_map(|pattern| {
            pattern
                .captures(label)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        })
    }
}
