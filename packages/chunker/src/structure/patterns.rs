//! Heading pattern families for Azerbaijani statutes.
//!
//! Each family lists its patterns in priority order. All patterns are
//! case-insensitive; Roman numerals and the capital letter opening a numbered
//! clause are matched case-sensitively so that ordinary words ("fəsil ilə",
//! "2014. ildə") are not taken for headings.

use regex::Regex;
use std::sync::LazyLock;

/// Chapter headings (Fəsil).
const CHAPTER: &[&str] = &[
    r"(?i)F[əƏ]s[iİ]l\s+(?-i:[IVXLCDM]+)\b",
    r"(?i)F[əƏ]s[iİ]l\s+\d+",
    r"(?i)FASIL\s+(?-i:[IVXLCDM]+)\b",
    r"(?i)FASIL\s+\d+",
    r"(?i)\d+\s*[-–—]\s*c[iüıə]\s+f[əƏ]s[iİ]l",
];

/// Section and part headings (Bölüm, Hissə).
const SECTION: &[&str] = &[
    r"(?i)B[öÖ]l[üÜ]m\s+(?-i:[IVXLCDM]+)\b",
    r"(?i)B[öÖ]l[üÜ]m\s+\d+",
    r"(?i)H[iİ]ss[əƏ]\s+(?-i:[IVXLCDM]+)\b",
    r"(?i)H[iİ]ss[əƏ]\s+\d+",
];

/// Article and clause headings (Maddə, Bənd, numbered clauses).
const ARTICLE: &[&str] = &[
    r"(?i)M[aA]dd[əƏeE]\s+\d+(?:\.\d+)*",
    r"(?i)\d+(?:\.\d+)*\s*[-–—]\s*c[iüıə]\s+m[aA]dd[əƏeE]",
    r"\d+(?:\.\d+)*\.\s*[A-ZÇƏĞIİÖŞÜ]",
    r"\d+(?:\.\d+)*\)\s*[A-ZÇƏĞIİÖŞÜ]",
    r"(?i)B[əƏeE]nd\s+\d+(?:\.\d+)*",
];

/// Dotted article number inside an article label, tried in order.
const ARTICLE_NUMBER: &[&str] = &[
    r"(\d+(?:\.\d+)*)",
    r"(?i)Madd[əƏ]\s+(\d+(?:\.\d+)*)",
    r"(?i)(\d+(?:\.\d+)*)\s*[-–—]\s*c[iüıə]\s+madd[əƏ]",
];

#[allow(clippy::expect_used)] // Static patterns that are guaranteed to be valid
fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).expect("valid regex"))
        .collect()
}

pub(crate) static CHAPTER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(CHAPTER));
pub(crate) static SECTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(SECTION));
pub(crate) static ARTICLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(ARTICLE));
pub(crate) static ARTICLE_NUMBER_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile(ARTICLE_NUMBER));
