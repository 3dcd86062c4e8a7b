//! Length-bounded recursive splitter with overlap.
//!
//! Splits on the most meaningful separator present (blank lines, lines,
//! sentence punctuation, commas, spaces) and falls back to single characters
//! only for runs that still exceed the size bound. Adjacent pieces are then
//! merged greedily up to the chunk size, carrying up to `overlap` characters
//! of the previous chunk into the next.

use std::collections::VecDeque;

/// Separators in order of preference. The empty separator cuts characters.
pub const DEFAULT_SEPARATORS: &[&str] = &["\n\n", "\n", ".", "!", "?", ",", " ", ""];

/// A piece of text and its length in characters.
#[derive(Debug, Clone, Copy)]
struct Piece<'t> {
    text: &'t str,
    chars: usize,
}

impl<'t> Piece<'t> {
    fn new(text: &'t str) -> Self {
        Self {
            text,
            chars: text.chars().count(),
        }
    }
}

/// Recursive character splitter.
#[derive(Debug, Clone)]
pub struct RecursiveSplitter {
    chunk_size: usize,
    overlap: usize,
    separators: Vec<&'static str>,
}

impl RecursiveSplitter {
    /// Create a splitter. Sizes are in characters; `overlap` must be smaller
    /// than `chunk_size` (checked by [`ChunkerConfig::validate`](crate::config::ChunkerConfig::validate)).
    #[must_use]
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            overlap: overlap.min(chunk_size.saturating_sub(1)),
            separators: DEFAULT_SEPARATORS.to_vec(),
        }
    }

    /// Split text into trimmed chunks of at most `chunk_size` characters.
    pub fn split(&self, text: &str) -> Vec<String> {
        self.split_with(text, &self.separators)
    }

    fn split_with(&self, text: &str, separators: &[&'static str]) -> Vec<String> {
        // Use the first separator present in the text; "" always applies.
        let position = separators
            .iter()
            .position(|sep| sep.is_empty() || text.contains(sep))
            .unwrap_or(separators.len().saturating_sub(1));
        let separator = separators.get(position).copied().unwrap_or("");
        let remaining = separators.get(position + 1..).unwrap_or(&[]);

        let splits: Vec<Piece<'_>> = if separator.is_empty() {
            text.char_indices()
                .map(|(i, c)| Piece::new(&text[i..i + c.len_utf8()]))
                .collect()
        } else {
            text.split_inclusive(separator).map(Piece::new).collect()
        };

        let mut chunks = Vec::new();
        let mut fitting: Vec<Piece<'_>> = Vec::new();

        for piece in splits {
            if piece.chars <= self.chunk_size {
                fitting.push(piece);
                continue;
            }

            if !fitting.is_empty() {
                chunks.extend(self.merge(&fitting));
                fitting.clear();
            }

            if remaining.is_empty() {
                chunks.push(piece.text.trim().to_string());
            } else {
                chunks.extend(self.split_with(piece.text, remaining));
            }
        }

        if !fitting.is_empty() {
            chunks.extend(self.merge(&fitting));
        }

        chunks.retain(|c| !c.is_empty());
        chunks
    }

    /// Merge small pieces into chunks of at most `chunk_size` characters.
    fn merge(&self, pieces: &[Piece<'_>]) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut window: VecDeque<Piece<'_>> = VecDeque::new();
        let mut total = 0usize;

        for &piece in pieces {
            if total + piece.chars > self.chunk_size && !window.is_empty() {
                push_joined(&mut chunks, &window);

                // Keep at most `overlap` characters, and make room for the piece.
                while total > self.overlap
                    || (total + piece.chars > self.chunk_size && total > 0)
                {
                    match window.pop_front() {
                        Some(dropped) => total -= dropped.chars,
                        None => break,
                    }
                }
            }

            window.push_back(piece);
            total += piece.chars;
        }

        push_joined(&mut chunks, &window);
        chunks
    }
}

fn push_joined(chunks: &mut Vec<String>, window: &VecDeque<Piece<'_>>) {
    let joined: String = window.iter().map(|p| p.text).collect();
    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn char_len(s: &str) -> usize {
        s.chars().count()
    }

    #[test]
    fn test_short_text_is_single_chunk() {
        let splitter = RecursiveSplitter::new(100, 10);
        assert_eq!(splitter.split("Qısa mətn."), vec!["Qısa mətn.".to_string()]);
    }

    #[test]
    fn test_hard_cuts_follow_window_formula() {
        // No separators at all: pure character windows.
        let (size, overlap, len) = (100usize, 20usize, 250usize);
        let text = "ə".repeat(len);
        let chunks = RecursiveSplitter::new(size, overlap).split(&text);

        let expected = (len - overlap).div_ceil(size - overlap);
        assert_eq!(chunks.len(), expected);
        assert!(chunks.iter().all(|c| char_len(c) <= size));
        assert_eq!(char_len(&chunks[0]), 100);
        assert_eq!(char_len(&chunks[2]), 90);
    }

    #[test]
    fn test_splits_on_sentences_with_bounded_overlap() {
        let sentence = "Mülki hüquqların həyata keçirilməsi qanunla tənzimlənir. ";
        let text = sentence.repeat(30);
        let (size, overlap) = (200, 60);
        let chunks = RecursiveSplitter::new(size, overlap).split(&text);

        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| char_len(c) <= size));
        assert!(chunks.iter().all(|c| c.ends_with('.')));

        for pair in chunks.windows(2) {
            // The next chunk starts with text already seen at the end of the
            // previous one, never more than the overlap.
            let head: String = pair[1].chars().take(overlap).collect();
            let shared = (0..=char_len(&head))
                .rev()
                .find(|&n| {
                    let prefix: String = pair[1].chars().take(n).collect();
                    pair[0].ends_with(&prefix)
                })
                .unwrap_or(0);
            assert!(shared > 0 && shared <= overlap);
        }
    }

    #[test]
    fn test_long_word_is_cut_by_characters() {
        let text = format!("qısa {} son", "x".repeat(50));
        let chunks = RecursiveSplitter::new(20, 5).split(&text);
        assert!(chunks.iter().all(|c| char_len(c) <= 20));
        assert!(chunks.iter().any(|c| c.contains("xxxxx")));
        assert_eq!(chunks.first().map(String::as_str), Some("qısa"));
        assert_eq!(chunks.last().map(String::as_str), Some("son"));
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(RecursiveSplitter::new(10, 2).split("").is_empty());
        assert!(RecursiveSplitter::new(10, 2).split("   ").is_empty());
    }
}
