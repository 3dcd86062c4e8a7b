//! Hierarchical chunker that walks heading-delimited segments.

use std::sync::Arc;

use super::context::HierarchyContext;
use super::fallback::fallback_split;
use super::metadata::build_attributes;
use super::splitter::RecursiveSplitter;
use crate::config::ChunkerConfig;
use crate::error::Result;
use crate::normalize::{compose, normalize, normalize_layout};
use crate::statute::{StatuteInfo, StatuteTable};
use crate::structure::{Heading, StructureMatcher};
use crate::types::{Chunk, ChunkType};

/// Splits statute text into hierarchy-aware chunks.
///
/// Immutable after construction and safe to share between threads; every
/// call to [`chunk`](Self::chunk) keeps its own walk state.
#[derive(Debug, Clone)]
pub struct LegalChunker {
    config: ChunkerConfig,
    statutes: Arc<StatuteTable>,
    matcher: StructureMatcher,
    splitter: RecursiveSplitter,
}

impl LegalChunker {
    /// Create a chunker.
    ///
    /// # Errors
    /// Returns `ChunkerError::InvalidConfig` if a size is zero or the
    /// overlap is not smaller than the chunk size.
    pub fn new(config: ChunkerConfig, statutes: Arc<StatuteTable>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            splitter: RecursiveSplitter::new(config.chunk_size, config.chunk_overlap),
            matcher: StructureMatcher::new(),
            config,
            statutes,
        })
    }

    /// Sizing parameters in use.
    #[must_use]
    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Statute table used for attributes.
    #[must_use]
    pub fn statutes(&self) -> &StatuteTable {
        &self.statutes
    }

    /// Chunk one document.
    ///
    /// Never fails. Repealed segments are dropped, and documents without a
    /// usable heading structure go through the fallback splitter. Chunks come
    /// back in source order.
    ///
    /// # Examples
    /// ```
    /// use qanun_chunker::chunking::LegalChunker;
    /// use qanun_chunker::types::ChunkType;
    ///
    /// let chunker = LegalChunker::default();
    /// let chunks = chunker.chunk("Maddə 1. Content A. Maddə 2. Content B.", "civil");
    ///
    /// assert_eq!(chunks.len(), 2);
    /// assert!(chunks.iter().all(|c| c.chunk_type == ChunkType::Article));
    /// assert_eq!(chunks[1].sub_article.as_deref(), Some("2"));
    /// ```
    pub fn chunk(&self, text: &str, statute_id: &str) -> Vec<Chunk> {
        let statute = self.statutes.resolve(statute_id);
        if statute.is_unknown() {
            tracing::warn!(
                statute = %statute_id,
                "Unknown statute code, using placeholder names"
            );
        }

        let layout = normalize_layout(text);
        let boundaries = self.matcher.find_boundaries(&layout);
        tracing::debug!(
            statute = %statute_id,
            boundaries = boundaries.len(),
            chars = layout.chars().count(),
            "Located heading boundaries"
        );

        // Fallback works on line structure, which layout normalization removes
        let segments: Vec<String> = if boundaries.len() < 2 {
            tracing::debug!(statute = %statute_id, "Too few headings, using fallback splitter");
            fallback_split(&compose(text), self.config.chunk_size)
        } else {
            self.matcher
                .segments(&layout, &boundaries)
                .into_iter()
                .map(str::to_string)
                .collect()
        };

        let mut walk = Walk::new(self, &statute, statute_id);
        for segment in &segments {
            walk.step(segment);
        }
        walk.flush();

        if walk.chunks.is_empty() {
            let whole = normalize(&layout);
            if whole.is_valid && whole.char_len() >= self.config.min_content_chars {
                tracing::debug!(
                    statute = %statute_id,
                    "No segment produced a chunk, emitting whole document"
                );
                walk.context = HierarchyContext::new();
                walk.buffer.push(whole.text);
                walk.flush();
            }
        }

        let mut chunks = walk.chunks;
        chunks.retain(|c| c.is_valid);

        tracing::info!(
            statute = %statute_id,
            chunks = chunks.len(),
            segments = segments.len(),
            "Chunked document"
        );
        chunks
    }
}

impl Default for LegalChunker {
    /// Default sizes with the Azerbaijani code table.
    fn default() -> Self {
        let config = ChunkerConfig::default();
        Self {
            splitter: RecursiveSplitter::new(config.chunk_size, config.chunk_overlap),
            matcher: StructureMatcher::new(),
            config,
            statutes: Arc::new(StatuteTable::azerbaijani_codes()),
        }
    }
}

/// State of one pass over a document's segments.
struct Walk<'a> {
    chunker: &'a LegalChunker,
    statute: &'a StatuteInfo,
    statute_id: &'a str,
    context: HierarchyContext,
    buffer: Vec<String>,
    chunks: Vec<Chunk>,
}

impl<'a> Walk<'a> {
    fn new(chunker: &'a LegalChunker, statute: &'a StatuteInfo, statute_id: &'a str) -> Self {
        Self {
            chunker,
            statute,
            statute_id,
            context: HierarchyContext::new(),
            buffer: Vec::new(),
            chunks: Vec::new(),
        }
    }

    /// Process one segment: headings flush and update the context, plain
    /// text is buffered.
    fn step(&mut self, segment: &str) {
        let normalized = normalize(segment);
        if !normalized.is_valid {
            tracing::debug!(
                chars = normalized.char_len(),
                "Dropping invalidated segment"
            );
            return;
        }
        if normalized.text.is_empty() {
            return;
        }

        match self.chunker.matcher.classify(&normalized.text) {
            Some(Heading::Chapter(label)) => {
                self.flush();
                self.context.enter_chapter(label);
                self.emit(normalized.text, ChunkType::Chapter, None);
            }
            Some(Heading::Section(label)) => {
                self.flush();
                self.context.enter_section(label);
                self.emit(normalized.text, ChunkType::Section, None);
            }
            Some(Heading::Article { label, number }) => {
                self.flush();
                self.context.enter_article(label);
                self.emit(normalized.text, ChunkType::Article, number);
            }
            None => {
                if normalized.char_len() >= self.chunker.config.min_segment_chars {
                    self.buffer.push(normalized.text);
                }
            }
        }
    }

    /// Emit buffered text as content under the current context.
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let joined = std::mem::take(&mut self.buffer).join("\n");
        let merged = normalize(&joined);
        let config = self.chunker.config;

        if !merged.is_valid || merged.char_len() < config.min_content_chars {
            tracing::debug!(
                chars = merged.char_len(),
                valid = merged.is_valid,
                "Discarding buffered content"
            );
            return;
        }

        if merged.char_len() <= config.chunk_size {
            self.emit(merged.text, ChunkType::Content, None);
            return;
        }

        let pieces = self.chunker.splitter.split(&merged.text);
        tracing::debug!(
            chars = merged.char_len(),
            pieces = pieces.len(),
            "Re-splitting oversized content"
        );
        for piece in pieces {
            let piece = normalize(&piece);
            if piece.is_valid && piece.char_len() >= config.min_content_chars {
                self.emit(piece.text, ChunkType::Content, None);
            }
        }
    }

    fn emit(&mut self, content: String, chunk_type: ChunkType, sub_article: Option<String>) {
        let attributes = build_attributes(
            self.statute,
            chunk_type,
            &self.context,
            sub_article.as_deref(),
        );
        self.chunks.push(Chunk {
            content,
            statute_id: self.statute_id.to_string(),
            chapter: self.context.chapter.clone(),
            section: self.context.section.clone(),
            article: self.context.article.clone(),
            sub_article,
            chunk_type,
            is_valid: true,
            attributes,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChunkerError;
    use pretty_assertions::assert_eq;

    fn chunker(chunk_size: usize, overlap: usize) -> LegalChunker {
        LegalChunker::new(
            ChunkerConfig::new(chunk_size, overlap),
            Arc::new(StatuteTable::azerbaijani_codes()),
        )
        .unwrap()
    }

    fn types(chunks: &[Chunk]) -> Vec<ChunkType> {
        chunks.iter().map(|c| c.chunk_type).collect()
    }

    #[test]
    fn test_two_articles() {
        let chunks = LegalChunker::default().chunk("Maddə 1. Content A. Maddə 2. Content B.", "civil");

        assert_eq!(types(&chunks), vec![ChunkType::Article, ChunkType::Article]);
        assert_eq!(chunks[0].content, "1. Content A.");
        assert_eq!(chunks[1].content, "2. Content B.");
        assert_eq!(chunks[0].sub_article.as_deref(), Some("1"));
        assert_eq!(chunks[1].sub_article.as_deref(), Some("2"));
        assert_ne!(chunks[0].article, chunks[1].article);
        assert_eq!(chunks[1].attributes["article_reference"], "Maddə 2");
    }

    #[test]
    fn test_repealed_segment_is_excluded() {
        let text = "Fəsil I Ümumi müddəalar. \
            Maddə 1. Mülki qanunvericilik Azərbaycan Respublikasının Konstitusiyasına əsaslanır. \
            Maddə 2. (ləğv edilib) \
            Maddə 3. Mülki hüquq münasibətlərinin iştirakçıları bərabərdirlər.";
        let chunks = LegalChunker::default().chunk(text, "civil");

        let numbers: Vec<Option<&str>> =
            chunks.iter().map(|c| c.sub_article.as_deref()).collect();
        assert_eq!(numbers, vec![None, Some("1"), Some("3")]);
        assert!(chunks.iter().all(|c| !c.content.contains("ləğv")));
        assert!(chunks.iter().all(|c| c.is_valid));
        assert!(chunks.iter().all(|c| c.chapter.as_deref() == Some("Fəsil I")));
    }

    #[test]
    fn test_part_cross_reference_is_not_a_section() {
        let text = "Fəsil I Ümumi müddəalar \
            Maddə 5. Müqavilə tərəflərin razılığı ilə bağlanır və bu maddənin 2-ci \
            hissəsində nəzərdə tutulmuş hallarda notariat qaydasında təsdiq edilir. \
            Belə müqavilələr dövlət qeydiyyatına alınmalıdır.";
        let chunks = LegalChunker::default().chunk(text, "civil");

        assert_eq!(types(&chunks), vec![ChunkType::Chapter, ChunkType::Article]);
        let article = &chunks[1];
        assert!(article.content.contains("2-ci hissəsində"));
        assert!(article.content.ends_with("alınmalıdır."));
        assert_eq!(article.sub_article.as_deref(), Some("5"));
        assert_eq!(article.article.as_deref(), Some("5. M"));
        assert_eq!(article.section, None);
        assert_eq!(article.chapter.as_deref(), Some("Fəsil I"));
    }

    #[test]
    fn test_unstructured_text_falls_back_and_resplits() {
        let sentence = "Mülki hüquqların həyata keçirilməsi qanunla tənzimlənir. ";
        let text = sentence.repeat(40);
        let chunks = chunker(300, 50).chunk(&text, "civil");

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert_eq!(chunk.chunk_type, ChunkType::Content);
            assert!(chunk.char_len() <= 300, "{}", chunk.char_len());
            assert!(chunk.char_len() >= 50, "{}", chunk.char_len());
            assert!(chunk.chapter.is_none());
        }
    }

    #[test]
    fn test_repeal_note_across_window_edge_is_excluded() {
        // Single line with no headings, so the fixed-window tier applies and
        // the first window edge falls inside the repeal note.
        let text = format!("{} (ləğv edilib) {}", "a".repeat(95), "b ".repeat(200));
        let chunks = chunker(100, 10).chunk(&text, "civil");

        assert!(!chunks.is_empty());
        for chunk in &chunks {
            assert_eq!(chunk.chunk_type, ChunkType::Content);
            assert!(!chunk.content.contains("ləğ"), "{}", chunk.content);
            assert!(!chunk.content.contains("edilib"), "{}", chunk.content);
            assert!(!chunk.content.contains('a'), "{}", chunk.content);
            assert!(chunk.char_len() <= 100);
        }
    }

    #[test]
    fn test_hierarchy_is_retained() {
        let text = "Fəsil I Ümumi müddəalar \
            Bölüm 1 Əsas anlayışlar \
            Maddə 1 Mülki qanunvericiliyin əsasları \
            Maddə 2 Mülki hüququn prinsipləri \
            Fəsil II Əqdlər \
            Maddə 3 Əqdin anlayışı";
        let chunks = LegalChunker::default().chunk(text, "civil");

        assert_eq!(
            types(&chunks),
            vec![
                ChunkType::Chapter,
                ChunkType::Section,
                ChunkType::Article,
                ChunkType::Article,
                ChunkType::Chapter,
                ChunkType::Article,
            ]
        );

        let levels: Vec<(Option<&str>, Option<&str>, Option<&str>)> = chunks
            .iter()
            .map(|c| {
                (
                    c.chapter.as_deref(),
                    c.section.as_deref(),
                    c.article.as_deref(),
                )
            })
            .collect();
        assert_eq!(
            levels,
            vec![
                (Some("Fəsil I"), None, None),
                (Some("Fəsil I"), Some("Bölüm 1"), None),
                (Some("Fəsil I"), Some("Bölüm 1"), Some("Maddə 1")),
                (Some("Fəsil I"), Some("Bölüm 1"), Some("Maddə 2")),
                (Some("Fəsil II"), Some("Bölüm 1"), None),
                (Some("Fəsil II"), Some("Bölüm 1"), Some("Maddə 3")),
            ]
        );
        assert_eq!(chunks[4].content, "Fəsil II Əqdlər");
    }

    #[test]
    fn test_preamble_becomes_content_before_first_heading() {
        let text = "Bu Məcəllə Azərbaycan Respublikasında mülki hüquq münasibətlərini \
            tənzimləyir və mülki qanunvericiliyin əsaslarını müəyyən edir. \
            Maddə 1 Mülki qanunvericilik \
            Maddə 2 Mülki hüquq";
        let chunks = LegalChunker::default().chunk(text, "civil");

        assert_eq!(chunks[0].chunk_type, ChunkType::Content);
        assert!(chunks[0].content.starts_with("Bu Məcəllə"));
        assert!(chunks[0].article.is_none());
        assert!(!chunks[0].attributes.contains_key("article"));
        assert_eq!(chunks.len(), 3);
    }

    #[test]
    fn test_short_lines_still_yield_a_chunk() {
        let text = "Birinci sətir.\nİkinci sətir.\nÜçüncü sətir.\nDördüncü sətir.\nBeşinci sətir.\n";
        let chunks = LegalChunker::default().chunk(text, "civil");

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].chunk_type, ChunkType::Content);
        assert_eq!(
            chunks[0].content,
            "Birinci sətir. İkinci sətir. Üçüncü sətir. Dördüncü sətir. Beşinci sətir."
        );
    }

    #[test]
    fn test_empty_and_blank_input() {
        let chunker = LegalChunker::default();
        assert!(chunker.chunk("", "civil").is_empty());
        assert!(chunker.chunk(" \n\t ", "civil").is_empty());
    }

    #[test]
    fn test_unknown_statute_uses_placeholders() {
        let chunks = LegalChunker::default().chunk("Maddə 1. Content A. Maddə 2. Content B.", "xyz");

        assert_eq!(chunks[0].statute_id, "xyz");
        assert_eq!(chunks[0].attributes["law_code"], "xyz");
        assert_eq!(chunks[0].attributes["law_name_en"], "Unknown Code");
        assert_eq!(chunks[0].attributes["law_name_az"], "Naməlum Məcəllə");
    }

    #[test]
    fn test_known_statute_names_in_attributes() {
        let chunks = LegalChunker::default().chunk("Maddə 1. Content A. Maddə 2. Content B.", "civil");
        assert_eq!(chunks[0].attributes["law_name_en"], "Civil Law Code");
        assert_eq!(chunks[0].attributes["chunk_type"], "article");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let statutes = Arc::new(StatuteTable::azerbaijani_codes());
        let result = LegalChunker::new(ChunkerConfig::new(100, 100), Arc::clone(&statutes));
        assert!(matches!(result, Err(ChunkerError::InvalidConfig(_))));

        let result = LegalChunker::new(ChunkerConfig::new(0, 10), statutes);
        assert!(matches!(result, Err(ChunkerError::InvalidConfig(_))));
    }

    #[test]
    fn test_chunker_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LegalChunker>();
    }
}
