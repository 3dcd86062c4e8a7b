//! Hierarchy state carried through the segment walk.

/// Current chapter, section and article labels.
///
/// Mutated only by the walk step; every chunk takes a snapshot of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyContext {
    /// Active chapter label.
    pub chapter: Option<String>,

    /// Active section label.
    pub section: Option<String>,

    /// Active article label.
    pub article: Option<String>,
}

impl HierarchyContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a new chapter. The article is cleared; the section is kept.
    pub fn enter_chapter(&mut self, label: impl Into<String>) {
        self.chapter = Some(label.into());
        self.article = None;
    }

    /// Enter a new section. The article is cleared; the chapter is kept.
    pub fn enter_section(&mut self, label: impl Into<String>) {
        self.section = Some(label.into());
        self.article = None;
    }

    /// Enter a new article. Chapter and section are kept.
    pub fn enter_article(&mut self, label: impl Into<String>) {
        self.article = Some(label.into());
    }

    /// Whether no level is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chapter.is_none() && self.section.is_none() && self.article.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_chapter_clears_article_only() {
        let mut ctx = HierarchyContext::new();
        ctx.enter_section("Bölüm 1");
        ctx.enter_article("Maddə 3");
        ctx.enter_chapter("Fəsil II");

        assert_eq!(ctx.chapter.as_deref(), Some("Fəsil II"));
        assert_eq!(ctx.section.as_deref(), Some("Bölüm 1"));
        assert_eq!(ctx.article, None);
    }

    #[test]
    fn test_enter_section_keeps_chapter() {
        let mut ctx = HierarchyContext::new();
        ctx.enter_chapter("Fəsil I");
        ctx.enter_article("Maddə 1");
        ctx.enter_section("Hissə 2");

        assert_eq!(ctx.chapter.as_deref(), Some("Fəsil I"));
        assert_eq!(ctx.section.as_deref(), Some("Hissə 2"));
        assert_eq!(ctx.article, None);
    }

    #[test]
    fn test_enter_article_keeps_chapter_and_section() {
        let mut ctx = HierarchyContext::new();
        assert!(ctx.is_empty());
        ctx.enter_chapter("Fəsil I");
        ctx.enter_section("Bölüm 1");
        ctx.enter_article("Maddə 7");
        ctx.enter_article("Maddə 8");

        assert_eq!(ctx.chapter.as_deref(), Some("Fəsil I"));
        assert_eq!(ctx.section.as_deref(), Some("Bölüm 1"));
        assert_eq!(ctx.article.as_deref(), Some("Maddə 8"));
        assert!(!ctx.is_empty());
    }
}
