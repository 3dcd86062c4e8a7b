//! String-only attribute maps for chunks.

use super::context::HierarchyContext;
use crate::statute::StatuteInfo;
use crate::types::{Attributes, ChunkType};

/// Keyword used in formatted article citations.
pub const ARTICLE_KEYWORD: &str = "Maddə";

fn insert_level(attributes: &mut Attributes, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        attributes.insert(key.to_string(), value.to_string());
        attributes.insert(format!("{key}_context"), value.to_string());
    }
}

/// Build the attribute map for a chunk.
///
/// Always carries the statute fields and chunk type. Each hierarchy level
/// adds its label and a `_context` copy only when present; an article
/// number adds `article_number` and a citation such as `"Maddə 12"`.
pub fn build_attributes(
    statute: &StatuteInfo,
    chunk_type: ChunkType,
    context: &HierarchyContext,
    article_number: Option<&str>,
) -> Attributes {
    let mut attributes = Attributes::new();
    attributes.insert("law_code".to_string(), statute.code.clone());
    attributes.insert("law_name_az".to_string(), statute.name_az.clone());
    attributes.insert("law_name_en".to_string(), statute.name_en.clone());
    attributes.insert("chunk_type".to_string(), chunk_type.to_string());

    insert_level(&mut attributes, "chapter", context.chapter.as_deref());
    insert_level(&mut attributes, "section", context.section.as_deref());
    insert_level(&mut attributes, "article", context.article.as_deref());

    if let Some(number) = article_number.filter(|n| !n.is_empty()) {
        attributes.insert("article_number".to_string(), number.to_string());
        attributes.insert(
            "article_reference".to_string(),
            format!("{ARTICLE_KEYWORD} {number}"),
        );
    }

    attributes
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn civil() -> StatuteInfo {
        StatuteInfo::new("civil_law_code.pdf", "civil", "Mülki Məcəllə", "Civil Law Code")
    }

    #[test]
    fn test_minimal_attributes() {
        let attributes =
            build_attributes(&civil(), ChunkType::Content, &HierarchyContext::new(), None);

        let keys: Vec<&str> = attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["chunk_type", "law_code", "law_name_az", "law_name_en"]);
        assert_eq!(attributes["chunk_type"], "content");
        assert_eq!(attributes["law_name_az"], "Mülki Məcəllə");
    }

    #[test]
    fn test_present_levels_are_paired() {
        let mut context = HierarchyContext::new();
        context.enter_chapter("Fəsil I");
        context.enter_article("Maddə 12");

        let attributes = build_attributes(&civil(), ChunkType::Article, &context, Some("12"));

        assert_eq!(attributes["chapter"], "Fəsil I");
        assert_eq!(attributes["chapter_context"], "Fəsil I");
        assert_eq!(attributes["article"], "Maddə 12");
        assert_eq!(attributes["article_context"], "Maddə 12");
        assert_eq!(attributes["article_number"], "12");
        assert_eq!(attributes["article_reference"], "Maddə 12");
        assert!(!attributes.contains_key("section"));
        assert!(!attributes.contains_key("section_context"));
        assert!(attributes.values().all(|v| !v.is_empty()));
    }

    #[test]
    fn test_unknown_statute_placeholder_names() {
        let attributes = build_attributes(
            &StatuteInfo::unknown("tax"),
            ChunkType::Chapter,
            &HierarchyContext::new(),
            None,
        );
        assert_eq!(attributes["law_code"], "tax");
        assert_eq!(attributes["law_name_en"], "Unknown Code");
    }
}
