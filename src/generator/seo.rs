//! SEO metadata derived mechanically from the topic.

use crate::types::SeoMetadata;

/// Meta descriptions are capped at 160 characters, the length search engines
/// display before cutting off.
const META_DESCRIPTION_LIMIT: usize = 160;

/// Build the meta description and keyword list for `topic`.
pub fn metadata(topic: &str) -> SeoMetadata {
    let description = format!(
        "Comprehensive guide to {}. Learn about key concepts, practical applications, benefits, challenges, and future trends. Expert insights and actionable advice.",
        topic
    );

    let keywords = vec![
        topic.to_string(),
        format!("{} guide", topic),
        format!("{} benefits", topic),
        format!("{} implementation", topic),
        format!("{} best practices", topic),
        format!("{} trends", topic),
        format!("{} challenges", topic),
        format!("what is {}", topic),
    ];

    SeoMetadata {
        meta_description: truncate_chars(&description, META_DESCRIPTION_LIMIT),
        keywords,
    }
}

/// Truncate to at most `limit` characters, cutting on a char boundary.
/// May cut mid-word; no ellipsis is appended.
fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((index, _)) => text[..index].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_have_eight_entries_containing_topic() {
        let seo = metadata("remote work");
        assert_eq!(seo.keywords.len(), 8);
        for keyword in &seo.keywords {
            assert!(keyword.contains("remote work"), "keyword: {}", keyword);
        }
        assert_eq!(seo.keywords[0], "remote work");
        assert_eq!(seo.keywords[7], "what is remote work");
    }

    #[test]
    fn test_meta_description_contains_topic_when_short() {
        let seo = metadata("rust");
        assert!(seo.meta_description.starts_with("Comprehensive guide to rust."));
        assert!(seo.meta_description.chars().count() <= 160);
    }

    #[test]
    fn test_meta_description_capped_for_long_topics() {
        let topic = "a".repeat(400);
        let seo = metadata(&topic);
        assert_eq!(seo.meta_description.chars().count(), 160);
    }

    #[test]
    fn test_truncation_is_char_boundary_safe() {
        let topic = "日本語のトピック".repeat(40);
        let seo = metadata(&topic);
        assert_eq!(seo.meta_description.chars().count(), 160);
    }

    #[test]
    fn test_truncate_chars_noop_under_limit() {
        assert_eq!(truncate_chars("short", 160), "short");
        assert_eq!(truncate_chars("", 160), "");
    }
}
