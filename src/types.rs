//! Request and response types for the generation endpoint.

use serde::{Deserialize, Serialize};

/// Parsed JSON body of a generation request.
///
/// `topic` is the only required field; `tone` and `length` fall back to
/// defaults downstream when absent or unrecognized.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub length: Option<String>,
}

/// A generated blog post. Created fresh per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Post title, one of three tone-keyed templates with the topic spliced in
    pub title: String,
    /// Full markdown document, starting with an `# {title}` heading
    pub content: String,
    /// Fixed eight-item section outline, identical for every request
    pub outline: Vec<String>,
    /// Mechanically derived SEO metadata
    pub seo: SeoMetadata,
}

/// SEO metadata derived from the topic string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    /// Meta description, capped at 160 characters
    pub meta_description: String,
    /// Exactly eight keyword strings, each containing the topic
    pub keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_parses_with_optional_fields_absent() {
        let request: GenerateRequest = serde_json::from_str(r#"{"topic":"rust"}"#).unwrap();
        assert_eq!(request.topic, "rust");
        assert!(request.tone.is_none());
        assert!(request.length.is_none());
    }

    #[test]
    fn test_request_parses_with_topic_absent() {
        let request: GenerateRequest = serde_json::from_str(r#"{"tone":"casual"}"#).unwrap();
        assert!(request.topic.is_empty());
    }

    #[test]
    fn test_response_uses_camel_case_wire_names() {
        let post = BlogPost {
            title: "t".to_string(),
            content: "# t".to_string(),
            outline: vec![],
            seo: SeoMetadata {
                meta_description: "d".to_string(),
                keywords: vec![],
            },
        };

        let json = serde_json::to_string(&post).unwrap();
        assert!(json.contains("metaDescription"));
        assert!(!json.contains("meta_description"));
    }
}
