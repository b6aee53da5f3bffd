//! Content Types
//!
//! Core data model shared between the library and the API layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of generated artifact a content item holds.
///
/// Wire names match the original client vocabulary (`thumbnailPrompt`
/// is intentionally camel-cased).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    #[serde(rename = "script")]
    Script,
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "thumbnailPrompt")]
    ThumbnailPrompt,
    #[serde(rename = "seo")]
    Seo,
}

impl ContentKind {
    /// All kinds, in display order
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Script,
        ContentKind::Title,
        ContentKind::ThumbnailPrompt,
        ContentKind::Seo,
    ];

    /// Wire name for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Script => "script",
            ContentKind::Title => "title",
            ContentKind::ThumbnailPrompt => "thumbnailPrompt",
            ContentKind::Seo => "seo",
        }
    }

    /// Parse a wire name into a kind
    pub fn parse(s: &str) -> Option<ContentKind> {
        match s {
            "script" => Some(ContentKind::Script),
            "title" => Some(ContentKind::Title),
            "thumbnailPrompt" => Some(ContentKind::ThumbnailPrompt),
            "seo" => Some(ContentKind::Seo),
            _ => None,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Script => "Script",
            ContentKind::Title => "Title",
            ContentKind::ThumbnailPrompt => "Thumbnail Prompt",
            ContentKind::Seo => "SEO Tags",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The prompt/response payload of a content item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBody {
    pub prompt: String,
    pub response: String,
}

/// One persisted generated artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    /// Opaque unique identifier (UUID v4)
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub data: ContentBody,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(ContentKind::Script.as_str(), "script");
        assert_eq!(ContentKind::ThumbnailPrompt.as_str(), "thumbnailPrompt");
        assert_eq!(ContentKind::parse("seo"), Some(ContentKind::Seo));
        assert_eq!(ContentKind::parse("SEO"), None);
        assert_eq!(ContentKind::parse("unknown"), None);
    }

    #[test]
    fn test_kind_roundtrip_all() {
        for kind in ContentKind::ALL {
            assert_eq!(ContentKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_item_serde_shape() {
        let item = ContentItem {
            id: "abc".to_string(),
            kind: ContentKind::ThumbnailPrompt,
            data: ContentBody {
                prompt: "A".to_string(),
                response: "B".to_string(),
            },
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "thumbnailPrompt");
        assert_eq!(json["data"]["prompt"], "A");
        assert!(json["createdAt"].is_string());
    }
}
