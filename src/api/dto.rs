//! API Data Transfer Objects
//!
//! Request and response types for the REST API. Field names follow the
//! original client wire format (`type`, `createdAt`, `audioUrl`,
//! `imageUrl`).

use serde::{Deserialize, Serialize};

use crate::store::{ContentBody, ContentItem, ContentKind};

// ============================================
// Content
// ============================================

/// POST /api/content request body
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContentRequest {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub data: ContentBody,
}

/// GET /api/content response
#[derive(Debug, Serialize)]
pub struct ContentListResponse {
    pub total: usize,
    pub items: Vec<ContentItem>,
}

/// DELETE /api/content/:id response
#[derive(Debug, Serialize)]
pub struct DeleteContentResponse {
    pub deleted: String,
}

// ============================================
// Generation / media proxies
// ============================================

/// POST /api/generate request body
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
}

/// POST /api/generate response
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub response: String,
}

/// POST /api/tts request body
#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    pub text: String,
}

/// POST /api/tts response
#[derive(Debug, Serialize)]
pub struct SpeechResponse {
    #[serde(rename = "audioUrl")]
    pub audio_url: String,
}

/// POST /api/thumbnail request body
#[derive(Debug, Deserialize)]
pub struct ThumbnailRequest {
    pub prompt: String,
}

/// POST /api/thumbnail response
#[derive(Debug, Serialize)]
pub struct ThumbnailResponse {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

// ============================================
// Health
// ============================================

/// GET /health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub content_items: u64,
    pub generation_enabled: bool,
}

/// GET /health/live and /health/ready response
#[derive(Debug, Serialize)]
pub struct ProbeResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserializes_wire_format() {
        let json = r#"{"type":"seo","data":{"prompt":"A","response":"B"}}"#;
        let req: CreateContentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.kind, ContentKind::Seo);
        assert_eq!(req.data.prompt, "A");
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let json = r#"{"type":"poem","data":{"prompt":"A","response":"B"}}"#;
        assert!(serde_json::from_str::<CreateContentRequest>(json).is_err());
    }

    #[test]
    fn test_media_responses_wire_names() {
        let speech = serde_json::to_value(SpeechResponse {
            audio_url: "http://x/a.mp3".to_string(),
        })
        .unwrap();
        assert_eq!(speech["audioUrl"], "http://x/a.mp3");

        let thumb = serde_json::to_value(ThumbnailResponse {
            image_url: "http://x/t.png".to_string(),
        })
        .unwrap();
        assert_eq!(thumb["imageUrl"], "http://x/t.png");
    }
}
