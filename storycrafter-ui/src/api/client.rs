//! HTTP API Client
//!
//! Functions for communicating with the StoryCrafter REST API. All
//! content calls attach the session token as a bearer header; the
//! server treats the token as an opaque owner key.

use gloo_net::http::{Request, RequestBuilder, Response};

use crate::state::content::{ContentItem, ContentKind};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Local storage key for the API base URL override
const API_URL_KEY: &str = "storycrafter_api_url";

/// Local storage key for the session token
const SESSION_KEY: &str = "storycrafter_session";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = local_storage()
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(API_URL_KEY, url);
    }
}

/// Get the session token, if one is saved
pub fn get_session_token() -> Option<String> {
    local_storage()
        .and_then(|storage| storage.get_item(SESSION_KEY).ok().flatten())
        .filter(|token| !token.trim().is_empty())
}

/// Save the session token in local storage
pub fn set_session_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(SESSION_KEY, token.trim());
    }
}

/// Forget the saved session token
pub fn clear_session_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

/// Attach the bearer token to a request, if a session exists
fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match get_session_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct ContentListResponse {
    pub total: usize,
    pub items: Vec<ContentItem>,
}

#[derive(Debug, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    #[serde(default)]
    pub content_items: u64,
    #[serde(default)]
    pub generation_enabled: bool,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    #[allow(dead_code)]
    code: Option<String>,
    message: String,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

/// Pull the server's error message out of a failed response
async fn decode_error(response: Response, fallback: &str) -> String {
    match response.json::<ErrorResponse>().await {
        Ok(body) => body.error.message,
        Err(_) => fallback.to_string(),
    }
}

// ============ API Functions ============

/// Fetch the caller's content items
pub async fn fetch_content() -> Result<Vec<ContentItem>, String> {
    let api_base = get_api_base();

    let response = authorize(Request::get(&format!("{}/content", api_base)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(decode_error(response, "Could not load content").await);
    }

    let result: ContentListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.items)
}

/// Create a new content item
pub async fn create_content(
    kind: ContentKind,
    prompt: &str,
    response_text: &str,
) -> Result<ContentItem, String> {
    #[derive(serde::Serialize)]
    struct CreateContentRequest {
        #[serde(rename = "type")]
        kind: ContentKind,
        data: BodyDto,
    }

    #[derive(serde::Serialize)]
    struct BodyDto {
        prompt: String,
        response: String,
    }

    let api_base = get_api_base();

    let response = authorize(Request::post(&format!("{}/content", api_base)))
        .json(&CreateContentRequest {
            kind,
            data: BodyDto {
                prompt: prompt.to_string(),
                response: response_text.to_string(),
            },
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(decode_error(response, "Could not save content").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete a content item by id
pub async fn delete_content(id: &str) -> Result<(), String> {
    let api_base = get_api_base();

    let response = authorize(Request::delete(&format!("{}/content/{}", api_base, id)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(decode_error(response, "Could not delete content").await);
    }

    Ok(())
}

/// Generate text for a prompt. The result is not persisted server-side.
pub async fn generate_content(prompt: &str, kind: ContentKind) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct GenerateRequest {
        prompt: String,
        #[serde(rename = "type")]
        kind: ContentKind,
    }

    #[derive(serde::Deserialize)]
    struct GenerateResponse {
        response: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/generate", api_base))
        .json(&GenerateRequest {
            prompt: prompt.to_string(),
            kind,
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(decode_error(response, "Generation failed").await);
    }

    let result: GenerateResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.response)
}

/// Synthesize speech for a text, returning the audio URL
pub async fn request_speech(text: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct SpeechRequest {
        text: String,
    }

    #[derive(serde::Deserialize)]
    struct SpeechResponse {
        #[serde(rename = "audioUrl")]
        audio_url: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/tts", api_base))
        .json(&SpeechRequest {
            text: text.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(decode_error(response, "Speech synthesis failed").await);
    }

    let result: SpeechResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.audio_url)
}

/// Render a thumbnail for a prompt, returning the image URL
pub async fn request_thumbnail(prompt: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct ThumbnailRequest {
        prompt: String,
    }

    #[derive(serde::Deserialize)]
    struct ThumbnailResponse {
        #[serde(rename = "imageUrl")]
        image_url: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/thumbnail", api_base))
        .json(&ThumbnailRequest {
            prompt: prompt.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(decode_error(response, "Thumbnail rendering failed").await);
    }

    let result: ThumbnailResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.image_url)
}

/// Derive the health endpoint from the API base URL. Only a trailing
/// `/api` segment is swapped out, so hosts like `api.example.com` stay
/// untouched.
fn health_url(api_base: &str) -> String {
    match api_base.strip_suffix("/api") {
        Some(root) => format!("{}/health", root),
        None => format!("{}/health", api_base),
    }
}

/// Check API health
pub async fn check_health() -> Result<HealthResponse, String> {
    let health_url = health_url(&get_api_base());

    let response = Request::get(&health_url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("API is not healthy".to_string());
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_url_swaps_only_trailing_segment() {
        assert_eq!(
            health_url("https://api.example.com/api"),
            "https://api.example.com/health"
        );
        assert_eq!(
            health_url("http://localhost:5000/api"),
            "http://localhost:5000/health"
        );
    }

    #[test]
    fn test_health_url_without_api_suffix_appends() {
        assert_eq!(
            health_url("https://backend.example.com"),
            "https://backend.example.com/health"
        );
    }
}
