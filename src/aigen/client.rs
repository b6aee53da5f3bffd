//! AI Generation Service Client
//!
//! HTTP client for the external generation API. Text generation is a
//! single POST; speech and thumbnail rendering return resource URLs
//! hosted by the upstream service.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::ContentKind;

/// Configuration for the generation service client
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Base URL for the generation API (e.g., "http://localhost:8090")
    pub base_url: String,
    /// API key sent as a bearer token; empty sends no auth header
    pub api_key: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Maximum retry attempts for transport-level failures
    pub max_retries: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8090".to_string(),
            api_key: String::new(),
            request_timeout_ms: 30_000,
            max_retries: 3,
        }
    }
}

/// Client for the external AI generation service
pub struct GenerationClient {
    client: Client,
    config: GenerationConfig,
}

impl GenerationClient {
    /// Create a new client with the given configuration
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(GenerationError::Request)?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Check if the generation service is reachable
    pub async fn health_check(&self) -> Result<(), GenerationError> {
        let url = format!("{}/health", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify_transport_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(GenerationError::Unavailable)
        }
    }

    /// Generate text for a prompt without persisting anything
    pub async fn generate_text(
        &self,
        prompt: &str,
        kind: ContentKind,
    ) -> Result<String, GenerationError> {
        let url = format!("{}/v1/generate", self.config.base_url);
        let body = GenerateRequest {
            prompt: prompt.to_string(),
            kind: kind.as_str().to_string(),
        };

        let response: GenerateResponse = self.send_post(&url, &body).await?;
        Ok(response.response)
    }

    /// Synthesize speech for the given text; returns an audio resource URL
    pub async fn synthesize_speech(&self, text: &str) -> Result<String, GenerationError> {
        let url = format!("{}/v1/tts", self.config.base_url);
        let body = SpeechRequest {
            text: text.to_string(),
        };

        let response: SpeechResponse = self.send_post(&url, &body).await?;
        Ok(response.audio_url)
    }

    /// Render a thumbnail image for a prompt; returns an image URL
    pub async fn render_thumbnail(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!("{}/v1/thumbnail", self.config.base_url);
        let body = ThumbnailRequest {
            prompt: prompt.to_string(),
        };

        let response: ThumbnailResponse = self.send_post(&url, &body).await?;
        Ok(response.image_url)
    }

    /// Send a POST request with retry on transport-level failures
    async fn send_post<B: Serialize, T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, GenerationError> {
        let mut last_error = GenerationError::Unavailable;

        for attempt in 0..self.config.max_retries {
            if attempt > 0 {
                // Exponential backoff: 1s, 4s, 9s...
                let delay = std::time::Duration::from_secs((attempt as u64).pow(2));
                tokio::time::sleep(delay).await;
            }

            let mut request = self.client.post(url).json(body);
            if !self.config.api_key.is_empty() {
                request = request.bearer_auth(&self.config.api_key);
            }

            match request.send().await {
                Ok(response) => {
                    if response.status().is_success() {
                        return response.json().await.map_err(GenerationError::Request);
                    } else if response.status().as_u16() == 429 {
                        // Rate limited - honor Retry-After when present
                        if let Some(retry_after) = response.headers().get("Retry-After") {
                            if let Ok(secs) = retry_after.to_str().unwrap_or("5").parse::<u64>() {
                                tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
                            }
                        }
                        last_error = GenerationError::RateLimited;
                        continue;
                    } else {
                        let status = response.status();
                        let text = response.text().await.unwrap_or_default();
                        return Err(GenerationError::ApiError {
                            status: status.as_u16(),
                            message: text,
                        });
                    }
                }
                Err(e) => {
                    last_error = classify_transport_error(e);
                    continue;
                }
            }
        }

        Err(last_error)
    }
}

fn classify_transport_error(e: reqwest::Error) -> GenerationError {
    if e.is_timeout() {
        GenerationError::Timeout
    } else if e.is_connect() {
        GenerationError::Unavailable
    } else {
        GenerationError::Request(e)
    }
}

// ============================================
// Request/Response DTOs
// ============================================

#[derive(Debug, Serialize)]
struct GenerateRequest {
    prompt: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Debug, Serialize)]
struct SpeechRequest {
    text: String,
}

#[derive(Debug, Deserialize)]
struct SpeechResponse {
    #[serde(rename = "audioUrl")]
    audio_url: String,
}

#[derive(Debug, Serialize)]
struct ThumbnailRequest {
    prompt: String,
}

#[derive(Debug, Deserialize)]
struct ThumbnailResponse {
    #[serde(rename = "imageUrl")]
    image_url: String,
}

// ============================================
// Errors
// ============================================

/// Errors that can occur when communicating with the generation service
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Generation service unavailable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Generation API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Request timeout")]
    Timeout,

    #[error("Rate limited")]
    RateLimited,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.base_url, "http://localhost:8090");
        assert!(config.api_key.is_empty());
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_generate_request_wire_shape() {
        let body = GenerateRequest {
            prompt: "topic".to_string(),
            kind: ContentKind::Seo.as_str().to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["prompt"], "topic");
        assert_eq!(json["type"], "seo");
    }

    /// Serve one canned HTTP response per accepted connection
    async fn one_shot_server(listener: tokio::net::TcpListener, responses: Vec<String>) {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        for response in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_retries_after_rate_limit() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let body = r#"{"response":"second try"}"#;
        let server = tokio::spawn(one_shot_server(
            listener,
            vec![
                "HTTP/1.1 429 Too Many Requests\r\nRetry-After: 0\r\n\
                 Content-Length: 0\r\nConnection: close\r\n\r\n"
                    .to_string(),
                format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                ),
            ],
        ));

        let client = GenerationClient::new(GenerationConfig {
            base_url: format!("http://{}", addr),
            max_retries: 3,
            ..Default::default()
        })
        .unwrap();

        let text = client
            .generate_text("topic", ContentKind::Script)
            .await
            .unwrap();
        assert_eq!(text, "second try");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_upstream_error_is_not_retried() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // A single 500 response; a retry would hang on a second accept
        let server = tokio::spawn(one_shot_server(
            listener,
            vec![
                "HTTP/1.1 500 Internal Server Error\r\n\
                 Content-Length: 4\r\nConnection: close\r\n\r\noops"
                    .to_string(),
            ],
        ));

        let client = GenerationClient::new(GenerationConfig {
            base_url: format!("http://{}", addr),
            max_retries: 3,
            ..Default::default()
        })
        .unwrap();

        let err = client
            .generate_text("topic", ContentKind::Script)
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::ApiError { status: 500, .. }));
        server.await.unwrap();
    }
}
