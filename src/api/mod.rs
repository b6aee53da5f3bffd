//! StoryCrafter REST API
//!
//! HTTP API layer for StoryCrafter, built with Axum.
//!
//! # Endpoints
//!
//! ## Content
//! - `GET /api/content` - List the caller's content items
//! - `POST /api/content` - Create a content item
//! - `DELETE /api/content/:id` - Delete a content item
//!
//! ## Generation (proxied to the AI service)
//! - `POST /api/generate` - Generate text for a prompt (not persisted)
//! - `POST /api/tts` - Synthesize speech, returns an audio URL
//! - `POST /api/thumbnail` - Render a thumbnail, returns an image URL
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! Content routes require a bearer token; the token is an opaque owner
//! key (verification belongs to the external auth backend).
//!
//! # Example
//!
//! ```rust,ignore
//! use storycrafter::api::{serve, ApiConfig, AppState};
//! use storycrafter::store::{ContentLibrary, LibraryConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let library = Arc::new(ContentLibrary::open(&LibraryConfig::default())?);
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(library, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Content routes
        .route("/content", get(routes::content::list_content))
        .route("/content", post(routes::content::create_content))
        .route("/content/:id", delete(routes::content::delete_content))
        // Generation proxy
        .route("/generate", post(routes::generate::generate_text))
        // Media proxies
        .route("/tts", post(routes::media::synthesize_speech))
        .route("/thumbnail", post(routes::media::render_thumbnail));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("StoryCrafter API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("StoryCrafter API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ContentLibrary;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let library = Arc::new(ContentLibrary::open_in_memory().unwrap());
        let state = AppState::new(library, ApiConfig::default());
        build_router(state)
    }

    fn authed(builder: axum::http::request::Builder) -> axum::http::request::Builder {
        builder.header("Authorization", "Bearer test-user")
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["generation_enabled"], false);
    }

    #[tokio::test]
    async fn test_list_content_requires_token() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/content")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_create_then_list_shows_item_once() {
        let app = create_test_app();

        let response = app
            .clone()
            .oneshot(
                authed(Request::builder().method("POST").uri("/api/content"))
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"type":"seo","data":{"prompt":"A","response":"B"}}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["type"], "seo");
        let id = created["id"].as_str().unwrap().to_string();

        let response = app
            .oneshot(
                authed(Request::builder().uri("/api/content"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let listed = body_json(response).await;
        assert_eq!(listed["total"], 1);
        let matching = listed["items"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|i| i["id"] == id.as_str())
            .count();
        assert_eq!(matching, 1);
    }

    #[tokio::test]
    async fn test_create_with_empty_field_rejected() {
        let app = create_test_app();

        let response = app
            .oneshot(
                authed(Request::builder().method("POST").uri("/api/content"))
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"type":"script","data":{"prompt":"A","response":"  "}}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_content_isolation_between_tokens() {
        let app = create_test_app();

        let response = app
            .clone()
            .oneshot(
                authed(Request::builder().method("POST").uri("/api/content"))
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"type":"title","data":{"prompt":"A","response":"B"}}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/content")
                    .header("Authorization", "Bearer someone-else")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let listed = body_json(response).await;
        assert_eq!(listed["total"], 0);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_404() {
        let app = create_test_app();

        let response = app
            .oneshot(
                authed(
                    Request::builder()
                        .method("DELETE")
                        .uri("/api/content/no-such-id"),
                )
                .body(Body::empty())
                .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_generate_empty_prompt_rejected_before_upstream() {
        // No generator is configured: a 400 (not 503) proves validation
        // runs before the upstream client is consulted.
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/generate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"prompt":"   ","type":"script"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_without_upstream_is_503() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/generate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"prompt":"How AI will change jobs","type":"script"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_tts_empty_text_rejected() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/tts")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"text":""}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
