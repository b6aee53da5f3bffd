//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::aigen::GenerationClient;
use crate::store::ContentLibrary;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Content library for persisted artifacts
    pub library: Arc<ContentLibrary>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Client for the external AI generation service (optional)
    pub generator: Option<Arc<GenerationClient>>,
}

impl AppState {
    /// Create a new AppState without a generation service
    pub fn new(library: Arc<ContentLibrary>, config: ApiConfig) -> Self {
        Self {
            library,
            config: Arc::new(config),
            start_time: Instant::now(),
            generator: None,
        }
    }

    /// Create AppState with a generation service client
    pub fn with_generator(
        library: Arc<ContentLibrary>,
        config: ApiConfig,
        generator: Arc<GenerationClient>,
    ) -> Self {
        Self {
            library,
            config: Arc::new(config),
            start_time: Instant::now(),
            generator: Some(generator),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Check if the generation service is configured
    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Allowed CORS origins (empty means permissive)
    pub cors_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            cors_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
