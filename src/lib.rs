//! # StoryCrafter
//!
//! Content-generation backend for video creators. Stores generated
//! artifacts (scripts, titles, thumbnail prompts, SEO tags) per user
//! and proxies an external AI service for text, speech and image
//! generation.
//!
//! ## Modules
//!
//! - [`store`]: SQLite-backed content library
//! - [`aigen`]: Client for the external AI generation service
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use storycrafter::store::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let library = ContentLibrary::open(&LibraryConfig::default())?;
//!
//!     let item = library
//!         .insert(
//!             "user-token",
//!             ContentKind::Script,
//!             ContentBody {
//!                 prompt: "How AI will change jobs".to_string(),
//!                 response: "INTRO: ...".to_string(),
//!             },
//!         )
//!         .await?;
//!
//!     println!("Stored {}", item.id);
//!     Ok(())
//! }
//! ```

pub mod aigen;
pub mod api;
pub mod config;
pub mod store;

// Re-export top-level types for convenience
pub use store::{ContentBody, ContentItem, ContentKind, ContentLibrary, LibraryConfig, StoreError, StoreResult};

pub use aigen::{GenerationClient, GenerationConfig, GenerationError};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig};
