//! Content Library
//!
//! Persistent storage for generated content items (scripts, titles,
//! thumbnail prompts, SEO tags). Items are stored as document rows in
//! SQLite with a JSON-encoded payload, scoped per owner.
//!
//! Items are immutable once created: the only mutations are insert and
//! delete, never partial updates.

pub mod error;
pub mod library;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use library::{ContentLibrary, LibraryConfig};
pub use types::{ContentBody, ContentItem, ContentKind};
