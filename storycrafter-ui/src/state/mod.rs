//! State Management
//!
//! Reactive stores for content, the idea board, incremental list
//! rendering and media playback.

pub mod content;
pub mod list;
pub mod media;
pub mod notes;

pub use content::{
    provide_content_state, use_content_state, ContentBody, ContentItem, ContentKind, ContentState,
};
pub use list::RevealWindow;
pub use media::{provide_media_state, use_media_state, MediaState};
pub use notes::{provide_notes_state, use_notes_state, NotesState};
