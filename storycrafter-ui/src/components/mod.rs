//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod audio_overlay;
pub mod content_browser;
pub mod content_card;
pub mod download;
pub mod loading;
pub mod nav;
pub mod thumbnail_preview;
pub mod toast;

pub use audio_overlay::AudioOverlay;
pub use content_browser::ContentBrowser;
pub use content_card::ContentCard;
pub use loading::CardSkeleton;
pub use nav::Nav;
pub use thumbnail_preview::ThumbnailPreview;
pub use toast::Toast;
