//! Thumbnails Page

use leptos::*;

use crate::components::ContentBrowser;
use crate::state::content::ContentKind;

/// Library view for thumbnail prompts, with image previews
#[component]
pub fn Thumbnails() -> impl IntoView {
    view! {
        <ContentBrowser
            kind=ContentKind::ThumbnailPrompt
            heading="Your Thumbnail Prompts"
            with_preview=true
        />
    }
}
