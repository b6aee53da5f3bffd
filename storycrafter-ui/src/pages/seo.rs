//! SEO Page

use leptos::*;

use crate::components::ContentBrowser;
use crate::state::content::ContentKind;

/// Library view for SEO tag sets
#[component]
pub fn Seo() -> impl IntoView {
    view! {
        <ContentBrowser kind=ContentKind::Seo heading="Your SEO Tags" />
    }
}
