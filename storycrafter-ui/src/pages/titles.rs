//! Titles Page

use leptos::*;

use crate::components::ContentBrowser;
use crate::state::content::ContentKind;

/// Library view for video titles
#[component]
pub fn Titles() -> impl IntoView {
    view! {
        <ContentBrowser kind=ContentKind::Title heading="Your Titles" />
    }
}
