//! Scripts Page

use leptos::*;

use crate::components::ContentBrowser;
use crate::state::content::ContentKind;

/// Library view for video scripts
#[component]
pub fn Scripts() -> impl IntoView {
    view! {
        <ContentBrowser kind=ContentKind::Script heading="Your Scripts" />
    }
}
