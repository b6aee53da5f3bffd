//! Thumbnail Preview Modal
//!
//! Renders a thumbnail image for a stored prompt via the generation
//! service and shows it in a modal.

use leptos::*;

use crate::api;

/// Modal that requests and displays a thumbnail for `prompt`
#[component]
pub fn ThumbnailPreview(
    #[prop(into)] prompt: String,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let (image_url, set_image_url) = create_signal(None::<String>);
    let (error, set_error) = create_signal(None::<String>);

    let request_prompt = prompt.clone();
    spawn_local(async move {
        match api::request_thumbnail(&request_prompt).await {
            Ok(url) => set_image_url.set(Some(url)),
            Err(e) => set_error.set(Some(e)),
        }
    });

    let open_in_tab = move |_| {
        if let Some(url) = image_url.get_untracked() {
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(&url, "_blank");
            }
        }
    };

    view! {
        <div class="fixed inset-0 z-50 bg-gray-900/80 flex items-center justify-center p-4">
            <div class="bg-gray-800 rounded-lg max-w-2xl w-full p-6">
                <div class="flex items-start justify-between mb-4">
                    <h2 class="text-lg font-semibold">"Thumbnail Preview"</h2>
                    <button
                        class="text-gray-400 hover:text-white"
                        on:click=move |_| on_close.call(())
                    >
                        "✕"
                    </button>
                </div>

                <p class="text-sm text-gray-400 mb-4">{prompt}</p>

                {move || match (image_url.get(), error.get()) {
                    (Some(url), _) => view! {
                        <div>
                            <img src=url.clone() alt="Thumbnail preview" class="w-full rounded-lg mb-4" />
                            <button
                                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg text-sm transition-colors"
                                on:click=open_in_tab
                            >
                                "Open in new tab"
                            </button>
                        </div>
                    }.into_view(),
                    (None, Some(e)) => view! {
                        <div class="text-red-400 py-8 text-center">{e}</div>
                    }.into_view(),
                    (None, None) => view! {
                        <div class="flex items-center justify-center py-16">
                            <div class="loading-spinner w-8 h-8" />
                        </div>
                    }.into_view(),
                }}
            </div>
        </div>
    }
}
