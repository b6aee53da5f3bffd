//! Content Card Component
//!
//! A single content item in the library grid, with copy, export,
//! narration and delete actions.

use leptos::*;

use crate::api;
use crate::components::download::save_markdown;
use crate::state::content::{display_title, use_content_state, ContentItem};
use crate::state::media::use_media_state;

/// Card for one stored content item
#[component]
pub fn ContentCard(
    item: ContentItem,
    #[prop(into)] on_view: Callback<ContentItem>,
    #[prop(into)] on_delete: Callback<String>,
    /// Opens the image preview; shown only for thumbnail prompts
    #[prop(into)] on_preview: Callback<String>,
    #[prop(default = false)] can_preview: bool,
) -> impl IntoView {
    let state = use_content_state();
    let media = use_media_state();

    let (copied, set_copied) = create_signal(false);
    let (tts_loading, set_tts_loading) = create_signal(false);

    let title = display_title(&item);
    let preview = truncate_preview(&item.data.response, 160);
    let date = item.created_at.format("%b %d, %Y").to_string();

    let copy_item = item.clone();
    let on_copy = move |_| {
        copy_to_clipboard(&copy_item.data.response);
        set_copied.set(true);
        gloo_timers::callback::Timeout::new(2000, move || set_copied.set(false)).forget();
    };

    let export_item = item.clone();
    let on_export = move |_| {
        if let Err(e) = save_markdown(&display_title(&export_item), &export_item.data.response) {
            state.show_error(&e);
        }
    };

    let listen_item = item.clone();
    let on_listen = move |_| {
        if tts_loading.get_untracked() {
            return;
        }
        let item_id = listen_item.id.clone();
        let text = listen_item.data.response.clone();
        set_tts_loading.set(true);
        spawn_local(async move {
            match api::request_speech(&text).await {
                Ok(audio_url) => {
                    if let Err(e) = media.play(&item_id, &audio_url) {
                        state.show_error(&e);
                    }
                }
                Err(e) => state.show_error(&e),
            }
            set_tts_loading.set(false);
        });
    };

    let view_item = item.clone();
    let delete_id = item.id.clone();
    let preview_prompt = item.data.prompt.clone();
    let kind = item.kind;

    view! {
        <div class="bg-gray-800 rounded-lg p-4 hover:bg-gray-750 transition-colors flex flex-col">
            <div class="flex items-start justify-between mb-2">
                <div>
                    <h3 class="font-semibold text-white">{title}</h3>
                    <p class="text-xs text-gray-500">{date}</p>
                </div>
                <span class="text-xs px-2 py-1 bg-gray-700 rounded text-gray-300">
                    {kind.label()}
                </span>
            </div>

            <p class="text-sm text-gray-400 flex-1 whitespace-pre-line">{preview}</p>

            <div class="flex items-center space-x-2 mt-4">
                <button
                    class="px-3 py-1 text-sm bg-gray-700 hover:bg-gray-600 rounded transition-colors"
                    on:click=move |_| on_view.call(view_item.clone())
                >
                    "View"
                </button>
                <button
                    class="px-3 py-1 text-sm bg-gray-700 hover:bg-gray-600 rounded transition-colors"
                    on:click=on_copy
                >
                    {move || if copied.get() { "Copied!" } else { "Copy" }}
                </button>
                <button
                    class="px-3 py-1 text-sm bg-gray-700 hover:bg-gray-600 rounded transition-colors"
                    on:click=on_export
                >
                    "Export"
                </button>
                <button
                    class="px-3 py-1 text-sm bg-gray-700 hover:bg-gray-600 rounded transition-colors"
                    disabled=move || tts_loading.get()
                    on:click=on_listen
                >
                    {move || if tts_loading.get() { "..." } else { "Listen" }}
                </button>
                {can_preview.then(|| view! {
                    <button
                        class="px-3 py-1 text-sm bg-primary-700 hover:bg-primary-600 rounded transition-colors"
                        on:click=move |_| on_preview.call(preview_prompt.clone())
                    >
                        "Preview"
                    </button>
                })}
                <button
                    class="px-3 py-1 text-sm text-red-400 hover:bg-red-900/40 rounded transition-colors ml-auto"
                    on:click=move |_| on_delete.call(delete_id.clone())
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}

/// Copy text to the system clipboard (fire and forget)
fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::spawn_local(async move {
            let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
        });
    }
}

/// First `max_chars` characters of `text`, with an ellipsis when cut
fn truncate_preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{}…", truncated.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_preview_short_text_untouched() {
        assert_eq!(truncate_preview("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_preview_cuts_on_char_boundary() {
        let text = "héllo wörld, this is a longer line";
        let preview = truncate_preview(text, 12);
        assert!(preview.ends_with('…'));
        assert!(preview.chars().count() <= 13);
    }
}
