//! Generate Page
//!
//! One-form AI generation. The form walks a small state machine: idle
//! until submitted, generating while the request is in flight, then
//! either showing the result or a retryable failure message.

use leptos::*;

use crate::components::download::save_markdown;
use crate::state::content::{use_content_state, ContentKind};

/// Message shown whenever generation fails, regardless of cause
const FAILURE_MESSAGE: &str = "Generation failed. Try again.";

/// Where the generation form currently is
#[derive(Clone, Debug, PartialEq)]
enum Phase {
    Idle,
    Generating,
    Ready { kind: ContentKind, text: String },
    Failed,
}

/// Build the prompt sent to the generation service
fn build_prompt(kind: ContentKind, topic: &str) -> String {
    format!(
        "Generate a {} for a YouTube video on: {}",
        kind.label().to_lowercase(),
        topic.trim()
    )
}

/// Generation form page
#[component]
pub fn Generate() -> impl IntoView {
    let state = use_content_state();

    let (topic, set_topic) = create_signal(String::new());
    let (kind_value, set_kind_value) = create_signal("script".to_string());
    let phase = create_rw_signal(Phase::Idle);
    let (copied, set_copied) = create_signal(false);
    let (saving, set_saving) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let topic_value = topic.get_untracked();
        if topic_value.trim().is_empty() {
            state.show_error("Enter a topic first");
            return;
        }
        let Some(kind) = ContentKind::parse(&kind_value.get_untracked()) else {
            return;
        };
        if phase.get_untracked() == Phase::Generating {
            return;
        }

        phase.set(Phase::Generating);
        set_copied.set(false);

        let prompt = build_prompt(kind, &topic_value);
        spawn_local(async move {
            match state.generate_content(&prompt, kind).await {
                Ok(text) => phase.set(Phase::Ready { kind, text }),
                Err(_) => phase.set(Phase::Failed),
            }
        });
    };

    let on_copy = move |_| {
        if let Phase::Ready { text, .. } = phase.get_untracked() {
            copy_to_clipboard(&text);
            set_copied.set(true);
            gloo_timers::callback::Timeout::new(2000, move || set_copied.set(false)).forget();
        }
    };

    let on_export = move |_| {
        if let Phase::Ready { text, .. } = phase.get_untracked() {
            if let Err(e) = save_markdown(topic.get_untracked().trim(), &text) {
                state.show_error(&e);
            }
        }
    };

    let on_save = move |_| {
        let Phase::Ready { kind, text } = phase.get_untracked() else {
            return;
        };
        if saving.get_untracked() {
            return;
        }
        set_saving.set(true);
        let topic_value = topic.get_untracked();
        spawn_local(async move {
            state.save_content(kind, &topic_value, &text).await;
            set_saving.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto">
            <h1 class="text-2xl font-bold mb-6">"Generate Content"</h1>

            <form on:submit=on_submit class="bg-gray-800 rounded-lg p-6 mb-6">
                <div class="mb-4">
                    <label class="block text-sm text-gray-400 mb-1">"Video topic"</label>
                    <input
                        type="text"
                        class="w-full bg-gray-900 border border-gray-700 rounded-lg px-3 py-2 \
                               focus:outline-none focus:border-primary-500"
                        placeholder="How AI will change creative jobs"
                        prop:value=topic
                        on:input=move |ev| set_topic.set(event_target_value(&ev))
                    />
                </div>

                <div class="mb-6">
                    <label class="block text-sm text-gray-400 mb-1">"Content type"</label>
                    <select
                        class="w-full bg-gray-900 border border-gray-700 rounded-lg px-3 py-2 \
                               focus:outline-none focus:border-primary-500"
                        on:change=move |ev| set_kind_value.set(event_target_value(&ev))
                    >
                        {ContentKind::ALL.into_iter().map(|kind| view! {
                            <option
                                value=kind.as_str()
                                selected=move || kind_value.get() == kind.as_str()
                            >
                                {kind.label()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <button
                    type="submit"
                    class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg \
                           font-medium transition-colors disabled:opacity-50"
                    disabled=move || phase.get() == Phase::Generating
                >
                    {move || if phase.get() == Phase::Generating {
                        "Generating..."
                    } else {
                        "Generate"
                    }}
                </button>
            </form>

            {move || match phase.get() {
                Phase::Idle => ().into_view(),
                Phase::Generating => view! {
                    <div class="bg-gray-800 rounded-lg p-6 text-center text-gray-400">
                        <div class="loading-spinner w-8 h-8 mx-auto mb-4" />
                        "Writing your content..."
                    </div>
                }.into_view(),
                Phase::Failed => view! {
                    <div class="bg-red-900/30 border border-red-800 rounded-lg p-6 text-center text-red-300">
                        {FAILURE_MESSAGE}
                    </div>
                }.into_view(),
                Phase::Ready { kind, text } => view! {
                    <div class="bg-gray-800 rounded-lg p-6">
                        <div class="flex items-center justify-between mb-4">
                            <span class="text-xs px-2 py-1 bg-gray-700 rounded text-gray-300">
                                {kind.label()}
                            </span>
                            <div class="flex items-center space-x-2">
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
                                    class="px-3 py-1 text-sm bg-primary-600 hover:bg-primary-700 rounded transition-colors"
                                    disabled=move || saving.get()
                                    on:click=on_save
                                >
                                    {move || if saving.get() { "Saving..." } else { "Save to Library" }}
                                </button>
                            </div>
                        </div>
                        <pre class="text-sm text-gray-300 whitespace-pre-wrap font-sans">{text}</pre>
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::spawn_local(async move {
            let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt() {
        assert_eq!(
            build_prompt(ContentKind::Script, "  How AI will change jobs "),
            "Generate a script for a YouTube video on: How AI will change jobs"
        );
        assert_eq!(
            build_prompt(ContentKind::ThumbnailPrompt, "crypto"),
            "Generate a thumbnail prompt for a YouTube video on: crypto"
        );
    }

    #[test]
    fn test_failure_message_is_fixed() {
        assert_eq!(FAILURE_MESSAGE, "Generation failed. Try again.");
    }
}
