//! Content Browser Component
//!
//! Searchable library view for one content kind. Long result sets are
//! rendered incrementally: a sentinel element below the grid widens the
//! visible window whenever it scrolls into view.

use leptos::html::Div;
use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::content_card::ContentCard;
use crate::components::loading::CardSkeleton;
use crate::components::thumbnail_preview::ThumbnailPreview;
use crate::state::content::{self, use_content_state, ContentItem, ContentKind};
use crate::state::list::{RevealWindow, REVEAL_DELAY_MS};

/// Library browser for a single content kind
#[component]
pub fn ContentBrowser(
    kind: ContentKind,
    heading: &'static str,
    /// Offer thumbnail image previews on each card
    #[prop(default = false)]
    with_preview: bool,
) -> impl IntoView {
    let state = use_content_state();

    // Refresh the library when the page opens
    spawn_local(async move { state.fetch_user_content().await });

    let (search, set_search) = create_signal(String::new());
    let window = create_rw_signal(RevealWindow::new());

    let filtered = create_memo(move |_| {
        let term = search.get();
        state
            .contents
            .get()
            .into_iter()
            .filter(|item| item.kind == kind && content::matches_search(item, &term))
            .collect::<Vec<_>>()
    });

    let visible = move || {
        let items = filtered.get();
        let count = window.get().visible_count(items.len());
        items[..count].to_vec()
    };

    let has_hidden = move || {
        let total = filtered.get().len();
        !window.get().all_visible(total)
    };

    // Sentinel that triggers reveals when scrolled into view
    let sentinel = create_node_ref::<Div>();

    create_effect(move |_| {
        let Some(el) = sentinel.get() else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<web_sys::IntersectionObserverEntry>()
                        .map(|e| e.is_intersecting())
                        .unwrap_or(false)
                });
                if !intersecting {
                    return;
                }

                let total = filtered.get_untracked().len();
                let mut started = false;
                window.update(|w| started = w.begin_reveal(total));

                // The delay keeps the reveal visible instead of instant
                if started {
                    gloo_timers::callback::Timeout::new(REVEAL_DELAY_MS, move || {
                        window.update(|w| w.complete_reveal());
                    })
                    .forget();
                }
            },
        );

        if let Ok(observer) = web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref())
        {
            observer.observe(&el);
            on_cleanup(move || observer.disconnect());
        }
        callback.forget();
    });

    // Modal state
    let view_item = create_rw_signal(None::<ContentItem>);
    let confirm_delete = create_rw_signal(None::<String>);
    let preview_prompt = create_rw_signal(None::<String>);
    let show_create = create_rw_signal(false);

    let on_view = Callback::new(move |item: ContentItem| view_item.set(Some(item)));
    let on_delete = Callback::new(move |id: String| confirm_delete.set(Some(id)));
    let on_preview = Callback::new(move |prompt: String| preview_prompt.set(Some(prompt)));

    view! {
        <div>
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-2xl font-bold">{heading}</h1>
                <button
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg text-sm font-medium transition-colors"
                    on:click=move |_| show_create.set(true)
                >
                    "+ Add Manually"
                </button>
            </div>

            <input
                type="text"
                class="w-full bg-gray-800 border border-gray-700 rounded-lg px-4 py-2 mb-6 \
                       focus:outline-none focus:border-primary-500"
                placeholder="Search by prompt or content..."
                prop:value=search
                on:input=move |ev| {
                    set_search.set(event_target_value(&ev));
                    // A new result set starts back at the initial slice
                    window.update(|w| w.reset());
                }
            />

            {move || {
                let items = filtered.get();
                if items.is_empty() {
                    if state.loading.get() {
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                {(0..4).map(|_| view! { <CardSkeleton /> }).collect_view()}
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <div class="text-center py-12 text-gray-500">
                                {move || if search.get().trim().is_empty() {
                                    format!("No {} content yet. Generate some!", kind.label().to_lowercase())
                                } else {
                                    "Nothing matches your search.".to_string()
                                }}
                            </div>
                        }.into_view()
                    }
                } else {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <For
                                each=visible
                                key=|item| item.id.clone()
                                children=move |item| view! {
                                    <ContentCard
                                        item
                                        on_view
                                        on_delete
                                        on_preview
                                        can_preview=with_preview
                                    />
                                }
                            />
                        </div>
                    }.into_view()
                }
            }}

            // Reveal sentinel, present only while items remain hidden
            {move || has_hidden().then(|| view! {
                <div node_ref=sentinel class="py-6 text-center text-gray-500 text-sm">
                    {move || if window.get().is_pending() {
                        "Loading more..."
                    } else {
                        "Scroll for more"
                    }}
                </div>
            })}

            // View modal
            {move || view_item.get().map(|item| view! {
                <ViewModal item on_close=move |_| view_item.set(None) />
            })}

            // Delete confirmation
            {move || confirm_delete.get().map(|id| view! {
                <ConfirmDeleteModal
                    id
                    on_close=move |_| confirm_delete.set(None)
                />
            })}

            // Thumbnail preview
            {move || preview_prompt.get().map(|prompt| view! {
                <ThumbnailPreview
                    prompt
                    on_close=move |_| preview_prompt.set(None)
                />
            })}

            // Manual create modal
            {move || show_create.get().then(|| view! {
                <CreateContentModal
                    kind
                    on_close=move |_| show_create.set(false)
                />
            })}
        </div>
    }
}

#[component]
fn ViewModal(item: ContentItem, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let title = content::display_title(&item);
    let date = item.created_at.format("%B %d, %Y %H:%M").to_string();

    view! {
        <div class="fixed inset-0 z-50 bg-gray-900/80 flex items-center justify-center p-4">
            <div class="bg-gray-800 rounded-lg max-w-2xl w-full p-6 max-h-[80vh] overflow-y-auto">
                <div class="flex items-start justify-between mb-2">
                    <h2 class="text-lg font-semibold">{title}</h2>
                    <button
                        class="text-gray-400 hover:text-white"
                        on:click=move |_| on_close.call(())
                    >
                        "✕"
                    </button>
                </div>
                <p class="text-xs text-gray-500 mb-4">{item.kind.label()} " · " {date}</p>
                <pre class="text-sm text-gray-300 whitespace-pre-wrap font-sans">
                    {item.data.response.clone()}
                </pre>
            </div>
        </div>
    }
}

#[component]
fn ConfirmDeleteModal(
    #[prop(into)] id: String,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let state = use_content_state();
    let (deleting, set_deleting) = create_signal(false);

    let delete_id = id.clone();
    let on_confirm = move |_| {
        if deleting.get_untracked() {
            return;
        }
        set_deleting.set(true);
        let id = delete_id.clone();
        spawn_local(async move {
            state.delete_content(&id).await;
            set_deleting.set(false);
            on_close.call(());
        });
    };

    view! {
        <div class="fixed inset-0 z-50 bg-gray-900/80 flex items-center justify-center p-4">
            <div class="bg-gray-800 rounded-lg max-w-sm w-full p-6">
                <h2 class="text-lg font-semibold mb-2">"Delete this content?"</h2>
                <p class="text-sm text-gray-400 mb-6">
                    "This removes it from your library permanently."
                </p>
                <div class="flex justify-end space-x-3">
                    <button
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm transition-colors"
                        on:click=move |_| on_close.call(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="px-4 py-2 bg-red-600 hover:bg-red-700 rounded-lg text-sm transition-colors"
                        disabled=move || deleting.get()
                        on:click=on_confirm
                    >
                        {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CreateContentModal(kind: ContentKind, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let state = use_content_state();
    let (prompt, set_prompt) = create_signal(String::new());
    let (response, set_response) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let prompt_value = prompt.get_untracked();
        let response_value = response.get_untracked();
        if prompt_value.trim().is_empty() || response_value.trim().is_empty() {
            state.show_error("Prompt and content are both required");
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            if state
                .create_content(kind, &prompt_value, &response_value)
                .await
                .is_ok()
            {
                state.show_success("Content saved");
                on_close.call(());
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="fixed inset-0 z-50 bg-gray-900/80 flex items-center justify-center p-4">
            <div class="bg-gray-800 rounded-lg max-w-lg w-full p-6">
                <div class="flex items-start justify-between mb-4">
                    <h2 class="text-lg font-semibold">
                        "Add " {kind.label()} " Manually"
                    </h2>
                    <button
                        class="text-gray-400 hover:text-white"
                        on:click=move |_| on_close.call(())
                    >
                        "✕"
                    </button>
                </div>

                <form on:submit=on_submit>
                    <div class="mb-4">
                        <label class="block text-sm text-gray-400 mb-1">"Prompt / Topic"</label>
                        <input
                            type="text"
                            class="w-full bg-gray-900 border border-gray-700 rounded-lg px-3 py-2 \
                                   focus:outline-none focus:border-primary-500"
                            prop:value=prompt
                            on:input=move |ev| set_prompt.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="mb-6">
                        <label class="block text-sm text-gray-400 mb-1">"Content"</label>
                        <textarea
                            rows="6"
                            class="w-full bg-gray-900 border border-gray-700 rounded-lg px-3 py-2 \
                                   focus:outline-none focus:border-primary-500"
                            prop:value=response
                            on:input=move |ev| set_response.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="flex justify-end space-x-3">
                        <button
                            type="button"
                            class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm transition-colors"
                            on:click=move |_| on_close.call(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg text-sm transition-colors"
                            disabled=move || submitting.get()
                        >
                            {move || if submitting.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
