//! Dashboard Page
//!
//! Landing page with per-kind library counts, the idea board and a
//! recent-activity feed.

use leptos::*;
use leptos_router::A;

use crate::state::content::{self, use_content_state, ContentKind};
use crate::state::notes::use_notes_state;

/// Main dashboard page
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_content_state();

    // Refresh the library so the counts and feed are current
    spawn_local(async move { state.fetch_user_content().await });

    view! {
        <div>
            <h1 class="text-2xl font-bold mb-6">"Dashboard"</h1>

            // Per-kind summary cards
            <div class="grid grid-cols-2 lg:grid-cols-4 gap-4 mb-8">
                <SummaryCard kind=ContentKind::Script href="/scripts" />
                <SummaryCard kind=ContentKind::Title href="/titles" />
                <SummaryCard kind=ContentKind::ThumbnailPrompt href="/thumbnails" />
                <SummaryCard kind=ContentKind::Seo href="/seo" />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <IdeaBoard />
                <RecentActivity />
            </div>
        </div>
    }
}

#[component]
fn SummaryCard(kind: ContentKind, href: &'static str) -> impl IntoView {
    let state = use_content_state();

    view! {
        <A href=href class="bg-gray-800 rounded-lg p-4 hover:bg-gray-750 transition-colors block">
            <p class="text-sm text-gray-400">{kind.label()}</p>
            <p class="text-3xl font-bold text-white">
                {move || content::count_of_kind(&state.contents.get(), kind)}
            </p>
        </A>
    }
}

/// Idea board with inline editing and drag-and-drop reordering
#[component]
fn IdeaBoard() -> impl IntoView {
    let notes_state = use_notes_state();

    let (new_note, set_new_note) = create_signal(String::new());
    let (editing, set_editing) = create_signal(None::<usize>);
    let (edit_text, set_edit_text) = create_signal(String::new());
    // Index the current drag started from
    let (drag_from, set_drag_from) = create_signal(None::<usize>);

    let on_add = move |_| {
        notes_state.add_note(&new_note.get_untracked());
        set_new_note.set(String::new());
    };

    view! {
        <div class="bg-gray-800 rounded-lg p-6">
            <h2 class="text-lg font-semibold mb-4">"Idea Board"</h2>

            <div class="space-y-2 mb-4">
                <For
                    each={move || notes_state.notes.get().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(index, note)| (*index, note.clone())
                    children=move |(index, note)| {
                        let is_editing = move || editing.get() == Some(index);

                        view! {
                            <div
                                class="flex items-center bg-gray-900 rounded-lg px-3 py-2 cursor-move"
                                draggable="true"
                                on:dragstart=move |_| set_drag_from.set(Some(index))
                                on:dragover=move |ev: ev::DragEvent| ev.prevent_default()
                                on:drop=move |ev: ev::DragEvent| {
                                    ev.prevent_default();
                                    if let Some(from) = drag_from.get_untracked() {
                                        notes_state.reorder_notes(from, index);
                                    }
                                    set_drag_from.set(None);
                                }
                            >
                                {move || if is_editing() {
                                    view! {
                                        <input
                                            type="text"
                                            class="flex-1 bg-gray-800 border border-gray-600 rounded px-2 py-1 text-sm \
                                                   focus:outline-none focus:border-primary-500"
                                            prop:value=edit_text
                                            on:input=move |ev| set_edit_text.set(event_target_value(&ev))
                                        />
                                        <button
                                            class="ml-2 text-sm text-green-400 hover:text-green-300"
                                            on:click=move |_| {
                                                notes_state.update_note(index, edit_text.get_untracked().trim());
                                                set_editing.set(None);
                                            }
                                        >
                                            "Save"
                                        </button>
                                    }.into_view()
                                } else {
                                    let edit_note = note.clone();
                                    view! {
                                        <span class="flex-1 text-sm text-gray-300">{note.clone()}</span>
                                        <button
                                            class="ml-2 text-sm text-gray-500 hover:text-white"
                                            on:click=move |_| {
                                                set_edit_text.set(edit_note.clone());
                                                set_editing.set(Some(index));
                                            }
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="ml-2 text-sm text-red-400 hover:text-red-300"
                                            on:click=move |_| notes_state.delete_note(index)
                                        >
                                            "✕"
                                        </button>
                                    }.into_view()
                                }}
                            </div>
                        }
                    }
                />
            </div>

            <div class="flex space-x-2">
                <input
                    type="text"
                    class="flex-1 bg-gray-900 border border-gray-700 rounded-lg px-3 py-2 text-sm \
                           focus:outline-none focus:border-primary-500"
                    placeholder="New idea..."
                    prop:value=new_note
                    on:input=move |ev| set_new_note.set(event_target_value(&ev))
                    on:keydown=move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            notes_state.add_note(&new_note.get_untracked());
                            set_new_note.set(String::new());
                        }
                    }
                />
                <button
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg text-sm transition-colors"
                    on:click=on_add
                >
                    "Add"
                </button>
            </div>
        </div>
    }
}

/// The five most recent content items across all kinds
#[component]
fn RecentActivity() -> impl IntoView {
    let state = use_content_state();

    view! {
        <div class="bg-gray-800 rounded-lg p-6">
            <h2 class="text-lg font-semibold mb-4">"Recent Activity"</h2>

            {move || {
                let recent = content::recent_activity(&state.contents.get(), 5);
                if recent.is_empty() {
                    view! {
                        <p class="text-sm text-gray-500">"Nothing generated yet."</p>
                    }.into_view()
                } else {
                    recent.into_iter().map(|item| {
                        let title = content::display_title(&item);
                        let date = item.created_at.format("%b %d").to_string();
                        view! {
                            <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                <div class="min-w-0">
                                    <p class="text-sm text-gray-300 truncate">{title}</p>
                                    <p class="text-xs text-gray-500">{item.kind.label()}</p>
                                </div>
                                <span class="text-xs text-gray-500 ml-4">{date}</span>
                            </div>
                        }
                    }).collect_view().into_view()
                }
            }}
        </div>
    }
}
