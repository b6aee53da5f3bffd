//! Settings Page
//!
//! API endpoint configuration and session management.

use leptos::*;

use crate::api;
use crate::state::content::use_content_state;

/// Settings page
#[component]
pub fn Settings() -> impl IntoView {
    let state = use_content_state();

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (session, set_session) = create_signal(api::get_session_token().unwrap_or_default());
    let (health, set_health) = create_signal(None::<Result<String, String>>);
    let (testing, set_testing) = create_signal(false);

    let on_save_url = move |_| {
        api::set_api_base(api_url.get_untracked().trim());
        state.show_success("API URL saved");
    };

    let on_test = move |_| {
        if testing.get_untracked() {
            return;
        }
        set_testing.set(true);
        set_health.set(None);
        spawn_local(async move {
            let result = api::check_health().await.map(|h| {
                format!(
                    "{} (up {}s, {} items stored, generation {})",
                    h.status,
                    h.uptime_seconds,
                    h.content_items,
                    if h.generation_enabled { "on" } else { "off" },
                )
            });
            set_health.set(Some(result));
            set_testing.set(false);
        });
    };

    let on_save_session = move |_| {
        let token = session.get_untracked();
        if token.trim().is_empty() {
            state.show_error("Session token cannot be empty");
            return;
        }
        api::set_session_token(&token);
        state.show_success("Session saved");
    };

    let on_sign_out = move |_| {
        api::clear_session_token();
        set_session.set(String::new());
        state.contents.set(Vec::new());
        state.show_success("Signed out");
    };

    view! {
        <div class="max-w-xl mx-auto">
            <h1 class="text-2xl font-bold mb-6">"Settings"</h1>

            <div class="bg-gray-800 rounded-lg p-6 mb-6">
                <h2 class="text-lg font-semibold mb-4">"API Connection"</h2>
                <label class="block text-sm text-gray-400 mb-1">"API base URL"</label>
                <input
                    type="text"
                    class="w-full bg-gray-900 border border-gray-700 rounded-lg px-3 py-2 mb-4 \
                           focus:outline-none focus:border-primary-500"
                    prop:value=api_url
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                />
                <div class="flex space-x-3">
                    <button
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg text-sm transition-colors"
                        on:click=on_save_url
                    >
                        "Save"
                    </button>
                    <button
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm transition-colors"
                        disabled=move || testing.get()
                        on:click=on_test
                    >
                        {move || if testing.get() { "Testing..." } else { "Test Connection" }}
                    </button>
                </div>

                {move || health.get().map(|result| match result {
                    Ok(msg) => view! {
                        <p class="mt-4 text-sm text-green-400">{msg}</p>
                    }.into_view(),
                    Err(e) => view! {
                        <p class="mt-4 text-sm text-red-400">{e}</p>
                    }.into_view(),
                })}
            </div>

            <div class="bg-gray-800 rounded-lg p-6">
                <h2 class="text-lg font-semibold mb-4">"Session"</h2>
                <p class="text-sm text-gray-400 mb-4">
                    "Your session token identifies your content library to the server."
                </p>
                <label class="block text-sm text-gray-400 mb-1">"Session token"</label>
                <input
                    type="password"
                    class="w-full bg-gray-900 border border-gray-700 rounded-lg px-3 py-2 mb-4 \
                           focus:outline-none focus:border-primary-500"
                    prop:value=session
                    on:input=move |ev| set_session.set(event_target_value(&ev))
                />
                <div class="flex space-x-3">
                    <button
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg text-sm transition-colors"
                        on:click=on_save_session
                    >
                        "Save Session"
                    </button>
                    <button
                        class="px-4 py-2 bg-red-600/80 hover:bg-red-600 rounded-lg text-sm transition-colors"
                        on:click=on_sign_out
                    >
                        "Sign Out"
                    </button>
                </div>
            </div>
        </div>
    }
}
