//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{AudioOverlay, Nav, Toast};
use crate::pages::{Dashboard, Generate, Scripts, Seo, Settings, Thumbnails, Titles};
use crate::state::content::{provide_content_state, use_content_state};
use crate::state::media::provide_media_state;
use crate::state::notes::provide_notes_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide the stores to all components
    provide_content_state();
    provide_notes_state();
    provide_media_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/scripts" view=Scripts />
                        <Route path="/titles" view=Titles />
                        <Route path="/thumbnails" view=Thumbnails />
                        <Route path="/seo" view=Seo />
                        <Route path="/generate" view=Generate />
                        <Route path="/settings" view=Settings />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with request status
                <Footer />

                // Narration playback overlay
                <AudioOverlay />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer component showing request status
#[component]
fn Footer() -> impl IntoView {
    let state = use_content_state();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-gray-400">
                    {move || format!("{} items in your library", state.contents.get().len())}
                </div>

                // Loading indicator
                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
