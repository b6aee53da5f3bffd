//! Audio Playback Overlay
//!
//! Fullscreen overlay shown while a narration is playing, with an
//! elapsed-time counter and a stop control.

use gloo_timers::callback::Interval;
use leptos::*;

use crate::state::media::{use_media_state, ActiveAudio};

/// Overlay container; renders nothing while no audio is active
#[component]
pub fn AudioOverlay() -> impl IntoView {
    let media = use_media_state();

    view! {
        {move || {
            media.active.get().map(|audio| view! {
                <PlaybackOverlay audio />
            })
        }}
    }
}

#[component]
fn PlaybackOverlay(audio: ActiveAudio) -> impl IntoView {
    let media = use_media_state();
    let (elapsed, set_elapsed) = create_signal(0.0_f64);

    let element = audio.element.clone();
    let interval = Interval::new(250, move || {
        set_elapsed.set(element.current_time());
    });
    on_cleanup(move || drop(interval));

    view! {
        <div class="fixed inset-0 z-40 bg-gray-900/90 flex flex-col items-center justify-center">
            <div class="text-6xl mb-6">"🔊"</div>
            <div class="text-2xl font-mono text-white mb-2">
                {move || format_elapsed(elapsed.get())}
            </div>
            <p class="text-gray-400 mb-8">"Playing narration..."</p>
            <button
                class="px-6 py-3 bg-red-600 hover:bg-red-700 rounded-lg font-medium transition-colors"
                on:click=move |_| media.stop()
            >
                "Stop"
            </button>
        </div>
    }
}

/// Format seconds as m:ss
fn format_elapsed(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0.0), "0:00");
        assert_eq!(format_elapsed(9.7), "0:09");
        assert_eq!(format_elapsed(75.2), "1:15");
        assert_eq!(format_elapsed(-3.0), "0:00");
    }
}
