//! Media Playback State
//!
//! Tracks the single audio element allowed to play at a time. Starting
//! a new narration stops the previous one.

use leptos::*;
use wasm_bindgen_futures::JsFuture;

/// The audio element currently playing, and which item it belongs to
#[derive(Clone)]
pub struct ActiveAudio {
    pub item_id: String,
    pub element: web_sys::HtmlAudioElement,
}

/// Reactive playback store
#[derive(Clone, Copy)]
pub struct MediaState {
    pub active: RwSignal<Option<ActiveAudio>>,
}

/// Provide the playback store to the component tree
pub fn provide_media_state() {
    let state = MediaState {
        active: create_rw_signal(None),
    };
    provide_context(state);
}

/// Fetch the playback store from context
pub fn use_media_state() -> MediaState {
    use_context::<MediaState>().expect("MediaState not found")
}

impl MediaState {
    /// Start playing `url` for `item_id`, stopping any current playback
    pub fn play(&self, item_id: &str, url: &str) -> Result<(), String> {
        self.stop();

        let element = web_sys::HtmlAudioElement::new_with_src(url)
            .map_err(|_| "Could not create audio player".to_string())?;

        let promise = element
            .play()
            .map_err(|_| "Playback was blocked by the browser".to_string())?;
        // Detach the play promise; rejection already surfaces as a
        // paused element.
        wasm_bindgen_futures::spawn_local(async move {
            let _ = JsFuture::from(promise).await;
        });

        self.active.set(Some(ActiveAudio {
            item_id: item_id.to_string(),
            element,
        }));
        Ok(())
    }

    /// Stop and drop the current playback, if any
    pub fn stop(&self) {
        if let Some(active) = self.active.get_untracked() {
            let _ = active.element.pause();
        }
        self.active.set(None);
    }

    /// Whether the given item is the one currently playing
    pub fn is_playing(&self, item_id: &str) -> bool {
        self.active
            .get()
            .map(|a| a.item_id == item_id)
            .unwrap_or(false)
    }
}
