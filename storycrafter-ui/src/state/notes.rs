//! Idea Board
//!
//! A free-form list of idea notes, persisted to browser local storage
//! after every mutation. Notes are addressed by position; reordering
//! moves a note with a remove-then-insert splice so every other note
//! keeps its relative order.

use leptos::*;

/// Local storage key for the idea board
const STORAGE_KEY: &str = "storycrafter_idea_board";

/// Seed note shown on a first visit, before the user has saved anything
const SEED_NOTE: &str = "Try combining a trending topic with your niche";

/// Reactive idea-board store
#[derive(Clone, Copy)]
pub struct NotesState {
    pub notes: RwSignal<Vec<String>>,
}

/// Load the idea board from local storage and provide it to the tree
pub fn provide_notes_state() {
    let state = NotesState {
        notes: create_rw_signal(load_notes()),
    };
    provide_context(state);
}

/// Fetch the idea board from context
pub fn use_notes_state() -> NotesState {
    use_context::<NotesState>().expect("NotesState not found")
}

impl NotesState {
    /// Append a note. Blank notes are ignored.
    pub fn add_note(&self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.notes.update(|notes| notes.push(text.to_string()));
        self.persist();
    }

    /// Replace the note at `index`. Out-of-range indices are ignored.
    pub fn update_note(&self, index: usize, text: &str) {
        self.notes.update(|notes| {
            if let Some(note) = notes.get_mut(index) {
                *note = text.to_string();
            }
        });
        self.persist();
    }

    /// Remove the note at `index`. Out-of-range indices are ignored.
    pub fn delete_note(&self, index: usize) {
        self.notes.update(|notes| {
            remove_at(notes, index);
        });
        self.persist();
    }

    /// Move the note at `from` so it sits at `to`
    pub fn reorder_notes(&self, from: usize, to: usize) {
        self.notes.update(|notes| {
            splice_move(notes, from, to);
        });
        self.persist();
    }

    fn persist(&self) {
        let notes = self.notes.get_untracked();
        if let Some(storage) = local_storage() {
            if let Ok(json) = serde_json::to_string(&notes) {
                let _ = storage.set_item(STORAGE_KEY, &json);
            }
        }
    }
}

fn load_notes() -> Vec<String> {
    if let Some(storage) = local_storage() {
        if let Ok(Some(json)) = storage.get_item(STORAGE_KEY) {
            if let Ok(notes) = serde_json::from_str::<Vec<String>>(&json) {
                return notes;
            }
        }
    }
    vec![SEED_NOTE.to_string()]
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

// ============ Pure helpers ============

/// Remove and return the element at `index`, if it exists
pub fn remove_at<T>(items: &mut Vec<T>, index: usize) -> Option<T> {
    if index < items.len() {
        Some(items.remove(index))
    } else {
        None
    }
}

/// Move the element at `from` to position `to`, shifting everything in
/// between by one. Out-of-range positions leave the list untouched.
pub fn splice_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    let moved = items.remove(from);
    items.insert(to, moved);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Vec<String> {
        vec!["a", "b", "c", "d"].into_iter().map(String::from).collect()
    }

    #[test]
    fn test_splice_move_forward() {
        let mut notes = board();
        splice_move(&mut notes, 0, 2);
        assert_eq!(notes, vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_splice_move_backward() {
        let mut notes = board();
        splice_move(&mut notes, 3, 1);
        assert_eq!(notes, vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_splice_move_preserves_length_and_elements() {
        let mut notes = board();
        splice_move(&mut notes, 1, 3);
        assert_eq!(notes.len(), 4);
        let mut sorted = notes.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_splice_move_same_index_is_noop() {
        let mut notes = board();
        splice_move(&mut notes, 2, 2);
        assert_eq!(notes, board());
    }

    #[test]
    fn test_splice_move_out_of_range_is_noop() {
        let mut notes = board();
        splice_move(&mut notes, 9, 1);
        splice_move(&mut notes, 1, 9);
        assert_eq!(notes, board());
    }

    #[test]
    fn test_splice_move_round_trip() {
        // Moving a note and moving it back restores the original order
        let mut notes = board();
        splice_move(&mut notes, 0, 3);
        splice_move(&mut notes, 3, 0);
        assert_eq!(notes, board());
    }

    #[test]
    fn test_remove_at() {
        let mut notes = board();
        assert_eq!(remove_at(&mut notes, 1), Some("b".to_string()));
        assert_eq!(notes, vec!["a", "c", "d"]);
        assert_eq!(remove_at(&mut notes, 7), None);
        assert_eq!(notes.len(), 3);
    }
}
