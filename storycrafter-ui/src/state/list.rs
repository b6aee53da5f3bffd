//! Incremental List Rendering
//!
//! Long content lists start with a small visible slice and grow as the
//! reader scrolls. A sentinel element at the end of the list triggers a
//! reveal; the window widens after a short delay so the growth is
//! visible rather than instant.

/// Number of items shown before any reveal
pub const INITIAL_VISIBLE: usize = 6;

/// How many items each reveal adds
pub const REVEAL_STEP: usize = 4;

/// Delay between a reveal trigger and the window widening
pub const REVEAL_DELAY_MS: u32 = 500;

/// Visible-slice window over a filtered list.
///
/// The window only ever grows (until [`reset`](Self::reset)), and at most
/// one reveal can be in flight at a time. Triggers that arrive while a
/// reveal is pending are dropped rather than queued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealWindow {
    limit: usize,
    pending: bool,
}

impl Default for RevealWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealWindow {
    pub fn new() -> Self {
        Self {
            limit: INITIAL_VISIBLE,
            pending: false,
        }
    }

    /// Shrink back to the initial slice. Called when the filter changes,
    /// so a new result set never starts deep in the list.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// How many of `total` filtered items are currently visible
    pub fn visible_count(&self, total: usize) -> usize {
        self.limit.min(total)
    }

    /// Whether everything is already on screen
    pub fn all_visible(&self, total: usize) -> bool {
        self.limit >= total
    }

    /// Whether a reveal would do anything right now
    pub fn can_reveal(&self, total: usize) -> bool {
        !self.pending && self.limit < total
    }

    /// A reveal is waiting on its delay
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Start a reveal. Returns false (and changes nothing) if one is
    /// already pending or the list is fully visible.
    pub fn begin_reveal(&mut self, total: usize) -> bool {
        if !self.can_reveal(total) {
            return false;
        }
        self.pending = true;
        true
    }

    /// Finish the pending reveal, widening the window by one step
    pub fn complete_reveal(&mut self) {
        if self.pending {
            self.limit += REVEAL_STEP;
            self.pending = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_window_shows_six() {
        let w = RevealWindow::new();
        assert_eq!(w.visible_count(10), 6);
        assert_eq!(w.visible_count(3), 3);
    }

    #[test]
    fn test_reveal_adds_step() {
        let mut w = RevealWindow::new();
        assert!(w.begin_reveal(10));
        w.complete_reveal();
        assert_eq!(w.visible_count(10), 10);
        assert!(w.all_visible(10));
    }

    #[test]
    fn test_visible_never_exceeds_total() {
        let mut w = RevealWindow::new();
        assert!(w.begin_reveal(7));
        w.complete_reveal();
        // limit is 10 now but only 7 items exist
        assert_eq!(w.visible_count(7), 7);
    }

    #[test]
    fn test_trigger_while_pending_is_dropped() {
        let mut w = RevealWindow::new();
        assert!(w.begin_reveal(20));
        assert!(!w.begin_reveal(20));
        w.complete_reveal();
        assert_eq!(w.visible_count(20), 10);

        // A single completion happened; a second one is a no-op
        w.complete_reveal();
        assert_eq!(w.visible_count(20), 10);
    }

    #[test]
    fn test_no_reveal_when_all_visible() {
        let mut w = RevealWindow::new();
        assert!(!w.begin_reveal(6));
        assert!(!w.begin_reveal(4));
        w.complete_reveal();
        assert_eq!(w.visible_count(6), 6);
    }

    #[test]
    fn test_reset_returns_to_initial_slice() {
        let mut w = RevealWindow::new();
        w.begin_reveal(30);
        w.complete_reveal();
        w.begin_reveal(30);
        w.complete_reveal();
        assert_eq!(w.visible_count(30), 14);

        w.reset();
        assert_eq!(w.visible_count(30), 6);
        assert!(!w.is_pending());
    }

    #[test]
    fn test_reset_clears_pending_reveal() {
        let mut w = RevealWindow::new();
        w.begin_reveal(30);
        w.reset();
        assert!(!w.is_pending());
        // The stale completion from the dropped reveal must not widen
        // the fresh window
        w.complete_reveal();
        assert_eq!(w.visible_count(30), 6);
    }

    #[test]
    fn test_window_grows_monotonically() {
        let mut w = RevealWindow::new();
        let mut last = w.visible_count(100);
        for _ in 0..10 {
            w.begin_reveal(100);
            w.complete_reveal();
            let now = w.visible_count(100);
            assert!(now >= last);
            last = now;
        }
        assert_eq!(last, 6 + 10 * REVEAL_STEP);
    }
}
