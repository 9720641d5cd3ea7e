//! Open/close state machine and search field state.
//!
//! ```text
//!            activate control
//!   Closed ───────────────────▶ Open
//!     ▲                          │
//!     └──────────────────────────┘
//!      activate control | outside press | Escape | commit (single-select)
//! ```
//!
//! Every transition to `Closed` clears the search term. Entering `Open` gives
//! the search field focus when one is shown.

use unicode_segmentation::UnicodeSegmentation;

/// Whether the option panel is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenState {
    #[default]
    Closed,
    Open,
}

impl OpenState {
    /// Check if the panel is open.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Why the panel closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The control surface was activated while open.
    ControlToggled,
    /// A pointer press landed outside the control and the panel.
    OutsidePress,
    /// Escape was pressed.
    Escape,
    /// A selection was committed in single-select mode.
    SelectionCommitted,
    /// The host closed the panel programmatically.
    Programmatic,
    /// The widget was unmounted.
    Unmounted,
}

/// What a state change did, so the caller can notify listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transition {
    /// The open state flipped.
    pub open_changed: bool,
    /// The search term changed.
    pub search_changed: bool,
}

/// Interaction state owned by one dropdown instance.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    open: OpenState,
    search_term: String,
    search_focused: bool,
    /// Keyboard-highlighted row, as an index into the filtered rows.
    active_row: Option<usize>,
    /// First visible row of the option list.
    scroll_row: usize,
}

impl InteractionState {
    /// Initial state: closed, empty search.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_state(&self) -> OpenState {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_open()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_search_focused(&self) -> bool {
        self.search_focused
    }

    pub fn active_row(&self) -> Option<usize> {
        self.active_row
    }

    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    /// Open the panel. `focus_search` is the entry effect for a visible search field.
    pub fn open(&mut self, focus_search: bool) -> Transition {
        if self.is_open() {
            return Transition::default();
        }
        self.open = OpenState::Open;
        self.search_focused = focus_search;
        self.active_row = None;
        self.scroll_row = 0;
        Transition {
            open_changed: true,
            search_changed: false,
        }
    }

    /// Close the panel and reset the search field.
    pub fn close(&mut self) -> Transition {
        if !self.is_open() {
            return Transition::default();
        }
        self.open = OpenState::Closed;
        self.search_focused = false;
        self.active_row = None;
        self.scroll_row = 0;
        Transition {
            open_changed: true,
            search_changed: self.take_search(),
        }
    }

    /// Flip the open state, as a click on the control surface does.
    pub fn toggle(&mut self, focus_search: bool) -> Transition {
        if self.is_open() {
            self.close()
        } else {
            self.open(focus_search)
        }
    }

    /// Replace the search term. Returns `true` if it changed.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if self.search_term == term {
            return false;
        }
        self.search_term = term;
        self.reset_rows();
        true
    }

    /// Clear the search term. Returns `true` if it was non-empty.
    pub fn clear_search(&mut self) -> bool {
        let changed = self.take_search();
        if changed {
            self.reset_rows();
        }
        changed
    }

    /// Append typed text to the search term.
    pub fn insert_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.search_term.push_str(text);
        self.reset_rows();
        true
    }

    /// Delete the last grapheme of the search term.
    pub fn delete_backward(&mut self) -> bool {
        let Some((offset, _)) = self.search_term.grapheme_indices(true).next_back() else {
            return false;
        };
        self.search_term.truncate(offset);
        self.reset_rows();
        true
    }

    /// Give or take focus from the search field.
    pub fn set_search_focused(&mut self, focused: bool) {
        self.search_focused = focused && self.is_open();
    }

    /// Move the keyboard highlight by `delta` rows among `row_count` rows,
    /// keeping it inside a window of `visible_rows`.
    pub fn move_active_row(&mut self, delta: isize, row_count: usize, visible_rows: usize) {
        if row_count == 0 {
            self.active_row = None;
            return;
        }
        let last = row_count - 1;
        let next = match self.active_row {
            None if delta >= 0 => 0,
            None => last,
            Some(current) => current.saturating_add_signed(delta).min(last),
        };
        self.active_row = Some(next);
        self.ensure_active_visible(visible_rows.max(1));
    }

    /// Scroll the option list so `row` is the first visible row.
    ///
    /// The row is clamped so the last window still shows `visible_rows` rows.
    /// Returns `true` if the scroll position changed.
    pub fn set_scroll_row(&mut self, row: usize, row_count: usize, visible_rows: usize) -> bool {
        let max_scroll = row_count.saturating_sub(visible_rows.max(1));
        let next = row.min(max_scroll);
        if next == self.scroll_row {
            return false;
        }
        self.scroll_row = next;
        true
    }

    /// Scroll the option list by `delta` rows.
    pub fn scroll_by(&mut self, delta: isize, row_count: usize, visible_rows: usize) -> bool {
        let row = self.scroll_row.saturating_add_signed(delta);
        self.set_scroll_row(row, row_count, visible_rows)
    }

    /// Clamp the active row after the row count changed.
    pub fn clamp_active_row(&mut self, row_count: usize) {
        if let Some(row) = self.active_row
            && row >= row_count
        {
            self.active_row = row_count.checked_sub(1);
        }
    }

    fn ensure_active_visible(&mut self, visible_rows: usize) {
        let Some(row) = self.active_row else {
            return;
        };
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + visible_rows {
            self.scroll_row = row + 1 - visible_rows;
        }
    }

    fn take_search(&mut self) -> bool {
        let changed = !self.search_term.is_empty();
        self.search_term.clear();
        changed
    }

    fn reset_rows(&mut self) {
        self.active_row = None;
        self.scroll_row = 0;
    }
}
