#![forbid(unsafe_code)]

//! Option picker widget: viewport state machine and rendering.
//!
//! # Architecture
//!
//! - [`OptionPicker`] — options, key map, styles, and the private
//!   `(selected, min, max)` viewport triple
//! - [`ViewStack`] — LIFO snapshots of the viewport for save/restore
//!   across navigation boundaries
//!
//! The host loop owns the widget and drives it Elm-style: each event goes
//! through [`OptionPicker::update`], which consumes the current value and
//! returns the next one. The viewport window slides one row per overflow,
//! never jumping.
//!
//! Resizing only rewrites the window's lower edge (`max`); the selection
//! is allowed to sit outside the window until the next movement drags the
//! window back over it. Rendering tolerates the inverted window this can
//! produce (it simply draws nothing).

use crate::keymap::KeyMap;
use crate::styles::Styles;
use crate::view_stack::{ViewStack, ViewState};
use optpick_core::event::Event;
use std::sync::atomic::{AtomicU64, Ordering};
use unicode_width::UnicodeWidthStr;

/// Rows reserved below the list when the height tracks the terminal.
const MARGIN_BOTTOM: usize = 5;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Next process-unique picker id. Ids start at 1 and never repeat, even
/// under concurrent construction.
fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed) + 1
}

/// A selectable, scrollable list of text options.
#[derive(Debug, Clone)]
pub struct OptionPicker {
    id: u64,

    /// The options on display, in order. Replaced wholesale by the owner
    /// between navigation sessions.
    pub options: Vec<String>,

    /// Key bindings for down/up/select.
    pub keymap: KeyMap,

    /// Visible row count. Ignored on resize while `auto_height` is set.
    pub height: usize,

    /// Derive `height` from resize events (terminal height minus a
    /// reserved margin) instead of the fixed `height` field.
    pub auto_height: bool,

    /// Cursor glyph drawn before the highlighted option.
    pub cursor: String,

    /// Style set for rendering.
    pub styles: Styles,

    selected: usize,
    min: usize,
    max: usize,
    stack: ViewStack,
}

impl OptionPicker {
    /// Create a picker with no options, default key bindings and styles,
    /// auto-height enabled, and a fresh unique id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: next_id(),
            options: Vec::new(),
            keymap: KeyMap::default(),
            height: 0,
            auto_height: true,
            cursor: String::from(">"),
            styles: Styles::default(),
            selected: 0,
            min: 0,
            max: 0,
            stack: ViewStack::new(),
        }
    }

    /// This instance's process-unique id.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Index of the highlighted option. Meaningless while `options` is
    /// empty.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Label of the highlighted option, if any.
    #[must_use]
    pub fn selected_option(&self) -> Option<&str> {
        self.options.get(self.selected).map(String::as_str)
    }

    /// The inclusive window bounds `(min, max)` currently rendered.
    #[must_use]
    pub fn viewport(&self) -> (usize, usize) {
        (self.min, self.max)
    }

    /// Process one host event, producing the next widget state.
    ///
    /// Resize events rewrite the visible height (when `auto_height` is
    /// set) and the window's lower edge; key events matching the down/up
    /// bindings move the cursor. Everything else passes through
    /// untouched.
    #[must_use]
    pub fn update(mut self, event: &Event) -> Self {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("picker_update", id = self.id).entered();

        match event {
            Event::Resize { height, .. } => {
                if self.auto_height {
                    self.height = usize::from(*height).saturating_sub(MARGIN_BOTTOM);
                }
                // The selection is reconciled lazily, on the next move.
                self.max = self.height.saturating_sub(1);
            }
            Event::Key(key) => {
                if self.keymap.down.matches(key) {
                    self.move_down();
                } else if self.keymap.up.matches(key) {
                    self.move_up();
                }
            }
            Event::Focus(_) => {}
        }
        self
    }

    /// Fix the visible row count and rewrite the window's lower edge.
    ///
    /// Hosts that manage layout themselves call this instead of feeding
    /// resize events; `auto_height` is left untouched.
    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        self.max = height.saturating_sub(1);
    }

    /// Move the cursor down one option, sliding the window one row when
    /// the cursor passes its lower edge. No-op at the last option and on
    /// an empty list.
    pub fn move_down(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = (self.selected + 1).min(self.options.len() - 1);
        if self.selected > self.max {
            self.min += 1;
            self.max += 1;
        }
    }

    /// Move the cursor up one option, sliding the window one row when the
    /// cursor passes its upper edge. No-op at the first option and on an
    /// empty list.
    pub fn move_up(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = self.selected.saturating_sub(1);
        if self.selected < self.min {
            self.min = self.min.saturating_sub(1);
            self.max = self.max.saturating_sub(1);
        }
    }

    /// The `(index, label)` pairs currently in the window, ascending.
    ///
    /// Recomputed fresh from the live state on every call. Empty while
    /// the window is inverted (`max < min`, possible transiently after a
    /// shrinking resize).
    pub fn visible_rows(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        let end = match self.options.len().checked_sub(1) {
            Some(last) => self.max.min(last),
            None => 0,
        };
        (self.min..=end)
            .filter_map(|index| self.options.get(index).map(|option| (index, option.as_str())))
    }

    /// Render the visible window as a newline-terminated text block.
    ///
    /// The highlighted row draws the cursor glyph and the selected style;
    /// other rows are padded by the glyph's display width so the labels
    /// align. An empty option list renders the placeholder style alone.
    #[must_use]
    pub fn view(&self) -> String {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "picker_view",
            id = self.id,
            options = self.options.len()
        )
        .entered();

        if self.options.is_empty() {
            return self.styles.empty_list.to_string();
        }

        let pad = " ".repeat(self.cursor.as_str().width());
        let mut out = String::new();
        for (index, option) in self.visible_rows() {
            if index == self.selected {
                out.push_str(&self.styles.cursor.render(&self.cursor));
                out.push_str(&self.styles.selected.render(&format!(" {option}")));
            } else {
                out.push_str(&pad);
                out.push(' ');
                out.push_str(&self.styles.option.render(option));
            }
            out.push('\n');
        }
        out
    }

    /// Whether `event` confirms the highlighted option.
    ///
    /// Returns the confirmed label only when the option list is non-empty
    /// and the event is a key event matching the select binding. Pure
    /// query: the viewport is not touched.
    #[must_use]
    pub fn did_select(&self, event: &Event) -> Option<&str> {
        if self.options.is_empty() {
            return None;
        }
        match event {
            Event::Key(key) if self.keymap.select.matches(key) => self.selected_option(),
            _ => None,
        }
    }

    /// Snapshot the current viewport onto the view stack.
    pub fn push_view(&mut self) {
        self.stack.push(ViewState {
            selected: self.selected,
            min: self.min,
            max: self.max,
        });
    }

    /// Remove and return the most recently pushed snapshot. The live
    /// viewport is not changed; apply the snapshot with
    /// [`OptionPicker::restore_view`].
    ///
    /// # Panics
    ///
    /// Panics when no snapshot is on the stack; see [`ViewStack::pop`].
    pub fn pop_view(&mut self) -> ViewState {
        self.stack.pop()
    }

    /// Number of snapshots on the view stack.
    #[must_use]
    pub fn view_depth(&self) -> usize {
        self.stack.len()
    }

    /// Apply a snapshot back onto the live viewport.
    pub fn restore_view(&mut self, view: ViewState) {
        self.selected = view.selected;
        self.min = view.min;
        self.max = view.max;
    }
}

impl Default for OptionPicker {
    fn default() -> Self {
        Self::new()
    }
}
