#![forbid(unsafe_code)]

//! Key bindings for the option picker's user actions.

use optpick_core::event::KeyCode;
use optpick_core::keybinding::{KeyBinding, KeyPress};

/// Key bindings for each user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    /// Move the cursor down one option.
    pub down: KeyBinding,
    /// Move the cursor up one option.
    pub up: KeyBinding,
    /// Confirm the highlighted option.
    pub select: KeyBinding,
}

impl Default for KeyMap {
    /// The default bindings: vi motions plus arrows, enter to select.
    fn default() -> Self {
        Self {
            down: KeyBinding::new([
                KeyPress::plain(KeyCode::Char('j')),
                KeyPress::plain(KeyCode::Down),
                KeyPress::ctrl(KeyCode::Char('n')),
            ])
            .with_help("j", "down"),
            up: KeyBinding::new([
                KeyPress::plain(KeyCode::Char('k')),
                KeyPress::plain(KeyCode::Up),
                KeyPress::ctrl(KeyCode::Char('p')),
            ])
            .with_help("k", "up"),
            select: KeyBinding::new([KeyPress::plain(KeyCode::Enter)])
                .with_help("enter", "select"),
        }
    }
}
