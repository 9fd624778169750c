#![forbid(unsafe_code)]

//! A selectable, scrollable option list widget for terminal UIs.
//!
//! The widget renders a list of text options, tracks a single selection
//! cursor, and scrolls its visible window one row at a time as the cursor
//! moves past either edge. A built-in view stack snapshots and restores
//! the viewport across navigation boundaries, so one widget instance can
//! serve a whole menu hierarchy.
//!
//! The host event loop owns the widget: it feeds events to
//! [`OptionPicker::update`], composes [`OptionPicker::view`] into its
//! frame, and asks [`OptionPicker::did_select`] whether an event confirmed
//! the highlighted option.
//!
//! # Example
//! ```
//! use optpick::{Event, KeyCode, KeyEvent, OptionPicker};
//!
//! let mut picker = OptionPicker::new();
//! picker.options = vec!["a".into(), "b".into(), "c".into()];
//! picker.set_height(10);
//!
//! picker = picker.update(&Event::Key(KeyEvent::new(KeyCode::Char('j'))));
//! assert_eq!(picker.selected_option(), Some("b"));
//!
//! let enter = Event::Key(KeyEvent::new(KeyCode::Enter));
//! assert_eq!(picker.did_select(&enter), Some("b"));
//! ```

pub mod keymap;
pub mod option_picker;
pub mod styles;
pub mod view_stack;

pub use keymap::KeyMap;
pub use option_picker::OptionPicker;
pub use styles::Styles;
pub use view_stack::{ViewStack, ViewState};

pub use optpick_core::event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use optpick_core::keybinding::{KeyBinding, KeyPress};
pub use optpick_style::{Color, ColorProfile, Style};
