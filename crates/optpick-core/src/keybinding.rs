#![forbid(unsafe_code)]

//! Declarative key bindings.
//!
//! A [`KeyBinding`] names one user action and the set of equivalent key
//! presses that trigger it, together with the help text shown for it.
//! Bindings are plain data: matching an incoming [`KeyEvent`] against a
//! binding is a pure lookup with no state.
//!
//! ```
//! use optpick_core::event::{KeyCode, KeyEvent};
//! use optpick_core::keybinding::{KeyBinding, KeyPress};
//!
//! let down = KeyBinding::new([
//!     KeyPress::plain(KeyCode::Char('j')),
//!     KeyPress::plain(KeyCode::Down),
//! ])
//! .with_help("j", "down");
//!
//! assert!(down.matches(&KeyEvent::new(KeyCode::Down)));
//! ```

use crate::event::{KeyCode, KeyEvent, Modifiers};

/// A single trigger: a key code plus the exact modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers that must be held, exactly.
    pub modifiers: Modifiers,
}

impl KeyPress {
    /// A press with no modifiers.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
        }
    }

    /// A press with the Ctrl modifier.
    #[must_use]
    pub const fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::CTRL,
        }
    }

    /// A press with the Alt modifier.
    #[must_use]
    pub const fn alt(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::ALT,
        }
    }

    /// Whether this press is the one carried by `event`.
    ///
    /// Modifiers compare exactly; the event kind is ignored (hosts that
    /// receive release events filter them before dispatch).
    #[must_use]
    pub fn is_event(&self, event: &KeyEvent) -> bool {
        self.code == event.code && self.modifiers == event.modifiers
    }
}

/// Help text for a binding: the key label and a short description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Help {
    /// Display label for the key(s), e.g. `"j"` or `"↑/k"`.
    pub key: String,
    /// Short action description, e.g. `"down"`.
    pub desc: String,
}

/// A set of equivalent key presses bound to one action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyBinding {
    presses: Vec<KeyPress>,
    help: Option<Help>,
    disabled: bool,
}

impl KeyBinding {
    /// Create a binding from its trigger presses.
    #[must_use]
    pub fn new(presses: impl IntoIterator<Item = KeyPress>) -> Self {
        Self {
            presses: presses.into_iter().collect(),
            help: None,
            disabled: false,
        }
    }

    /// Attach help text.
    #[must_use]
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Some(Help {
            key: key.into(),
            desc: desc.into(),
        });
        self
    }

    /// The trigger presses.
    #[must_use]
    pub fn presses(&self) -> &[KeyPress] {
        &self.presses
    }

    /// The help text, if any.
    #[must_use]
    pub fn help(&self) -> Option<&Help> {
        self.help.as_ref()
    }

    /// Whether the binding currently participates in matching.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }

    /// Enable or disable the binding. A disabled binding never matches.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether `event` triggers this binding.
    #[must_use]
    pub fn matches(&self, event: &KeyEvent) -> bool {
        !self.disabled && self.presses.iter().any(|press| press.is_event(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down_binding() -> KeyBinding {
        KeyBinding::new([
            KeyPress::plain(KeyCode::Char('j')),
            KeyPress::plain(KeyCode::Down),
            KeyPress::ctrl(KeyCode::Char('n')),
        ])
        .with_help("j", "down")
    }

    #[test]
    fn matches_any_equivalent_press() {
        let binding = down_binding();
        assert!(binding.matches(&KeyEvent::new(KeyCode::Char('j'))));
        assert!(binding.matches(&KeyEvent::new(KeyCode::Down)));
        assert!(
            binding.matches(&KeyEvent::new(KeyCode::Char('n')).with_modifiers(Modifiers::CTRL))
        );
    }

    #[test]
    fn modifiers_compare_exactly() {
        let binding = down_binding();
        // Plain 'n' is not ctrl+n, and ctrl+j is not plain 'j'.
        assert!(!binding.matches(&KeyEvent::new(KeyCode::Char('n'))));
        assert!(
            !binding.matches(&KeyEvent::new(KeyCode::Char('j')).with_modifiers(Modifiers::CTRL))
        );
    }

    #[test]
    fn disabled_binding_never_matches() {
        let mut binding = down_binding();
        binding.set_enabled(false);
        assert!(!binding.is_enabled());
        assert!(!binding.matches(&KeyEvent::new(KeyCode::Down)));

        binding.set_enabled(true);
        assert!(binding.matches(&KeyEvent::new(KeyCode::Down)));
    }

    #[test]
    fn default_binding_matches_nothing() {
        let binding = KeyBinding::default();
        assert!(binding.is_enabled());
        assert!(!binding.matches(&KeyEvent::new(KeyCode::Enter)));
    }

    #[test]
    fn help_round_trip() {
        let binding = down_binding();
        let help = binding.help().unwrap();
        assert_eq!(help.key, "j");
        assert_eq!(help.desc, "down");
        assert!(KeyBinding::default().help().is_none());
    }
}
