#![forbid(unsafe_code)]

//! Builder-style text styling rendered to SGR-escaped strings.
//!
//! A [`Style`] is plain data: colors, attribute flags, left padding, and an
//! optional fixed content string for placeholder styles. `render` wraps a
//! string in the matching escape sequence; a style with no properties set
//! returns its input unchanged (padding aside), so unstyled text never
//! carries stray escapes.
//!
//! # Example
//! ```
//! use optpick_style::{Color, Style};
//!
//! let selected = Style::new().fg(Color::Ansi256(212)).bold();
//! assert_eq!(selected.render("pick me"), "\x1b[1;38;5;212mpick me\x1b[0m");
//! ```

use crate::color::{Color, ColorProfile};
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attrs: u8 {
        /// Bold / increased intensity.
        const BOLD = 0b0000_0001;
        /// Faint / decreased intensity.
        const FAINT = 0b0000_0010;
        /// Italic.
        const ITALIC = 0b0000_0100;
        /// Underline.
        const UNDERLINE = 0b0000_1000;
        /// Reverse video.
        const REVERSE = 0b0001_0000;
        /// Strikethrough.
        const STRIKETHROUGH = 0b0010_0000;
    }
}

/// A renderable text style.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Style {
    fg: Option<Color>,
    bg: Option<Color>,
    attrs: Attrs,
    padding_left: usize,
    content: Option<String>,
}

impl Style {
    /// Create an empty style (renders text unchanged).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground color.
    #[must_use]
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Enable bold.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.attrs |= Attrs::BOLD;
        self
    }

    /// Enable faint.
    #[must_use]
    pub fn faint(mut self) -> Self {
        self.attrs |= Attrs::FAINT;
        self
    }

    /// Enable italic.
    #[must_use]
    pub fn italic(mut self) -> Self {
        self.attrs |= Attrs::ITALIC;
        self
    }

    /// Enable underline.
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.attrs |= Attrs::UNDERLINE;
        self
    }

    /// Enable reverse video.
    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.attrs |= Attrs::REVERSE;
        self
    }

    /// Enable strikethrough.
    #[must_use]
    pub fn strikethrough(mut self) -> Self {
        self.attrs |= Attrs::STRIKETHROUGH;
        self
    }

    /// Pad rendered text on the left by `columns` spaces.
    ///
    /// Padding is emitted inside the escape sequence so background colors
    /// cover it.
    #[must_use]
    pub fn padding_left(mut self, columns: usize) -> Self {
        self.padding_left = columns;
        self
    }

    /// Fix the content this style renders when displayed directly.
    ///
    /// Used for placeholder styles whose text is part of the style
    /// definition, not supplied at render time.
    #[must_use]
    pub fn set_string(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// The foreground color, if set.
    #[must_use]
    pub fn get_fg(&self) -> Option<Color> {
        self.fg
    }

    /// The background color, if set.
    #[must_use]
    pub fn get_bg(&self) -> Option<Color> {
        self.bg
    }

    /// The attribute flags.
    #[must_use]
    pub fn get_attrs(&self) -> Attrs {
        self.attrs
    }

    /// Whether rendering will emit any escape sequence.
    #[must_use]
    pub fn is_styled(&self) -> bool {
        self.fg.is_some() || self.bg.is_some() || !self.attrs.is_empty()
    }

    /// Downgrade the style's colors to the given profile.
    ///
    /// Under [`ColorProfile::Mono`] both colors are stripped; attribute
    /// flags are kept (NO_COLOR governs color, not weight).
    #[must_use]
    pub fn downgrade(mut self, profile: ColorProfile) -> Self {
        self.fg = self.fg.and_then(|c| c.downgrade(profile));
        self.bg = self.bg.and_then(|c| c.downgrade(profile));
        self
    }

    /// Render `text` with this style applied.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        let mut padded = String::with_capacity(self.padding_left + text.len());
        for _ in 0..self.padding_left {
            padded.push(' ');
        }
        padded.push_str(text);

        if !self.is_styled() {
            return padded;
        }

        let mut params = String::new();
        for (flag, code) in [
            (Attrs::BOLD, "1"),
            (Attrs::FAINT, "2"),
            (Attrs::ITALIC, "3"),
            (Attrs::UNDERLINE, "4"),
            (Attrs::REVERSE, "7"),
            (Attrs::STRIKETHROUGH, "9"),
        ] {
            if self.attrs.contains(flag) {
                if !params.is_empty() {
                    params.push(';');
                }
                params.push_str(code);
            }
        }
        for (color, background) in [(self.fg, false), (self.bg, true)] {
            if let Some(color) = color {
                if !params.is_empty() {
                    params.push(';');
                }
                params.push_str(&color.sgr_params(background));
            }
        }

        format!("\x1b[{params}m{padded}\x1b[0m")
    }
}

impl fmt::Display for Style {
    /// Render the fixed content set via [`Style::set_string`], or nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.content {
            Some(content) => f.write_str(&self.render(content)),
            None => Ok(()),
        }
    }
}
