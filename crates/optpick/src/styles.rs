#![forbid(unsafe_code)]

//! Style set for the option picker.

use optpick_style::{Color, ColorProfile, Style};

/// Placeholder shown when the option list is empty.
pub const NO_OPTIONS_MESSAGE: &str = "Bummer. No Options Provided.";

/// Styles for each visual element of the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styles {
    /// Cursor glyph while the picker is inactive.
    pub disabled_cursor: Style,
    /// Cursor glyph on the highlighted row.
    pub cursor: Style,
    /// Option labels on non-highlighted rows.
    pub option: Style,
    /// The highlighted option label.
    pub selected: Style,
    /// The empty-list placeholder line.
    pub empty_list: Style,
}

impl Styles {
    /// The default palette, downgraded to the given color profile.
    ///
    /// [`ColorProfile::Mono`] strips all colors, leaving weight only.
    #[must_use]
    pub fn with_profile(profile: ColorProfile) -> Self {
        Self {
            disabled_cursor: Style::new().fg(Color::Ansi256(247)).downgrade(profile),
            cursor: Style::new().fg(Color::Ansi256(212)).downgrade(profile),
            option: Style::new(),
            selected: Style::new()
                .fg(Color::Ansi256(212))
                .bold()
                .downgrade(profile),
            empty_list: Style::new()
                .fg(Color::Ansi256(240))
                .padding_left(2)
                .set_string(NO_OPTIONS_MESSAGE)
                .downgrade(profile),
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::with_profile(ColorProfile::TrueColor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette() {
        let styles = Styles::default();
        assert_eq!(styles.cursor.get_fg(), Some(Color::Ansi256(212)));
        assert_eq!(styles.selected.get_fg(), Some(Color::Ansi256(212)));
        assert_eq!(styles.disabled_cursor.get_fg(), Some(Color::Ansi256(247)));
        assert!(!styles.option.is_styled());
    }

    #[test]
    fn placeholder_carries_fixed_content_and_padding() {
        let styles = Styles::default();
        let rendered = styles.empty_list.to_string();
        assert!(rendered.contains(NO_OPTIONS_MESSAGE));
        assert!(rendered.contains("  Bummer"));
    }

    #[test]
    fn mono_profile_strips_all_color() {
        let styles = Styles::with_profile(ColorProfile::Mono);
        assert_eq!(styles.cursor.get_fg(), None);
        assert_eq!(styles.selected.get_fg(), None);
        // Selected keeps its weight so the highlight survives NO_COLOR.
        assert_eq!(styles.selected.render("x"), "\x1b[1mx\x1b[0m");
        assert_eq!(styles.empty_list.to_string(), "  Bummer. No Options Provided.");
    }

    #[test]
    fn ansi16_profile_downgrades_palette_indices() {
        let styles = Styles::with_profile(ColorProfile::Ansi16);
        assert!(matches!(styles.cursor.get_fg(), Some(Color::Ansi16(_))));
    }
}
