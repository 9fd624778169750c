#![forbid(unsafe_code)]

//! ANSI string styling: colors, attributes, and profile downgrade.

pub mod color;
pub mod style;

pub use color::{Ansi16, Color, ColorProfile, Rgb};
pub use style::{Attrs, Style};
