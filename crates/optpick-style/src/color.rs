#![forbid(unsafe_code)]

//! Color types, profiles, and downgrade utilities.

/// Terminal color profile used for downgrade decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorProfile {
    /// No color output.
    Mono,
    /// Standard 16 ANSI colors.
    Ansi16,
    /// Extended 256-color palette.
    Ansi256,
    /// Full 24-bit RGB color.
    TrueColor,
}

impl ColorProfile {
    /// Choose the best available profile from detection flags.
    ///
    /// `no_color` should reflect explicit user intent (e.g. NO_COLOR).
    #[must_use]
    pub const fn from_flags(true_color: bool, colors_256: bool, no_color: bool) -> Self {
        if no_color {
            Self::Mono
        } else if true_color {
            Self::TrueColor
        } else if colors_256 {
            Self::Ansi256
        } else {
            Self::Ansi16
        }
    }

    /// Check if this profile supports 24-bit true color.
    #[must_use]
    pub const fn supports_true_color(self) -> bool {
        matches!(self, Self::TrueColor)
    }
}

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// ANSI 16-color indices (0-15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Ansi16 {
    /// Black (index 0).
    Black = 0,
    /// Red (index 1).
    Red = 1,
    /// Green (index 2).
    Green = 2,
    /// Yellow (index 3).
    Yellow = 3,
    /// Blue (index 4).
    Blue = 4,
    /// Magenta (index 5).
    Magenta = 5,
    /// Cyan (index 6).
    Cyan = 6,
    /// White (index 7).
    White = 7,
    /// Bright black (index 8).
    BrightBlack = 8,
    /// Bright red (index 9).
    BrightRed = 9,
    /// Bright green (index 10).
    BrightGreen = 10,
    /// Bright yellow (index 11).
    BrightYellow = 11,
    /// Bright blue (index 12).
    BrightBlue = 12,
    /// Bright magenta (index 13).
    BrightMagenta = 13,
    /// Bright cyan (index 14).
    BrightCyan = 14,
    /// Bright white (index 15).
    BrightWhite = 15,
}

impl Ansi16 {
    const ALL: [Self; 16] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::BrightBlack,
        Self::BrightRed,
        Self::BrightGreen,
        Self::BrightYellow,
        Self::BrightBlue,
        Self::BrightMagenta,
        Self::BrightCyan,
        Self::BrightWhite,
    ];

    /// Return the raw ANSI index (0–15).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Convert a `u8` index to an `Ansi16` variant, returning `None` if out of range.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Black),
            1 => Some(Self::Red),
            2 => Some(Self::Green),
            3 => Some(Self::Yellow),
            4 => Some(Self::Blue),
            5 => Some(Self::Magenta),
            6 => Some(Self::Cyan),
            7 => Some(Self::White),
            8 => Some(Self::BrightBlack),
            9 => Some(Self::BrightRed),
            10 => Some(Self::BrightGreen),
            11 => Some(Self::BrightYellow),
            12 => Some(Self::BrightBlue),
            13 => Some(Self::BrightMagenta),
            14 => Some(Self::BrightCyan),
            15 => Some(Self::BrightWhite),
            _ => None,
        }
    }

    /// The nominal xterm RGB value of this index.
    #[must_use]
    const fn rgb(self) -> Rgb {
        match self {
            Self::Black => Rgb::new(0, 0, 0),
            Self::Red => Rgb::new(205, 0, 0),
            Self::Green => Rgb::new(0, 205, 0),
            Self::Yellow => Rgb::new(205, 205, 0),
            Self::Blue => Rgb::new(0, 0, 238),
            Self::Magenta => Rgb::new(205, 0, 205),
            Self::Cyan => Rgb::new(0, 205, 205),
            Self::White => Rgb::new(229, 229, 229),
            Self::BrightBlack => Rgb::new(127, 127, 127),
            Self::BrightRed => Rgb::new(255, 0, 0),
            Self::BrightGreen => Rgb::new(0, 255, 0),
            Self::BrightYellow => Rgb::new(255, 255, 0),
            Self::BrightBlue => Rgb::new(92, 92, 255),
            Self::BrightMagenta => Rgb::new(255, 0, 255),
            Self::BrightCyan => Rgb::new(0, 255, 255),
            Self::BrightWhite => Rgb::new(255, 255, 255),
        }
    }
}

/// A color value at varying fidelity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// True-color RGB value.
    Rgb(Rgb),
    /// 256-color palette index.
    Ansi256(u8),
    /// Standard 16-color ANSI value.
    Ansi16(Ansi16),
}

impl Color {
    /// Create a true-color RGB value.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }

    /// Convert this color to an RGB triplet regardless of its fidelity level.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        match self {
            Self::Rgb(rgb) => rgb,
            Self::Ansi256(idx) => ansi256_to_rgb(idx),
            Self::Ansi16(color) => color.rgb(),
        }
    }

    /// Downgrade this color to fit the given color profile.
    ///
    /// Returns `None` under [`ColorProfile::Mono`]: a monochrome profile
    /// carries no color at all.
    #[must_use]
    pub fn downgrade(self, profile: ColorProfile) -> Option<Self> {
        match profile {
            ColorProfile::TrueColor => Some(self),
            ColorProfile::Ansi256 => match self {
                Self::Rgb(rgb) => Some(Self::Ansi256(rgb_to_256(rgb))),
                _ => Some(self),
            },
            ColorProfile::Ansi16 => match self {
                Self::Rgb(rgb) => Some(Self::Ansi16(rgb_to_ansi16(rgb))),
                Self::Ansi256(idx) => Some(Self::Ansi16(rgb_to_ansi16(ansi256_to_rgb(idx)))),
                Self::Ansi16(_) => Some(self),
            },
            ColorProfile::Mono => None,
        }
    }

    /// SGR parameter string selecting this color on the foreground or
    /// background layer, without the CSI framing.
    #[must_use]
    pub fn sgr_params(self, background: bool) -> String {
        match self {
            Self::Rgb(rgb) => {
                let layer = if background { 48 } else { 38 };
                format!("{layer};2;{};{};{}", rgb.r, rgb.g, rgb.b)
            }
            Self::Ansi256(idx) => {
                let layer = if background { 48 } else { 38 };
                format!("{layer};5;{idx}")
            }
            Self::Ansi16(color) => {
                let idx = color.as_u8();
                let base = match (background, idx < 8) {
                    (false, true) => 30 + idx,
                    (false, false) => 90 + idx - 8,
                    (true, true) => 40 + idx,
                    (true, false) => 100 + idx - 8,
                };
                format!("{base}")
            }
        }
    }
}

/// Quantize an RGB value onto the xterm 256-color palette.
///
/// Picks the closer of the 6x6x6 color cube and the grayscale ramp.
fn rgb_to_256(rgb: Rgb) -> u8 {
    const fn cube_index(c: u8) -> u8 {
        if c < 48 {
            0
        } else if c < 115 {
            1
        } else {
            ((c as u16 - 35) / 40) as u8
        }
    }
    const fn cube_value(i: u8) -> u8 {
        if i == 0 { 0 } else { 55 + 40 * i }
    }

    let (ir, ig, ib) = (cube_index(rgb.r), cube_index(rgb.g), cube_index(rgb.b));
    let cube = Rgb::new(cube_value(ir), cube_value(ig), cube_value(ib));

    let average = (u16::from(rgb.r) + u16::from(rgb.g) + u16::from(rgb.b)) / 3;
    let gray_index = if average > 238 {
        23
    } else {
        (average.saturating_sub(3) / 10) as u8
    };
    let gray_level = 8 + 10 * gray_index;
    let gray = Rgb::new(gray_level, gray_level, gray_level);

    if distance_sq(rgb, gray) <= distance_sq(rgb, cube) {
        232 + gray_index
    } else {
        16 + 36 * ir + 6 * ig + ib
    }
}

/// Nearest of the 16 basic ANSI colors by squared RGB distance.
fn rgb_to_ansi16(rgb: Rgb) -> Ansi16 {
    let mut best = Ansi16::Black;
    let mut best_dist = u32::MAX;
    for candidate in Ansi16::ALL {
        let dist = distance_sq(rgb, candidate.rgb());
        if dist < best_dist {
            best = candidate;
            best_dist = dist;
        }
    }
    best
}

/// The nominal RGB value of an xterm 256-palette index.
fn ansi256_to_rgb(idx: u8) -> Rgb {
    match idx {
        0..=15 => match Ansi16::from_u8(idx) {
            Some(color) => color.rgb(),
            None => Rgb::new(0, 0, 0),
        },
        16..=231 => {
            let value = |i: u8| if i == 0 { 0 } else { 55 + 40 * i };
            let offset = idx - 16;
            Rgb::new(value(offset / 36), value(offset / 6 % 6), value(offset % 6))
        }
        232..=255 => {
            let level = 8 + 10 * (idx - 232);
            Rgb::new(level, level, level)
        }
    }
}

fn distance_sq(a: Rgb, b: Rgb) -> u32 {
    let dr = i32::from(a.r) - i32::from(b.r);
    let dg = i32::from(a.g) - i32::from(b.g);
    let db = i32::from(a.b) - i32::from(b.b);
    (dr * dr + dg * dg + db * db) as u32
}
