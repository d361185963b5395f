//! The fixed style-code table.
//!
//! Every code the chat client understands is listed here exactly once:
//! eight foreground colors (30-37), eight background colors (40-47),
//! bold (1) and underline (4). Nothing outside this table can be encoded.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raised when a number is not one of the registry's style codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Unknown style code: {0}. Valid codes are 1, 4, 30-37 and 40-47.")]
pub struct UnknownCodeError(pub u8);

/// Raised when a code name or number given as text does not resolve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown style '{0}'. Run 'chromatext palette' to list the available codes.")]
pub struct UnknownStyleName(pub String);

/// An sRGB color from the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb` (any case) or `rgb(r, g, b)`.
    ///
    /// Returns `None` for anything else, including named colors and
    /// short `#rgb` forms.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(hex) = value.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return None;
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            return Some(Self::new(channel(0)?, channel(2)?, channel(4)?));
        }

        let lower = value.to_ascii_lowercase();
        let inner = lower.strip_prefix("rgb(")?.strip_suffix(')')?;
        let mut parts = inner.split(',').map(|p| p.trim().parse::<u8>());
        let r = parts.next()?.ok()?;
        let g = parts.next()?.ok()?;
        let b = parts.next()?.ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(r, g, b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Which slot of a [`StyleState`](super::StyleState) a code occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Foreground,
    Background,
    Attribute,
}

/// What a style code does to the text it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Foreground(Rgb),
    Background(Rgb),
    Bold,
    Underline,
}

/// One row of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleEntry {
    pub code: StyleCode,
    pub effect: Effect,
    pub name: &'static str,
}

impl StyleEntry {
    /// Palette color, if this entry is a color.
    pub fn color(&self) -> Option<Rgb> {
        match self.effect {
            Effect::Foreground(rgb) | Effect::Background(rgb) => Some(rgb),
            Effect::Bold | Effect::Underline => None,
        }
    }
}

/// A style code from the fixed 16-color palette plus bold and underline.
///
/// The discriminant is the SGR parameter emitted for the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum StyleCode {
    Bold = 1,
    Underline = 4,
    FgDarkGray = 30,
    FgRed = 31,
    FgYellowishGreen = 32,
    FgGold = 33,
    FgLightBlue = 34,
    FgPink = 35,
    FgTeal = 36,
    FgWhite = 37,
    BgBlueishBlack = 40,
    BgRustBrown = 41,
    BgGray40 = 42,
    BgGray45 = 43,
    BgLightGray55 = 44,
    BgBlurple = 45,
    BgLightGray60 = 46,
    BgCreamWhite = 47,
}

static ENTRIES: [StyleEntry; 18] = [
    fg(StyleCode::FgDarkGray, Rgb::new(0x4f, 0x54, 0x5c), "Dark Gray (33%)"),
    fg(StyleCode::FgRed, Rgb::new(0xdc, 0x32, 0x2f), "Red"),
    fg(StyleCode::FgYellowishGreen, Rgb::new(0x85, 0x99, 0x00), "Yellowish Green"),
    fg(StyleCode::FgGold, Rgb::new(0xb5, 0x89, 0x00), "Gold"),
    fg(StyleCode::FgLightBlue, Rgb::new(0x26, 0x8b, 0xd2), "Light Blue"),
    fg(StyleCode::FgPink, Rgb::new(0xd3, 0x36, 0x82), "Pink"),
    fg(StyleCode::FgTeal, Rgb::new(0x2a, 0xa1, 0x98), "Teal"),
    fg(StyleCode::FgWhite, Rgb::new(0xff, 0xff, 0xff), "White"),
    bg(StyleCode::BgBlueishBlack, Rgb::new(0x00, 0x2b, 0x36), "Blueish Black"),
    bg(StyleCode::BgRustBrown, Rgb::new(0xcb, 0x4b, 0x16), "Rust Brown"),
    bg(StyleCode::BgGray40, Rgb::new(0x58, 0x6e, 0x75), "Gray (40%)"),
    bg(StyleCode::BgGray45, Rgb::new(0x65, 0x7b, 0x83), "Gray (45%)"),
    bg(StyleCode::BgLightGray55, Rgb::new(0x83, 0x94, 0x96), "Light Gray (55%)"),
    bg(StyleCode::BgBlurple, Rgb::new(0x6c, 0x71, 0xc4), "Blurple"),
    bg(StyleCode::BgLightGray60, Rgb::new(0x93, 0xa1, 0xa1), "Light Gray (60%)"),
    bg(StyleCode::BgCreamWhite, Rgb::new(0xfd, 0xf6, 0xe3), "Cream White"),
    StyleEntry {
        code: StyleCode::Bold,
        effect: Effect::Bold,
        name: "Bold",
    },
    StyleEntry {
        code: StyleCode::Underline,
        effect: Effect::Underline,
        name: "Underline",
    },
];

const fn fg(code: StyleCode, rgb: Rgb, name: &'static str) -> StyleEntry {
    StyleEntry {
        code,
        effect: Effect::Foreground(rgb),
        name,
    }
}

const fn bg(code: StyleCode, rgb: Rgb, name: &'static str) -> StyleEntry {
    StyleEntry {
        code,
        effect: Effect::Background(rgb),
        name,
    }
}

/// The complete registry in palette order (foregrounds, backgrounds, attributes).
pub fn entries() -> &'static [StyleEntry] {
    &ENTRIES
}

/// Look up a raw SGR number.
///
/// # Errors
/// Returns [`UnknownCodeError`] for any number outside the fixed table.
pub fn lookup(code: u8) -> Result<&'static StyleEntry, UnknownCodeError> {
    ENTRIES
        .iter()
        .find(|entry| entry.code.number() == code)
        .ok_or(UnknownCodeError(code))
}

impl StyleCode {
    /// Every code, in registry order.
    pub const ALL: [StyleCode; 18] = [
        StyleCode::FgDarkGray,
        StyleCode::FgRed,
        StyleCode::FgYellowishGreen,
        StyleCode::FgGold,
        StyleCode::FgLightBlue,
        StyleCode::FgPink,
        StyleCode::FgTeal,
        StyleCode::FgWhite,
        StyleCode::BgBlueishBlack,
        StyleCode::BgRustBrown,
        StyleCode::BgGray40,
        StyleCode::BgGray45,
        StyleCode::BgLightGray55,
        StyleCode::BgBlurple,
        StyleCode::BgLightGray60,
        StyleCode::BgCreamWhite,
        StyleCode::Bold,
        StyleCode::Underline,
    ];

    /// The SGR parameter for this code.
    pub const fn number(self) -> u8 {
        self as u8
    }

    pub fn category(self) -> Category {
        match self.number() {
            30..=37 => Category::Foreground,
            40..=47 => Category::Background,
            _ => Category::Attribute,
        }
    }

    pub fn entry(self) -> &'static StyleEntry {
        // ENTRIES is in the same order as ALL
        let index = Self::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or_default();
        &ENTRIES[index]
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Lowercase, dash-separated form of the display name (`"Gray (40%)"` -> `"gray-40"`).
    pub fn slug(self) -> String {
        let mut slug = String::new();
        for c in self.name().chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        slug.trim_end_matches('-').to_string()
    }
}

impl fmt::Display for StyleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl From<StyleCode> for u8 {
    fn from(code: StyleCode) -> Self {
        code.number()
    }
}

impl TryFrom<u8> for StyleCode {
    type Error = UnknownCodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        lookup(value).map(|entry| entry.code)
    }
}

impl FromStr for StyleCode {
    type Err = UnknownStyleName;

    /// Accepts the SGR number (`"34"`) or the slug of the display name
    /// (`"light-blue"`, `"Bold"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u8>() {
            return StyleCode::try_from(number).map_err(|_| UnknownStyleName(s.to_string()));
        }

        let wanted = trimmed.to_ascii_lowercase().replace(['_', ' '], "-");
        StyleCode::ALL
            .into_iter()
            .find(|code| code.slug() == wanted)
            .ok_or_else(|| UnknownStyleName(s.to_string()))
    }
}
