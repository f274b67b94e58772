//! sRGB colors per [CSS 2.1 § 4.3.6 Colors](https://www.w3.org/TR/CSS2/syndata.html#color-units).

use core::fmt;

use serde::{Deserialize, Serialize};

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

/// "The list of keyword color names is: aqua, black, blue, fuchsia, gray,
/// green, lime, maroon, navy, olive, orange, purple, red, silver, teal,
/// white, and yellow."
const NAMED_COLORS: [(&str, Rgb); 17] = [
    ("aqua", Rgb::new(0, 255, 255)),
    ("black", Rgb::new(0, 0, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("fuchsia", Rgb::new(255, 0, 255)),
    ("gray", Rgb::new(128, 128, 128)),
    ("green", Rgb::new(0, 128, 0)),
    ("lime", Rgb::new(0, 255, 0)),
    ("maroon", Rgb::new(128, 0, 0)),
    ("navy", Rgb::new(0, 0, 128)),
    ("olive", Rgb::new(128, 128, 0)),
    ("orange", Rgb::new(255, 165, 0)),
    ("purple", Rgb::new(128, 0, 128)),
    ("red", Rgb::new(255, 0, 0)),
    ("silver", Rgb::new(192, 192, 192)),
    ("teal", Rgb::new(0, 128, 128)),
    ("white", Rgb::new(255, 255, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
];

impl Rgb {
    /// Black (#000000)
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White (#ffffff)
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Build a color from its channels.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// `#rgb` or `#rrggbb`, with or without the leading `#`.
    ///
    /// "The three-digit RGB notation (#rgb) is converted into six-digit form
    /// (#rrggbb) by replicating digits, not by adding zeros."
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => Some(Self::new(
                channel(&hex[0..1].repeat(2))?,
                channel(&hex[1..2].repeat(2))?,
                channel(&hex[2..3].repeat(2))?,
            )),
            6 => Some(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => None,
        }
    }

    /// Look up one of the CSS2 color keywords (case-insensitive).
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(keyword, _)| keyword.eq_ignore_ascii_case(name))
            .map(|&(_, rgb)| rgb)
    }

    /// Clamp a functional-notation channel to `0..=255`.
    ///
    /// "Values outside the device gamut should be clipped."
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamp_channel(value: f64, is_percentage: bool) -> u8 {
        let scaled = if is_percentage {
            value * 255.0 / 100.0
        } else {
            value
        };
        scaled.round().clamp(0.0, 255.0) as u8
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms() {
        assert_eq!(Rgb::from_hex("#f00"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(Rgb::from_hex("0080ff"), Some(Rgb::new(0, 128, 255)));
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#ggg"), None);
    }

    #[test]
    fn test_named_colors_are_case_insensitive() {
        assert_eq!(Rgb::from_named("Orange"), Some(Rgb::new(255, 165, 0)));
        assert_eq!(Rgb::from_named("rebeccapurple"), None);
    }

    #[test]
    fn test_channel_clamping() {
        assert_eq!(Rgb::clamp_channel(300.0, false), 255);
        assert_eq!(Rgb::clamp_channel(-5.0, false), 0);
        assert_eq!(Rgb::clamp_channel(50.0, true), 128);
    }
}
