//! Hex color parsing, interpolation and XML escaping

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ColorError;

/// An 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as an SVG `rgb(r,g,b)` paint value
    pub fn to_css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Parse a 3- or 6-digit hex color, with or without a leading `#`.
///
/// The 3-digit form duplicates each nibble (`fff` -> `ffffff`). Anything else,
/// including non-hex digits, is rejected rather than truncated.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let invalid = || ColorError::InvalidColor(hex.to_string());

    let nibbles: Vec<u8> = digits
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()
        .ok_or_else(invalid)?;

    match nibbles.as_slice() {
        [r, g, b] => Ok(Rgb::new(r * 17, g * 17, b * 17)),
        [r1, r2, g1, g2, b1, b2] => Ok(Rgb::new(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2)),
        _ => Err(invalid()),
    }
}

/// Linear interpolation per channel, rounded to the nearest integer.
///
/// `t` is clamped to `[0, 1]`; `t = 0` yields `c1`, `t = 1` yields `c2`.
pub fn lerp_color(c1: Rgb, c2: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| -> u8 {
        let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
        v.round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(channel(c1.r, c2.r), channel(c1.g, c2.g), channel(c1.b, c2.b))
}

/// Escape special XML characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// A validated hex color, stored in its expanded `#rrggbb` form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct HexColor(Rgb);

impl HexColor {
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self(rgb)
    }

    pub fn rgb(self) -> Rgb {
        self.0
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s).map(HexColor)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}
