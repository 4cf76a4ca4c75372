//! 24-bit RGB color used for mesh materials.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::consts::DEFAULT_COLOR;
use crate::error::SceneError;

/// A packed `0xRRGGBB` color, the form three.js `Color::setHex` takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Color(u32);

impl Color {
    /// Build from a packed hex value. Bits above the low 24 are dropped.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0x00ff_ffff)
    }

    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    #[must_use]
    pub const fn hex(self) -> u32 {
        self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::from_hex(DEFAULT_COLOR)
    }
}

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
#[allow(clippy::cast_possible_truncation)]
fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    let digits = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()?;
    match digits.as_slice() {
        [r, g, b] => Some((r * 17, g * 17, b * 17)),
        [r1, r0, g1, g0, b1, b0] => Some((r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0)),
        _ => None,
    }
}

impl FromStr for Color {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_rgb(s)
            .map(|(r, g, b)| Self::from_rgb(r, g, b))
            .ok_or_else(|| SceneError::InvalidColor(s.to_owned()))
    }
}

/// Canonical lowercase `#rrggbb`, the value format of `<input type="color">`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
