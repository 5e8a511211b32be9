//! RGBA color value
//!
//! Colors are stored as four normalized `f32` channels. They are plain values:
//! two colors are equal when their components are equal, nothing more.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;

/// RGBA color with normalized (0.0..=1.0) sRGB channels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray with all three channels set to `value`
    pub const fn gray(value: f32) -> Self {
        Self::rgb(value, value, value)
    }

    /// Build an opaque color from a packed `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional)
    pub fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        let digits = input.trim().trim_start_matches('#');
        if digits.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(input.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| -> Result<f32, ColorParseError> {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| ColorParseError::InvalidDigit(input.to_string()))
        };

        match digits.len() {
            3 => {
                // #abc is shorthand for #aabbcc
                let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
                Self::parse_hex(&expanded)
            }
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            len => Err(ColorParseError::InvalidLength(len)),
        }
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == u8::MAX {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Snap every channel to the nearest 8-bit step.
    ///
    /// Quantized colors survive a hex round trip unchanged.
    pub fn quantized(self) -> Self {
        let [r, g, b, a] = self.to_rgba8();
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Component-wise linear interpolation, `t` clamped to `0.0..=1.0`
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_hex_matches_parse() {
        assert_eq!(Color::from_hex(0x1E5EDB), Color::parse_hex("#1E5EDB").unwrap());
        assert_eq!(Color::from_hex(0x1E5EDB), "1e5edb".parse::<Color>().unwrap());
    }

    #[test]
    fn test_parse_shorthand() {
        assert_eq!(Color::parse_hex("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::parse_hex("000").unwrap(), Color::BLACK);
    }

    #[test]
    fn test_parse_with_alpha() {
        let color = Color::parse_hex("#00000080").unwrap();
        assert_eq!(color.a, 128.0 / 255.0);
        assert_eq!(color.to_hex_string(), "#00000080");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Color::parse_hex(""), Err(ColorParseError::Empty));
        assert_eq!(Color::parse_hex("#"), Err(ColorParseError::Empty));
        assert_eq!(
            Color::parse_hex("#12345"),
            Err(ColorParseError::InvalidLength(5))
        );
        assert_eq!(
            Color::parse_hex("#zzzzzz"),
            Err(ColorParseError::InvalidDigit("#zzzzzz".to_string()))
        );
        assert_eq!(
            Color::parse_hex("+12345"),
            Err(ColorParseError::InvalidDigit("+12345".to_string()))
        );
    }

    #[test]
    fn test_hex_string_round_trip() {
        let color = Color::from_hex(0xC2410C);
        assert_eq!(color.to_hex_string(), "#c2410c");
        assert_eq!(Color::parse_hex(&color.to_hex_string()).unwrap(), color);
    }

    #[test]
    fn test_lerp_clamps_t() {
        let mid = Color::lerp(&Color::BLACK, &Color::WHITE, 0.5);
        assert_eq!(mid, Color::gray(0.5));
        assert_eq!(Color::lerp(&Color::BLACK, &Color::WHITE, 2.0), Color::WHITE);
        assert_eq!(Color::lerp(&Color::BLACK, &Color::WHITE, -1.0), Color::BLACK);
    }

    #[test]
    fn test_quantized_survives_hex() {
        let color = Color::lerp(&Color::from_hex(0x1E5EDB), &Color::WHITE, 0.33).quantized();
        assert_eq!(Color::parse_hex(&color.to_hex_string()).unwrap(), color);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Color::from_hex(0xFF8A80)).unwrap();
        assert_eq!(json, "\"#ff8a80\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::from_hex(0xFF8A80));
        assert!(serde_json::from_str::<Color>("\"#nothex\"").is_err());
    }
}
