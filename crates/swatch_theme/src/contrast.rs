//! WCAG contrast math
//!
//! Relative luminance, contrast ratio and compliance classification as
//! defined by WCAG 2.x. Everything here is a pure function of its inputs.
//!
//! ```rust
//! use swatch_core::Color;
//! use swatch_theme::contrast::{contrast_ratio, ComplianceLevel, ContrastResult};
//!
//! let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
//! assert!((ratio - 21.0).abs() < 0.01);
//!
//! let result = ContrastResult::between(Color::from_hex(0x777777), Color::WHITE);
//! assert_eq!(result.level, ComplianceLevel::AaLargeText);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use swatch_core::Color;

/// Minimum ratio for large text (AA) and UI components
pub const AA_LARGE_TEXT_RATIO: f64 = 3.0;
/// Minimum ratio for normal text at level AA
pub const AA_RATIO: f64 = 4.5;
/// Minimum ratio for normal text at level AAA
pub const AAA_RATIO: f64 = 7.0;

/// WCAG compliance classification, ordered from worst to best
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceLevel {
    Fail,
    AaLargeText,
    Aa,
    Aaa,
}

impl ComplianceLevel {
    /// Classify a contrast ratio
    pub fn classify(ratio: f64) -> Self {
        if ratio >= AAA_RATIO {
            ComplianceLevel::Aaa
        } else if ratio >= AA_RATIO {
            ComplianceLevel::Aa
        } else if ratio >= AA_LARGE_TEXT_RATIO {
            ComplianceLevel::AaLargeText
        } else {
            ComplianceLevel::Fail
        }
    }

    /// Smallest ratio that reaches this level
    pub fn min_ratio(self) -> f64 {
        match self {
            ComplianceLevel::Fail => 1.0,
            ComplianceLevel::AaLargeText => AA_LARGE_TEXT_RATIO,
            ComplianceLevel::Aa => AA_RATIO,
            ComplianceLevel::Aaa => AAA_RATIO,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            ComplianceLevel::Fail => "fail",
            ComplianceLevel::AaLargeText => "aa-large-text",
            ComplianceLevel::Aa => "aa",
            ComplianceLevel::Aaa => "aaa",
        }
    }
}

impl Display for ComplianceLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ComplianceLevel::Fail => "Fail",
            ComplianceLevel::AaLargeText => "AA (large text)",
            ComplianceLevel::Aa => "AA",
            ComplianceLevel::Aaa => "AAA",
        })
    }
}

impl FromStr for ComplianceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fail" => Ok(ComplianceLevel::Fail),
            "aa-large-text" | "aa-large" => Ok(ComplianceLevel::AaLargeText),
            "aa" => Ok(ComplianceLevel::Aa),
            "aaa" => Ok(ComplianceLevel::Aaa),
            other => Err(format!("unknown compliance level `{other}`")),
        }
    }
}

/// Contrast ratio between two colors and its classification
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    pub ratio: f64,
    pub level: ComplianceLevel,
}

impl ContrastResult {
    pub fn between(a: Color, b: Color) -> Self {
        let ratio = contrast_ratio(a, b);
        Self {
            ratio,
            level: ComplianceLevel::classify(ratio),
        }
    }

    /// Whether the pair reaches at least `minimum`
    pub fn passes(&self, minimum: ComplianceLevel) -> bool {
        self.level >= minimum
    }
}

/// Convert one sRGB channel to linear light.
///
/// Channels are clamped to `0.0..=1.0` first and NaN reads as 0.
fn linearize(channel: f64) -> f64 {
    let channel = if channel.is_nan() {
        0.0
    } else {
        channel.clamp(0.0, 1.0)
    };
    if channel <= 0.03928 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color (alpha is ignored)
pub fn relative_luminance(color: Color) -> f64 {
    let r = linearize(f64::from(color.r));
    let g = linearize(f64::from(color.g));
    let b = linearize(f64::from(color.b));
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio between two colors, from 1.0 to 21.0. Symmetric.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// First candidate, in list order, reaching `minimum` against `background`
pub fn best_accessible_color(
    background: Color,
    candidates: &[Color],
    minimum: ComplianceLevel,
) -> Option<Color> {
    candidates
        .iter()
        .copied()
        .find(|&candidate| ContrastResult::between(candidate, background).passes(minimum))
}

/// Black or white, whichever contrasts more with `background`
pub fn readable_text_color(background: Color) -> Color {
    if contrast_ratio(Color::BLACK, background) >= contrast_ratio(Color::WHITE, background) {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_black_is_21() {
        let ratio = contrast_ratio(Color::WHITE, Color::BLACK);
        assert!((ratio - 21.0).abs() < 0.01, "ratio was {ratio}");
    }

    #[test]
    fn test_identical_colors_are_one() {
        for color in [Color::WHITE, Color::BLACK, Color::gray(0.5), Color::from_hex(0x1E5EDB)] {
            assert_eq!(contrast_ratio(color, color), 1.0);
            assert_eq!(ContrastResult::between(color, color).level, ComplianceLevel::Fail);
        }
    }

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(relative_luminance(Color::BLACK), 0.0);
        assert!((relative_luminance(Color::WHITE) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_luminance_ignores_alpha() {
        let opaque = Color::from_hex(0x336699);
        assert_eq!(
            relative_luminance(opaque),
            relative_luminance(opaque.with_alpha(0.2))
        );
    }

    #[test]
    fn test_linearize_threshold() {
        // Below the knee the curve is linear
        assert_eq!(linearize(0.03928), 0.03928 / 12.92);
        assert!(linearize(0.5) > 0.21 && linearize(0.5) < 0.22);
    }

    #[test]
    fn test_out_of_range_channels_are_clamped() {
        let over = Color::rgb(2.0, 2.0, 2.0);
        let under = Color::rgb(-1.0, -0.5, -3.0);
        assert_eq!(relative_luminance(over), relative_luminance(Color::WHITE));
        assert_eq!(relative_luminance(under), 0.0);
        assert_eq!(contrast_ratio(over, under), contrast_ratio(Color::WHITE, Color::BLACK));
        assert_eq!(ContrastResult::between(over, over).level, ComplianceLevel::Fail);
    }

    #[test]
    fn test_nan_channels_read_as_zero() {
        let nan = Color::rgb(f32::NAN, f32::NAN, f32::NAN);
        assert_eq!(relative_luminance(nan), 0.0);
        assert_eq!(contrast_ratio(nan, nan), 1.0);
        assert_eq!(contrast_ratio(nan, Color::BLACK), 1.0);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(ComplianceLevel::classify(1.0), ComplianceLevel::Fail);
        assert_eq!(ComplianceLevel::classify(2.999), ComplianceLevel::Fail);
        assert_eq!(ComplianceLevel::classify(3.0), ComplianceLevel::AaLargeText);
        assert_eq!(ComplianceLevel::classify(4.499), ComplianceLevel::AaLargeText);
        assert_eq!(ComplianceLevel::classify(4.5), ComplianceLevel::Aa);
        assert_eq!(ComplianceLevel::classify(6.999), ComplianceLevel::Aa);
        assert_eq!(ComplianceLevel::classify(7.0), ComplianceLevel::Aaa);
        assert_eq!(ComplianceLevel::classify(21.0), ComplianceLevel::Aaa);
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(ComplianceLevel::Fail < ComplianceLevel::AaLargeText);
        assert!(ComplianceLevel::AaLargeText < ComplianceLevel::Aa);
        assert!(ComplianceLevel::Aa < ComplianceLevel::Aaa);
        for level in [
            ComplianceLevel::Fail,
            ComplianceLevel::AaLargeText,
            ComplianceLevel::Aa,
            ComplianceLevel::Aaa,
        ] {
            assert_eq!(ComplianceLevel::classify(level.min_ratio()), level);
            assert_eq!(level.id().parse::<ComplianceLevel>(), Ok(level));
        }
    }

    #[test]
    fn test_best_accessible_color_first_wins() {
        let found = best_accessible_color(
            Color::WHITE,
            &[Color::BLACK, Color::WHITE],
            ComplianceLevel::Aa,
        );
        assert_eq!(found, Some(Color::BLACK));

        // A weaker but passing candidate listed first still wins
        let dark_gray = Color::from_hex(0x595959);
        let found = best_accessible_color(
            Color::WHITE,
            &[Color::WHITE, dark_gray, Color::BLACK],
            ComplianceLevel::Aa,
        );
        assert_eq!(found, Some(dark_gray));
    }

    #[test]
    fn test_best_accessible_color_none_qualify() {
        let gray = Color::gray(0.5);
        assert_eq!(best_accessible_color(gray, &[gray], ComplianceLevel::Aaa), None);
        assert_eq!(best_accessible_color(gray, &[], ComplianceLevel::Fail), None);
    }

    #[test]
    fn test_readable_text_color() {
        assert_eq!(readable_text_color(Color::WHITE), Color::BLACK);
        assert_eq!(readable_text_color(Color::from_hex(0x121417)), Color::WHITE);
        assert_eq!(readable_text_color(Color::from_hex(0xFFE600)), Color::BLACK);
    }
}
