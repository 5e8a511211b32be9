//! Built-in theme presets.

mod palettes;

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use swatch_core::Color;

use crate::catalog::ThemeCategory;
use crate::contrast::readable_text_color;
use crate::error::ThemeError;
use crate::theme::{ColorScheme, ThemeDefinition};
use crate::tokens::*;
use palettes::BasePalette;

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemePreset {
    /// Neutral light theme, the registry default.
    Light,
    /// Neutral dark theme.
    Dark,
    /// Maximum-contrast dark theme with motion disabled.
    HighContrast,
    /// Navy and teal on cool grays.
    Corporate,
    /// Warm oranges and magenta with roomy spacing.
    Sunset,
    /// Greens and browns with rounded type.
    Forest,
    /// Blues and teals.
    Ocean,
    /// Dark developer theme with monospace type.
    Midnight,
    /// Near-monochrome serif theme with square corners.
    Paper,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::HighContrast => "high-contrast",
            Self::Corporate => "corporate",
            Self::Sunset => "sunset",
            Self::Forest => "forest",
            Self::Ocean => "ocean",
            Self::Midnight => "midnight",
            Self::Paper => "paper",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::HighContrast => "High Contrast",
            Self::Corporate => "Corporate",
            Self::Sunset => "Sunset",
            Self::Forest => "Forest",
            Self::Ocean => "Ocean",
            Self::Midnight => "Midnight",
            Self::Paper => "Paper",
        }
    }

    /// Full preset list, in declaration order.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 9] = [
            ThemePreset::Light,
            ThemePreset::Dark,
            ThemePreset::HighContrast,
            ThemePreset::Corporate,
            ThemePreset::Sunset,
            ThemePreset::Forest,
            ThemePreset::Ocean,
            ThemePreset::Midnight,
            ThemePreset::Paper,
        ];
        &PRESETS
    }

    /// Look up a preset by id or display name (case-insensitive).
    pub fn find(name: &str) -> Option<ThemePreset> {
        ThemePreset::all().iter().copied().find(|preset| {
            preset.id().eq_ignore_ascii_case(name) || preset.display_name().eq_ignore_ascii_case(name)
        })
    }

    pub fn color_scheme(self) -> ColorScheme {
        match self {
            Self::Dark | Self::HighContrast | Self::Midnight => ColorScheme::Dark,
            _ => ColorScheme::Light,
        }
    }

    /// Built-in preset for a scheme, used when toggling.
    pub fn for_scheme(scheme: ColorScheme) -> ThemePreset {
        match scheme {
            ColorScheme::Light => ThemePreset::Light,
            ColorScheme::Dark => ThemePreset::Dark,
        }
    }

    /// Categories listing this preset.
    pub fn categories(self) -> Vec<ThemeCategory> {
        ThemeCategory::all()
            .iter()
            .copied()
            .filter(|category| category.presets().contains(&self))
            .collect()
    }

    /// The preset's theme. Built once per process and shared.
    pub fn theme(self) -> Arc<ThemeDefinition> {
        static THEMES: OnceLock<Vec<Arc<ThemeDefinition>>> = OnceLock::new();
        let themes = THEMES.get_or_init(|| {
            ThemePreset::all()
                .iter()
                .map(|&preset| Arc::new(build_preset(preset)))
                .collect()
        });
        Arc::clone(&themes[self.index()])
    }

    fn index(self) -> usize {
        ThemePreset::all()
            .iter()
            .position(|&preset| preset == self)
            .unwrap_or_default()
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ThemePreset {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemePreset::find(s).ok_or_else(|| ThemeError::UnknownPreset(s.to_string()))
    }
}

/// Convenience free function for ergonomic imports.
pub fn preset_theme(preset: ThemePreset) -> Arc<ThemeDefinition> {
    preset.theme()
}

fn build_preset(preset: ThemePreset) -> ThemeDefinition {
    let scheme = preset.color_scheme();
    let (palette, typography, spacing, radii, animations) = match preset {
        ThemePreset::Light => (
            palettes::light(),
            TypographyTokens::default(),
            SpacingTokens::default(),
            RadiusTokens::default(),
            AnimationTokens::default(),
        ),
        ThemePreset::Dark => (
            palettes::dark(),
            TypographyTokens::default(),
            SpacingTokens::default(),
            RadiusTokens::default(),
            AnimationTokens::default(),
        ),
        ThemePreset::HighContrast => (
            palettes::high_contrast(),
            TypographyTokens::default(),
            SpacingTokens::default(),
            RadiusTokens::default(),
            AnimationTokens::instant(),
        ),
        ThemePreset::Corporate => (
            palettes::corporate(),
            TypographyTokens::default(),
            SpacingTokens::default(),
            RadiusTokens::default(),
            AnimationTokens::default(),
        ),
        ThemePreset::Sunset => (
            palettes::sunset(),
            TypographyTokens::default(),
            SpacingTokens::default().scaled(1.25),
            RadiusTokens::default(),
            AnimationTokens::default(),
        ),
        ThemePreset::Forest => (
            palettes::forest(),
            TypographyTokens::default().with_family(FontFamily::Rounded),
            SpacingTokens::default(),
            RadiusTokens::default(),
            AnimationTokens::default(),
        ),
        ThemePreset::Ocean => (
            palettes::ocean(),
            TypographyTokens::default(),
            SpacingTokens::default(),
            RadiusTokens::default(),
            AnimationTokens::default(),
        ),
        ThemePreset::Midnight => (
            palettes::midnight(),
            TypographyTokens::default().with_family(FontFamily::Monospace),
            SpacingTokens::default(),
            RadiusTokens::default(),
            AnimationTokens::default(),
        ),
        ThemePreset::Paper => (
            palettes::paper(),
            TypographyTokens::default().with_family(FontFamily::Serif),
            SpacingTokens::default(),
            RadiusTokens::sharp(),
            AnimationTokens::default(),
        ),
    };

    let elevation = match scheme {
        ColorScheme::Light => ElevationTokens::light(),
        ColorScheme::Dark => ElevationTokens::dark(),
    };

    ThemeDefinition {
        name: preset.display_name().to_string(),
        scheme,
        preset: Some(preset),
        colors: build_colors(palette),
        typography,
        spacing,
        elevation,
        radii,
        animations,
    }
}

fn build_colors(base: BasePalette) -> ColorTokens {
    let ramp = |step: usize| blend(base.neutral_light, base.neutral_dark, step as f32 / 9.0);

    ColorTokens {
        primary: base.primary,
        on_primary: base.on_primary,
        secondary: base.secondary,
        on_secondary: base.on_secondary,
        background: base.background,
        surface: base.surface,
        surface_variant: base.surface_variant,
        on_background: base.foreground,
        on_surface: base.foreground,
        on_surface_variant: base.muted_foreground,
        outline: base.outline,
        outline_variant: blend(base.outline, base.background, 0.5),
        success: base.success,
        on_success: readable_text_color(base.success),
        warning: base.warning,
        on_warning: readable_text_color(base.warning),
        error: base.error,
        on_error: readable_text_color(base.error),
        info: base.info,
        on_info: readable_text_color(base.info),
        disabled: blend(base.muted_foreground, base.background, 0.5),
        primary_text: base.foreground,
        secondary_text: base.muted_foreground,
        neutral_50: ramp(0),
        neutral_100: ramp(1),
        neutral_200: ramp(2),
        neutral_300: ramp(3),
        neutral_400: ramp(4),
        neutral_500: ramp(5),
        neutral_600: ramp(6),
        neutral_700: ramp(7),
        neutral_800: ramp(8),
        neutral_900: ramp(9),
    }
}

/// Mix two colors, snapped to 8-bit so presets export losslessly.
fn blend(a: Color, b: Color, t: f32) -> Color {
    Color::lerp(&a, &b, t).quantized()
}
