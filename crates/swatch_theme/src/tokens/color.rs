//! Color tokens for theming

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use swatch_core::Color;

/// Semantic color role keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    // Brand colors
    Primary,
    OnPrimary,
    Secondary,
    OnSecondary,

    // Surface colors
    Background,
    Surface,
    SurfaceVariant,
    OnBackground,
    OnSurface,
    OnSurfaceVariant,

    // Outlines
    Outline,
    OutlineVariant,

    // Status colors
    Success,
    OnSuccess,
    Warning,
    OnWarning,
    Error,
    OnError,
    Info,
    OnInfo,

    // Text colors
    Disabled,
    PrimaryText,
    SecondaryText,

    // Neutral ramp, lightest to darkest
    #[serde(rename = "neutral_50")]
    Neutral50,
    #[serde(rename = "neutral_100")]
    Neutral100,
    #[serde(rename = "neutral_200")]
    Neutral200,
    #[serde(rename = "neutral_300")]
    Neutral300,
    #[serde(rename = "neutral_400")]
    Neutral400,
    #[serde(rename = "neutral_500")]
    Neutral500,
    #[serde(rename = "neutral_600")]
    Neutral600,
    #[serde(rename = "neutral_700")]
    Neutral700,
    #[serde(rename = "neutral_800")]
    Neutral800,
    #[serde(rename = "neutral_900")]
    Neutral900,
}

impl ColorRole {
    /// Every role a theme must define, in declaration order
    pub const ALL: [ColorRole; 33] = [
        ColorRole::Primary,
        ColorRole::OnPrimary,
        ColorRole::Secondary,
        ColorRole::OnSecondary,
        ColorRole::Background,
        ColorRole::Surface,
        ColorRole::SurfaceVariant,
        ColorRole::OnBackground,
        ColorRole::OnSurface,
        ColorRole::OnSurfaceVariant,
        ColorRole::Outline,
        ColorRole::OutlineVariant,
        ColorRole::Success,
        ColorRole::OnSuccess,
        ColorRole::Warning,
        ColorRole::OnWarning,
        ColorRole::Error,
        ColorRole::OnError,
        ColorRole::Info,
        ColorRole::OnInfo,
        ColorRole::Disabled,
        ColorRole::PrimaryText,
        ColorRole::SecondaryText,
        ColorRole::Neutral50,
        ColorRole::Neutral100,
        ColorRole::Neutral200,
        ColorRole::Neutral300,
        ColorRole::Neutral400,
        ColorRole::Neutral500,
        ColorRole::Neutral600,
        ColorRole::Neutral700,
        ColorRole::Neutral800,
        ColorRole::Neutral900,
    ];

    /// The neutral ramp, lightest first
    pub const NEUTRAL_RAMP: [ColorRole; 10] = [
        ColorRole::Neutral50,
        ColorRole::Neutral100,
        ColorRole::Neutral200,
        ColorRole::Neutral300,
        ColorRole::Neutral400,
        ColorRole::Neutral500,
        ColorRole::Neutral600,
        ColorRole::Neutral700,
        ColorRole::Neutral800,
        ColorRole::Neutral900,
    ];

    /// Stable snake_case name used in theme files
    pub fn name(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::OnPrimary => "on_primary",
            ColorRole::Secondary => "secondary",
            ColorRole::OnSecondary => "on_secondary",
            ColorRole::Background => "background",
            ColorRole::Surface => "surface",
            ColorRole::SurfaceVariant => "surface_variant",
            ColorRole::OnBackground => "on_background",
            ColorRole::OnSurface => "on_surface",
            ColorRole::OnSurfaceVariant => "on_surface_variant",
            ColorRole::Outline => "outline",
            ColorRole::OutlineVariant => "outline_variant",
            ColorRole::Success => "success",
            ColorRole::OnSuccess => "on_success",
            ColorRole::Warning => "warning",
            ColorRole::OnWarning => "on_warning",
            ColorRole::Error => "error",
            ColorRole::OnError => "on_error",
            ColorRole::Info => "info",
            ColorRole::OnInfo => "on_info",
            ColorRole::Disabled => "disabled",
            ColorRole::PrimaryText => "primary_text",
            ColorRole::SecondaryText => "secondary_text",
            ColorRole::Neutral50 => "neutral_50",
            ColorRole::Neutral100 => "neutral_100",
            ColorRole::Neutral200 => "neutral_200",
            ColorRole::Neutral300 => "neutral_300",
            ColorRole::Neutral400 => "neutral_400",
            ColorRole::Neutral500 => "neutral_500",
            ColorRole::Neutral600 => "neutral_600",
            ColorRole::Neutral700 => "neutral_700",
            ColorRole::Neutral800 => "neutral_800",
            ColorRole::Neutral900 => "neutral_900",
        }
    }
}

impl Display for ColorRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorRole::ALL
            .iter()
            .copied()
            .find(|role| role.name() == s)
            .ok_or(())
    }
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    // Brand colors
    pub primary: Color,
    pub on_primary: Color,
    pub secondary: Color,
    pub on_secondary: Color,

    // Surface colors
    pub background: Color,
    pub surface: Color,
    pub surface_variant: Color,
    pub on_background: Color,
    pub on_surface: Color,
    pub on_surface_variant: Color,

    // Outlines
    pub outline: Color,
    pub outline_variant: Color,

    // Status colors
    pub success: Color,
    pub on_success: Color,
    pub warning: Color,
    pub on_warning: Color,
    pub error: Color,
    pub on_error: Color,
    pub info: Color,
    pub on_info: Color,

    // Text colors
    pub disabled: Color,
    pub primary_text: Color,
    pub secondary_text: Color,

    // Neutral ramp
    pub neutral_50: Color,
    pub neutral_100: Color,
    pub neutral_200: Color,
    pub neutral_300: Color,
    pub neutral_400: Color,
    pub neutral_500: Color,
    pub neutral_600: Color,
    pub neutral_700: Color,
    pub neutral_800: Color,
    pub neutral_900: Color,
}

impl ColorTokens {
    /// Get a color by role
    pub fn get(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::OnPrimary => self.on_primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::OnSecondary => self.on_secondary,
            ColorRole::Background => self.background,
            ColorRole::Surface => self.surface,
            ColorRole::SurfaceVariant => self.surface_variant,
            ColorRole::OnBackground => self.on_background,
            ColorRole::OnSurface => self.on_surface,
            ColorRole::OnSurfaceVariant => self.on_surface_variant,
            ColorRole::Outline => self.outline,
            ColorRole::OutlineVariant => self.outline_variant,
            ColorRole::Success => self.success,
            ColorRole::OnSuccess => self.on_success,
            ColorRole::Warning => self.warning,
            ColorRole::OnWarning => self.on_warning,
            ColorRole::Error => self.error,
            ColorRole::OnError => self.on_error,
            ColorRole::Info => self.info,
            ColorRole::OnInfo => self.on_info,
            ColorRole::Disabled => self.disabled,
            ColorRole::PrimaryText => self.primary_text,
            ColorRole::SecondaryText => self.secondary_text,
            ColorRole::Neutral50 => self.neutral_50,
            ColorRole::Neutral100 => self.neutral_100,
            ColorRole::Neutral200 => self.neutral_200,
            ColorRole::Neutral300 => self.neutral_300,
            ColorRole::Neutral400 => self.neutral_400,
            ColorRole::Neutral500 => self.neutral_500,
            ColorRole::Neutral600 => self.neutral_600,
            ColorRole::Neutral700 => self.neutral_700,
            ColorRole::Neutral800 => self.neutral_800,
            ColorRole::Neutral900 => self.neutral_900,
        }
    }

    /// Assemble a token set from a role map.
    ///
    /// Every role in [`ColorRole::ALL`] must be present; on failure the missing
    /// roles are returned in declaration order.
    pub fn from_roles(roles: &FxHashMap<ColorRole, Color>) -> Result<Self, Vec<ColorRole>> {
        let missing: Vec<ColorRole> = ColorRole::ALL
            .iter()
            .copied()
            .filter(|role| !roles.contains_key(role))
            .collect();
        if !missing.is_empty() {
            return Err(missing);
        }

        let c = |role: ColorRole| roles[&role];
        Ok(Self {
            primary: c(ColorRole::Primary),
            on_primary: c(ColorRole::OnPrimary),
            secondary: c(ColorRole::Secondary),
            on_secondary: c(ColorRole::OnSecondary),
            background: c(ColorRole::Background),
            surface: c(ColorRole::Surface),
            surface_variant: c(ColorRole::SurfaceVariant),
            on_background: c(ColorRole::OnBackground),
            on_surface: c(ColorRole::OnSurface),
            on_surface_variant: c(ColorRole::OnSurfaceVariant),
            outline: c(ColorRole::Outline),
            outline_variant: c(ColorRole::OutlineVariant),
            success: c(ColorRole::Success),
            on_success: c(ColorRole::OnSuccess),
            warning: c(ColorRole::Warning),
            on_warning: c(ColorRole::OnWarning),
            error: c(ColorRole::Error),
            on_error: c(ColorRole::OnError),
            info: c(ColorRole::Info),
            on_info: c(ColorRole::OnInfo),
            disabled: c(ColorRole::Disabled),
            primary_text: c(ColorRole::PrimaryText),
            secondary_text: c(ColorRole::SecondaryText),
            neutral_50: c(ColorRole::Neutral50),
            neutral_100: c(ColorRole::Neutral100),
            neutral_200: c(ColorRole::Neutral200),
            neutral_300: c(ColorRole::Neutral300),
            neutral_400: c(ColorRole::Neutral400),
            neutral_500: c(ColorRole::Neutral500),
            neutral_600: c(ColorRole::Neutral600),
            neutral_700: c(ColorRole::Neutral700),
            neutral_800: c(ColorRole::Neutral800),
            neutral_900: c(ColorRole::Neutral900),
        })
    }

    /// Flatten into a role map
    pub fn to_roles(&self) -> FxHashMap<ColorRole, Color> {
        self.iter().collect()
    }

    /// Iterate `(role, color)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, Color)> + '_ {
        ColorRole::ALL.iter().map(move |&role| (role, self.get(role)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_map() -> FxHashMap<ColorRole, Color> {
        ColorRole::ALL
            .iter()
            .enumerate()
            .map(|(i, &role)| (role, Color::gray(i as f32 / 40.0)))
            .collect()
    }

    #[test]
    fn test_role_names_round_trip() {
        for role in ColorRole::ALL {
            assert_eq!(role.name().parse::<ColorRole>(), Ok(role));
        }
        assert!("tertiary".parse::<ColorRole>().is_err());
    }

    #[test]
    fn test_serde_names_match_role_names() {
        for role in ColorRole::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.name()));
        }
    }

    #[test]
    fn test_from_roles_complete() {
        let map = full_map();
        let tokens = ColorTokens::from_roles(&map).unwrap();
        for role in ColorRole::ALL {
            assert_eq!(tokens.get(role), map[&role], "role {role}");
        }
        assert_eq!(tokens.to_roles(), map);
    }

    #[test]
    fn test_from_roles_reports_every_missing_role() {
        let mut map = full_map();
        map.remove(&ColorRole::OnPrimary);
        map.remove(&ColorRole::Neutral900);

        let missing = ColorTokens::from_roles(&map).unwrap_err();
        assert_eq!(missing, vec![ColorRole::OnPrimary, ColorRole::Neutral900]);
    }

    #[test]
    fn test_from_roles_empty_map() {
        let missing = ColorTokens::from_roles(&FxHashMap::default()).unwrap_err();
        assert_eq!(missing.len(), ColorRole::ALL.len());
    }
}
