//! Theme definitions
//!
//! A [`ThemeDefinition`] is an immutable, named bundle of every token family.
//! It is built once (through [`ThemeBuilder`](crate::ThemeBuilder), a theme
//! file or a preset) and shared as `Arc<ThemeDefinition>`; switching themes
//! replaces the whole value, fields are never edited in place.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use swatch_core::Color;

use crate::error::ThemeError;
use crate::presets::ThemePreset;
use crate::tokens::*;
use crate::validation::{ThemeValidator, ValidationReport};

/// Light or dark appearance of a theme
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// The opposite scheme
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ColorScheme::Dark)
    }
}

impl Display for ColorScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        })
    }
}

/// A complete, immutable theme
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThemeDefinition {
    pub(crate) name: String,
    pub(crate) scheme: ColorScheme,
    pub(crate) preset: Option<ThemePreset>,
    pub(crate) colors: ColorTokens,
    pub(crate) typography: TypographyTokens,
    pub(crate) spacing: SpacingTokens,
    pub(crate) elevation: ElevationTokens,
    pub(crate) radii: RadiusTokens,
    pub(crate) animations: AnimationTokens,
}

impl ThemeDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// The built-in preset this theme is, if any.
    ///
    /// Themes built through [`ThemeBuilder`](crate::ThemeBuilder) or loaded
    /// from a file are custom (`None`), even when they reuse a preset's name.
    pub fn preset(&self) -> Option<ThemePreset> {
        self.preset
    }

    pub fn is_dark(&self) -> bool {
        self.scheme.is_dark()
    }

    pub fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    /// Shorthand for `colors().get(role)`
    pub fn color(&self, role: ColorRole) -> Color {
        self.colors.get(role)
    }

    pub fn typography(&self) -> &TypographyTokens {
        &self.typography
    }

    pub fn font(&self, token: TypographyToken) -> &FontDescriptor {
        self.typography.get(token)
    }

    pub fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }

    pub fn elevation(&self) -> &ElevationTokens {
        &self.elevation
    }

    pub fn radii(&self) -> &RadiusTokens {
        &self.radii
    }

    pub fn animations(&self) -> &AnimationTokens {
        &self.animations
    }

    /// Run the advisory validation pass over this theme
    pub fn validate(&self) -> ValidationReport {
        ThemeValidator::validate(self)
    }

    /// Validate, failing with [`ThemeError::Invalid`] on any error-severity
    /// issue. The report is returned so callers can surface warnings.
    pub fn ensure_valid(&self) -> Result<ValidationReport, ThemeError> {
        let report = self.validate();
        if report.has_errors() {
            return Err(ThemeError::Invalid {
                name: self.name.clone(),
                report,
            });
        }
        Ok(report)
    }
}

impl Display for ThemeDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.scheme)
    }
}
