//! Validating theme construction

use rustc_hash::FxHashMap;
use swatch_core::Color;
use tracing::{debug, warn};

use crate::error::ThemeError;
use crate::theme::{ColorScheme, ThemeDefinition};
use crate::tokens::*;
use crate::validation::Severity;

/// Builder for custom themes.
///
/// Color roles have no defaults: every role in [`ColorRole::ALL`] must be set,
/// either one by one, through [`colors`](Self::colors), or by starting from an
/// existing theme. The other token families fall back to the standard scales
/// for the chosen scheme.
///
/// ```rust
/// use swatch_core::Color;
/// use swatch_theme::{ColorRole, ThemeBuilder, ThemePreset};
///
/// let brand = ThemeBuilder::from_theme(&ThemePreset::Light.theme())
///     .name("Brand")
///     .color(ColorRole::Primary, Color::from_hex(0x0B3C7A))
///     .build()
///     .unwrap();
/// assert_eq!(brand.name(), "Brand");
/// assert_eq!(brand.preset(), None);
/// ```
#[derive(Clone, Debug)]
pub struct ThemeBuilder {
    name: String,
    scheme: ColorScheme,
    colors: FxHashMap<ColorRole, Color>,
    typography: Option<TypographyTokens>,
    spacing: Option<SpacingTokens>,
    elevation: Option<ElevationTokens>,
    radii: Option<RadiusTokens>,
    animations: Option<AnimationTokens>,
}

impl ThemeBuilder {
    pub fn new(name: impl Into<String>, scheme: ColorScheme) -> Self {
        Self {
            name: name.into(),
            scheme,
            colors: FxHashMap::default(),
            typography: None,
            spacing: None,
            elevation: None,
            radii: None,
            animations: None,
        }
    }

    /// Start from a copy of every token in `theme`
    pub fn from_theme(theme: &ThemeDefinition) -> Self {
        Self {
            name: theme.name().to_string(),
            scheme: theme.color_scheme(),
            colors: theme.colors().to_roles(),
            typography: Some(theme.typography().clone()),
            spacing: Some(theme.spacing().clone()),
            elevation: Some(theme.elevation().clone()),
            radii: Some(theme.radii().clone()),
            animations: Some(theme.animations().clone()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn color(mut self, role: ColorRole, color: Color) -> Self {
        self.colors.insert(role, color);
        self
    }

    /// Set every color role at once
    pub fn colors(mut self, colors: ColorTokens) -> Self {
        self.colors = colors.to_roles();
        self
    }

    pub fn typography(mut self, typography: TypographyTokens) -> Self {
        self.typography = Some(typography);
        self
    }

    pub fn spacing(mut self, spacing: SpacingTokens) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn elevation(mut self, elevation: ElevationTokens) -> Self {
        self.elevation = Some(elevation);
        self
    }

    pub fn radii(mut self, radii: RadiusTokens) -> Self {
        self.radii = Some(radii);
        self
    }

    pub fn animations(mut self, animations: AnimationTokens) -> Self {
        self.animations = Some(animations);
        self
    }

    /// Assemble and validate the theme.
    ///
    /// Fails when a color role is missing or when validation reports an
    /// error-severity issue. Warnings are logged and do not block.
    pub fn build(self) -> Result<ThemeDefinition, ThemeError> {
        let theme = self.build_unvalidated()?;
        let report = theme.ensure_valid()?;

        for issue in &report.issues {
            match issue.severity {
                Severity::Warning => warn!("theme `{}`: {}", theme.name, issue.message),
                _ => debug!("theme `{}`: {}", theme.name, issue.message),
            }
        }
        Ok(theme)
    }

    /// Assemble the theme without the validation pass.
    ///
    /// Missing color roles are still an error. Meant for tooling that reports
    /// on a theme instead of rejecting it.
    pub fn build_unvalidated(self) -> Result<ThemeDefinition, ThemeError> {
        let colors = ColorTokens::from_roles(&self.colors).map_err(|roles| {
            ThemeError::MissingColorRoles {
                name: self.name.clone(),
                roles,
            }
        })?;

        let elevation = self.elevation.unwrap_or_else(|| match self.scheme {
            ColorScheme::Light => ElevationTokens::light(),
            ColorScheme::Dark => ElevationTokens::dark(),
        });

        Ok(ThemeDefinition {
            name: self.name,
            scheme: self.scheme,
            preset: None,
            colors,
            typography: self.typography.unwrap_or_default(),
            spacing: self.spacing.unwrap_or_default(),
            elevation,
            radii: self.radii.unwrap_or_default(),
            animations: self.animations.unwrap_or_default(),
        })
    }
}
