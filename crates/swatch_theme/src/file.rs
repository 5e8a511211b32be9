//! TOML theme files
//!
//! ```toml
//! name = "Brand"
//! scheme = "light"
//! extends = "light"
//!
//! [colors]
//! primary = "#0b3c7a"
//!
//! [spacing]
//! md = 14.0
//! ```
//!
//! Without `extends` every color role must be listed. Token tables are
//! optional and may be partial: listed keys are laid over the base theme's
//! values (the `extends` preset, or the standard scales).

use std::path::Path;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use swatch_core::Color;

use crate::builder::ThemeBuilder;
use crate::error::ThemeError;
use crate::presets::ThemePreset;
use crate::theme::{ColorScheme, ThemeDefinition};
use crate::tokens::*;

#[derive(Debug, Serialize, Deserialize)]
struct ThemeFile {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scheme: Option<ColorScheme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extends: Option<String>,
    #[serde(default)]
    colors: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    typography: Option<toml::Table>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    spacing: Option<toml::Table>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    elevation: Option<toml::Table>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    radii: Option<toml::Table>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    animations: Option<toml::Table>,
}

impl ThemeDefinition {
    /// Parse and validate a theme from TOML source
    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        builder_from_toml(source)?.build()
    }

    /// Parse a theme from TOML source, skipping the validation pass.
    ///
    /// Missing color roles are still rejected.
    pub fn from_toml_str_unvalidated(source: &str) -> Result<Self, ThemeError> {
        builder_from_toml(source)?.build_unvalidated()
    }

    /// Export every token of this theme as TOML
    pub fn to_toml_string(&self) -> Result<String, ThemeError> {
        let file = ThemeFile {
            name: self.name.clone(),
            scheme: Some(self.scheme),
            extends: None,
            colors: self
                .colors
                .iter()
                .map(|(role, color)| (role.name().to_string(), color.to_hex_string()))
                .collect(),
            typography: Some(to_table(&self.typography)?),
            spacing: Some(to_table(&self.spacing)?),
            elevation: Some(to_table(&self.elevation)?),
            radii: Some(to_table(&self.radii)?),
            animations: Some(to_table(&self.animations)?),
        };
        Ok(toml::to_string_pretty(&file)?)
    }
}

/// Read, parse and validate a theme file
pub fn load_theme_file(path: impl AsRef<Path>) -> Result<ThemeDefinition, ThemeError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("loading theme file {}", path.display());
    ThemeDefinition::from_toml_str(&source)
}

fn builder_from_toml(source: &str) -> Result<ThemeBuilder, ThemeError> {
    let file: ThemeFile = toml::from_str(source)?;

    let base = match file.extends.as_deref() {
        Some(id) => Some(
            ThemePreset::find(id)
                .ok_or_else(|| ThemeError::UnknownPreset(id.to_string()))?
                .theme(),
        ),
        None => None,
    };
    let scheme = file
        .scheme
        .or_else(|| base.as_ref().map(|theme| theme.color_scheme()))
        .unwrap_or_default();

    let mut builder = match &base {
        Some(theme) => ThemeBuilder::from_theme(theme).name(file.name).scheme(scheme),
        None => ThemeBuilder::new(file.name, scheme),
    };

    for (key, value) in file.colors {
        let role = key
            .parse::<ColorRole>()
            .map_err(|_| ThemeError::UnknownColorRole(key.clone()))?;
        builder = builder.color(role, value.parse::<Color>()?);
    }

    let base = base.as_deref();
    if let Some(table) = file.typography {
        let start = base.map(|t| t.typography.clone()).unwrap_or_default();
        builder = builder.typography(overlay(&start, table)?);
    }
    if let Some(table) = file.spacing {
        let start = base.map(|t| t.spacing.clone()).unwrap_or_default();
        builder = builder.spacing(overlay(&start, table)?);
    }
    if let Some(table) = file.elevation {
        let start = base
            .map(|t| t.elevation.clone())
            .unwrap_or_else(|| match scheme {
                ColorScheme::Light => ElevationTokens::light(),
                ColorScheme::Dark => ElevationTokens::dark(),
            });
        builder = builder.elevation(overlay(&start, table)?);
    }
    if let Some(table) = file.radii {
        let start = base.map(|t| t.radii.clone()).unwrap_or_default();
        builder = builder.radii(overlay(&start, table)?);
    }
    if let Some(table) = file.animations {
        let start = base.map(|t| t.animations.clone()).unwrap_or_default();
        builder = builder.animations(overlay(&start, table)?);
    }

    Ok(builder)
}

fn to_table<T: Serialize>(tokens: &T) -> Result<toml::Table, ThemeError> {
    Ok(toml::Table::try_from(tokens)?)
}

/// Lay `patch` over the serialized form of `base` and read it back
fn overlay<T>(base: &T, patch: toml::Table) -> Result<T, ThemeError>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged = to_table(base)?;
    merge(&mut merged, patch);
    Ok(toml::Value::Table(merged).try_into()?)
}

fn merge(target: &mut toml::Table, patch: toml::Table) {
    for (key, value) in patch {
        match (target.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(nested)) => {
                merge(existing, nested)
            }
            (_, value) => {
                target.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extends_fills_missing_tokens() {
        let theme = ThemeDefinition::from_toml_str(
            r##"
            name = "Brand"
            extends = "light"

            [colors]
            primary = "#0b3c7a"

            [spacing]
            md = 14.0
            "##,
        )
        .unwrap();

        let light = ThemePreset::Light.theme();
        assert_eq!(theme.name(), "Brand");
        assert_eq!(theme.color_scheme(), ColorScheme::Light);
        assert_eq!(theme.color(ColorRole::Primary), Color::from_hex(0x0B3C7A));
        assert_eq!(theme.color(ColorRole::Secondary), light.color(ColorRole::Secondary));
        assert_eq!(theme.spacing().md, 14.0);
        assert_eq!(theme.spacing().lg, light.spacing().lg);
        assert_eq!(theme.preset(), None);
    }

    #[test]
    fn test_nested_typography_patch() {
        let theme = ThemeDefinition::from_toml_str(
            r#"
            name = "Big Body"
            extends = "dark"

            [typography.body-large]
            size = 18.0
            "#,
        )
        .unwrap();
        let body = theme.font(TypographyToken::BodyLarge);
        assert_eq!(body.size, 18.0);
        assert_eq!(body.weight, FontWeight::Regular);
        assert_eq!(theme.color_scheme(), ColorScheme::Dark);
    }

    #[test]
    fn test_unknown_role_and_preset() {
        let err = ThemeDefinition::from_toml_str(
            r##"
            name = "Typo"
            extends = "light"
            [colors]
            primray = "#000000"
            "##,
        )
        .unwrap_err();
        assert!(matches!(err, ThemeError::UnknownColorRole(ref name) if name == "primray"));

        let err = ThemeDefinition::from_toml_str("name = \"X\"\nextends = \"solarized\"\n")
            .unwrap_err();
        assert!(matches!(err, ThemeError::UnknownPreset(ref id) if id == "solarized"));
    }

    #[test]
    fn test_malformed_color() {
        let err = ThemeDefinition::from_toml_str(
            r#"
            name = "Bad"
            extends = "light"
            [colors]
            primary = "blue"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ThemeError::Color(_)));
    }

    #[test]
    fn test_missing_name_is_parse_error() {
        let err = ThemeDefinition::from_toml_str("scheme = \"dark\"\n").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_theme_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }));
    }
}
