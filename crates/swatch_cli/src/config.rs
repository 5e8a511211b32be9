//! Swatch configuration file handling

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use swatch_theme::{ComplianceLevel, ThemeDefinition, ThemeRegistry};

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "swatch.toml";

/// Top-level Swatch configuration (swatch.toml)
#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct SwatchConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub audit: AuditConfig,

    /// Directory the config was read from; theme files resolve against it
    #[serde(skip)]
    pub root: PathBuf,
}

/// Theme selection
#[derive(Debug, PartialEq, Deserialize)]
pub struct ThemeConfig {
    /// Preset id or the name of a theme from `files`
    #[serde(default = "default_theme")]
    pub default: String,
    /// Theme files, relative to the config file
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

fn default_theme() -> String {
    "light".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default: default_theme(),
            files: Vec::new(),
        }
    }
}

/// Contrast audit settings
#[derive(Debug, PartialEq, Deserialize)]
pub struct AuditConfig {
    #[serde(default = "default_minimum")]
    pub minimum: ComplianceLevel,
}

fn default_minimum() -> ComplianceLevel {
    ComplianceLevel::Aa
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            minimum: default_minimum(),
        }
    }
}

impl SwatchConfig {
    /// Load an explicit config file, or `swatch.toml` in `cwd` when present.
    ///
    /// Without either, the defaults are used.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let candidate = cwd.join(DEFAULT_CONFIG_FILE);
                if candidate.is_file() {
                    Self::load(&candidate)
                } else {
                    tracing::debug!("no {} in {}, using defaults", DEFAULT_CONFIG_FILE, cwd.display());
                    Ok(Self {
                        root: cwd.to_path_buf(),
                        ..Self::default()
                    })
                }
            }
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let mut config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load every configured theme file.
    ///
    /// Files are parsed but not validated, so `validate` and `audit` can
    /// report on themes that would not pass.
    pub fn load_themes(&self) -> Result<Vec<ThemeDefinition>> {
        self.theme
            .files
            .iter()
            .map(|file| {
                let path = self.root.join(file);
                let source = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read theme {}", path.display()))?;
                ThemeDefinition::from_toml_str_unvalidated(&source)
                    .with_context(|| format!("Failed to load theme {}", path.display()))
            })
            .collect()
    }

    /// A registry holding the configured themes, with the configured default
    /// selected. The default must pass validation.
    pub fn registry(&self) -> Result<ThemeRegistry> {
        let registry = ThemeRegistry::default();
        for theme in self.load_themes()? {
            registry.register(theme);
        }
        let default = registry
            .theme(&self.theme.default)
            .with_context(|| format!("Unknown default theme `{}`", self.theme.default))?;
        default
            .ensure_valid()
            .with_context(|| format!("Default theme `{}` is not usable", self.theme.default))?;
        registry.set_theme(default);
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use swatch_theme::ThemePreset;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SwatchConfig::from_toml_str("").unwrap();
        assert_eq!(config.theme.default, "light");
        assert!(config.theme.files.is_empty());
        assert_eq!(config.audit.minimum, ComplianceLevel::Aa);
    }

    #[test]
    fn test_full_config() {
        let config = SwatchConfig::from_toml_str(
            r#"
            [theme]
            default = "dark"
            files = ["themes/brand.toml"]

            [audit]
            minimum = "aaa"
            "#,
        )
        .unwrap();
        assert_eq!(config.theme.default, "dark");
        assert_eq!(config.theme.files, vec![PathBuf::from("themes/brand.toml")]);
        assert_eq!(config.audit.minimum, ComplianceLevel::Aaa);
    }

    #[test]
    fn test_registry_selects_default() {
        let config = SwatchConfig::from_toml_str("[theme]\ndefault = \"midnight\"\n").unwrap();
        let registry = config.registry().unwrap();
        assert_eq!(registry.current_theme().preset(), Some(ThemePreset::Midnight));
    }

    #[test]
    fn test_unknown_default_is_an_error() {
        let config = SwatchConfig::from_toml_str("[theme]\ndefault = \"nope\"\n").unwrap();
        let err = config.registry().unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_missing_explicit_config() {
        let err = SwatchConfig::discover(Some(Path::new("/no/such/swatch.toml")), Path::new("."))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    fn write_config(name: &str, default: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("swatch-config-{}-{}", name, std::process::id()));
        fs::create_dir_all(dir.join("themes")).unwrap();
        fs::write(
            dir.join("themes/bad.toml"),
            "name = \"Bad\"\nextends = \"light\"\n[colors]\non_primary = \"#2b6be0\"\n",
        )
        .unwrap();
        let path = dir.join("swatch.toml");
        fs::write(
            &path,
            format!("[theme]\ndefault = \"{default}\"\nfiles = [\"themes/bad.toml\"]\n"),
        )
        .unwrap();
        path
    }

    #[test]
    fn test_failing_theme_file_still_loads() {
        let config = SwatchConfig::load(&write_config("loads", "light")).unwrap();
        let themes = config.load_themes().unwrap();
        assert_eq!(themes.len(), 1);
        assert!(themes[0].validate().has_errors());

        let registry = config.registry().unwrap();
        assert!(registry.theme("Bad").is_some());
        assert_eq!(registry.current_theme().preset(), Some(ThemePreset::Light));
    }

    #[test]
    fn test_failing_default_is_rejected() {
        let config = SwatchConfig::load(&write_config("default", "Bad")).unwrap();
        let err = config.registry().unwrap_err();
        assert!(format!("{err:#}").contains("failed validation"), "{err:#}");
    }
}
