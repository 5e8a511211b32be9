use std::path::PathBuf;

use swatch_core::ColorParseError;
use thiserror::Error;

use crate::tokens::ColorRole;
use crate::validation::ValidationReport;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme `{name}` is missing color roles: {}", format_roles(.roles))]
    MissingColorRoles { name: String, roles: Vec<ColorRole> },

    #[error("theme `{name}` failed validation: {report}")]
    Invalid {
        name: String,
        report: ValidationReport,
    },

    #[error("unknown color role `{0}`")]
    UnknownColorRole(String),

    #[error("unknown theme preset `{0}`")]
    UnknownPreset(String),

    #[error(transparent)]
    Color(#[from] ColorParseError),

    #[error("theme file parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("theme file serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to read theme file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn format_roles(roles: &[ColorRole]) -> String {
    roles
        .iter()
        .map(|role| role.name())
        .collect::<Vec<_>>()
        .join(", ")
}
