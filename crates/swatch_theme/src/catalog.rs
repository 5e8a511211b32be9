//! Theme categories
//!
//! A static grouping of the built-in presets for pickers and demos. Every
//! category is non-empty and owns at least one preset no other category lists.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::presets::ThemePreset;
use crate::theme::ThemeDefinition;

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeCategory {
    Business,
    Creative,
    Nature,
    Tech,
    Minimalist,
    Accessibility,
}

impl ThemeCategory {
    pub const ALL: [ThemeCategory; 6] = [
        ThemeCategory::Business,
        ThemeCategory::Creative,
        ThemeCategory::Nature,
        ThemeCategory::Tech,
        ThemeCategory::Minimalist,
        ThemeCategory::Accessibility,
    ];

    pub fn all() -> &'static [ThemeCategory] {
        &Self::ALL
    }

    pub fn id(self) -> &'static str {
        match self {
            ThemeCategory::Business => "business",
            ThemeCategory::Creative => "creative",
            ThemeCategory::Nature => "nature",
            ThemeCategory::Tech => "tech",
            ThemeCategory::Minimalist => "minimalist",
            ThemeCategory::Accessibility => "accessibility",
        }
    }

    /// Presets in this category, most representative first
    pub fn presets(self) -> &'static [ThemePreset] {
        match self {
            ThemeCategory::Business => &[ThemePreset::Corporate, ThemePreset::Light],
            ThemeCategory::Creative => &[ThemePreset::Sunset],
            ThemeCategory::Nature => &[ThemePreset::Forest, ThemePreset::Ocean],
            ThemeCategory::Tech => &[ThemePreset::Midnight, ThemePreset::Dark],
            ThemeCategory::Minimalist => &[ThemePreset::Paper, ThemePreset::Light],
            ThemeCategory::Accessibility => &[ThemePreset::HighContrast],
        }
    }

    /// Resolved themes for [`presets`](Self::presets)
    pub fn themes(self) -> Vec<Arc<ThemeDefinition>> {
        self.presets().iter().map(|preset| preset.theme()).collect()
    }
}

impl Display for ThemeCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ThemeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeCategory::ALL
            .iter()
            .copied()
            .find(|category| category.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown theme category `{s}`"))
    }
}

/// Themes of one category
pub fn themes_by_category(category: ThemeCategory) -> Vec<Arc<ThemeDefinition>> {
    category.themes()
}

/// A random built-in preset, using the thread-local RNG
pub fn random_theme() -> Arc<ThemeDefinition> {
    random_theme_with(&mut rand::thread_rng())
}

/// A random built-in preset drawn from `rng`
pub fn random_theme_with<R: Rng + ?Sized>(rng: &mut R) -> Arc<ThemeDefinition> {
    ThemePreset::all()
        .choose(rng)
        .copied()
        .unwrap_or(ThemePreset::Light)
        .theme()
}
