//! Swatch Theme System
//!
//! Toolkit-independent theming: design tokens, an explicitly owned theme
//! registry and WCAG contrast validation.
//!
//! # Overview
//!
//! - **Design tokens**: colors by semantic role, typography, spacing,
//!   elevation, corner radii and animation durations
//! - **Themes**: immutable [`ThemeDefinition`] values, shared as `Arc`
//! - **Registry**: [`ThemeRegistry`] holds the current theme, swaps it
//!   atomically and notifies subscribers
//! - **Validation**: [`ThemeBuilder::build`] rejects incomplete themes and
//!   unreadable text pairs; [`ThemeValidator`] reports the rest
//! - **Presets and categories**: nine built-in themes grouped by
//!   [`ThemeCategory`]
//!
//! # Quick Start
//!
//! ```rust
//! use swatch_theme::{ColorRole, ThemePreset, ThemeRegistry};
//!
//! let registry = ThemeRegistry::default();
//! registry.subscribe(|theme| println!("now using {}", theme.name()));
//!
//! registry.toggle_theme();
//! let theme = registry.current_theme();
//! assert_eq!(theme.preset(), Some(ThemePreset::Dark));
//!
//! let primary = theme.color(ColorRole::Primary);
//! let padding = theme.spacing().md;
//! # let _ = (primary, padding);
//! ```
//!
//! # Contrast
//!
//! ```rust
//! use swatch_core::Color;
//! use swatch_theme::contrast::{best_accessible_color, ComplianceLevel};
//!
//! let text = best_accessible_color(
//!     Color::WHITE,
//!     &[Color::from_hex(0xAAAAAA), Color::BLACK],
//!     ComplianceLevel::Aa,
//! );
//! assert_eq!(text, Some(Color::BLACK));
//! ```

pub mod builder;
pub mod catalog;
pub mod contrast;
pub mod error;
pub mod file;
pub mod presets;
pub mod registry;
pub mod theme;
pub mod tokens;
pub mod validation;

// Re-export commonly used types
pub use builder::ThemeBuilder;
pub use catalog::{random_theme, random_theme_with, themes_by_category, ThemeCategory};
pub use contrast::{ComplianceLevel, ContrastResult};
pub use error::ThemeError;
pub use file::load_theme_file;
pub use presets::{preset_theme, ThemePreset};
pub use registry::{SubscriptionId, ThemeCallback, ThemeRegistry};
pub use swatch_core::Color;
pub use theme::{ColorScheme, ThemeDefinition};
pub use tokens::*;
pub use validation::{IssueKind, Severity, ThemeValidator, ValidationIssue, ValidationReport};
