//! Theme validation
//!
//! [`ThemeValidator`] audits a theme and produces a [`ValidationReport`].
//! Error-severity issues make [`ThemeBuilder::build`](crate::ThemeBuilder::build)
//! reject the theme; warnings and infos are advisory.

use serde::Serialize;
use std::fmt::{Display, Formatter};

use crate::contrast::{contrast_ratio, AA_RATIO};
use crate::theme::ThemeDefinition;
use crate::tokens::*;

/// Smallest font size considered legible
pub const MIN_FONT_SIZE: f32 = 11.0;

/// Smallest spacing step, in points
pub const MIN_SPACING: f32 = 4.0;

/// Text/background pairs that must reach AA. Failing one is an error.
pub const REQUIRED_CONTRAST_PAIRS: [(ColorRole, ColorRole); 6] = [
    (ColorRole::OnPrimary, ColorRole::Primary),
    (ColorRole::OnSecondary, ColorRole::Secondary),
    (ColorRole::OnBackground, ColorRole::Background),
    (ColorRole::OnSurface, ColorRole::Surface),
    (ColorRole::OnError, ColorRole::Error),
    (ColorRole::PrimaryText, ColorRole::Background),
];

/// Text/background pairs that should reach AA. Failing one is a warning.
pub const RECOMMENDED_CONTRAST_PAIRS: [(ColorRole, ColorRole); 5] = [
    (ColorRole::OnSuccess, ColorRole::Success),
    (ColorRole::OnWarning, ColorRole::Warning),
    (ColorRole::OnInfo, ColorRole::Info),
    (ColorRole::OnSurfaceVariant, ColorRole::SurfaceVariant),
    (ColorRole::SecondaryText, ColorRole::Background),
];

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

/// What a validation issue is about
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    LowContrast {
        foreground: ColorRole,
        background: ColorRole,
        ratio: f64,
    },
    DuplicateBrandColors,
    TypographyHierarchy {
        token: TypographyToken,
    },
    FontTooSmall {
        token: TypographyToken,
        size: f32,
    },
    SpacingTooSmall {
        token: SpacingToken,
        value: f32,
    },
    SpacingOrder {
        token: SpacingToken,
    },
    ElevationOrder {
        token: ElevationToken,
    },
    AnimationOrder {
        token: AnimationToken,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    #[serde(flatten)]
    pub kind: IssueKind,
    pub message: String,
}

impl Display for ValidationIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Every issue found in one theme
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    fn push(&mut self, severity: Severity, kind: IssueKind, message: String) {
        self.issues.push(ValidationIssue {
            severity,
            kind,
            message,
        });
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.with_severity(Severity::Warning)
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.issues.is_empty() {
            return f.write_str("no issues");
        }
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// Stateless theme auditor
pub struct ThemeValidator;

impl ThemeValidator {
    pub fn validate(theme: &ThemeDefinition) -> ValidationReport {
        let mut report = ValidationReport::default();
        Self::check_contrast(theme.colors(), &mut report);
        Self::check_brand_colors(theme.colors(), &mut report);
        Self::check_typography(theme.typography(), &mut report);
        Self::check_spacing(theme.spacing(), &mut report);
        Self::check_elevation(theme.elevation(), &mut report);
        Self::check_animations(theme.animations(), &mut report);
        report
    }

    fn check_contrast(colors: &ColorTokens, report: &mut ValidationReport) {
        let required = REQUIRED_CONTRAST_PAIRS
            .iter()
            .map(|pair| (pair, Severity::Error));
        let recommended = RECOMMENDED_CONTRAST_PAIRS
            .iter()
            .map(|pair| (pair, Severity::Warning));

        for (&(fg, bg), severity) in required.chain(recommended) {
            let ratio = contrast_ratio(colors.get(fg), colors.get(bg));
            if ratio < AA_RATIO {
                report.push(
                    severity,
                    IssueKind::LowContrast {
                        foreground: fg,
                        background: bg,
                        ratio,
                    },
                    format!("{fg} on {bg} has contrast {ratio:.2}:1, below {AA_RATIO}:1"),
                );
            }
        }
    }

    fn check_brand_colors(colors: &ColorTokens, report: &mut ValidationReport) {
        if colors.primary == colors.secondary {
            report.push(
                Severity::Warning,
                IssueKind::DuplicateBrandColors,
                "primary and secondary are the same color".to_string(),
            );
        }
    }

    fn check_typography(typography: &TypographyTokens, report: &mut ValidationReport) {
        let mut previous_leader: Option<&FontDescriptor> = None;
        for group in TypographyToken::GROUPS {
            let leader = typography.get(group[0]);
            if let Some(prev) = previous_leader {
                if leader.size > prev.size {
                    report.push(
                        Severity::Warning,
                        IssueKind::TypographyHierarchy { token: group[0] },
                        format!(
                            "{} ({}pt) is larger than the group above it ({}pt)",
                            group[0].name(),
                            leader.size,
                            prev.size
                        ),
                    );
                }
            }
            previous_leader = Some(leader);

            for pair in group.windows(2) {
                let (larger, smaller) = (typography.get(pair[0]), typography.get(pair[1]));
                if smaller.size > larger.size {
                    report.push(
                        Severity::Warning,
                        IssueKind::TypographyHierarchy { token: pair[1] },
                        format!(
                            "{} ({}pt) is larger than {} ({}pt)",
                            pair[1].name(),
                            smaller.size,
                            pair[0].name(),
                            larger.size
                        ),
                    );
                }
            }
        }

        for token in TypographyToken::ALL {
            let size = typography.get(token).size;
            if size < MIN_FONT_SIZE {
                report.push(
                    Severity::Warning,
                    IssueKind::FontTooSmall { token, size },
                    format!(
                        "{} is {size}pt, below the {MIN_FONT_SIZE}pt minimum",
                        token.name()
                    ),
                );
            }
        }
    }

    fn check_spacing(spacing: &SpacingTokens, report: &mut ValidationReport) {
        for token in SpacingToken::ALL {
            let value = spacing.get(token);
            if value < MIN_SPACING {
                report.push(
                    Severity::Warning,
                    IssueKind::SpacingTooSmall { token, value },
                    format!(
                        "spacing {} is {value}pt, below the {MIN_SPACING}pt minimum",
                        token.name()
                    ),
                );
            }
        }
        for pair in SpacingToken::ALL.windows(2) {
            if spacing.get(pair[1]) < spacing.get(pair[0]) {
                report.push(
                    Severity::Info,
                    IssueKind::SpacingOrder { token: pair[1] },
                    format!(
                        "spacing {} is smaller than {}",
                        pair[1].name(),
                        pair[0].name()
                    ),
                );
            }
        }
    }

    fn check_elevation(elevation: &ElevationTokens, report: &mut ValidationReport) {
        for pair in ElevationToken::ALL.windows(2) {
            if elevation.get(pair[1]).blur < elevation.get(pair[0]).blur {
                report.push(
                    Severity::Info,
                    IssueKind::ElevationOrder { token: pair[1] },
                    format!("elevation {:?} blurs less than {:?}", pair[1], pair[0]),
                );
            }
        }
    }

    fn check_animations(animations: &AnimationTokens, report: &mut ValidationReport) {
        for pair in AnimationToken::ALL.windows(2) {
            if animations.get(pair[1]) < animations.get(pair[0]) {
                report.push(
                    Severity::Info,
                    IssueKind::AnimationOrder { token: pair[1] },
                    format!("animation {:?} is shorter than {:?}", pair[1], pair[0]),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ThemeBuilder;
    use crate::presets::ThemePreset;
    use crate::theme::ColorScheme;
    use swatch_core::Color;

    fn light() -> ThemeBuilder {
        ThemeBuilder::from_theme(&ThemePreset::Light.theme())
    }

    #[test]
    fn test_light_preset_is_clean() {
        let report = ThemePreset::Light.theme().validate();
        assert!(report.is_clean(), "{report}");
    }

    #[test]
    fn test_low_text_contrast_is_error() {
        let theme = light()
            .color(ColorRole::OnBackground, Color::from_hex(0xEEEEEE))
            .build_unvalidated()
            .unwrap();
        let report = ThemeValidator::validate(&theme);
        assert!(report.has_errors());
        let issue = report.errors().next().unwrap();
        assert!(matches!(
            issue.kind,
            IssueKind::LowContrast {
                foreground: ColorRole::OnBackground,
                background: ColorRole::Background,
                ..
            }
        ));
    }

    #[test]
    fn test_low_status_contrast_is_warning() {
        let theme = light()
            .color(ColorRole::OnWarning, Color::from_hex(0xB25E00))
            .build_unvalidated()
            .unwrap();
        let report = theme.validate();
        assert!(!report.has_errors());
        assert_eq!(report.warnings().count(), 1);
    }

    #[test]
    fn test_duplicate_brand_colors() {
        let primary = ThemePreset::Light.theme().color(ColorRole::Primary);
        let theme = light()
            .color(ColorRole::Secondary, primary)
            .build_unvalidated()
            .unwrap();
        let report = theme.validate();
        assert!(report
            .warnings()
            .any(|i| i.kind == IssueKind::DuplicateBrandColors));
    }

    #[test]
    fn test_typography_hierarchy_and_minimum() {
        let mut typography = TypographyTokens::default();
        typography.display_small.size = 60.0;
        typography.label_small.size = 9.0;
        typography.label_large.size = 18.0;
        let theme = light().typography(typography).build_unvalidated().unwrap();
        let report = theme.validate();

        let kinds: Vec<&IssueKind> = report.warnings().map(|i| &i.kind).collect();
        assert!(kinds.contains(&&IssueKind::TypographyHierarchy {
            token: TypographyToken::DisplaySmall
        }));
        assert!(kinds.contains(&&IssueKind::TypographyHierarchy {
            token: TypographyToken::LabelLarge
        }));
        assert!(kinds.contains(&&IssueKind::FontTooSmall {
            token: TypographyToken::LabelSmall,
            size: 9.0
        }));
        assert!(!report.has_errors());
    }

    #[test]
    fn test_spacing_checks() {
        let spacing = SpacingTokens {
            xs: 2.0,
            sm: 8.0,
            md: 6.0,
            ..SpacingTokens::default()
        };
        let theme = ThemeBuilder::from_theme(&ThemePreset::Dark.theme())
            .spacing(spacing)
            .build_unvalidated()
            .unwrap();
        let report = theme.validate();
        assert_eq!(report.warnings().count(), 1);
        assert_eq!(
            report.with_severity(Severity::Info).next().map(|i| &i.kind),
            Some(&IssueKind::SpacingOrder {
                token: SpacingToken::Md
            })
        );
    }

    #[test]
    fn test_ordering_infos_do_not_block() {
        let theme = ThemeBuilder::new("Calm", ColorScheme::Light)
            .colors(ThemePreset::Light.theme().colors().clone())
            .animations(AnimationTokens {
                fast: 300,
                normal: 200,
                slow: 350,
                slower: 500,
            })
            .build()
            .unwrap();
        let report = theme.validate();
        assert_eq!(report.with_severity(Severity::Info).count(), 1);
        assert!(!report.has_errors());
    }
}
