//! Command dispatch.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use swatch_core::Color;
use swatch_theme::contrast::ContrastResult;
use swatch_theme::validation::{REQUIRED_CONTRAST_PAIRS, RECOMMENDED_CONTRAST_PAIRS};
use swatch_theme::{
    ColorRole, ColorScheme, ComplianceLevel, ThemeCategory, ThemeDefinition, ThemePreset,
    ThemeRegistry, ValidationReport,
};

use crate::cli::{Cli, Command, OutputFormat};
use crate::config::SwatchConfig;
use crate::output;

pub fn handle(cli: Cli) -> Result<ExitCode> {
    let format = cli.output;
    let config = || -> Result<SwatchConfig> {
        let cwd = std::env::current_dir().context("Failed to read working directory")?;
        SwatchConfig::discover(cli.config.as_deref(), &cwd)
    };

    match cli.command {
        Command::List { category } => list(format, category),
        Command::Contrast {
            foreground,
            background,
        } => contrast(format, &foreground, &background),
        Command::Show { theme } => show(format, &config()?.registry()?, &theme),
        Command::Validate { theme } => validate(format, &config()?.registry()?, &theme),
        Command::Export { theme, file } => export(format, &config()?.registry()?, &theme, file),
        Command::Audit { minimum } => {
            let config = config()?;
            let minimum = minimum.unwrap_or(config.audit.minimum);
            audit(format, &config, minimum)
        }
    }
}

/// Find a theme by registered name or preset id, then as a file path.
///
/// Files are validated unless `validated` is false. Registered themes come
/// from the config and are returned as loaded.
fn resolve(registry: &ThemeRegistry, arg: &str, validated: bool) -> Result<Arc<ThemeDefinition>> {
    if let Some(theme) = registry.theme(arg) {
        return Ok(theme);
    }
    let path = Path::new(arg);
    if !path.is_file() {
        bail!("Unknown theme `{arg}`: not a preset, a configured theme or a file");
    }
    let theme = if validated {
        swatch_theme::load_theme_file(path)?
    } else {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        ThemeDefinition::from_toml_str_unvalidated(&source)
            .with_context(|| format!("Failed to parse {}", path.display()))?
    };
    Ok(Arc::new(theme))
}

#[derive(Serialize)]
struct PresetRow {
    id: &'static str,
    name: &'static str,
    scheme: ColorScheme,
    categories: Vec<ThemeCategory>,
}

fn list(format: OutputFormat, category: Option<ThemeCategory>) -> Result<ExitCode> {
    let presets: Vec<ThemePreset> = match category {
        Some(category) => category.presets().to_vec(),
        None => ThemePreset::all().to_vec(),
    };
    let rows: Vec<PresetRow> = presets
        .into_iter()
        .map(|preset| PresetRow {
            id: preset.id(),
            name: preset.display_name(),
            scheme: preset.color_scheme(),
            categories: preset.categories(),
        })
        .collect();

    output::emit(format, &rows, |rows| {
        let mut table = vec![vec![
            "ID".to_string(),
            "NAME".to_string(),
            "SCHEME".to_string(),
            "CATEGORIES".to_string(),
        ]];
        table.extend(rows.iter().map(|row| {
            vec![
                row.id.to_string(),
                row.name.to_string(),
                row.scheme.to_string(),
                row.categories
                    .iter()
                    .map(|category| category.id())
                    .collect::<Vec<_>>()
                    .join(", "),
            ]
        }));
        output::table(&table)
    })?;
    Ok(ExitCode::SUCCESS)
}

fn show(format: OutputFormat, registry: &ThemeRegistry, name: &str) -> Result<ExitCode> {
    let theme = resolve(registry, name, true)?;
    match format {
        OutputFormat::Json => output::emit(format, theme.as_ref(), |_| String::new())?,
        OutputFormat::Text => println!("{}", theme.to_toml_string()?.trim_end()),
    }
    Ok(ExitCode::SUCCESS)
}

#[derive(Serialize)]
struct ContrastReport {
    foreground: Color,
    background: Color,
    #[serde(flatten)]
    result: ContrastResult,
}

fn contrast(format: OutputFormat, foreground: &str, background: &str) -> Result<ExitCode> {
    let foreground: Color = foreground
        .parse()
        .with_context(|| format!("Invalid foreground color `{foreground}`"))?;
    let background: Color = background
        .parse()
        .with_context(|| format!("Invalid background color `{background}`"))?;

    let report = ContrastReport {
        foreground,
        background,
        result: ContrastResult::between(foreground, background),
    };
    output::emit(format, &report, |r| {
        format!(
            "{} on {}: {:.2}:1 ({})",
            r.foreground, r.background, r.result.ratio, r.result.level
        )
    })?;
    Ok(ExitCode::SUCCESS)
}

#[derive(Serialize)]
struct ValidateReport<'a> {
    theme: &'a str,
    #[serde(flatten)]
    report: &'a ValidationReport,
}

fn validate(format: OutputFormat, registry: &ThemeRegistry, name: &str) -> Result<ExitCode> {
    let theme = resolve(registry, name, false)?;
    let report = theme.validate();

    output::emit(
        format,
        &ValidateReport {
            theme: theme.name(),
            report: &report,
        },
        |r| {
            if r.report.is_clean() {
                return format!("{}: no issues", r.theme);
            }
            let mut text = format!("{}:\n", r.theme);
            for issue in &r.report.issues {
                text.push_str(&format!("  {:<8} {}\n", issue.severity, issue.message));
            }
            text
        },
    )?;

    Ok(if report.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn export(
    format: OutputFormat,
    registry: &ThemeRegistry,
    name: &str,
    file: Option<PathBuf>,
) -> Result<ExitCode> {
    let theme = resolve(registry, name, true)?;
    theme.ensure_valid()?;
    let source = theme.to_toml_string()?;

    match file {
        None => match format {
            OutputFormat::Json => output::emit(
                format,
                &serde_json::json!({ "theme": theme.name(), "toml": source }),
                |_| String::new(),
            )?,
            OutputFormat::Text => print!("{source}"),
        },
        Some(path) => {
            fs::write(&path, &source)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::debug!("exported {} to {}", theme.name(), path.display());
            output::emit(
                format,
                &serde_json::json!({ "theme": theme.name(), "path": path }),
                |_| format!("Exported {} to {}", theme.name(), path.display()),
            )?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

#[derive(Debug, PartialEq, Serialize)]
struct AuditRow {
    theme: String,
    foreground: ColorRole,
    background: ColorRole,
    ratio: f64,
    level: ComplianceLevel,
    pass: bool,
}

/// Contrast of every text pair of `theme`, judged against `minimum`
fn audit_theme(theme: &ThemeDefinition, minimum: ComplianceLevel) -> Vec<AuditRow> {
    REQUIRED_CONTRAST_PAIRS
        .iter()
        .chain(RECOMMENDED_CONTRAST_PAIRS.iter())
        .map(|&(fg, bg)| {
            let result = ContrastResult::between(theme.color(fg), theme.color(bg));
            AuditRow {
                theme: theme.name().to_string(),
                foreground: fg,
                background: bg,
                ratio: result.ratio,
                level: result.level,
                pass: result.passes(minimum),
            }
        })
        .collect()
}

fn audit(format: OutputFormat, config: &SwatchConfig, minimum: ComplianceLevel) -> Result<ExitCode> {
    let mut themes: Vec<Arc<ThemeDefinition>> =
        ThemePreset::all().iter().map(|preset| preset.theme()).collect();
    themes.extend(config.load_themes()?.into_iter().map(Arc::new));

    let rows: Vec<AuditRow> = themes
        .iter()
        .flat_map(|theme| audit_theme(theme, minimum))
        .collect();
    let failures = rows.iter().filter(|row| !row.pass).count();
    tracing::debug!(
        "audited {} themes at {}: {} failing pairs",
        themes.len(),
        minimum,
        failures
    );

    output::emit(format, &rows, |rows| {
        let mut table = vec![vec![
            "THEME".to_string(),
            "PAIR".to_string(),
            "RATIO".to_string(),
            "LEVEL".to_string(),
            String::new(),
        ]];
        table.extend(rows.iter().map(|row| {
            vec![
                row.theme.clone(),
                format!("{}/{}", row.foreground, row.background),
                format!("{:.2}", row.ratio),
                row.level.to_string(),
                if row.pass { "ok" } else { "FAIL" }.to_string(),
            ]
        }));
        let mut text = output::table(&table);
        text.push_str(&format!(
            "\n{} of {} pairs below {}\n",
            failures,
            rows.len(),
            minimum
        ));
        text
    })?;

    Ok(if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
