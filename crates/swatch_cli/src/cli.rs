//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use swatch_theme::{ComplianceLevel, ThemeCategory};

/// Inspect, validate and audit Swatch themes
#[derive(Parser, Debug)]
#[command(name = "swatch", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (default: ./swatch.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List built-in presets with their scheme and categories
    List {
        /// Only presets in this category
        #[arg(long)]
        category: Option<ThemeCategory>,
    },
    /// Print every resolved token of a theme
    Show {
        /// Preset id, configured theme name or path to a theme file
        theme: String,
    },
    /// Contrast ratio and WCAG level of two colors
    Contrast {
        /// Foreground color, e.g. "#1a1c1e"
        foreground: String,
        /// Background color, e.g. "#ffffff"
        background: String,
    },
    /// Validate a theme; exits non-zero when it has errors
    Validate {
        /// Preset id, configured theme name or path to a theme file
        theme: String,
    },
    /// Export a theme as TOML
    Export {
        /// Preset id or configured theme name
        theme: String,
        /// Write to this file instead of stdout
        #[arg(short = 'f', long = "file")]
        file: Option<PathBuf>,
    },
    /// Audit the text pairs of every preset and configured theme
    Audit {
        /// Lowest acceptable level (overrides [audit] minimum)
        #[arg(long)]
        minimum: Option<ComplianceLevel>,
    },
}
