//! Command-line interface definitions for `mamlgen`.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};

use mamlgen::maml::OutputGrouping;

/// Artifact grouping selection.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GroupingArg {
    /// One help file covering every command in the module.
    Combined,
    /// One help file per command type.
    Split,
}

impl From<GroupingArg> for OutputGrouping {
    fn from(value: GroupingArg) -> Self {
        match value {
            GroupingArg::Combined => Self::Combined,
            GroupingArg::Split => Self::Split,
        }
    }
}

/// Parsed CLI arguments for `mamlgen`.
#[derive(Debug, Parser)]
#[command(name = "mamlgen")]
#[command(about = "Generate MAML help XML from a module descriptor")]
#[command(version)]
pub struct Args {
    /// Path to the module descriptor JSON.
    #[arg(value_name = "descriptor")]
    pub descriptor: Utf8PathBuf,
    /// Output directory for generated help files.
    #[arg(long, value_name = "path", default_value = ".")]
    pub out_dir: Utf8PathBuf,
    /// Artifact grouping mode.
    #[arg(long, value_enum, default_value_t = GroupingArg::Combined)]
    pub grouping: GroupingArg,
    /// Generate help for a single command only, by case-insensitive
    /// `Verb-Noun` name.
    #[arg(long, value_name = "verb-noun")]
    pub command: Option<String>,
}
