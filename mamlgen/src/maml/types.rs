//! Types for MAML help generation.

use camino::Utf8PathBuf;

/// Suffix shared by every generated help artifact.
pub const HELP_FILE_SUFFIX: &str = "dll-help.xml";

/// How generated documents are grouped into artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputGrouping {
    /// Every command in one `<ModuleName>.dll-help.xml`.
    Combined,
    /// One `<TypeName>.dll-help.xml` per command.
    Split,
}

/// Configuration for a help generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Root output directory for help artifacts.
    pub out_dir: Utf8PathBuf,
    /// Artifact grouping mode.
    pub grouping: OutputGrouping,
    /// Restricts generation to one command, matched case-insensitively
    /// against `Verb-Noun` names. Every other command is skipped.
    pub command_filter: Option<String>,
}

/// Paths written by a generation run, in write order.
#[derive(Debug, Default)]
pub struct GeneratorOutput {
    files: Vec<Utf8PathBuf>,
}

impl GeneratorOutput {
    pub(super) fn add_file(&mut self, path: Utf8PathBuf) {
        self.files.push(path);
    }

    /// Returns the written artifact paths.
    #[must_use]
    pub fn files(&self) -> &[Utf8PathBuf] {
        &self.files
    }
}
