//! MAML help document generation.

mod render;
mod syntax;
#[cfg(test)]
mod tests;
mod types;
mod xml_writer;

pub use types::{GeneratorConfig, GeneratorOutput, HELP_FILE_SUFFIX, OutputGrouping};

use cap_std::fs_utf8::Dir;

use crate::error::MamlgenError;
use crate::output;
use crate::schema::{CommandDescriptor, ModuleDescriptor};

/// Renders one help document containing the given commands.
#[must_use]
pub fn render_document(module: &ModuleDescriptor, commands: &[&CommandDescriptor]) -> String {
    render::render_document(module, commands)
}

/// Generates help artifacts for a module.
///
/// Commands are processed strictly in export order. Combined grouping writes
/// one `<ModuleName>.dll-help.xml`; split grouping writes one
/// `<TypeName>.dll-help.xml` per command. Returns the written paths.
///
/// # Errors
///
/// Returns an error when the output directory cannot be created or an
/// artifact fails to write; the run aborts on the first failure.
pub fn generate(
    module: &ModuleDescriptor,
    config: &GeneratorConfig,
) -> Result<GeneratorOutput, MamlgenError> {
    let dir = output::ensure_dir(&config.out_dir)?;
    let selected = select_commands(module, config.command_filter.as_deref());

    let mut generated = GeneratorOutput::default();
    match config.grouping {
        OutputGrouping::Combined => {
            let content = render_document(module, &selected);
            let file_name = format!("{}.{HELP_FILE_SUFFIX}", module.name);
            write_artifact(&dir, config, &file_name, &content, &mut generated)?;
        }
        OutputGrouping::Split => {
            for command in selected {
                let content = render_document(module, &[command]);
                let file_name = format!("{}.{HELP_FILE_SUFFIX}", command.type_name);
                write_artifact(&dir, config, &file_name, &content, &mut generated)?;
            }
        }
    }
    Ok(generated)
}

fn select_commands<'a>(
    module: &'a ModuleDescriptor,
    filter: Option<&str>,
) -> Vec<&'a CommandDescriptor> {
    let mut selected = Vec::new();
    for command in &module.commands {
        let name = command.full_name();
        if let Some(wanted) = filter {
            if !name.eq_ignore_ascii_case(wanted) {
                tracing::debug!(command = %name, "skipping command outside selection");
                continue;
            }
        }
        tracing::info!(command = %name, "rendering help");
        selected.push(command);
    }
    selected
}

fn write_artifact(
    dir: &Dir,
    config: &GeneratorConfig,
    file_name: &str,
    content: &str,
    generated: &mut GeneratorOutput,
) -> Result<(), MamlgenError> {
    let path = output::write_artifact(dir, &config.out_dir, file_name, content)?;
    tracing::info!(%path, "wrote help artifact");
    generated.add_file(path);
    Ok(())
}
