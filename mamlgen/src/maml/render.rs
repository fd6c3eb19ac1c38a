//! Document assembly for one command's help tree.
//!
//! Section order is a structural contract: details, description, syntax,
//! parameters, input types, return values, terminating and non-terminating
//! errors, notes, examples, related links. Downstream help consumers locate
//! sections by this sequence.

use crate::describe;
use crate::resolve;
use crate::schema::{
    CommandDescriptor, ExampleEntry, ModuleDescriptor, ParameterDescriptor,
    ParameterSetMembership,
};
use crate::typename;

use super::syntax;
use super::xml_writer::{
    COMMAND_OPEN, HELP_ITEMS_OPEN, XML_DECLARATION, XmlWriter, bool_attr, escape_xml,
};

pub(super) fn render_document(
    module: &ModuleDescriptor,
    commands: &[&CommandDescriptor],
) -> String {
    let mut writer = XmlWriter::new();

    writer.line(XML_DECLARATION);
    writer.line(HELP_ITEMS_OPEN);
    writer.indent();
    for command in commands {
        render_command(&mut writer, module, command);
    }
    writer.outdent();
    writer.line("</helpItems>");

    writer.finish()
}

fn render_command(writer: &mut XmlWriter, module: &ModuleDescriptor, command: &CommandDescriptor) {
    writer.line(COMMAND_OPEN);
    writer.indent();

    render_details(writer, command);
    render_description(writer, command);
    syntax::render_syntax(writer, command);
    render_parameters(writer, command);
    render_input_types(writer);
    render_return_values(writer);
    writer.empty("command:terminatingErrors");
    writer.empty("command:nonTerminatingErrors");
    render_notes(writer, command);
    render_examples(writer, command);
    render_related_links(writer, module, command);

    writer.close("command:command");
}

fn render_details(writer: &mut XmlWriter, command: &CommandDescriptor) {
    writer.open("command:details");
    writer.element("command:name", &command.full_name());

    // The group extension falls back to the noun when no label is declared.
    let group = command
        .group
        .as_deref()
        .filter(|label| !label.is_empty())
        .unwrap_or(&command.noun);
    writer.element("gl:group", group);

    writer.open("maml:description");
    write_paras(writer, command.synopsis.as_deref());
    writer.close("maml:description");

    writer.open("maml:copyright");
    write_paras(writer, Some(&command.copyright));
    writer.close("maml:copyright");

    writer.element("command:verb", &command.verb);
    writer.element("command:noun", &command.noun);
    writer.element("dev:version", &command.version);
    writer.close("command:details");
}

/// Command description with the copyright text trailing after an empty
/// paragraph separator.
fn render_description(writer: &mut XmlWriter, command: &CommandDescriptor) {
    writer.open("maml:description");
    write_paras(writer, command.description.as_deref());
    write_paras(writer, None);
    write_paras(writer, Some(&command.copyright));
    writer.close("maml:description");
}

fn render_parameters(writer: &mut XmlWriter, command: &CommandDescriptor) {
    let eligible: Vec<(&ParameterDescriptor, &ParameterSetMembership)> = command
        .parameters
        .iter()
        .filter_map(|parameter| {
            resolve::representative(command, parameter).map(|membership| (parameter, membership))
        })
        .collect();
    if eligible.is_empty() {
        writer.empty("command:parameters");
        return;
    }

    writer.open("command:parameters");
    for (parameter, membership) in eligible {
        render_parameter_detail(writer, parameter, membership);
    }
    writer.close("command:parameters");
}

fn render_parameter_detail(
    writer: &mut XmlWriter,
    parameter: &ParameterDescriptor,
    membership: &ParameterSetMembership,
) {
    let variable_length = bool_attr(typename::is_variable_length(&parameter.value_type));
    writer.open(&format!(
        "command:parameter required=\"{}\" globbing=\"{}\" pipelineInput=\"{}\" position=\"{}\" variableLength=\"{variable_length}\"",
        bool_attr(membership.mandatory),
        bool_attr(parameter.supports_wildcards),
        pipeline_input_attr(membership),
        syntax::position_attr(membership.position),
    ));
    writer.element("maml:name", &parameter.name);

    writer.open("maml:description");
    write_paras(writer, membership.help_message.as_deref());
    writer.close("maml:description");

    writer.line(&format!(
        "<command:parameterValue required=\"{}\" variableLength=\"{variable_length}\">{}</command:parameterValue>",
        bool_attr(membership.mandatory),
        escape_xml(&parameter.value_type.name),
    ));

    render_dev_type(writer, &parameter.value_type.name);
    writer.close("command:parameter");
}

/// One of four fixed phrasings keyed on the by-value/by-property-name flags.
fn pipeline_input_attr(membership: &ParameterSetMembership) -> &'static str {
    match (
        membership.value_from_pipeline,
        membership.value_from_pipeline_by_property_name,
    ) {
        (false, false) => "false",
        (true, true) => "true (ByValue, ByPropertyName)",
        (false, true) => "true (ByPropertyName)",
        (true, false) => "true (ByValue)",
    }
}

/// Placeholder stanza; input metadata is not computed by this pipeline.
fn render_input_types(writer: &mut XmlWriter) {
    writer.open("command:inputTypes");
    writer.open("command:inputType");
    render_dev_type(writer, "");
    writer.close("command:inputType");
    writer.close("command:inputTypes");
}

/// Placeholder stanza; return metadata is not computed by this pipeline.
fn render_return_values(writer: &mut XmlWriter) {
    writer.open("command:returnValues");
    writer.open("command:returnValue");
    render_dev_type(writer, "");
    writer.close("command:returnValue");
    writer.close("command:returnValues");
}

fn render_dev_type(writer: &mut XmlWriter, name: &str) {
    writer.open("dev:type");
    writer.element("maml:name", name);
    writer.empty("maml:uri");
    writer.open("maml:description");
    write_paras(writer, None);
    writer.close("maml:description");
    writer.close("dev:type");
}

fn render_notes(writer: &mut XmlWriter, command: &CommandDescriptor) {
    let name = command.full_name();
    writer.open("maml:alertSet");
    writer.empty("maml:title");
    writer.open("maml:alert");
    write_paras(
        writer,
        Some(&format!(
            "For more information, type \"Get-Help {name} -detailed\". For technical information, type \"Get-Help {name} -full\".",
        )),
    );
    writer.close("maml:alert");
    writer.close("maml:alertSet");
}

fn render_examples(writer: &mut XmlWriter, command: &CommandDescriptor) {
    if command.examples.is_empty() {
        writer.empty("command:examples");
        return;
    }

    writer.open("command:examples");
    for (index, example) in command.examples.iter().enumerate() {
        render_example(writer, example, index, command.examples.len());
    }
    writer.close("command:examples");
}

fn render_example(writer: &mut XmlWriter, example: &ExampleEntry, index: usize, total: usize) {
    writer.open("command:example");
    if total == 1 {
        writer.element("maml:title", "------------------EXAMPLE------------------");
    } else {
        writer.element(
            "maml:title",
            &format!("------------------EXAMPLE {}-----------------------", index + 1),
        );
    }
    writer.element("dev:code", &example.code);
    writer.open("dev:remarks");
    write_paras(writer, Some(&example.remarks));
    writer.close("dev:remarks");
    writer.close("command:example");
}

fn render_related_links(
    writer: &mut XmlWriter,
    module: &ModuleDescriptor,
    command: &CommandDescriptor,
) {
    if command.related_links.is_empty() {
        writer.empty("maml:relatedLinks");
        return;
    }

    writer.open("maml:relatedLinks");
    for type_name in &command.related_links.cmdlets {
        let target = module
            .commands
            .iter()
            .find(|candidate| candidate.type_name == *type_name);
        if let Some(resolved) = target {
            render_navigation_link(writer, &resolved.full_name());
        } else {
            tracing::warn!(
                reference = %type_name,
                command = %command.full_name(),
                "skipping related link with no matching command",
            );
        }
    }
    for label in &command.related_links.external {
        render_navigation_link(writer, label);
    }
    writer.close("maml:relatedLinks");
}

fn render_navigation_link(writer: &mut XmlWriter, text: &str) {
    writer.open("maml:navigationLink");
    writer.element("maml:linkText", text);
    writer.empty("maml:uri");
    writer.close("maml:navigationLink");
}

fn write_paras(writer: &mut XmlWriter, text: Option<&str>) {
    for paragraph in describe::paragraphs(text) {
        writer.element("maml:para", &paragraph);
    }
}
