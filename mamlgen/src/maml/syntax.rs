//! Syntax section rendering, one variant per real parameter set.

use crate::resolve::{self, ParameterSet};
use crate::schema::{CommandDescriptor, ParameterDescriptor, ParameterSetMembership};
use crate::typename;

use super::xml_writer::{XmlWriter, bool_attr, escape_xml};

/// Renders `command:syntax` for a command. Emits nothing at all when no
/// parameter carries a set membership.
pub(super) fn render_syntax(writer: &mut XmlWriter, command: &CommandDescriptor) {
    let Some(grouped) = resolve::syntax_sets(command) else {
        return;
    };

    writer.open("command:syntax");
    for set in &grouped.sets {
        render_syntax_item(writer, command, set, &grouped.common);
    }
    writer.close("command:syntax");
}

fn render_syntax_item(
    writer: &mut XmlWriter,
    command: &CommandDescriptor,
    set: &ParameterSet<'_>,
    common: &[&ParameterDescriptor],
) {
    writer.open("command:syntaxItem");
    writer.element("maml:name", &command.full_name());
    for (parameter, membership) in &set.members {
        render_syntax_parameter(writer, parameter, membership);
    }
    for parameter in common {
        // Prefer the membership declared for this specific set; a parameter
        // declared only under the all-sets marker falls back to its first
        // membership.
        let membership =
            resolve::membership_for_set(parameter, &set.name).or_else(|| parameter.sets.first());
        if let Some(chosen) = membership {
            render_syntax_parameter(writer, parameter, chosen);
        }
    }
    writer.close("command:syntaxItem");
}

fn render_syntax_parameter(
    writer: &mut XmlWriter,
    parameter: &ParameterDescriptor,
    membership: &ParameterSetMembership,
) {
    writer.open(&format!(
        "command:parameter required=\"{}\" position=\"{}\"",
        bool_attr(membership.mandatory),
        position_attr(membership.position),
    ));
    writer.element("maml:name", &parameter.name);
    writer.line(&format!(
        "<command:parameterValue required=\"true\">{}</command:parameterValue>",
        escape_xml(&typename::syntax_display_name(&parameter.value_type)),
    ));
    writer.close("command:parameter");
}

/// Positions render 1-based; a negative declared position means named-only.
/// Widened before the increment so a descriptor declaring `i32::MAX` cannot
/// overflow.
pub(super) fn position_attr(position: i32) -> String {
    if position < 0 {
        "named".to_owned()
    } else {
        (i64::from(position) + 1).to_string()
    }
}
