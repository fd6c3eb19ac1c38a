//! Parameter-set resolution.
//!
//! Two concerns live here: choosing the single "representative" membership
//! that describes a parameter outside the syntax section, and grouping
//! memberships into the per-set parameter lists the syntax section renders.

use crate::schema::{
    ALL_PARAMETER_SETS, CommandDescriptor, ParameterDescriptor, ParameterSetMembership,
};

/// One real parameter set as rendered in the syntax section.
#[derive(Debug)]
pub struct ParameterSet<'a> {
    /// Set name with first-seen casing.
    pub name: String,
    /// Members in first-seen order, each with the membership that placed the
    /// parameter in this set.
    pub members: Vec<(&'a ParameterDescriptor, &'a ParameterSetMembership)>,
}

/// Parameter sets grouped for syntax rendering.
#[derive(Debug)]
pub struct SyntaxSets<'a> {
    /// Real sets in first-seen order, one syntax variant each.
    pub sets: Vec<ParameterSet<'a>>,
    /// Members of the all-sets marker, appended to every variant. Empty when
    /// the command has a single set and no merge applies.
    pub common: Vec<&'a ParameterDescriptor>,
}

/// Selects the membership used to describe `parameter` in the parameter-list
/// section.
///
/// The command's default set wins on a case-insensitive exact match; failing
/// that, the last empty or all-sets membership; failing that, the first
/// membership in declaration order. Returns `None` only for parameters with
/// no memberships at all, which are not help-eligible.
#[must_use]
pub fn representative<'a>(
    command: &CommandDescriptor,
    parameter: &'a ParameterDescriptor,
) -> Option<&'a ParameterSetMembership> {
    let first = parameter.sets.first()?;
    if parameter.sets.len() == 1 {
        return Some(first);
    }

    let default_set = command.default_parameter_set.as_deref().unwrap_or("");
    let mut fallback = None;
    for membership in &parameter.sets {
        let mut set = membership.set_name.as_str();
        if membership.is_all_sets() {
            set = "";
            fallback = Some(membership);
        }
        if set.eq_ignore_ascii_case(default_set) {
            return Some(membership);
        }
    }
    Some(fallback.unwrap_or(first))
}

/// Finds the membership placing `parameter` in the named set, matched
/// case-insensitively.
#[must_use]
pub fn membership_for_set<'a>(
    parameter: &'a ParameterDescriptor,
    set_name: &str,
) -> Option<&'a ParameterSetMembership> {
    parameter
        .sets
        .iter()
        .find(|membership| membership.set_name.eq_ignore_ascii_case(set_name))
}

/// Groups a command's parameters by set for syntax rendering.
///
/// Set names compare case-insensitively with first-seen casing retained.
/// When the all-sets marker coexists with more than one real set it is
/// dropped as a standalone set but its members are kept for appending to
/// every variant; a lone surviving set needs no merge. Returns `None` when
/// no parameter carries any membership, in which case no syntax section is
/// rendered.
#[must_use]
pub fn syntax_sets(command: &CommandDescriptor) -> Option<SyntaxSets<'_>> {
    let mut sets: Vec<ParameterSet<'_>> = Vec::new();
    for parameter in &command.parameters {
        for membership in &parameter.sets {
            if let Some(set) = sets
                .iter_mut()
                .find(|candidate| candidate.name.eq_ignore_ascii_case(&membership.set_name))
            {
                set.members.push((parameter, membership));
            } else {
                sets.push(ParameterSet {
                    name: membership.set_name.clone(),
                    members: vec![(parameter, membership)],
                });
            }
        }
    }
    if sets.is_empty() {
        return None;
    }

    let mut common = Vec::new();
    if sets.len() > 1 {
        if let Some(index) = sets
            .iter()
            .position(|set| set.name.eq_ignore_ascii_case(ALL_PARAMETER_SETS))
        {
            let marker = sets.remove(index);
            common = marker
                .members
                .into_iter()
                .map(|(parameter, _)| parameter)
                .collect();
        }
    }
    if sets.len() == 1 {
        common.clear();
    }

    Some(SyntaxSets { sets, common })
}
