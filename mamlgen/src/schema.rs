//! Module descriptor schema consumed by `mamlgen`.
//!
//! The descriptor is the JSON handoff from whatever introspects the compiled
//! `PowerShell` module. The generator never inspects live type metadata; every
//! fact it needs is spelled out here.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};

use crate::error::MamlgenError;

/// Distinguished parameter-set name meaning "member of every set".
pub const ALL_PARAMETER_SETS: &str = "__AllParameterSets";

/// A loaded module and the commands it exports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleDescriptor {
    /// Module name, used to name the combined help artifact.
    pub name: String,
    /// Commands carrying the cmdlet identity marker, in export order.
    #[serde(default)]
    pub commands: Vec<CommandDescriptor>,
}

/// Structured metadata for one help-eligible command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandDescriptor {
    /// Cmdlet verb.
    pub verb: String,
    /// Cmdlet noun.
    pub noun: String,
    /// Declaring type name; names the split-mode artifact and anchors
    /// related-link resolution.
    pub type_name: String,
    /// Declared default parameter set, if any.
    #[serde(default)]
    pub default_parameter_set: Option<String>,
    /// Group label for the `gl:group` element; falls back to the noun.
    #[serde(default)]
    pub group: Option<String>,
    /// Short synopsis text.
    #[serde(default)]
    pub synopsis: Option<String>,
    /// Full description text.
    #[serde(default)]
    pub description: Option<String>,
    /// Assembly-level copyright text, supplied rather than computed.
    #[serde(default)]
    pub copyright: String,
    /// Assembly version string.
    #[serde(default)]
    pub version: String,
    /// Parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    /// Usage examples in declaration order; duplicates are allowed.
    #[serde(default)]
    pub examples: Vec<ExampleEntry>,
    /// Related-command references.
    #[serde(default)]
    pub related_links: RelatedLinks,
}

impl CommandDescriptor {
    /// Returns the `Verb-Noun` display name for this command.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}-{}", self.verb, self.noun)
    }
}

/// One declared parameter, shared by reference across the sets it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParameterDescriptor {
    /// Declared parameter name.
    pub name: String,
    /// Declared type metadata.
    #[serde(rename = "type")]
    pub value_type: TypeDescriptor,
    /// Whether the parameter accepts wildcard patterns.
    #[serde(default)]
    pub supports_wildcards: bool,
    /// Parameter-set memberships in declaration order. A parameter with no
    /// memberships is not help-eligible and is skipped everywhere.
    #[serde(default)]
    pub sets: Vec<ParameterSetMembership>,
}

/// Declared type metadata for a parameter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Declared display name, exactly as the parameter-list section shows it.
    pub name: String,
    /// Whether the type is an array (variable-length) type.
    #[serde(default)]
    pub is_array: bool,
    /// Inner type name when the declared type is an optional/nullable
    /// wrapper; syntax rendering unwraps to this.
    #[serde(default)]
    pub nullable_of: Option<String>,
    /// Enum member names in declaration order, when the (possibly unwrapped)
    /// type is an enum.
    #[serde(default)]
    pub enum_members: Vec<String>,
}

/// A parameter's membership in one parameter set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParameterSetMembership {
    /// Owning set name. Empty means unnamed; [`ALL_PARAMETER_SETS`] means
    /// "applies to every set".
    #[serde(default)]
    pub set_name: String,
    /// Whether the parameter is mandatory within this set.
    #[serde(default)]
    pub mandatory: bool,
    /// Zero-based declared position; negative means named-only.
    #[serde(default = "default_position")]
    pub position: i32,
    /// Whether the parameter accepts pipeline input by value.
    #[serde(default)]
    pub value_from_pipeline: bool,
    /// Whether the parameter accepts pipeline input by property name.
    #[serde(default)]
    pub value_from_pipeline_by_property_name: bool,
    /// Per-membership help text for the parameter-list section.
    #[serde(default)]
    pub help_message: Option<String>,
}

impl ParameterSetMembership {
    /// Whether this membership applies to every parameter set.
    #[must_use]
    pub fn is_all_sets(&self) -> bool {
        self.set_name.is_empty() || self.set_name == ALL_PARAMETER_SETS
    }
}

const fn default_position() -> i32 {
    -1
}

/// One usage example. Order-preserving; duplicates are allowed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExampleEntry {
    /// Example code text.
    #[serde(default)]
    pub code: String,
    /// Remarks shown beneath the code.
    #[serde(default)]
    pub remarks: String,
}

/// Related-command references for the `relatedLinks` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelatedLinks {
    /// Type names of related commands within the same module. References
    /// that resolve to no exported command are skipped.
    #[serde(default)]
    pub cmdlets: Vec<String>,
    /// External command names, rendered verbatim after internal links.
    #[serde(default)]
    pub external: Vec<String>,
}

impl RelatedLinks {
    /// Whether no references of either kind are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cmdlets.is_empty() && self.external.is_empty()
    }
}

/// Loads a module descriptor from a JSON file.
///
/// # Errors
///
/// Returns an error when the file cannot be read or does not parse as a
/// module descriptor.
pub fn load_module_descriptor(path: &Utf8Path) -> Result<ModuleDescriptor, MamlgenError> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| MamlgenError::Message(format!("descriptor path has no file name: {path}")))?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|io_err| {
        MamlgenError::Io {
            path: parent.to_path_buf(),
            source: io_err,
        }
    })?;
    let text = dir
        .read_to_string(file_name)
        .map_err(|io_err| MamlgenError::Io {
            path: path.to_path_buf(),
            source: io_err,
        })?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sparse_descriptor_deserializes_with_defaults() -> Result<(), serde_json::Error> {
        let module: ModuleDescriptor = serde_json::from_str(
            r#"{
                "name": "Widgets",
                "commands": [{
                    "verb": "Get",
                    "noun": "Widget",
                    "type_name": "GetWidgetCommand",
                    "parameters": [{
                        "name": "Id",
                        "type": { "name": "Int32" },
                        "sets": [{ "set_name": "ById" }]
                    }]
                }]
            }"#,
        )?;
        let command = module.commands.first().map(CommandDescriptor::full_name);
        assert_eq!(command.as_deref(), Some("Get-Widget"));
        let membership = module
            .commands
            .first()
            .and_then(|c| c.parameters.first())
            .and_then(|p| p.sets.first());
        assert_eq!(membership.map(|m| m.position), Some(-1));
        assert_eq!(membership.map(|m| m.mandatory), Some(false));
        Ok(())
    }

    #[rstest]
    #[case("", true)]
    #[case(ALL_PARAMETER_SETS, true)]
    #[case("ById", false)]
    fn all_sets_marker_detection(#[case] set_name: &str, #[case] expected: bool) {
        let membership = ParameterSetMembership {
            set_name: set_name.to_owned(),
            mandatory: false,
            position: -1,
            value_from_pipeline: false,
            value_from_pipeline_by_property_name: false,
            help_message: None,
        };
        assert_eq!(membership.is_all_sets(), expected);
    }
}
