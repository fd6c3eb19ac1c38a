//! Rendering tests for MAML document assembly.

use rstest::rstest;

use crate::schema::{
    ALL_PARAMETER_SETS, CommandDescriptor, ExampleEntry, ModuleDescriptor, ParameterDescriptor,
    ParameterSetMembership, RelatedLinks, TypeDescriptor,
};

use super::render_document;

fn membership(set_name: &str, mandatory: bool, position: i32) -> ParameterSetMembership {
    ParameterSetMembership {
        set_name: set_name.to_owned(),
        mandatory,
        position,
        value_from_pipeline: false,
        value_from_pipeline_by_property_name: false,
        help_message: None,
    }
}

fn parameter(name: &str, sets: Vec<ParameterSetMembership>) -> ParameterDescriptor {
    ParameterDescriptor {
        name: name.to_owned(),
        value_type: TypeDescriptor {
            name: "String".to_owned(),
            is_array: false,
            nullable_of: None,
            enum_members: vec![],
        },
        supports_wildcards: false,
        sets,
    }
}

fn command(noun: &str) -> CommandDescriptor {
    CommandDescriptor {
        verb: "Get".to_owned(),
        noun: noun.to_owned(),
        type_name: format!("Get{noun}Command"),
        default_parameter_set: None,
        group: None,
        synopsis: Some(format!("Gets a {noun}.")),
        description: None,
        copyright: "Copyright 2013 Falchion Consulting".to_owned(),
        version: "1.0.0.0".to_owned(),
        parameters: vec![],
        examples: vec![],
        related_links: RelatedLinks::default(),
    }
}

fn module(commands: Vec<CommandDescriptor>) -> ModuleDescriptor {
    ModuleDescriptor {
        name: "Widgets".to_owned(),
        commands,
    }
}

fn render_single(subject: CommandDescriptor) -> String {
    let owner = module(vec![subject]);
    let commands: Vec<_> = owner.commands.iter().collect();
    render_document(&owner, &commands)
}

#[rstest]
fn two_sets_produce_one_variant_each_with_common_parameter_appended() {
    let mut subject = command("Widget");
    subject.parameters = vec![
        parameter("Id", vec![membership("ById", true, 0)]),
        parameter("Path", vec![membership("", false, 0)]),
        parameter("Name", vec![membership(ALL_PARAMETER_SETS, false, 0)]),
    ];
    let xml = render_single(subject);

    let variants: Vec<_> = xml
        .split("<command:syntaxItem>")
        .skip(1)
        .filter_map(|segment| segment.split("</command:syntaxItem>").next())
        .collect();
    assert_eq!(variants.len(), 2);
    for variant in &variants {
        assert!(variant.contains("<maml:name>Name</maml:name>"));
        // The set's own parameter renders before the appended common one.
        let own = variant
            .find("<maml:name>Id</maml:name>")
            .or_else(|| variant.find("<maml:name>Path</maml:name>"));
        let common = variant.find("<maml:name>Name</maml:name>");
        assert!(own.is_some());
        assert!(own < common);
    }
}

#[rstest]
fn all_sets_parameter_prefers_membership_matching_the_variant_set() {
    let mut subject = command("Widget");
    subject.parameters = vec![
        parameter("Id", vec![membership("ById", true, -1)]),
        parameter("Path", vec![membership("ByPath", true, -1)]),
        parameter(
            "Multi",
            vec![
                membership(ALL_PARAMETER_SETS, false, -1),
                membership("ById", true, 0),
            ],
        ),
    ];
    let xml = render_single(subject);

    let variants: Vec<_> = xml
        .split("<command:syntaxItem>")
        .skip(1)
        .filter_map(|segment| segment.split("</command:syntaxItem>").next())
        .collect();
    assert_eq!(variants.len(), 2);

    let by_id = variants
        .iter()
        .find(|variant| variant.contains("<maml:name>Id</maml:name>"))
        .copied()
        .unwrap_or_default();
    let by_path = variants
        .iter()
        .find(|variant| variant.contains("<maml:name>Path</maml:name>"))
        .copied()
        .unwrap_or_default();

    // Multi appears in the ById variant twice: once as the set's own member
    // and once appended from the all-sets list, where the membership
    // matching the variant's set wins over the first-declared one.
    assert_eq!(
        multi_parameter_open_tags(by_id),
        vec![
            "<command:parameter required=\"true\" position=\"1\">".to_owned(),
            "<command:parameter required=\"true\" position=\"1\">".to_owned(),
        ]
    );

    // The ByPath variant has no matching membership, so the appended Multi
    // falls back to its first declared membership.
    assert_eq!(
        multi_parameter_open_tags(by_path),
        vec!["<command:parameter required=\"false\" position=\"named\">".to_owned()]
    );
}

/// Returns the opening `command:parameter` tag preceding each rendering of
/// the `Multi` parameter within one syntax variant.
fn multi_parameter_open_tags(variant: &str) -> Vec<String> {
    let parts: Vec<_> = variant.split("<maml:name>Multi</maml:name>").collect();
    parts
        .iter()
        .take(parts.len().saturating_sub(1))
        .map(|prefix| {
            prefix
                .trim_end()
                .rsplit("\r\n")
                .next()
                .unwrap_or_default()
                .trim()
                .to_owned()
        })
        .collect()
}

#[rstest]
fn maximum_declared_position_renders_without_overflowing() {
    let mut subject = command("Widget");
    subject.parameters = vec![parameter("Edge", vec![membership("", false, i32::MAX)])];
    let xml = render_single(subject);
    assert!(xml.contains(r#"position="2147483648""#));
}

#[rstest]
fn positional_parameters_render_one_based_and_negative_renders_named() {
    let mut subject = command("Widget");
    subject.parameters = vec![
        parameter("Id", vec![membership("ById", true, 0)]),
        parameter("Force", vec![membership("ById", false, -1)]),
    ];
    let xml = render_single(subject);
    assert!(xml.contains(r#"required="true" position="1""#));
    assert!(xml.contains(r#"required="false" position="named""#));
}

#[rstest]
fn no_memberships_suppress_syntax_and_empty_out_parameters() {
    let mut subject = command("Widget");
    subject.parameters = vec![parameter("Orphan", vec![])];
    let xml = render_single(subject);
    assert!(!xml.contains("<command:syntax>"));
    assert!(xml.contains("<command:parameters />"));
}

#[rstest]
fn single_set_renders_exactly_one_variant() {
    let mut subject = command("Widget");
    subject.parameters = vec![
        parameter("Name", vec![membership(ALL_PARAMETER_SETS, false, -1)]),
        parameter("Force", vec![membership(ALL_PARAMETER_SETS, false, -1)]),
    ];
    let xml = render_single(subject);
    assert_eq!(xml.matches("<command:syntaxItem>").count(), 1);
}

#[rstest]
fn enum_parameter_renders_pipe_joined_members_in_syntax() {
    let mut subject = command("Widget");
    let mut colored = parameter("Color", vec![membership("", false, -1)]);
    colored.value_type = TypeDescriptor {
        name: "Nullable`1".to_owned(),
        is_array: false,
        nullable_of: Some("Color".to_owned()),
        enum_members: vec!["Red".to_owned(), "Green".to_owned(), "Blue".to_owned()],
    };
    subject.parameters = vec![colored];
    let xml = render_single(subject);
    assert!(xml.contains(">Red | Green | Blue</command:parameterValue>"));
    // The parameter-list section keeps the declared type name verbatim.
    assert!(xml.contains(">Nullable`1</command:parameterValue>"));
}

#[rstest]
fn single_example_uses_singular_title() {
    let mut subject = command("Widget");
    subject.examples = vec![ExampleEntry {
        code: "Get-Widget".to_owned(),
        remarks: "Lists widgets.".to_owned(),
    }];
    let xml = render_single(subject);
    assert!(xml.contains("<maml:title>------------------EXAMPLE------------------</maml:title>"));
}

#[rstest]
fn multiple_examples_use_numbered_titles_in_order() {
    let mut subject = command("Widget");
    subject.examples = vec![
        ExampleEntry {
            code: "Get-Widget".to_owned(),
            remarks: String::new(),
        },
        ExampleEntry {
            code: "Get-Widget -Name w".to_owned(),
            remarks: String::new(),
        },
    ];
    let xml = render_single(subject);
    let first = xml.find("------------------EXAMPLE 1-----------------------");
    let second = xml.find("------------------EXAMPLE 2-----------------------");
    assert!(first.is_some());
    assert!(first < second);
}

#[rstest]
fn no_examples_yield_empty_marker() {
    let xml = render_single(command("Widget"));
    assert!(xml.contains("<command:examples />"));
}

#[rstest]
fn empty_description_yields_exactly_one_empty_paragraph() {
    let mut subject = command("Widget");
    subject.synopsis = None;
    subject.copyright = String::new();
    let xml = render_single(subject);
    let details = xml
        .split("<maml:description>")
        .nth(1)
        .and_then(|tail| tail.split("</maml:description>").next());
    assert_eq!(details.map(str::trim), Some("<maml:para />"));
}

#[rstest]
fn description_appends_copyright_after_empty_separator() {
    let mut subject = command("Widget");
    subject.description = Some("Does widget things.".to_owned());
    let xml = render_single(subject);
    let body = xml
        .split("</command:details>")
        .nth(1)
        .unwrap_or_default();
    let description = body.find("Does widget things.");
    let separator = body.find("<maml:para />");
    let copyright = body.find("Copyright 2013 Falchion Consulting");
    assert!(description.is_some());
    assert!(description < separator);
    assert!(separator < copyright);
}

#[rstest]
fn group_label_falls_back_to_noun() {
    let xml = render_single(command("Widget"));
    assert!(xml.contains("<gl:group>Widget</gl:group>"));
}

#[rstest]
fn explicit_group_label_wins_over_noun() {
    let mut subject = command("Widget");
    subject.group = Some("Inventory".to_owned());
    let xml = render_single(subject);
    assert!(xml.contains("<gl:group>Inventory</gl:group>"));
}

#[rstest]
#[case(false, false, "false")]
#[case(true, false, "true (ByValue)")]
#[case(false, true, "true (ByPropertyName)")]
#[case(true, true, "true (ByValue, ByPropertyName)")]
fn pipeline_input_uses_fixed_phrasings(
    #[case] by_value: bool,
    #[case] by_property_name: bool,
    #[case] expected: &str,
) {
    let mut subject = command("Widget");
    let mut piped = parameter("Input", vec![membership("", false, -1)]);
    if let Some(entry) = piped.sets.first_mut() {
        entry.value_from_pipeline = by_value;
        entry.value_from_pipeline_by_property_name = by_property_name;
    }
    subject.parameters = vec![piped];
    let xml = render_single(subject);
    assert!(xml.contains(&format!("pipelineInput=\"{expected}\"")));
}

#[rstest]
fn related_links_resolve_internal_before_external_and_skip_unknown() {
    let mut getter = command("Widget");
    getter.related_links = RelatedLinks {
        cmdlets: vec!["SetWidgetCommand".to_owned(), "MissingCommand".to_owned()],
        external: vec!["Get-Help".to_owned()],
    };
    let setter = CommandDescriptor {
        verb: "Set".to_owned(),
        noun: "Widget".to_owned(),
        type_name: "SetWidgetCommand".to_owned(),
        ..command("Widget")
    };
    let owner = module(vec![getter, setter]);
    let commands: Vec<_> = owner.commands.iter().take(1).collect();
    let xml = render_document(&owner, &commands);

    let internal = xml.find("<maml:linkText>Set-Widget</maml:linkText>");
    let external = xml.find("<maml:linkText>Get-Help</maml:linkText>");
    assert!(internal.is_some());
    assert!(internal < external);
    assert!(!xml.contains("MissingCommand"));
}

#[rstest]
fn absent_related_links_yield_empty_marker() {
    let xml = render_single(command("Widget"));
    assert!(xml.contains("<maml:relatedLinks />"));
}

#[rstest]
fn placeholder_sections_hold_one_empty_type_stanza_each() {
    let xml = render_single(command("Widget"));
    assert_eq!(xml.matches("<command:inputType>").count(), 1);
    assert_eq!(xml.matches("<command:returnValue>").count(), 1);
    assert!(xml.contains("<command:terminatingErrors />"));
    assert!(xml.contains("<command:nonTerminatingErrors />"));
}

#[rstest]
fn notes_reference_get_help_invocations() {
    let xml = render_single(command("Widget"));
    assert!(xml.contains("Get-Help Get-Widget -detailed"));
    assert!(xml.contains("Get-Help Get-Widget -full"));
}

#[rstest]
fn reserved_characters_are_escaped() {
    let mut subject = command("Widget");
    subject.synopsis = Some("Use <tag> & more".to_owned());
    let xml = render_single(subject);
    assert!(xml.contains("Use &lt;tag&gt; &amp; more"));
}

#[rstest]
fn rendering_is_deterministic() {
    let mut subject = command("Widget");
    subject.parameters = vec![
        parameter("Id", vec![membership("ById", true, 0)]),
        parameter("Name", vec![membership(ALL_PARAMETER_SETS, false, 0)]),
    ];
    let owner = module(vec![subject]);
    let commands: Vec<_> = owner.commands.iter().collect();
    let first_pass = render_document(&owner, &commands);
    let second_pass = render_document(&owner, &commands);
    assert_eq!(first_pass, second_pass);
}

#[rstest]
fn details_sections_appear_in_schema_order() {
    let xml = render_single(command("Widget"));
    let order = [
        "<command:details>",
        "<command:name>Get-Widget</command:name>",
        "<gl:group>",
        "<maml:copyright>",
        "<command:verb>Get</command:verb>",
        "<command:noun>Widget</command:noun>",
        "<dev:version>1.0.0.0</dev:version>",
        "</command:details>",
        "<command:inputTypes>",
        "<command:returnValues>",
        "<maml:alertSet>",
        "<command:examples />",
        "<maml:relatedLinks />",
    ];
    let mut remainder = xml.as_str();
    for marker in order {
        let Some((_, tail)) = remainder.split_once(marker) else {
            panic!("missing section marker {marker}");
        };
        remainder = tail;
    }
}
