//! Display-name resolution for declared parameter types.

use crate::schema::TypeDescriptor;

/// Returns the value-type name shown in syntax variants.
///
/// Optional/nullable wrappers unwrap to their inner type name. Enum types,
/// wrapped or not, render as the pipe-joined member names in declaration
/// order, so `Nullable<Color>` and `Color` read identically.
#[must_use]
pub fn syntax_display_name(descriptor: &TypeDescriptor) -> String {
    if !descriptor.enum_members.is_empty() {
        return descriptor.enum_members.join(" | ");
    }
    descriptor
        .nullable_of
        .clone()
        .unwrap_or_else(|| descriptor.name.clone())
}

/// Whether the declared type holds a variable number of values.
#[must_use]
pub const fn is_variable_length(descriptor: &TypeDescriptor) -> bool {
    descriptor.is_array
}
