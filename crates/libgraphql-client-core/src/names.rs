//! Helpers for GraphQL [names](https://spec.graphql.org/October2021/#Name)
//! and for mapping Rust identifiers onto them.

use heck::ToLowerCamelCase;
use heck::ToShoutySnakeCase;

/// Indicates whether `name` matches `/[_A-Za-z][_0-9A-Za-z]*/`.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() =>
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// Indicates whether `name` may be used as an enum value: a valid name other
/// than `true`, `false`, or `null`.
pub fn is_valid_enum_value(name: &str) -> bool {
    is_valid_name(name) && !matches!(name, "true" | "false" | "null")
}

/// Maps a Rust member name onto the GraphQL field name it selects by
/// default: a leading `r#` is dropped and snake_case becomes camelCase.
///
/// Leading underscores are preserved so that members like `__typename` map
/// onto themselves.
pub fn to_field_name(member_name: &str) -> String {
    let member_name = member_name.strip_prefix("r#").unwrap_or(member_name);
    let rest = member_name.trim_start_matches('_');
    let prefix = &member_name[..member_name.len() - rest.len()];
    format!("{prefix}{}", rest.to_lower_camel_case())
}

/// Maps a PascalCase Rust enum variant name onto the SCREAMING_SNAKE_CASE
/// GraphQL enum value name it represents by default.
pub fn to_enum_value_name(variant_name: &str) -> String {
    variant_name.strip_prefix("r#")
        .unwrap_or(variant_name)
        .to_shouty_snake_case()
}
