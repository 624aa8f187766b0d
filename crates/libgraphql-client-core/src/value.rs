use crate::names;
use crate::types::Id;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::fmt::Write;

/// An argument value bound to a selected field.
///
/// Everything except [`Value::Variable`] is a literal that is inlined into
/// the document text. A [`Value::Variable`] (possibly nested inside a list
/// or object literal) becomes a `$name` reference plus a document-level
/// variable declaration.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Variable(VariableRef),
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
    Enum(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}
impl Value {
    /// A reference to the variable `$name` whose type will be inferred from
    /// the caller's binding of the same name.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(VariableRef {
            name: name.into(),
            type_hint: None,
        })
    }

    /// A reference to the variable `$name` declared with an explicit type.
    pub fn typed_variable(
        name: impl Into<String>,
        type_annotation: TypeAnnotation,
    ) -> Self {
        Self::Variable(VariableRef {
            name: name.into(),
            type_hint: Some(type_annotation),
        })
    }

    pub fn enum_value(name: impl Into<String>) -> Self {
        Self::Enum(name.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub fn as_variable(&self) -> Option<&VariableRef> {
        if let Self::Variable(var_ref) = self {
            Some(var_ref)
        } else {
            None
        }
    }

    /// Visit every [`VariableRef`] in this value, depth-first.
    pub(crate) fn try_for_each_variable<E>(
        &self,
        visit: &mut impl FnMut(&VariableRef) -> Result<(), E>,
    ) -> Result<(), E> {
        match self {
            Self::Variable(var_ref) => visit(var_ref),
            Self::List(values) => values.iter().try_for_each(
                |value| value.try_for_each_variable(visit),
            ),
            Self::Object(entries) => entries.values().try_for_each(
                |value| value.try_for_each_variable(visit),
            ),
            Self::Int(_)
                | Self::Float(_)
                | Self::String(_)
                | Self::Bool(_)
                | Self::Null
                | Self::Enum(_) => Ok(()),
        }
    }

    /// The first enum value or object key in this value that is not a valid
    /// GraphQL name, depth-first.
    pub(crate) fn first_invalid_name(&self) -> Option<&str> {
        match self {
            Self::Enum(name) if !names::is_valid_enum_value(name) => Some(name.as_str()),
            Self::List(values) => values.iter().find_map(Value::first_invalid_name),
            Self::Object(entries) => entries.iter().find_map(|(key, value)| {
                if names::is_valid_name(key) {
                    value.first_invalid_name()
                } else {
                    Some(key.as_str())
                }
            }),
            _ => None,
        }
    }

    /// Render this value using GraphQL input-value syntax.
    pub fn to_graphql_string(&self) -> String {
        self.to_string()
    }
}
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(var_ref) => write!(f, "${}", var_ref.name),
            Self::Int(value) => write!(f, "{value}"),
            // Non-finite floats have no GraphQL literal form.
            Self::Float(value) if !value.is_finite() => f.write_str("null"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::String(value) => write_string_literal(f, value),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Null => f.write_str("null"),
            Self::Enum(value) => f.write_str(value),
            Self::List(values) => {
                f.write_char('[')?;
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_char(']')
            },
            Self::Object(entries) => {
                f.write_char('{')?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_char('}')
            },
        }
    }
}
impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl std::convert::From<Id> for Value {
    fn from(value: Id) -> Self {
        Self::String(value.into_inner())
    }
}
impl<T: Into<Value>> std::convert::From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// A `$name` reference made from an argument binding.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableRef {
    pub(crate) name: String,
    pub(crate) type_hint: Option<TypeAnnotation>,
}
impl VariableRef {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The type this reference declares explicitly, if any. Without a hint,
    /// the type comes from the caller's [`Variables`](crate::Variables).
    pub fn type_hint(&self) -> Option<&TypeAnnotation> {
        self.type_hint.as_ref()
    }
}

fn write_string_literal(
    f: &mut std::fmt::Formatter<'_>,
    value: &str,
) -> std::fmt::Result {
    f.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{8}' => f.write_str("\\b")?,
            '\u{c}' => f.write_str("\\f")?,
            c if (c as u32) < 0x20 => write!(f, "\\u{:04X}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}
