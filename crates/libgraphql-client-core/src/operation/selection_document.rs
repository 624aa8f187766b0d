use crate::operation::OperationKind;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::VariableDefinition;
use indexmap::IndexMap;
use std::fmt::Write;

/// A fully resolved operation: what to select, which variables it declares,
/// and the values to send for them.
///
/// Documents are built per call by
/// [`SelectionDocumentBuilder`](crate::operation::SelectionDocumentBuilder)
/// and rendered to query text through [`std::fmt::Display`]:
///
/// ```text
/// query ($userId: Int!) { user(id: $userId) { login } }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionDocument {
    pub(crate) operation_kind: OperationKind,
    pub(crate) selection_set: SelectionSet,
    pub(crate) variable_definitions: IndexMap<String, VariableDefinition>,
    pub(crate) variable_values: serde_json::Map<String, serde_json::Value>,
}
impl SelectionDocument {
    pub fn operation_kind(&self) -> OperationKind {
        self.operation_kind
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// Declared variables, in order of first use.
    pub fn variable_definitions(&self) -> &IndexMap<String, VariableDefinition> {
        &self.variable_definitions
    }

    /// Values for exactly the declared variables.
    pub fn variable_values(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.variable_values
    }

    pub fn to_graphql_string(&self) -> String {
        self.to_string()
    }
}
impl std::fmt::Display for SelectionDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.operation_kind.keyword())?;
        if !self.variable_definitions.is_empty() {
            f.write_str(" (")?;
            for (idx, var_def) in self.variable_definitions.values().enumerate() {
                if idx > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "${}: {}", var_def.name, var_def.type_annotation)?;
            }
            f.write_char(')')?;
        }
        f.write_char(' ')?;
        write_selection_set(f, &self.selection_set)
    }
}

fn write_selection_set(
    f: &mut std::fmt::Formatter<'_>,
    selection_set: &SelectionSet,
) -> std::fmt::Result {
    f.write_char('{')?;
    for selection in &selection_set.selections {
        f.write_char(' ')?;
        match selection {
            Selection::Field(field) => {
                if let Some(alias) = &field.alias {
                    write!(f, "{alias}: ")?;
                }
                f.write_str(&field.name)?;
                if !field.arguments.is_empty() {
                    f.write_char('(')?;
                    for (idx, (arg_name, arg_value)) in field.arguments.iter().enumerate() {
                        if idx > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg_name}: {arg_value}")?;
                    }
                    f.write_char(')')?;
                }
                if let Some(sub_selection) = &field.selection_set {
                    f.write_char(' ')?;
                    write_selection_set(f, sub_selection)?;
                }
            },

            Selection::InlineFragment(fragment) => {
                write!(f, "... on {} ", fragment.type_condition)?;
                write_selection_set(f, &fragment.selection_set)?;
            },
        }
    }
    f.write_str(" }")
}
