use crate::types::TypeAnnotation;

/// A `$name: Type` declaration at the top of a
/// [`SelectionDocument`](crate::operation::SelectionDocument).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VariableDefinition {
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl VariableDefinition {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
