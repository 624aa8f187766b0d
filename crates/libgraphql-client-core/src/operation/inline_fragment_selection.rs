use crate::operation::SelectionSet;

/// A `... on <TypeName> { ... }` selection that only applies when the
/// value's `__typename` equals the type condition.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragmentSelection {
    pub(crate) member_index: usize,
    pub(crate) selection_set: SelectionSet,
    pub(crate) type_condition: String,
}
impl InlineFragmentSelection {
    pub fn member_index(&self) -> usize {
        self.member_index
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}
