use crate::operation::FieldSelection;
use crate::operation::InlineFragmentSelection;
use crate::operation::Selection;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSet {
    pub(crate) selections: Vec<Selection>,
}
impl SelectionSet {
    pub fn fields(&self) -> impl Iterator<Item = &FieldSelection> {
        self.selections.iter().filter_map(Selection::as_field)
    }

    pub fn has_inline_fragments(&self) -> bool {
        self.inline_fragments().next().is_some()
    }

    pub fn inline_fragments(&self) -> impl Iterator<Item = &InlineFragmentSelection> {
        self.selections.iter().filter_map(Selection::as_inline_fragment)
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }
}
