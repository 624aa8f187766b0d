//! The selection tree derived from a destination shape, and its rendering
//! as GraphQL document text.

mod field_selection;
mod inline_fragment_selection;
mod operation_kind;
mod selection;
mod selection_document;
mod selection_document_builder;
mod selection_set;
mod shape_error;
mod variable_definition;

pub use field_selection::FieldSelection;
pub use inline_fragment_selection::InlineFragmentSelection;
pub use operation_kind::OperationKind;
pub use selection::Selection;
pub use selection_document::SelectionDocument;
pub use selection_document_builder::SelectionDocumentBuilder;
pub use selection_set::SelectionSet;
pub use shape_error::ShapeError;
pub use variable_definition::VariableDefinition;
