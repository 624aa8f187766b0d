use crate::decode::ResponsePath;
use thiserror::Error;

/// The response payload does not have the structure that was selected.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("response does not match selection at `{path}`: {kind}")]
pub struct SelectionMismatchError {
    pub kind: SelectionMismatchKind,
    pub path: ResponsePath,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SelectionMismatchKind {
    #[error("`__typename` is missing or is not a string")]
    MissingDiscriminator,

    #[error("expected key `{key}` was not present")]
    MissingKey {
        key: String,
    },

    #[error("destination has no member at index {index}")]
    MissingMember {
        index: usize,
    },

    #[error("composite value was decoded without a sub-selection")]
    MissingSelectionSet,

    #[error("expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("`{value}` is not a known value of enum `{enum_name}`")]
    UnknownEnumValue {
        enum_name: &'static str,
        value: String,
    },

    #[error("`__typename` is `{typename}`, which matches no selected type condition")]
    UnrecognizedTypeCondition {
        typename: String,
    },
}
