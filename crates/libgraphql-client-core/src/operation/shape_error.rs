use thiserror::Error;

/// A destination shape that cannot be turned into a valid selection.
///
/// Every `path` names the offending location in the selection tree, starting
/// at the operation keyword (e.g. `query.viewer.repositories`).
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ShapeError {
    #[error(
        "variable `${variable}` is referred to as both `{first}` and `{second}`"
    )]
    ConflictingVariableType {
        first: String,
        second: String,
        variable: String,
    },

    #[error("response key `{alias}` is selected more than once at `{path}`")]
    DuplicateAlias {
        alias: String,
        path: String,
    },

    #[error("`{type_name}` at `{path}` has no selectable members")]
    EmptySelection {
        path: String,
        type_name: &'static str,
    },

    #[error("`{name}` at `{path}` is not a valid GraphQL name")]
    InvalidName {
        name: String,
        path: String,
    },

    #[error("`{type_name}` selects itself at `{path}`")]
    RecursiveShape {
        path: String,
        type_name: &'static str,
    },

    #[error(
        "variable `${variable}` at `{path}` has no type hint and no bound value"
    )]
    UnboundVariable {
        path: String,
        variable: String,
    },

    #[error("member at `{path}` cannot be selected: {reason}")]
    Unrepresentable {
        path: String,
        reason: String,
    },
}
