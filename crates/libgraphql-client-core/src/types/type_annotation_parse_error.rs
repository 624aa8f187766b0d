use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeAnnotationParseError {
    #[error("Type annotation is empty")]
    Empty,

    #[error("`{source_text}` is not a single type annotation")]
    NotATypeAnnotation {
        source_text: String,
    },

    #[error("Invalid type annotation `{source_text}`: {message}")]
    Syntax {
        message: String,
        source_text: String,
    },
}
