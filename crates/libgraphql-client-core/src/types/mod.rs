mod id;
mod list_type_annotation;
mod named_type_annotation;
mod type_annotation;
mod type_annotation_parse_error;

pub use id::Id;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
pub use type_annotation::TypeAnnotation;
pub use type_annotation_parse_error::TypeAnnotationParseError;

#[cfg(test)]
mod tests;
