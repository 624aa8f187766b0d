use crate::shape::ObjectShape;

/// Describes how a destination type maps onto the GraphQL type system.
#[derive(Clone, Debug)]
pub enum ShapeKind {
    /// A list whose elements all share one shape (and one sub-selection).
    List(Box<ShapeKind>),

    /// An optional (nullable) value. A missing or `null` response value
    /// decodes to an explicit "absent" state.
    Nullable(Box<ShapeKind>),

    /// A composite value selected with a sub-selection.
    Object(ObjectShape),

    /// A leaf value selected without a sub-selection.
    Scalar(ScalarKind),

    /// A type that has no GraphQL representation. Selecting a member of
    /// this kind fails with the contained reason.
    Unrepresentable(String),
}
impl ShapeKind {
    pub fn list(inner: ShapeKind) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn nullable(inner: ShapeKind) -> Self {
        Self::Nullable(Box::new(inner))
    }

    pub fn as_object(&self) -> Option<&ObjectShape> {
        if let Self::Object(object) = self {
            Some(object)
        } else {
            None
        }
    }
}

/// The kinds of leaf values a [`ShapeKind::Scalar`] can hold.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScalarKind {
    Boolean,
    /// A server-defined scalar, named by the GraphQL type it represents.
    Custom(&'static str),
    /// A GraphQL enum, named by the GraphQL type it represents.
    Enum(&'static str),
    Float,
    Id,
    Int,
    String,
}
impl ScalarKind {
    pub fn graphql_type_name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Custom(name) | Self::Enum(name) => name,
            Self::Float => "Float",
            Self::Id => "ID",
            Self::Int => "Int",
            Self::String => "String",
        }
    }
}
