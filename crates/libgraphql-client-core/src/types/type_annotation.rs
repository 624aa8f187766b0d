use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;
use crate::types::TypeAnnotationParseError;
use graphql_parser::query::Definition;
use graphql_parser::query::OperationDefinition;
use graphql_parser::query::Selection;
use graphql_parser::query::Type as AstType;

const WRAPPER_VARIABLE: &str = "annotation";

/// Represents the annotated wire type of a
/// [`VariableDefinition`](crate::operation::VariableDefinition) (e.g.
/// `[ID!]!`).
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    pub fn list(inner: TypeAnnotation, nullable: bool) -> Self {
        Self::List(ListTypeAnnotation {
            inner_type_ref: Box::new(inner),
            nullable,
        })
    }

    pub fn named(type_name: impl Into<String>, nullable: bool) -> Self {
        Self::Named(NamedTypeAnnotation {
            nullable,
            type_name: type_name.into(),
        })
    }

    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { inner_type_ref, .. })
                => inner_type_ref.innermost_named_type_annotation(),
            TypeAnnotation::Named(named_annot)
                => named_annot,
        }
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            TypeAnnotation::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }

    /// Returns the same annotation with its outermost level made nullable.
    pub fn into_nullable(self) -> Self {
        match self {
            TypeAnnotation::List(list_annot) => TypeAnnotation::List(
                ListTypeAnnotation {
                    nullable: true,
                    ..list_annot
                }
            ),
            TypeAnnotation::Named(named_annot) => TypeAnnotation::Named(
                NamedTypeAnnotation {
                    nullable: true,
                    ..named_annot
                }
            ),
        }
    }

    /// Parse GraphQL type-annotation syntax such as `String`, `ID!`, or
    /// `[Episode!]`.
    pub fn parse(source_text: &str) -> Result<Self, TypeAnnotationParseError> {
        if source_text.trim().is_empty() {
            return Err(TypeAnnotationParseError::Empty);
        }

        // graphql-parser only parses whole documents, so the annotation is
        // parsed as the type of a single variable definition.
        let wrapper_document = format!(
            "query (${WRAPPER_VARIABLE}: {source_text}) {{ __typename }}",
        );
        let ast_doc = graphql_parser::query::parse_query::<String>(&wrapper_document)
            .map_err(|err| TypeAnnotationParseError::Syntax {
                message: err.to_string(),
                source_text: source_text.to_string(),
            })?;

        let not_an_annotation = || TypeAnnotationParseError::NotATypeAnnotation {
            source_text: source_text.to_string(),
        };
        let [Definition::Operation(OperationDefinition::Query(query))] =
            ast_doc.definitions.as_slice() else {
            return Err(not_an_annotation());
        };
        let [variable_def] = query.variable_definitions.as_slice() else {
            return Err(not_an_annotation());
        };
        let [Selection::Field(field)] = query.selection_set.items.as_slice() else {
            return Err(not_an_annotation());
        };
        if variable_def.name != WRAPPER_VARIABLE
            || variable_def.default_value.is_some()
            || !query.directives.is_empty()
            || field.name != "__typename"
            || field.alias.is_some()
        {
            return Err(not_an_annotation());
        }

        Ok(Self::from_ast_type(&variable_def.var_type))
    }

    fn from_ast_type(ast_type: &AstType<'_, String>) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(ast_type: &AstType<'_, String>, nullable: bool) -> Self {
        match ast_type {
            AstType::ListType(inner) =>
                Self::list(Self::from_ast_type_impl(inner, true), nullable),

            AstType::NamedType(name) =>
                Self::named(name.as_str(), nullable),

            AstType::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    pub fn to_graphql_string(&self) -> String {
        match self {
            Self::Named(named_annot) => named_annot.to_graphql_string(),
            Self::List(list_annot) => list_annot.to_graphql_string(),
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_graphql_string().as_str())
    }
}
impl std::str::FromStr for TypeAnnotation {
    type Err = TypeAnnotationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
