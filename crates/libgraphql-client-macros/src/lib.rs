mod argument_attr;
mod enum_expansion;
mod graphql_attrs;
mod struct_expansion;
mod type_annotation_tokens;

#[cfg(test)]
mod tests;

use syn::DeriveInput;
use syn::parse_macro_input;

/// Derives [`GraphQLShape`](libgraphql_client_core::shape::GraphQLShape) so
/// that a type can both describe a GraphQL selection and receive its decoded
/// response.
///
/// On a struct with named fields, each field becomes a member of the
/// selection, in declaration order. Field attributes:
///
/// * `#[graphql(name = "avatarUrl")]` selects a schema field whose name
///   differs from the default camelCase conversion of the field name.
/// * `#[graphql(alias = "primary")]` selects the field under a different
///   response key.
/// * `#[graphql(arg(name = "first", value = 10))]` binds a literal argument.
///   `var = "userId"` (with an optional `ty = "ID!"`) binds a variable,
///   `enum_value = "CREATED_AT"` binds an enum value, and `null` binds
///   `null`.
/// * `#[graphql(on = "Dog")]` selects the field (an `Option` of a derived
///   struct) as an inline fragment `... on Dog`.
/// * `#[graphql(skip)]` leaves the field out of the selection entirely.
///
/// On a field-less enum (which must also implement `Default`), each variant
/// maps onto a GraphQL enum value: by default the SCREAMING_SNAKE_CASE
/// form of the variant name, or `#[graphql(name = "...")]`. The enum's
/// GraphQL type name defaults to the Rust type name and can be set with a
/// container-level `#[graphql(name = "...")]`. Enums also get an
/// implementation of `GraphQLInput`, so they can be bound as variables.
///
/// ```rust
/// use libgraphql_client::GraphQLShape;
///
/// #[derive(Debug, Default, GraphQLShape)]
/// struct Viewer {
///     login: String,
///     #[graphql(arg(name = "size", value = 64))]
///     avatar_url: String,
/// }
///
/// #[derive(Default, GraphQLShape)]
/// struct Query {
///     viewer: Viewer,
/// }
///
/// let document =
///     libgraphql_client::operation::SelectionDocumentBuilder::new(
///         libgraphql_client::OperationKind::Query,
///         &libgraphql_client::Variables::new(),
///     ).build::<Query>().unwrap();
///
/// assert_eq!(
///     document.to_string(),
///     "query { viewer { login avatarUrl(size: 64) } }",
/// );
/// ```
#[proc_macro_derive(GraphQLShape, attributes(graphql))]
pub fn derive_graphql_shape(
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let output = match &input.data {
        syn::Data::Struct(data) => struct_expansion::expand(&input, data),
        syn::Data::Enum(data) => enum_expansion::expand(&input, data),
        syn::Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "#[derive(GraphQLShape)] is not supported on unions",
        )),
    };
    output.unwrap_or_else(syn::Error::into_compile_error).into()
}
