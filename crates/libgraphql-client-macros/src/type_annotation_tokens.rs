use libgraphql_client_core::types::TypeAnnotation;
use proc_macro2::TokenStream;
use quote::quote;

/// Emits an expression that rebuilds `annot` at runtime.
pub(crate) fn type_annotation_tokens(annot: &TypeAnnotation) -> TokenStream {
    match annot {
        TypeAnnotation::List(list_annot) => {
            let inner = type_annotation_tokens(list_annot.inner_type_annotation());
            let nullable = list_annot.nullable();
            quote! {
                libgraphql_client::types::TypeAnnotation::list(#inner, #nullable)
            }
        },
        TypeAnnotation::Named(named_annot) => {
            let type_name = named_annot.graphql_type_name();
            let nullable = named_annot.nullable();
            quote! {
                libgraphql_client::types::TypeAnnotation::named(#type_name, #nullable)
            }
        },
    }
}
