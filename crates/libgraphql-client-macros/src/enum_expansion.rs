use crate::graphql_attrs::NameAttrs;
use libgraphql_client_core::names;
use proc_macro2::TokenStream;
use quote::quote;

pub(crate) fn expand(
    input: &syn::DeriveInput,
    data: &syn::DataEnum,
) -> syn::Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[derive(GraphQLShape)] does not support generic enums",
        ));
    }
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "#[derive(GraphQLShape)] requires at least one enum variant",
        ));
    }

    let type_ident = &input.ident;
    let enum_name =
        NameAttrs::from_attrs(&input.attrs)?
            .name
            .map(|name| name.value())
            .unwrap_or_else(|| type_ident.to_string());

    let mut variant_idents = vec![];
    let mut value_names = vec![];
    for variant in &data.variants {
        if !matches!(variant.fields, syn::Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "#[derive(GraphQLShape)] on an enum requires field-less variants",
            ));
        }
        let value_name = match NameAttrs::from_attrs(&variant.attrs)?.name {
            Some(name) => name.value(),
            None => names::to_enum_value_name(&variant.ident.to_string()),
        };
        if value_names.contains(&value_name) {
            return Err(syn::Error::new_spanned(
                variant,
                format!("enum value `{value_name}` is used by more than one variant"),
            ));
        }
        variant_idents.push(&variant.ident);
        value_names.push(value_name);
    }

    Ok(quote! {
        impl libgraphql_client::GraphQLShape for #type_ident {
            fn shape() -> libgraphql_client::shape::ShapeKind {
                libgraphql_client::shape::ShapeKind::Scalar(
                    libgraphql_client::shape::ScalarKind::Enum(#enum_name),
                )
            }

            fn decode(
                &mut self,
                value: &libgraphql_client::serde_json::Value,
                _selection_set: ::std::option::Option<&libgraphql_client::operation::SelectionSet>,
                decoder: &mut libgraphql_client::decode::Decoder,
            ) -> ::std::result::Result<(), libgraphql_client::decode::DecodeError> {
                *self = match decoder.expect_str(value)? {
                    #(#value_names => Self::#variant_idents,)*
                    other => return ::std::result::Result::Err(
                        decoder.unknown_enum_value(#enum_name, other),
                    ),
                };
                ::std::result::Result::Ok(())
            }

            fn reset(&mut self) {
                *self = ::std::default::Default::default();
            }
        }

        impl libgraphql_client::GraphQLInput for #type_ident {
            fn type_annotation() -> libgraphql_client::types::TypeAnnotation {
                libgraphql_client::types::TypeAnnotation::named(#enum_name, false)
            }

            fn to_input_value(&self) -> libgraphql_client::serde_json::Value {
                libgraphql_client::serde_json::Value::String(
                    ::std::string::String::from(match self {
                        #(Self::#variant_idents => #value_names,)*
                    }),
                )
            }
        }
    })
}
