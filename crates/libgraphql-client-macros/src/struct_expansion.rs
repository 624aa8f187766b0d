use crate::graphql_attrs::MemberAttrs;
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

pub(crate) fn expand(
    input: &syn::DeriveInput,
    data: &syn::DataStruct,
) -> syn::Result<TokenStream> {
    let syn::Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "#[derive(GraphQLShape)] on a struct requires named fields",
        ));
    };
    if let Some(attr) = input.attrs.iter().find(|attr| attr.path().is_ident("graphql")) {
        return Err(syn::Error::new_spanned(
            attr,
            "#[graphql(...)] is only supported on fields of a struct",
        ));
    }

    let mut member_shapes = vec![];
    let mut member_idents = vec![];
    for field in &fields.named {
        let member_attrs = MemberAttrs::from_attrs(&field.attrs)?;
        if member_attrs.skip {
            continue;
        }
        let Some(ident) = &field.ident else {
            continue;
        };
        let member_name = ident.unraw().to_string();
        let field_type = &field.ty;
        let config = field_config_tokens(&member_attrs);
        member_shapes.push(quote! {
            libgraphql_client::shape::MemberShape::new(
                #member_name,
                <#field_type as libgraphql_client::GraphQLShape>::shape,
                #config,
            )
        });
        member_idents.push(ident);
    }
    let member_indices = 0..member_idents.len();

    let type_ident = &input.ident;
    let mut generics = input.generics.clone();
    for type_param in generics.type_params_mut() {
        type_param.bounds.push(syn::parse_quote!(libgraphql_client::GraphQLShape));
    }
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics libgraphql_client::GraphQLShape
            for #type_ident #type_generics #where_clause
        {
            fn shape() -> libgraphql_client::shape::ShapeKind {
                libgraphql_client::shape::ShapeKind::Object(
                    libgraphql_client::shape::ObjectShape::new(
                        ::std::any::type_name::<Self>(),
                        ::std::vec![#(#member_shapes),*],
                    ),
                )
            }

            fn decode(
                &mut self,
                value: &libgraphql_client::serde_json::Value,
                selection_set: ::std::option::Option<&libgraphql_client::operation::SelectionSet>,
                decoder: &mut libgraphql_client::decode::Decoder,
            ) -> ::std::result::Result<(), libgraphql_client::decode::DecodeError> {
                decoder.decode_object(self, value, selection_set)
            }

            fn reset(&mut self) {
                #(libgraphql_client::GraphQLShape::reset(&mut self.#member_idents);)*
            }

            fn member_mut(
                &mut self,
                index: usize,
            ) -> ::std::option::Option<&mut dyn libgraphql_client::GraphQLShape> {
                match index {
                    #(#member_indices => ::std::option::Option::Some(&mut self.#member_idents),)*
                    _ => ::std::option::Option::None,
                }
            }
        }
    })
}

fn field_config_tokens(member_attrs: &MemberAttrs) -> TokenStream {
    let mut config = quote! { libgraphql_client::shape::FieldConfig::new() };
    if let Some(name) = &member_attrs.name {
        config.extend(quote! { .with_name(#name) });
    }
    if let Some(alias) = &member_attrs.alias {
        config.extend(quote! { .with_alias(#alias) });
    }
    if let Some(type_condition) = &member_attrs.type_condition {
        config.extend(quote! { .with_type_condition(#type_condition) });
    }
    for argument in &member_attrs.arguments {
        config.extend(argument.with_argument_tokens());
    }
    config
}
