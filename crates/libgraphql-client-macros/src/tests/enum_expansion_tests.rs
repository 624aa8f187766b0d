use crate::enum_expansion;

fn expand(input: syn::DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let syn::Data::Enum(data) = &input.data else {
        panic!("expected an enum");
    };
    enum_expansion::expand(&input, data)
}

#[test]
fn expands_shape_and_input_impls() {
    let tokens = expand(syn::parse_quote! {
        #[graphql(name = "Episode")]
        enum StarWarsEpisode {
            #[default]
            NewHope,
            Empire,
            #[graphql(name = "JEDI")]
            ReturnOfTheJedi,
        }
    }).unwrap();

    let file: syn::File = syn::parse2(tokens.clone()).unwrap();
    assert_eq!(file.items.len(), 2);

    let rendered = tokens.to_string();
    for expected in ["\"Episode\"", "\"NEW_HOPE\"", "\"EMPIRE\"", "\"JEDI\""] {
        assert!(rendered.contains(expected), "missing {expected} in {rendered}");
    }
    assert!(!rendered.contains("RETURN_OF_THE_JEDI"));
}

#[test]
fn rejects_variants_with_fields() {
    let err = expand(syn::parse_quote! {
        enum Event {
            Opened { by: String },
        }
    }).unwrap_err();
    assert_eq!(
        err.to_string(),
        "#[derive(GraphQLShape)] on an enum requires field-less variants",
    );
}

#[test]
fn rejects_duplicate_enum_values() {
    let err = expand(syn::parse_quote! {
        enum State {
            Open,
            #[graphql(name = "OPEN")]
            Reopened,
        }
    }).unwrap_err();
    assert_eq!(err.to_string(), "enum value `OPEN` is used by more than one variant");
}

#[test]
fn rejects_empty_enums() {
    assert!(expand(syn::parse_quote! { enum Never {} }).is_err());
}
