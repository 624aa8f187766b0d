use crate::argument_attr::ArgumentAttr;
use libgraphql_client_core::names;
use syn::LitStr;
use syn::meta::ParseNestedMeta;

/// `#[graphql(...)]` options on a struct field.
#[derive(Debug, Default)]
pub(crate) struct MemberAttrs {
    pub(crate) alias: Option<LitStr>,
    pub(crate) arguments: Vec<ArgumentAttr>,
    pub(crate) name: Option<LitStr>,
    pub(crate) skip: bool,
    pub(crate) type_condition: Option<LitStr>,
}
impl MemberAttrs {
    pub(crate) fn from_attrs(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut member_attrs = Self::default();
        for attr in graphql_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("alias") {
                    member_attrs.alias = Some(parse_graphql_name(&meta)?);
                } else if meta.path.is_ident("arg") {
                    member_attrs.arguments.push(ArgumentAttr::parse(&meta)?);
                } else if meta.path.is_ident("name") {
                    member_attrs.name = Some(parse_graphql_name(&meta)?);
                } else if meta.path.is_ident("on") {
                    member_attrs.type_condition = Some(parse_graphql_name(&meta)?);
                } else if meta.path.is_ident("skip") {
                    member_attrs.skip = true;
                } else {
                    return Err(meta.error(
                        "expected one of `alias`, `arg`, `name`, `on`, or `skip`",
                    ));
                }
                Ok(())
            })?;
        }

        if let Some(type_condition) = &member_attrs.type_condition
            && (member_attrs.alias.is_some()
                || member_attrs.name.is_some()
                || !member_attrs.arguments.is_empty())
        {
            return Err(syn::Error::new(
                type_condition.span(),
                "`on` cannot be combined with `alias`, `arg`, or `name`",
            ));
        }
        Ok(member_attrs)
    }
}

/// `#[graphql(name = "...")]` on an enum or one of its variants.
#[derive(Debug, Default)]
pub(crate) struct NameAttrs {
    pub(crate) name: Option<LitStr>,
}
impl NameAttrs {
    pub(crate) fn from_attrs(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut name_attrs = Self::default();
        for attr in graphql_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    name_attrs.name = Some(parse_graphql_name(&meta)?);
                    Ok(())
                } else {
                    Err(meta.error("expected `name`"))
                }
            })?;
        }
        Ok(name_attrs)
    }
}

/// Parses `key = "..."`, rejecting strings that are not GraphQL names.
pub(crate) fn parse_graphql_name(meta: &ParseNestedMeta) -> syn::Result<LitStr> {
    let lit: LitStr = meta.value()?.parse()?;
    if !names::is_valid_name(&lit.value()) {
        return Err(syn::Error::new(
            lit.span(),
            format!("`{}` is not a valid GraphQL name", lit.value()),
        ));
    }
    Ok(lit)
}

fn graphql_attrs(attrs: &[syn::Attribute]) -> impl Iterator<Item = &syn::Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("graphql"))
}
