use crate::graphql_attrs::parse_graphql_name;
use crate::type_annotation_tokens::type_annotation_tokens;
use libgraphql_client_core::types::TypeAnnotation;
use proc_macro2::TokenStream;
use quote::quote;
use syn::LitStr;
use syn::meta::ParseNestedMeta;

/// One `arg(name = "...", ...)` entry of a member's `#[graphql]` attribute.
#[derive(Debug)]
pub(crate) struct ArgumentAttr {
    pub(crate) name: LitStr,
    pub(crate) value: ArgumentValue,
}
impl ArgumentAttr {
    pub(crate) fn parse(meta: &ParseNestedMeta) -> syn::Result<Self> {
        let mut name = None;
        let mut literal = None;
        let mut variable = None;
        let mut type_hint = None;
        let mut enum_value = None;
        let mut null = false;

        meta.parse_nested_meta(|inner| {
            if inner.path.is_ident("name") {
                name = Some(parse_graphql_name(&inner)?);
            } else if inner.path.is_ident("value") {
                literal = Some(LiteralValue::parse(&inner.value()?.parse()?)?);
            } else if inner.path.is_ident("var") {
                variable = Some(parse_graphql_name(&inner)?);
            } else if inner.path.is_ident("ty") {
                let lit: LitStr = inner.value()?.parse()?;
                let annot =
                    TypeAnnotation::parse(&lit.value())
                        .map_err(|err| syn::Error::new(lit.span(), err))?;
                type_hint = Some(annot);
            } else if inner.path.is_ident("enum_value") {
                enum_value = Some(parse_graphql_name(&inner)?);
            } else if inner.path.is_ident("null") {
                null = true;
            } else {
                return Err(inner.error(
                    "expected one of `name`, `value`, `var`, `ty`, `enum_value`, or `null`",
                ));
            }
            Ok(())
        })?;

        let Some(name) = name else {
            return Err(meta.error("`arg(...)` requires `name = \"...\"`"));
        };
        if type_hint.is_some() && variable.is_none() {
            return Err(meta.error("`ty` may only be combined with `var`"));
        }
        let value = match (literal, variable, enum_value, null) {
            (Some(literal), None, None, false) => ArgumentValue::Literal(literal),
            (None, Some(variable), None, false) => ArgumentValue::Variable {
                name: variable,
                type_hint,
            },
            (None, None, Some(enum_value), false) => ArgumentValue::EnumValue(enum_value),
            (None, None, None, true) => ArgumentValue::Null,
            _ => return Err(meta.error(
                "`arg(...)` requires exactly one of `value`, `var`, `enum_value`, or `null`",
            )),
        };

        Ok(Self { name, value })
    }

    /// Emits a `.with_argument(...)` call for a `FieldConfig` builder chain.
    pub(crate) fn with_argument_tokens(&self) -> TokenStream {
        let name = &self.name;
        let value = self.value.value_tokens();
        quote! { .with_argument(#name, #value) }
    }
}

#[derive(Debug, PartialEq)]
pub(crate) enum ArgumentValue {
    EnumValue(LitStr),
    Literal(LiteralValue),
    Null,
    Variable {
        name: LitStr,
        type_hint: Option<TypeAnnotation>,
    },
}
impl ArgumentValue {
    fn value_tokens(&self) -> TokenStream {
        match self {
            Self::EnumValue(enum_value) => quote! {
                libgraphql_client::Value::enum_value(#enum_value)
            },
            Self::Literal(literal) => literal.value_tokens(),
            Self::Null => quote! { libgraphql_client::Value::Null },
            Self::Variable { name, type_hint: None } => quote! {
                libgraphql_client::Value::variable(#name)
            },
            Self::Variable { name, type_hint: Some(type_hint) } => {
                let type_hint = type_annotation_tokens(type_hint);
                quote! { libgraphql_client::Value::typed_variable(#name, #type_hint) }
            },
        }
    }
}

#[derive(Debug, PartialEq)]
pub(crate) enum LiteralValue {
    Bool(bool),
    Float(f64),
    Int(i64),
    String(String),
}
impl LiteralValue {
    /// Accepts a literal, or a negated numeric literal.
    fn parse(expr: &syn::Expr) -> syn::Result<Self> {
        match expr {
            syn::Expr::Lit(expr_lit) => Self::from_lit(&expr_lit.lit, false),
            syn::Expr::Unary(syn::ExprUnary {
                op: syn::UnOp::Neg(_),
                expr: inner,
                ..
            }) => match &**inner {
                syn::Expr::Lit(expr_lit) => Self::from_lit(&expr_lit.lit, true),
                other => Err(syn::Error::new_spanned(other, "expected a numeric literal")),
            },
            other => Err(syn::Error::new_spanned(
                other,
                "expected a string, integer, float, or boolean literal",
            )),
        }
    }

    fn from_lit(lit: &syn::Lit, negated: bool) -> syn::Result<Self> {
        match lit {
            syn::Lit::Int(int) => {
                let value: i64 = int.base10_parse()?;
                Ok(Self::Int(if negated { -value } else { value }))
            },
            syn::Lit::Float(float) => {
                let value: f64 = float.base10_parse()?;
                Ok(Self::Float(if negated { -value } else { value }))
            },
            syn::Lit::Str(lit_str) if !negated => Ok(Self::String(lit_str.value())),
            syn::Lit::Bool(lit_bool) if !negated => Ok(Self::Bool(lit_bool.value)),
            other => Err(syn::Error::new_spanned(other, "unsupported argument literal")),
        }
    }

    fn value_tokens(&self) -> TokenStream {
        match self {
            Self::Bool(value) => quote! { libgraphql_client::Value::Bool(#value) },
            Self::Float(value) => quote! { libgraphql_client::Value::Float(#value) },
            Self::Int(value) => quote! { libgraphql_client::Value::Int(#value) },
            Self::String(value) => quote! {
                libgraphql_client::Value::String(::std::string::String::from(#value))
            },
        }
    }
}
