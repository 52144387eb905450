//! Derive macro implementation used by `mensura-core`.
//!
//! `mensura-derive` is an implementation detail of this workspace. The `Unit`
//! derive expands in terms of `crate::Unit` and `crate::Scalar`, so it is
//! intended to be used by `mensura-core` (or by crates that expose an
//! identical crate-root API).
//!
//! Most users should depend on `mensura` instead and use the predefined units.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements:
//!
//! - `crate::Unit for MyUnit`
//! - `core::fmt::Display for crate::Scalar<MyUnit, V, F>` for every variant
//!   and magnitude type (formats as `<value> <symbol>`)
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "m"`: displayed unit symbol
//! - `kind = SomeKind`: quantity-kind marker type
//! - `factor = 1000.0`: conversion factor to the reference unit of the kind
//! - `offset = 273.15`: optional additive offset applied when converting
//!   absolute values to the reference unit (defaults to `0.0`)

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Token,
};

/// Derive `crate::Unit` and a `Display` impl for `crate::Scalar<ThisUnit, V, F>`.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing
/// `symbol`, `kind`, and `factor` (plus an optional `offset`).
///
/// This macro is intended for use by `mensura-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    // Parse the #[unit(...)] attribute
    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let kind = &unit_attr.kind;
    let factor = &unit_attr.factor;
    let offset = match &unit_attr.offset {
        Some(expr) => quote! { #expr },
        None => quote! { 0.0 },
    };

    let expanded = quote! {
        impl crate::Unit for #name {
            const FACTOR: f64 = #factor;
            const OFFSET: f64 = #offset;
            type Kind = #kind;
            const SYMBOL: &'static str = #symbol;
        }

        impl<V, F> ::core::fmt::Display for crate::Scalar<#name, V, F>
        where
            V: crate::Variant,
            F: crate::Magnitude,
        {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{} {}", self.value(), <#name as crate::Unit>::SYMBOL)
            }
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    kind: Expr,
    factor: Expr,
    offset: Option<Expr>,
    // Future extensions:
    // long_name: Option<LitStr>,
    // plural: Option<LitStr>,
    // system: Option<LitStr>,
    // aliases: Option<Vec<LitStr>>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut kind: Option<Expr> = None;
        let mut factor: Option<Expr> = None;
        let mut offset: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "kind" => {
                    kind = Some(input.parse()?);
                }
                "factor" => {
                    factor = Some(input.parse()?);
                }
                "offset" => {
                    offset = Some(input.parse()?);
                }
                // Future extensions would be handled here:
                // "long_name" => { ... }
                // "plural" => { ... }
                // "system" => { ... }
                // "aliases" => { ... }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            // Consume trailing comma if present
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let kind =
            kind.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `kind`"))?;
        let factor = factor
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `factor`"))?;

        Ok(UnitAttribute {
            symbol,
            kind,
            factor,
            offset,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}
