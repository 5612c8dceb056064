//! Derive macro implementation used by `phq-core`.
//!
//! `phq-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms
//! of `crate::Unit`, `crate::StaticUnit`, `crate::Dimensions` and `crate::UnitParseError`, so it is
//! intended to be used by `phq-core` (or by crates that expose an identical crate-root API).
//!
//! Most users should depend on `phq` instead and use the predefined unit families.
//!
//! # Generated items
//!
//! For a unit family enum `LengthUnit`, the derive implements:
//!
//! - `crate::Unit for LengthUnit` (standard unit, dimensions, abbreviations, factors, offsets)
//! - `core::fmt::Display` (writes the abbreviation) and `core::str::FromStr` (parses it back)
//! - `serde::Serialize` / `serde::Deserialize` as the abbreviation string, behind the `serde`
//!   feature
//! - one zero-sized marker struct per variant, named after the variant, implementing
//!   `crate::StaticUnit`
//!
//! # Attributes
//!
//! The enum itself carries `#[unit(standard = Variant, dimensions = expr)]`. Every variant carries
//! `#[unit(symbol = "m", factor = 1.0)]` and, for affine scales, `offset = expr`, so that
//! `value_in_standard = factor * value + offset`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, Data, DeriveInput, Expr, Fields, Ident, LitStr, Token,
};

/// Derive `crate::Unit` and its companion impls for a unit family enum.
///
/// The enum must carry `#[unit(standard = ..., dimensions = ...)]` and every variant must carry
/// `#[unit(symbol = ..., factor = ...)]` (optionally with `offset = ...`).
///
/// This macro is intended for use by `phq-core`.
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
    let vis = &input.vis;

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new(
            name.span(),
            "`Unit` can only be derived for enums",
        ));
    };

    let family = parse_unit_attribute::<FamilyAttribute>(&input.attrs)?;

    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.ident.span(),
                "unit variants cannot carry fields",
            ));
        }
        let attr = parse_unit_attribute::<VariantAttribute>(&variant.attrs)?;
        variants.push((variant.ident.clone(), attr));
    }

    if variants.is_empty() {
        return Err(syn::Error::new(
            name.span(),
            "a unit family needs at least one unit",
        ));
    }

    let standard = &family.standard;
    if !variants.iter().any(|(ident, _)| ident == standard) {
        return Err(syn::Error::new(
            standard.span(),
            format!("standard unit `{}` is not a variant of `{}`", standard, name),
        ));
    }

    let name_str = name.to_string();
    let dimensions = &family.dimensions;
    let idents: Vec<&Ident> = variants.iter().map(|(ident, _)| ident).collect();
    let symbols: Vec<&LitStr> = variants.iter().map(|(_, attr)| &attr.symbol).collect();
    let factors: Vec<&Expr> = variants.iter().map(|(_, attr)| &attr.factor).collect();
    let offsets: Vec<TokenStream2> = variants
        .iter()
        .map(|(_, attr)| match &attr.offset {
            Some(offset) => quote!(#offset),
            None => quote!(0.0),
        })
        .collect();
    let docs: Vec<String> = variants
        .iter()
        .map(|(ident, attr)| {
            format!(
                "Static marker for [`{}::{}`] (`{}`).",
                name,
                ident,
                attr.symbol.value()
            )
        })
        .collect();
    let standard_check = format!(
        "the standard unit of `{}` must have factor 1 and offset 0",
        name
    );

    let expanded = quote! {
        impl crate::Unit for #name {
            const NAME: &'static str = #name_str;
            const STANDARD: Self = #name::#standard;
            const DIMENSIONS: crate::Dimensions = #dimensions;
            const ALL: &'static [Self] = &[#(#name::#idents),*];

            fn abbreviation(self) -> &'static str {
                match self {
                    #(#name::#idents => #symbols),*
                }
            }

            fn factor(self) -> f64 {
                match self {
                    #(#name::#idents => #factors),*
                }
            }

            fn offset(self) -> f64 {
                match self {
                    #(#name::#idents => #offsets),*
                }
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<Self as crate::Unit>::abbreviation(*self))
            }
        }

        impl ::core::str::FromStr for #name {
            type Err = crate::UnitParseError;

            fn from_str(text: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as crate::Unit>::parse(text)
            }
        }

        #[cfg(feature = "serde")]
        impl ::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(<Self as crate::Unit>::abbreviation(*self))
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> ::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let text =
                    <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                <Self as crate::Unit>::parse(&text).map_err(::serde::de::Error::custom)
            }
        }

        #(
            #[doc = #docs]
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            #vis struct #idents;

            impl crate::StaticUnit for #idents {
                type Family = #name;
                const UNIT: #name = #name::#idents;
                const FACTOR: f64 = #factors;
                const OFFSET: f64 = #offsets;
            }
        )*

        const _: () = assert!(
            <#standard as crate::StaticUnit>::FACTOR == 1.0
                && <#standard as crate::StaticUnit>::OFFSET == 0.0,
            #standard_check
        );
    };

    Ok(expanded)
}

/// Parsed contents of the enum-level `#[unit(...)]` attribute.
struct FamilyAttribute {
    standard: Ident,
    dimensions: Expr,
}

impl Parse for FamilyAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut standard: Option<Ident> = None;
        let mut dimensions: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "standard" => {
                    standard = Some(input.parse()?);
                }
                "dimensions" => {
                    dimensions = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let standard = standard.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `standard`")
        })?;
        let dimensions = dimensions.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimensions`")
        })?;

        Ok(FamilyAttribute {
            standard,
            dimensions,
        })
    }
}

/// Parsed contents of a variant-level `#[unit(...)]` attribute.
struct VariantAttribute {
    symbol: LitStr,
    factor: Expr,
    offset: Option<Expr>,
}

impl Parse for VariantAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut factor: Option<Expr> = None;
        let mut offset: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "factor" => {
                    factor = Some(input.parse()?);
                }
                "offset" => {
                    offset = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let factor = factor
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `factor`"))?;

        Ok(VariantAttribute {
            symbol,
            factor,
            offset,
        })
    }
}

fn parse_unit_attribute<T: Parse>(attrs: &[Attribute]) -> syn::Result<T> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<T>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    fn length_family() -> DeriveInput {
        parse_quote! {
            #[unit(standard = Metre, dimensions = Dimensions::new(0, 1, 0, 0, 0, 0, 0))]
            pub enum LengthUnit {
                #[unit(symbol = "m", factor = 1.0)]
                Metre,
                #[unit(symbol = "mm", factor = 1e-3)]
                Millimetre,
            }
        }
    }

    #[test]
    fn family_attribute_complete() {
        let input = length_family();
        let attr = parse_unit_attribute::<FamilyAttribute>(&input.attrs).unwrap();
        assert_eq!(attr.standard.to_string(), "Metre");
    }

    #[test]
    fn family_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub enum LengthUnit { Metre }
        };

        let result = parse_unit_attribute::<FamilyAttribute>(&input.attrs);
        let err = result.err().unwrap();
        assert!(err.to_string().contains("missing #[unit(...)] attribute"));
    }

    #[test]
    fn family_attribute_missing_standard() {
        let tokens = quote! { dimensions = Dimensions::DIMENSIONLESS };
        let result: syn::Result<FamilyAttribute> = syn::parse2(tokens);
        let err = result.err().unwrap();
        assert!(err
            .to_string()
            .contains("missing required attribute `standard`"));
    }

    #[test]
    fn family_attribute_missing_dimensions() {
        let tokens = quote! { standard = Metre };
        let result: syn::Result<FamilyAttribute> = syn::parse2(tokens);
        let err = result.err().unwrap();
        assert!(err
            .to_string()
            .contains("missing required attribute `dimensions`"));
    }

    #[test]
    fn variant_attribute_with_offset() {
        let tokens = quote! { symbol = "°C", factor = 1.0, offset = 273.15 };
        let attr: VariantAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "°C");
        assert!(attr.offset.is_some());
    }

    #[test]
    fn variant_attribute_trailing_comma() {
        let tokens = quote! { symbol = "m", factor = 1.0, };
        let attr: VariantAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "m");
        assert!(attr.offset.is_none());
    }

    #[test]
    fn variant_attribute_missing_factor() {
        let tokens = quote! { symbol = "m" };
        let result: syn::Result<VariantAttribute> = syn::parse2(tokens);
        let err = result.err().unwrap();
        assert!(err.to_string().contains("missing required attribute `factor`"));
    }

    #[test]
    fn variant_attribute_unknown_field() {
        let tokens = quote! { symbol = "m", factor = 1.0, ratio = 2.0 };
        let result: syn::Result<VariantAttribute> = syn::parse2(tokens);
        let err = result.err().unwrap();
        assert!(err.to_string().contains("unknown attribute `ratio`"));
    }

    #[test]
    fn derive_generates_unit_impl_and_markers() {
        let tokens = derive_unit_impl(length_family()).unwrap();
        let code = tokens.to_string();
        assert!(code.contains("impl crate :: Unit for LengthUnit"));
        assert!(code.contains("const STANDARD : Self = LengthUnit :: Metre"));
        assert!(code.contains("LengthUnit :: Millimetre => \"mm\""));
        assert!(code.contains("pub struct Millimetre"));
        assert!(code.contains("impl crate :: StaticUnit for Millimetre"));
        assert!(code.contains("impl :: core :: str :: FromStr for LengthUnit"));
    }

    #[test]
    fn derive_rejects_unknown_standard() {
        let input: DeriveInput = parse_quote! {
            #[unit(standard = Kilometre, dimensions = Dimensions::DIMENSIONLESS)]
            pub enum LengthUnit {
                #[unit(symbol = "m", factor = 1.0)]
                Metre,
            }
        };

        let err = derive_unit_impl(input).err().unwrap();
        assert!(err.to_string().contains("is not a variant of `LengthUnit`"));
    }

    #[test]
    fn derive_rejects_structs() {
        let input: DeriveInput = parse_quote! {
            #[unit(standard = Metre, dimensions = Dimensions::DIMENSIONLESS)]
            pub struct Metre;
        };

        let err = derive_unit_impl(input).err().unwrap();
        assert!(err.to_string().contains("can only be derived for enums"));
    }

    #[test]
    fn derive_rejects_variants_with_fields() {
        let input: DeriveInput = parse_quote! {
            #[unit(standard = Metre, dimensions = Dimensions::DIMENSIONLESS)]
            pub enum LengthUnit {
                #[unit(symbol = "m", factor = 1.0)]
                Metre(f64),
            }
        };

        let err = derive_unit_impl(input).err().unwrap();
        assert!(err.to_string().contains("cannot carry fields"));
    }

    #[test]
    fn derive_error_becomes_compile_error() {
        let input: DeriveInput = parse_quote! {
            pub enum LengthUnit { Metre }
        };
        let err = derive_unit_impl(input).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
