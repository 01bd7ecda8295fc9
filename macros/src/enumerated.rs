//! Implementation of `#[derive(Enumerated)]`
//!
//! Validates that the input is a fieldless, non-generic enum and generates the
//! `Enumerated` impl together with its per-type metadata cache.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Fields, Ident, Path, parse_macro_input, parse_quote};

use crate::common::{check_repr, get_crate_path};

/// Entry point for `#[derive(Enumerated)]`.
pub fn derive_enumerated_impl(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);

    let parsed = match parse_input(&input) {
        Ok(parsed) => parsed,
        Err(err) => return err.to_compile_error().into(),
    };

    generate_output(&parsed).into()
}

// ============================================================================
// Data Structures
// ============================================================================

/// Validated derive input
struct ParsedEnum<'a> {
    /// The enum's name
    ident: &'a Ident,
    /// Path of the runtime crate used in generated code
    krate: Path,
    /// Variant names, in declaration order
    variants: Vec<&'a Ident>,
}

// ============================================================================
// Input Parsing
// ============================================================================

fn parse_input(input: &DeriveInput) -> syn::Result<ParsedEnum<'_>> {
    let data = match &input.data {
        Data::Enum(data) => data,
        Data::Struct(_) | Data::Union(_) => {
            return Err(syn::Error::new(
                input.ident.span(),
                "[enumerated] `Enumerated` can only be derived for enums",
            ));
        }
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.ident.span(),
            "[enumerated] generic enums are not supported",
        ));
    }

    check_repr(&input.attrs)?;
    let variants = parse_variants(data)?;
    let krate = get_crate_path(&input.attrs)?.unwrap_or_else(|| parse_quote!(::enumerated));

    Ok(ParsedEnum {
        ident: &input.ident,
        krate,
        variants,
    })
}

/// Collect variant names, rejecting every variant that carries fields.
fn parse_variants(data: &DataEnum) -> syn::Result<Vec<&Ident>> {
    let mut errors: Option<syn::Error> = None;
    let mut variants = Vec::with_capacity(data.variants.len());

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            let err = syn::Error::new(
                variant.ident.span(),
                "[enumerated] variants must not have fields",
            );
            match errors.as_mut() {
                Some(errors) => errors.combine(err),
                None => errors = Some(err),
            }
            continue;
        }
        variants.push(&variant.ident);
    }

    match errors {
        Some(errors) => Err(errors),
        None => Ok(variants),
    }
}

// ============================================================================
// Code Generation
// ============================================================================

fn generate_output(parsed: &ParsedEnum<'_>) -> TokenStream2 {
    let ParsedEnum {
        ident,
        krate,
        variants,
    } = parsed;

    // An empty enum cannot be cast, but it has no values to cast either.
    let discriminant = if variants.is_empty() {
        quote! { match self {} }
    } else {
        quote! { self as i128 }
    };

    quote! {
        impl #krate::Enumerated for #ident {
            const VARIANTS: &'static [Self] = &[#(Self::#variants),*];

            #[inline]
            fn discriminant(self) -> i128 {
                #discriminant
            }

            fn metadata() -> &'static #krate::EnumMetadata<Self> {
                static METADATA: #krate::shim::OnceBox<#krate::EnumMetadata<#ident>> =
                    #krate::shim::OnceBox::new();
                METADATA.get_or_init(|| #krate::shim::Box::new(#krate::EnumMetadata::resolve()))
            }
        }
    }
}
