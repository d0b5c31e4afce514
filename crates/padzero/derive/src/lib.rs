// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Procedural macros for the `padzero` crate.
//!
//! Provides the `#[derive(PadZero)]` macro implementing `FixedLayout` for
//! `#[repr(C)]` structs and fieldless enums with an explicit representation.
//!
//! ## License
//!
//! GPL-3.0-only

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

use proc_macro::TokenStream;
use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    Attribute, Data, DataEnum, DataStruct, DeriveInput, Fields, Ident, Index, LitStr, Member, Meta,
    Type, parse_macro_input,
};

/// Derives `FixedLayout` for a struct or enum, enabling padding zeroization.
///
/// The generated implementation exposes a static `SHAPE` describing the
/// type's layout: total size plus one field descriptor per declared field,
/// with offsets taken from `core::mem::offset_of!` and nested shapes taken
/// from each field type's own `FixedLayout` implementation.
///
/// # Requirements
///
/// - Structs must be `#[repr(C)]` — the default Rust layout has
///   compiler-chosen field order and is rejected.
/// - Every struct field must itself implement `FixedLayout` (primitives,
///   arrays, and other `#[derive(PadZero)]` types).
/// - Enums must be fieldless and carry an explicit representation
///   (`#[repr(u8)]`, `#[repr(C)]`, ...); they become leaves with no
///   padding of their own.
/// - Reference and pointer fields, unions, data-carrying enums, and
///   borrowed lifetimes are rejected with a compile error.
///
/// # Examples
///
/// ```rust
/// use padzero_core::zero_padding;
/// use padzero_derive::PadZero;
///
/// #[derive(PadZero)]
/// #[repr(C)]
/// struct Sample {
///     tag: u8,
///     // 3 bytes of padding here
///     value: u32,
/// }
///
/// let mut sample = Sample { tag: 1, value: 2 };
/// zero_padding(&mut sample);
/// assert_eq!(sample.tag, 1);
/// assert_eq!(sample.value, 2);
/// ```
#[proc_macro_derive(PadZero)]
pub fn derive_pad_zero(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input).unwrap_or_else(|e| e).into()
}

/// Finds the root crate path from a list of candidates.
///
/// Resolves the correct import path for `padzero` or `padzero-core`
/// depending on context.
pub(crate) fn find_root_with_candidates(candidates: &[&'static str]) -> TokenStream2 {
    for &candidate in candidates {
        match crate_name(candidate) {
            Ok(FoundCrate::Itself) => return quote!(crate),
            Ok(FoundCrate::Name(name)) => {
                let id = Ident::new(&name, Span::call_site());
                return quote!(#id);
            }
            Err(_) => continue,
        }
    }

    let msg = "PadZero: could not find padzero or padzero-core. Add padzero to Cargo.toml.";
    let lit = LitStr::new(msg, Span::call_site());
    quote! { compile_error!(#lit); }
}

/// Collects the comma-separated tokens of every `#[repr(...)]` attribute.
pub(crate) fn repr_tokens(attrs: &[Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter_map(|attr| match &attr.meta {
            Meta::List(meta_list) if meta_list.path.is_ident("repr") => {
                Some(meta_list.tokens.to_string())
            }
            _ => None,
        })
        .flat_map(|tokens| {
            tokens
                .split(',')
                .map(|token| token.trim().to_string())
                .collect::<Vec<_>>()
        })
        .collect()
}

pub(crate) fn has_repr_c(attrs: &[Attribute]) -> bool {
    repr_tokens(attrs).iter().any(|token| token == "C")
}

pub(crate) fn has_explicit_enum_repr(attrs: &[Attribute]) -> bool {
    const PRIMITIVE_REPRS: &[&str] = &[
        "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128", "isize",
    ];

    repr_tokens(attrs)
        .iter()
        .any(|token| token == "C" || PRIMITIVE_REPRS.contains(&token.as_str()))
}

/// Detects field types that can never be fixed-layout POD.
///
/// References and raw pointers get a targeted error here; anything else
/// that is not fixed-layout fails later on the `FixedLayout` bound.
pub(crate) fn non_pod_field_kind(ty: &Type) -> Option<&'static str> {
    match ty {
        Type::Reference(_) => Some("a reference"),
        Type::Ptr(_) => Some("a raw pointer"),
        _ => None,
    }
}

/// Expands the DeriveInput into the `FixedLayout` implementation.
fn expand(input: DeriveInput) -> Result<TokenStream2, TokenStream2> {
    // 1) Resolve the `padzero_core` or `padzero` crate (prefer padzero_core)
    let root = find_root_with_candidates(&["padzero-core", "padzero"]);

    // 2) Borrowed data can never be fixed-layout POD
    if input.generics.lifetimes().next().is_some() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "PadZero cannot be derived for types with lifetime parameters: \
             borrowed data is not fixed-layout POD.",
        )
        .to_compile_error());
    }

    match &input.data {
        Data::Struct(data) => expand_struct(&input, data, &root),
        Data::Enum(data) => expand_enum(&input, data, &root),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "PadZero cannot be derived for unions: overlapping field layout \
             has no well-defined padding.",
        )
        .to_compile_error()),
    }
}

fn expand_struct(
    input: &DeriveInput,
    data: &DataStruct,
    root: &TokenStream2,
) -> Result<TokenStream2, TokenStream2> {
    // Without repr(C) the compiler may reorder fields; offsets would still
    // be queryable but the layout is not the declared sequential one.
    if !has_repr_c(&input.attrs) {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "PadZero requires #[repr(C)]: the default Rust layout has \
             unspecified field order.",
        )
        .to_compile_error());
    }

    let fields: Vec<&syn::Field> = match &data.fields {
        Fields::Named(named) => named.named.iter().collect(),
        Fields::Unnamed(unnamed) => unnamed.unnamed.iter().collect(),
        Fields::Unit => vec![],
    };

    for (i, field) in fields.iter().enumerate() {
        if let Some(kind) = non_pod_field_kind(&field.ty) {
            let field_name = if let Some(ident) = &field.ident {
                format!("field `{}`", ident)
            } else {
                format!("field at index {}", i)
            };

            return Err(syn::Error::new_spanned(
                &field.ty,
                format!(
                    "{} is {} and cannot be fixed-layout POD. PadZero supports \
                     only primitives, fieldless enums, arrays, and nested \
                     #[derive(PadZero)] aggregates.",
                    field_name, kind
                ),
            )
            .to_compile_error());
        }
    }

    let descriptors: Vec<TokenStream2> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let member: Member = match &field.ident {
                Some(ident) => Member::Named(ident.clone()),
                None => Member::Unnamed(Index::from(i)),
            };
            let ty = &field.ty;

            quote! {
                #root::FieldDescriptor {
                    offset: ::core::mem::offset_of!(Self, #member),
                    shape: <#ty as #root::FixedLayout>::SHAPE,
                }
            }
        })
        .collect();

    Ok(emit_impl(input, root, quote! { &[ #( #descriptors ),* ] }))
}

fn expand_enum(
    input: &DeriveInput,
    data: &DataEnum,
    root: &TokenStream2,
) -> Result<TokenStream2, TokenStream2> {
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "PadZero supports only fieldless enums: data-carrying \
                 variants have overlapping payload layout.",
            )
            .to_compile_error());
        }
    }

    if !has_explicit_enum_repr(&input.attrs) {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "PadZero requires an explicit representation on enums, e.g. \
             #[repr(u8)]: the default discriminant layout is unspecified.",
        )
        .to_compile_error());
    }

    // Fieldless enums are leaves: a bare discriminant with no padding.
    Ok(emit_impl(input, root, quote! { &[] }))
}

fn emit_impl(input: &DeriveInput, root: &TokenStream2, fields: TokenStream2) -> TokenStream2 {
    let name = &input.ident;

    // Every type parameter must itself be fixed-layout.
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(syn::parse_quote!(#root::FixedLayout));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        // SAFETY: offsets come from `offset_of!` and sizes from `size_of`,
        // so the emitted shape describes the actual layout; repr
        // requirements checked by the derive guarantee the layout is the
        // declared sequential one.
        unsafe impl #impl_generics #root::FixedLayout for #name #ty_generics #where_clause {
            const SHAPE: &'static #root::TypeShape = &#root::TypeShape {
                size: ::core::mem::size_of::<Self>(),
                fields: #fields,
            };
        }
    }
}
