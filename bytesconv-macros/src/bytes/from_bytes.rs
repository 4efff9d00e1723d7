//! FromBytes derive macro implementation.

use super::{bounded_generics, single_field};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

/// Derive the `FromBytes` trait for a newtype struct.
pub fn derive_from_bytes(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn derive_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (member, field_type) = single_field(input, "FromBytes")?;
    let generics = bounded_generics(input, field_type, quote!(::bytesconv::FromBytes));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // `Self { 0: inner }` is valid for tuple structs too.
    Ok(quote! {
        impl #impl_generics ::bytesconv::FromBytes for #name #ty_generics #where_clause {
            #[inline]
            fn try_from_bytes(bytes: ::bytesconv::Bytes) -> ::core::option::Option<Self> {
                <#field_type as ::bytesconv::FromBytes>::try_from_bytes(bytes)
                    .map(|inner| Self { #member: inner })
            }
        }
    })
}
