//! ToBytes derive macro implementation.

use super::{bounded_generics, single_field};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

/// Derive the `ToBytes` trait for a newtype struct.
pub fn derive_to_bytes(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn derive_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (member, field_type) = single_field(input, "ToBytes")?;
    let generics = bounded_generics(input, field_type, quote!(::bytesconv::ToBytes));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::bytesconv::ToBytes for #name #ty_generics #where_clause {
            #[inline]
            fn to_bytes(&self) -> ::bytesconv::Bytes {
                <#field_type as ::bytesconv::ToBytes>::to_bytes(&self.#member)
            }

            #[inline]
            fn into_buffer(self) -> ::bytesconv::Bytes {
                <#field_type as ::bytesconv::ToBytes>::into_buffer(self.#member)
            }

            #[inline]
            fn byte_len(&self) -> ::core::primitive::usize {
                <#field_type as ::bytesconv::ToBytes>::byte_len(&self.#member)
            }
        }
    })
}
