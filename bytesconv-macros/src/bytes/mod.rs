//! Derive macros for bytesconv.

mod from_bytes;
mod to_bytes;

pub use from_bytes::derive_from_bytes;
pub use to_bytes::derive_to_bytes;

use proc_macro2::TokenStream as TokenStream2;
use syn::{Data, DeriveInput, Fields, Generics, Member, Type, parse_quote};

/// Locate the only field of a newtype struct.
///
/// Returns the field's access path (`name` or `0`) and its type.
pub fn single_field<'a>(input: &'a DeriveInput, derive: &str) -> syn::Result<(Member, &'a Type)> {
    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                format!("{derive} derive is only supported for structs."),
            ));
        }
    };

    let mut fields = match &data.fields {
        Fields::Named(named) => named.named.iter(),
        Fields::Unnamed(unnamed) => unnamed.unnamed.iter(),
        Fields::Unit => {
            return Err(syn::Error::new_spanned(
                input,
                format!("{derive} derive requires a struct with exactly one field, found none."),
            ));
        }
    };

    match (fields.next(), fields.next()) {
        (Some(field), None) => {
            let member = match &field.ident {
                Some(ident) => Member::Named(ident.clone()),
                None => Member::Unnamed(0.into()),
            };
            Ok((member, &field.ty))
        }
        _ => Err(syn::Error::new_spanned(
            &data.fields,
            format!(
                "{derive} derive requires a struct with exactly one field, found {}.",
                data.fields.len()
            ),
        )),
    }
}

/// Clone the input generics, requiring `ty: bound` when the struct is generic.
pub fn bounded_generics(input: &DeriveInput, ty: &Type, bound: TokenStream2) -> Generics {
    let mut generics = input.generics.clone();
    if !generics.params.is_empty() {
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(#ty: #bound));
    }
    generics
}
