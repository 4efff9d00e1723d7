//! Derive macros for bytesconv.
//!
//! Both derives target structs with exactly one field and delegate to it,
//! so a newtype converts exactly like the type it wraps.

use proc_macro::TokenStream;
mod bytes;

/// Derive `ToBytes` by delegating to the single field.
#[proc_macro_derive(ToBytes)]
pub fn derive_to_bytes(input: TokenStream) -> TokenStream {
    bytes::derive_to_bytes(input)
}

/// Derive `FromBytes` by delegating to the single field.
#[proc_macro_derive(FromBytes)]
pub fn derive_from_bytes(input: TokenStream) -> TokenStream {
    bytes::derive_from_bytes(input)
}
