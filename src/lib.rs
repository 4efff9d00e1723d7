//! Symmetric conversions between byte buffers and typed values.
//!
//! Two independent capabilities describe the directions a type supports:
//!
//! - [`FromBytes`] - fallibly build a value from a [`Bytes`] buffer
//! - [`ToBytes`] - turn a value into a [`Bytes`] buffer, infallibly
//!
//! [`convert`] (and [`ConvertExt::convert`]) picks the conversion from the
//! requested result type.
//!
//! Built-in conformers: `String` (UTF-8), `Vec<u8>` (raw bytes) and
//! `Bytes` itself (identity).
//!
//! # Example
//!
//! ```
//! use bytesconv::{Bytes, ConvertExt, ToBytes};
//!
//! let buf = Bytes::from_static(&[0x68, 0x69]);
//! let text: Option<String> = buf.clone().convert();
//! assert_eq!(text.as_deref(), Some("hi"));
//!
//! assert_eq!(String::from("hi").to_bytes(), buf);
//!
//! // Not every buffer is text.
//! assert_eq!(Bytes::from_static(&[0xFF]).convert::<String>(), None);
//! ```

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

mod error;
mod impls;
mod traits;

#[cfg(feature = "serde")]
mod bridges;

pub use bytes::Bytes;
pub use error::{ConvertError, Result};
pub use traits::{ConvertExt, FromBytes, ToBytes, convert, try_convert};

#[cfg(feature = "serde")]
pub use bridges::BytesSerde;

#[cfg(feature = "derive")]
pub use bytesconv_macros::{FromBytes as DeriveFromBytes, ToBytes as DeriveToBytes};

#[cfg(test)]
mod tests;
