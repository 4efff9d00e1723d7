//! Conversion traits and the type-directed dispatch helpers.

use bytes::Bytes;

use crate::ConvertError;

/// Build a value from a byte buffer.
///
/// Returns `None` when the bytes are not a valid encoding of `Self`; a
/// partially built value is never produced. Each implementor decides what
/// "valid" means.
///
/// Round-tripping `bytes -> value -> bytes` reproduces the input only for
/// implementors that accept every buffer. `String` rejects invalid UTF-8, so
/// for text the guarantee holds in the `value -> bytes -> value` direction.
///
/// # Example
///
/// ```
/// use bytesconv::{Bytes, FromBytes};
///
/// let raw = Vec::<u8>::try_from_bytes(Bytes::from_static(b"\x00\xff")).unwrap();
/// assert_eq!(raw, [0x00, 0xff]);
/// ```
pub trait FromBytes: Sized {
    /// Try to build `Self` from `bytes`.
    fn try_from_bytes(bytes: Bytes) -> Option<Self>;
}

/// Turn a value into a byte buffer.
///
/// Infallible and deterministic: equal values always produce equal bytes.
///
/// # Example
///
/// ```
/// use bytesconv::ToBytes;
///
/// assert_eq!(&"hi".to_bytes()[..], [0x68, 0x69]);
/// ```
pub trait ToBytes {
    /// Encode `self` into a new buffer.
    fn to_bytes(&self) -> Bytes;

    /// Encode `self`, reusing its storage where possible.
    ///
    /// Must produce the same bytes as [`to_bytes`](Self::to_bytes).
    #[inline]
    fn into_buffer(self) -> Bytes
    where
        Self: Sized,
    {
        self.to_bytes()
    }

    /// Encoded length in bytes.
    ///
    /// Default encodes and measures; implementors with a cheaper answer
    /// override it.
    #[inline]
    fn byte_len(&self) -> usize {
        self.to_bytes().len()
    }
}

/// Convert `buffer` into `T`.
///
/// Identical to `T::try_from_bytes(buffer)`. The target is usually inferred:
///
/// ```
/// use bytesconv::{Bytes, convert};
///
/// let text: Option<String> = convert(Bytes::from_static(b"hi"));
/// assert_eq!(text.as_deref(), Some("hi"));
/// ```
#[inline]
pub fn convert<T: FromBytes>(buffer: Bytes) -> Option<T> {
    T::try_from_bytes(buffer)
}

/// Convert `buffer` into `T`, reporting failure as a [`ConvertError`].
///
/// ```
/// use bytesconv::{Bytes, try_convert};
///
/// let err = try_convert::<String>(Bytes::from_static(&[0xff])).unwrap_err();
/// assert_eq!(err.target(), "alloc::string::String");
/// ```
#[inline]
pub fn try_convert<T: FromBytes>(buffer: Bytes) -> crate::Result<T> {
    T::try_from_bytes(buffer).ok_or_else(ConvertError::for_type::<T>)
}

/// Method-call form of [`convert`] and [`try_convert`].
pub trait ConvertExt {
    /// Convert `self` into `T`. See [`convert`].
    fn convert<T: FromBytes>(self) -> Option<T>;

    /// Convert `self` into `T`. See [`try_convert`].
    fn try_convert<T: FromBytes>(self) -> crate::Result<T>;
}

impl ConvertExt for Bytes {
    #[inline]
    fn convert<T: FromBytes>(self) -> Option<T> {
        convert(self)
    }

    #[inline]
    fn try_convert<T: FromBytes>(self) -> crate::Result<T> {
        try_convert(self)
    }
}
