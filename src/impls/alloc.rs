use alloc::{string::String, vec::Vec};

use bytes::Bytes;

use super::trace_rejected;
use crate::{FromBytes, ToBytes};

/// UTF-8 text.
///
/// Only well-formed UTF-8 converts; anything else is `None`, never a lossy
/// decode. Because of that, `bytes -> String -> bytes` is only lossless for
/// buffers that are valid UTF-8 to begin with, while
/// `String -> bytes -> String` always is.
impl FromBytes for String {
    fn try_from_bytes(bytes: Bytes) -> Option<Self> {
        core::str::from_utf8(&bytes)
            .inspect_err(|err| trace_rejected::<Self>(bytes.len(), err.valid_up_to()))
            .ok()
            .map(String::from)
    }
}

impl ToBytes for String {
    #[inline]
    fn to_bytes(&self) -> Bytes {
        self.as_str().to_bytes()
    }

    #[inline]
    fn into_buffer(self) -> Bytes {
        Bytes::from(self)
    }

    #[inline]
    fn byte_len(&self) -> usize {
        self.len()
    }
}

// Raw byte sequence: every buffer converts, byte for byte.
impl FromBytes for Vec<u8> {
    #[inline]
    fn try_from_bytes(bytes: Bytes) -> Option<Self> {
        Some(bytes.to_vec())
    }
}

impl ToBytes for Vec<u8> {
    #[inline]
    fn to_bytes(&self) -> Bytes {
        self.as_slice().to_bytes()
    }

    #[inline]
    fn into_buffer(self) -> Bytes {
        Bytes::from(self)
    }

    #[inline]
    fn byte_len(&self) -> usize {
        self.len()
    }
}
