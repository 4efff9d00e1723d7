#[cfg(feature = "tracing")]
use core::any::type_name;

use bytes::Bytes;

use crate::{FromBytes, ToBytes};

mod alloc;

// Bytes is its own encoding.
impl FromBytes for Bytes {
    #[inline]
    fn try_from_bytes(bytes: Bytes) -> Option<Self> {
        Some(bytes)
    }
}

impl ToBytes for Bytes {
    /// Shares the underlying storage; no bytes are copied.
    #[inline]
    fn to_bytes(&self) -> Bytes {
        self.clone()
    }

    #[inline]
    fn into_buffer(self) -> Bytes {
        self
    }

    #[inline]
    fn byte_len(&self) -> usize {
        self.len()
    }
}

// Borrowed views encode like their owned forms but cannot be built from an
// owned buffer, so they only implement ToBytes.

impl ToBytes for [u8] {
    #[inline]
    fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self)
    }

    #[inline]
    fn byte_len(&self) -> usize {
        self.len()
    }
}

impl<const N: usize> ToBytes for [u8; N] {
    #[inline]
    fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self)
    }

    #[inline]
    fn byte_len(&self) -> usize {
        N
    }
}

impl ToBytes for str {
    #[inline]
    fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self.as_bytes())
    }

    #[inline]
    fn byte_len(&self) -> usize {
        self.len()
    }
}

impl<T: ToBytes + ?Sized> ToBytes for &T {
    #[inline]
    fn to_bytes(&self) -> Bytes {
        (**self).to_bytes()
    }

    #[inline]
    fn byte_len(&self) -> usize {
        (**self).byte_len()
    }
}

/// Record a rejected buffer. Never changes the conversion result.
#[inline]
fn trace_rejected<T: ?Sized>(len: usize, valid_up_to: usize) {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        target_type = type_name::<T>(),
        len,
        valid_up_to,
        "bytes rejected by conversion"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = (len, valid_up_to);
}
