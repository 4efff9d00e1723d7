use alloc::{string::String, vec::Vec};
use core::fmt;
use core::marker::PhantomData;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::{Bytes, ConvertError, FromBytes, ToBytes};

/// Wrapper carrying any `ToBytes` / `FromBytes` value through serde.
///
/// Human-readable formats (JSON, TOML, ...) get a standard base64 string.
/// Binary formats get the raw bytes.
///
/// ```
/// use bytesconv::BytesSerde;
///
/// let json = serde_json::to_string(&BytesSerde(String::from("hi"))).unwrap();
/// assert_eq!(json, "\"aGk=\"");
///
/// let back: BytesSerde<String> = serde_json::from_str(&json).unwrap();
/// assert_eq!(back.0, "hi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BytesSerde<T>(pub T);

impl<T> BytesSerde<T> {
    /// Unwrap the inner value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for BytesSerde<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: ToBytes> Serialize for BytesSerde<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let bytes = self.0.to_bytes();
        if serializer.is_human_readable() {
            serializer.serialize_str(&STANDARD.encode(&bytes))
        } else {
            serializer.serialize_bytes(&bytes)
        }
    }
}

impl<'de, T: FromBytes> Deserialize<'de> for BytesSerde<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let visitor = BytesVisitor(PhantomData);
        let value = if deserializer.is_human_readable() {
            deserializer.deserialize_str(visitor)?
        } else {
            deserializer.deserialize_byte_buf(visitor)?
        };
        Ok(Self(value))
    }
}

/// Upper bound on preallocation from an untrusted sequence length hint.
const MAX_PREALLOC: usize = 4096;

struct BytesVisitor<T>(PhantomData<T>);

impl<T: FromBytes> BytesVisitor<T> {
    fn finish<E: de::Error>(bytes: Bytes) -> Result<T, E> {
        T::try_from_bytes(bytes).ok_or_else(|| E::custom(ConvertError::for_type::<T>()))
    }
}

impl<'de, T: FromBytes> Visitor<'de> for BytesVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a base64 string or a byte array")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        let decoded = STANDARD
            .decode(v)
            .map_err(|_| E::custom("invalid base64"))?;
        Self::finish(Bytes::from(decoded))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<T, E> {
        self.visit_str(&v)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<T, E> {
        Self::finish(Bytes::copy_from_slice(v))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<T, E> {
        Self::finish(Bytes::from(v))
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<T, A::Error> {
        let mut buf = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(MAX_PREALLOC));
        while let Some(byte) = seq.next_element::<u8>()? {
            buf.push(byte);
        }
        Self::finish(Bytes::from(buf))
    }
}
