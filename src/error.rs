//! Error type for conversions.

use core::fmt;

/// Error returned when bytes cannot be converted to the requested type.
///
/// There is a single failure kind. Only the name of the requested type is
/// recorded; no position or cause is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// The buffer is not a valid encoding of the target type.
    Unconvertible {
        /// Name of the requested type.
        target: &'static str,
    },
}

impl ConvertError {
    /// Error for a failed conversion to `T`.
    #[inline]
    #[must_use]
    pub fn for_type<T: ?Sized>() -> Self {
        Self::Unconvertible {
            target: core::any::type_name::<T>(),
        }
    }

    /// Name of the type the conversion targeted.
    #[inline]
    #[must_use]
    pub fn target(&self) -> &'static str {
        match self {
            Self::Unconvertible { target } => target,
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unconvertible { target } => write!(f, "cannot convert bytes to {target}"),
        }
    }
}

impl core::error::Error for ConvertError {}

/// Result type for conversions.
pub type Result<T> = core::result::Result<T, ConvertError>;
