//! Error types for tonelut operations.
//!
//! Both variants describe caller mistakes rather than transient
//! conditions. Every operation validates its inputs before touching the
//! table or the pixel buffer, so an `Err` always means nothing changed.
//!
//! # Usage
//!
//! ```rust
//! use tonelut_core::{Error, Result};
//!
//! fn check_len(values: &[f32]) -> Result<()> {
//!     if values.len() != 256 {
//!         return Err(Error::invalid_argument(
//!             "set",
//!             format!("expected 256 values, got {}", values.len()),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_len(&[0.0; 10]).unwrap_err().is_argument_error());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by table and pixel operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A table transfer array was missing or had the wrong length, or a
    /// builder parameter was out of range.
    #[error("invalid argument to {op}: {reason}")]
    InvalidArgument {
        /// Operation that rejected the argument
        op: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// The target pixel buffer is absent or too small for its declared
    /// dimensions.
    #[error("invalid image: {reason}")]
    InvalidImage {
        /// What was wrong with the buffer
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] error.
    #[inline]
    pub fn invalid_argument(op: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            op,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidImage`] error.
    #[inline]
    pub fn invalid_image(reason: impl Into<String>) -> Self {
        Self::InvalidImage {
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is an argument error.
    #[inline]
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns `true` if this is an image error.
    #[inline]
    pub fn is_image_error(&self) -> bool {
        matches!(self, Self::InvalidImage { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = Error::invalid_argument("map", "expected 256 values, got 3");
        let msg = err.to_string();
        assert!(msg.contains("map"));
        assert!(msg.contains("got 3"));
        assert!(err.is_argument_error());
        assert!(!err.is_image_error());
    }

    #[test]
    fn test_invalid_image_message() {
        let err = Error::invalid_image("buffer is absent");
        assert_eq!(err.to_string(), "invalid image: buffer is absent");
        assert!(err.is_image_error());
    }
}
