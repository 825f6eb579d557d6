//! Error types for colormap construction and lookup.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of:
//! - Segment table validation (anchor lists)
//! - Colormap kind checks (function-based vs anchor-based channels)
//! - Built-in name lookup
//! - Options loading (YAML, file I/O)
//!
//! Numeric edge cases during sampling are never errors: out-of-range inputs
//! map to the under/over/bad colors instead.
//!
//! # Usage
//!
//! ```rust
//! use cmap_core::{Error, Result};
//!
//! fn require_positive(n: usize) -> Result<usize> {
//!     if n == 0 {
//!         return Err(Error::invalid_options("lut_size must be >= 1"));
//!     }
//!     Ok(n)
//! }
//! assert!(require_positive(0).is_err());
//! ```

use thiserror::Error;

use crate::colormap::ColormapKind;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, resolving or configuring colormaps.
///
/// # Categories
///
/// - **Kind errors**: [`UnsupportedKind`](Error::UnsupportedKind)
/// - **Lookup errors**: [`UnknownColormap`](Error::UnknownColormap)
/// - **Definition errors**: [`InvalidAnchors`](Error::InvalidAnchors),
///   [`EmptyColorList`](Error::EmptyColorList), [`InvalidShape`](Error::InvalidShape)
/// - **Configuration errors**: [`InvalidOptions`](Error::InvalidOptions),
///   [`Io`](Error::Io), [`Yaml`](Error::Yaml)
#[derive(Debug, Error)]
pub enum Error {
    /// The colormap is not defined by continuous channel functions.
    ///
    /// Returned when an operation needs to compose red, green and blue
    /// functions but the map uses anchor lists or an explicit color list.
    #[error("colormap '{name}' is {kind}, expected function-based red, green and blue channels")]
    UnsupportedKind {
        /// Colormap name
        name: String,
        /// Actual representation
        kind: ColormapKind,
    },

    /// No built-in colormap has this name.
    #[error("unknown colormap: {name}")]
    UnknownColormap {
        /// Requested name
        name: String,
    },

    /// A channel's anchor list is malformed.
    #[error("invalid anchors for channel '{channel}': {reason}")]
    InvalidAnchors {
        /// Channel name (red, green, blue, alpha)
        channel: &'static str,
        /// What is wrong with the list
        reason: String,
    },

    /// Array shape does not match the number of elements.
    #[error("shape mismatch: shape holds {expected} elements, got {got}")]
    InvalidShape {
        /// Element count implied by the shape
        expected: usize,
        /// Element count supplied
        got: usize,
    },

    /// A listed colormap needs at least one color.
    #[error("color list is empty")]
    EmptyColorList,

    /// Colormap options are out of range.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// I/O error while reading an options file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Creates an [`Error::UnsupportedKind`] error.
    #[inline]
    pub fn unsupported_kind(name: impl Into<String>, kind: ColormapKind) -> Self {
        Self::UnsupportedKind {
            name: name.into(),
            kind,
        }
    }

    /// Creates an [`Error::UnknownColormap`] error.
    #[inline]
    pub fn unknown_colormap(name: impl Into<String>) -> Self {
        Self::UnknownColormap { name: name.into() }
    }

    /// Creates an [`Error::InvalidAnchors`] error.
    #[inline]
    pub fn invalid_anchors(channel: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidAnchors {
            channel,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidOptions`] error.
    #[inline]
    pub fn invalid_options(msg: impl Into<String>) -> Self {
        Self::InvalidOptions(msg.into())
    }

    /// Returns `true` if the colormap kind did not support the operation.
    #[inline]
    pub fn is_unsupported_kind(&self) -> bool {
        matches!(self, Self::UnsupportedKind { .. })
    }

    /// Returns `true` if a name lookup failed.
    #[inline]
    pub fn is_unknown_colormap(&self) -> bool {
        matches!(self, Self::UnknownColormap { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_kind() {
        let err = Error::unsupported_kind("hot", ColormapKind::Segmented);
        let msg = err.to_string();
        assert!(msg.contains("hot"));
        assert!(msg.contains("segmented"));
        assert!(err.is_unsupported_kind());
        assert!(!err.is_unknown_colormap());
    }

    #[test]
    fn test_invalid_anchors() {
        let err = Error::invalid_anchors("green", "must start at x = 0");
        assert!(err.to_string().contains("green"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
