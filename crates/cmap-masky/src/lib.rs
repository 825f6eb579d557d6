//! # cmap-masky
//!
//! Derives colormaps whose brightness becomes transparency.
//!
//! A masky colormap keeps the hue of its source but normalizes each color
//! to its brightest channel and moves that brightness into alpha. Dark
//! regions turn transparent instead of black, so an image painted with the
//! masky map can be layered over another image.
//!
//! # Usage
//!
//! ```rust
//! use cmap_masky::masky;
//!
//! let hot = masky("afmhot").unwrap();
//! assert_eq!(hot.name(), "afmhot_masky");
//!
//! // Half-way up afmhot: full red, half green, little blue, fully opaque.
//! let rgba = hot.sample(0.5);
//! assert_eq!(rgba[0], 1.0);
//! assert_eq!(rgba[3], 1.0);
//! ```
//!
//! Only function-based sources are supported; anchor-list and listed maps
//! fail with [`cmap_core::Error::UnsupportedKind`].
//!
//! # Dependencies
//!
//! - [`cmap-core`] - Colormap model and built-in lookup
//! - [`tracing`] - Logging

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod transform;

pub use transform::{derive, masky, pointwise, MaskyEvaluator, Source, NAME_SUFFIX};
