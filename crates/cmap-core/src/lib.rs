//! # cmap-core
//!
//! Colormap types for mapping scalar data in `[0, 1]` to RGBA colors.
//!
//! This crate provides the model every cmap-rs crate builds on:
//!
//! - [`ChannelFunction`], [`ChannelFn`] - Continuous per-channel functions
//! - [`Samples`] - Scalar or shaped array input/output
//! - [`SegmentData`], [`ChannelData`], [`Anchor`] - Per-channel definitions
//! - [`Colormap`] - Named map with lazy lookup table, reversal, resampling
//! - [`ColormapOptions`] - Lookup table size and gamma, loadable from YAML
//! - [`registry`] - Built-in colormaps resolved by name
//!
//! ## Colormap kinds
//!
//! A colormap is **function-based** when its red, green and blue channels
//! are continuous functions, **segmented** when any of them is an anchor
//! list, and **listed** when it is an explicit list of colors. Transforms
//! that compose channel functions accept only function-based maps and
//! report [`Error::UnsupportedKind`] otherwise.
//!
//! ```rust
//! use cmap_core::{registry, ColormapKind};
//!
//! assert_eq!(registry::get("afmhot").unwrap().kind(), ColormapKind::Function);
//! assert_eq!(registry::get("jet").unwrap().kind(), ColormapKind::Segmented);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! cmap-core (this crate)
//!    ^
//!    |
//!    +-- cmap-masky (brightness-to-alpha transform)
//!    +-- cmap-cli (cmap binary)
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` - Sample batches with rayon (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod colormap;
pub mod error;
pub mod gnuplot;
pub mod options;
pub mod registry;
pub mod segment;

pub use channel::{channel_fn, linspace, ChannelFn, ChannelFunction, Samples, ScalarFn};
pub use colormap::{Channel, Colormap, ColormapData, ColormapKind, ContinuousChannels, Extremes};
pub use error::{Error, Result};
pub use gnuplot::GnuplotFormula;
pub use options::{ColormapOptions, DEFAULT_LUT_SIZE};
pub use segment::{Anchor, ChannelData, SegmentData};
