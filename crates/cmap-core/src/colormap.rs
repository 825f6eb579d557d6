//! Colormaps: named mappings from `[0, 1]` to RGBA.
//!
//! A [`Colormap`] owns a definition ([`ColormapData`]) and lazily samples it
//! into a lookup table of [`ColormapOptions::lut_size`] entries. Lookups go
//! through the table; [`Colormap::eval_rgba`] evaluates continuous maps
//! directly.
//!
//! # Example
//!
//! ```rust
//! use cmap_core::{channel_fn, Colormap, ColormapKind, ColormapOptions};
//!
//! let cmap = Colormap::from_functions(
//!     "red_ramp",
//!     channel_fn(|x| x),
//!     channel_fn(|_| 0.0),
//!     channel_fn(|_| 0.0),
//!     ColormapOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(cmap.kind(), ColormapKind::Function);
//! assert_eq!(cmap.sample(1.0), [1.0, 0.0, 0.0, 1.0]);
//! ```

use std::fmt;
use std::sync::OnceLock;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::channel::{ChannelFn, ChannelFunction};
use crate::options::ColormapOptions;
use crate::segment::{ChannelData, SegmentData};
use crate::{Error, Result};

/// How a colormap is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColormapKind {
    /// Red, green and blue are continuous functions.
    Function,
    /// At least one of red, green and blue is an anchor list.
    Segmented,
    /// Explicit list of colors.
    Listed,
}

impl fmt::Display for ColormapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Function => "function-based",
            Self::Segmented => "segmented",
            Self::Listed => "listed",
        })
    }
}

/// Selects one RGBA component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red
    Red,
    /// Green
    Green,
    /// Blue
    Blue,
    /// Alpha
    Alpha,
}

impl Channel {
    /// All channels in RGBA order.
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    /// Index of the channel inside an RGBA array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Definition behind a colormap.
#[derive(Debug, Clone)]
pub enum ColormapData {
    /// Per-channel functions or anchor lists.
    Segmented(SegmentData),
    /// Explicit RGBA colors, one per lookup entry.
    Listed(Vec<[f32; 4]>),
}

/// Colors returned for inputs outside the lookup table.
///
/// `None` keeps the default: under maps to the first entry, over to the last
/// entry and bad (NaN) to transparent black.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Extremes {
    /// Color for inputs below 0
    pub under: Option<[f32; 4]>,
    /// Color for inputs above 1
    pub over: Option<[f32; 4]>,
    /// Color for NaN inputs
    pub bad: Option<[f32; 4]>,
}

/// The red, green and blue functions of a continuous colormap.
#[derive(Clone, Copy)]
pub struct ContinuousChannels<'a> {
    /// Red channel
    pub red: &'a ChannelFn,
    /// Green channel
    pub green: &'a ChannelFn,
    /// Blue channel
    pub blue: &'a ChannelFn,
}

/// A named colormap with a lazily built lookup table.
///
/// Colormaps are immutable: the `with_*`, [`reversed`](Self::reversed) and
/// [`resampled`](Self::resampled) methods return new maps.
#[derive(Debug, Clone)]
pub struct Colormap {
    name: String,
    data: ColormapData,
    options: ColormapOptions,
    extremes: Extremes,
    lut: OnceLock<Vec<[f32; 4]>>,
}

impl Colormap {
    /// Creates a continuous colormap from three channel functions.
    pub fn from_functions(
        name: impl Into<String>,
        red: ChannelFn,
        green: ChannelFn,
        blue: ChannelFn,
        options: ColormapOptions,
    ) -> Result<Self> {
        Self::from_segments(name, SegmentData::from_functions(red, green, blue), options)
    }

    /// Creates a colormap from a segment table.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidAnchors`] for malformed anchor lists and
    /// [`Error::InvalidOptions`] for unusable options.
    pub fn from_segments(
        name: impl Into<String>,
        data: SegmentData,
        options: ColormapOptions,
    ) -> Result<Self> {
        options.validate()?;
        data.validate()?;
        Ok(Self::new_unchecked(name.into(), ColormapData::Segmented(data), options))
    }

    /// Creates a colormap from explicit colors, one lookup entry per color.
    pub fn from_list(name: impl Into<String>, colors: Vec<[f32; 4]>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::EmptyColorList);
        }
        let options = ColormapOptions::default().with_lut_size(colors.len());
        Ok(Self::new_unchecked(name.into(), ColormapData::Listed(colors), options))
    }

    fn new_unchecked(name: String, data: ColormapData, options: ColormapOptions) -> Self {
        Self {
            name,
            data,
            options,
            extremes: Extremes::default(),
            lut: OnceLock::new(),
        }
    }

    /// Colormap name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Options used to build the lookup table.
    #[inline]
    pub fn options(&self) -> ColormapOptions {
        self.options
    }

    /// Under/over/bad overrides.
    #[inline]
    pub fn extremes(&self) -> Extremes {
        self.extremes
    }

    /// Underlying definition.
    #[inline]
    pub fn data(&self) -> &ColormapData {
        &self.data
    }

    /// How this colormap is defined.
    pub fn kind(&self) -> ColormapKind {
        match &self.data {
            ColormapData::Segmented(seg) if seg.is_continuous() => ColormapKind::Function,
            ColormapData::Segmented(_) => ColormapKind::Segmented,
            ColormapData::Listed(_) => ColormapKind::Listed,
        }
    }

    /// Red, green and blue functions, if all three are continuous.
    pub fn continuous(&self) -> Option<ContinuousChannels<'_>> {
        let ColormapData::Segmented(seg) = &self.data else {
            return None;
        };
        Some(ContinuousChannels {
            red: seg.red.as_function()?,
            green: seg.green.as_function()?,
            blue: seg.blue.as_function()?,
        })
    }

    /// Like [`continuous`](Self::continuous), failing with
    /// [`Error::UnsupportedKind`] for other kinds.
    pub fn require_continuous(&self) -> Result<ContinuousChannels<'_>> {
        self.continuous()
            .ok_or_else(|| Error::unsupported_kind(&self.name, self.kind()))
    }

    /// Definition of one channel of a segmented map.
    ///
    /// Returns `None` for listed maps and for a missing alpha channel.
    pub fn channel(&self, channel: Channel) -> Option<&ChannelData> {
        let ColormapData::Segmented(seg) = &self.data else {
            return None;
        };
        match channel {
            Channel::Red => Some(&seg.red),
            Channel::Green => Some(&seg.green),
            Channel::Blue => Some(&seg.blue),
            Channel::Alpha => seg.alpha.as_ref(),
        }
    }

    /// Evaluates a continuous map at `x` without going through the lookup
    /// table. Alpha is 1 when the map has no alpha channel.
    ///
    /// Returns `None` unless every defined channel is a function.
    pub fn eval_rgba(&self, x: f32) -> Option<[f32; 4]> {
        let rgb = self.continuous()?;
        let alpha = match self.channel(Channel::Alpha) {
            None => 1.0,
            Some(ChannelData::Function(f)) => f.eval(x),
            Some(ChannelData::Anchors(_)) => return None,
        };
        Some([rgb.red.eval(x), rgb.green.eval(x), rgb.blue.eval(x), alpha])
    }

    /// Lookup table, built on first use.
    pub fn lut(&self) -> &[[f32; 4]] {
        self.lut.get_or_init(|| self.build_lut())
    }

    fn build_lut(&self) -> Vec<[f32; 4]> {
        let n = self.options.lut_size;
        debug!(name = %self.name, n, gamma = self.options.gamma, kind = %self.kind(), "Building colormap lookup table");

        match &self.data {
            ColormapData::Listed(colors) => (0..n).map(|i| colors[i % colors.len()]).collect(),
            ColormapData::Segmented(seg) => {
                let gamma = self.options.gamma;
                let r = seg.red.sample(n, gamma);
                let g = seg.green.sample(n, gamma);
                let b = seg.blue.sample(n, gamma);
                // Opacity never follows the color gamma.
                let a = seg
                    .alpha
                    .as_ref()
                    .map(|alpha| alpha.sample(n, 1.0))
                    .unwrap_or_else(|| vec![1.0; n]);
                (0..n).map(|i| [r[i], g[i], b[i], a[i]]).collect()
            }
        }
    }

    /// Looks up the RGBA color for `x`.
    ///
    /// `x` in `[0, 1]` selects entry `floor(x * N)` (with `x = 1` mapping to
    /// the last entry). Inputs below 0, above 1 and NaN return the under,
    /// over and bad colors.
    pub fn sample(&self, x: f32) -> [f32; 4] {
        let lut = self.lut();
        let n = lut.len();
        if x.is_nan() {
            return self.extremes.bad.unwrap_or([0.0; 4]);
        }
        let mut v = x * n as f32;
        if v == n as f32 {
            v = (n - 1) as f32;
        }
        if v < 0.0 {
            return self.extremes.under.unwrap_or(lut[0]);
        }
        if v >= n as f32 {
            return self.extremes.over.unwrap_or(lut[n - 1]);
        }
        lut[v as usize]
    }

    /// Looks up every value of `xs`, preserving order.
    pub fn sample_many(&self, xs: &[f32]) -> Vec<[f32; 4]> {
        trace!(name = %self.name, len = xs.len(), "sample_many");
        // Build once up front rather than racing inside the workers.
        let _ = self.lut();
        sample_all(self, xs)
    }

    /// Returns a copy with a different name.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        let mut out = self.clone();
        out.name = name.into();
        out
    }

    /// Returns a copy with new under/over/bad colors.
    pub fn with_extremes(&self, extremes: Extremes) -> Self {
        let mut out = self.clone();
        out.extremes = extremes;
        out
    }

    /// Returns the same definition sampled into `lut_size` entries.
    pub fn resampled(&self, lut_size: usize) -> Result<Self> {
        let options = self.options.with_lut_size(lut_size);
        options.validate()?;
        Ok(Self {
            name: self.name.clone(),
            data: self.data.clone(),
            options,
            extremes: self.extremes,
            lut: OnceLock::new(),
        })
    }

    /// Returns the colormap read from 1 to 0.
    ///
    /// The name gains an `_r` suffix, or loses it if already present. Under
    /// and over colors swap.
    pub fn reversed(&self) -> Self {
        let name = match self.name.strip_suffix("_r") {
            Some(base) => base.to_string(),
            None => format!("{}_r", self.name),
        };
        let data = match &self.data {
            ColormapData::Segmented(seg) => ColormapData::Segmented(seg.mirrored()),
            ColormapData::Listed(colors) => {
                ColormapData::Listed(colors.iter().rev().copied().collect())
            }
        };
        Self {
            name,
            data,
            options: self.options,
            extremes: Extremes {
                under: self.extremes.over,
                over: self.extremes.under,
                bad: self.extremes.bad,
            },
            lut: OnceLock::new(),
        }
    }
}

/// Samples in parallel using rayon.
#[cfg(feature = "parallel")]
fn sample_all(cmap: &Colormap, xs: &[f32]) -> Vec<[f32; 4]> {
    xs.par_iter().map(|&x| cmap.sample(x)).collect()
}

/// Single-threaded fallback.
#[cfg(not(feature = "parallel"))]
fn sample_all(cmap: &Colormap, xs: &[f32]) -> Vec<[f32; 4]> {
    xs.iter().map(|&x| cmap.sample(x)).collect()
}
