//! Brightness-to-alpha colormap transform.
//!
//! For every position `x` the source red, green and blue values are capped
//! at 1.0 and their maximum `m` becomes the alpha:
//!
//! ```text
//! (r, g, b)  ->  (r / m, g / m, b / m, m)      m = max(r, g, b) > 0
//!            ->  (0, 0, 0, 0)                  m <= 0
//! ```
//!
//! Painted alone or over black, the derived map looks like the source. Over
//! another image, the dark parts let the image underneath show through.
//!
//! Only the upper bound is clipped. Negative source values pass through, so
//! a source that undershoots 0 can produce ratios or alpha outside `[0, 1]`.

use std::sync::Arc;

use cmap_core::{
    registry, Channel, ChannelData, ChannelFn, ChannelFunction, Colormap, ColormapOptions,
    Result, Samples, SegmentData,
};
use tracing::{debug, trace};

/// Suffix appended to the source name when no name is given.
pub const NAME_SUFFIX: &str = "_masky";

/// Maps one source color to its masky RGBA.
///
/// # Example
///
/// ```rust
/// use cmap_masky::pointwise;
///
/// assert_eq!(pointwise(0.5, 0.0, 0.0), [1.0, 0.0, 0.0, 0.5]);
/// assert_eq!(pointwise(0.0, 0.0, 0.0), [0.0, 0.0, 0.0, 0.0]);
/// // Values above 1 are capped before normalizing.
/// assert_eq!(pointwise(2.0, 0.5, 0.0), [1.0, 0.5, 0.0, 1.0]);
/// ```
#[inline]
pub fn pointwise(r: f32, g: f32, b: f32) -> [f32; 4] {
    let (r, g, b) = (cap(r), cap(g), cap(b));
    let m = r.max(g).max(b);
    if !(m > 0.0) {
        return [0.0; 4];
    }
    [r / m, g / m, b / m, m]
}

#[inline]
fn cap(v: f32) -> f32 {
    if v > 1.0 { 1.0 } else { v }
}

/// Evaluates the masky RGBA of a continuous source.
///
/// The four derived channel functions share one evaluator, so the color and
/// alpha returned for a position always come from the same source triple.
#[derive(Clone)]
pub struct MaskyEvaluator {
    red: ChannelFn,
    green: ChannelFn,
    blue: ChannelFn,
}

impl MaskyEvaluator {
    /// Creates an evaluator over three source channel functions.
    pub fn new(red: ChannelFn, green: ChannelFn, blue: ChannelFn) -> Self {
        Self { red, green, blue }
    }

    /// Creates an evaluator over a function-based colormap.
    ///
    /// # Errors
    ///
    /// [`cmap_core::Error::UnsupportedKind`] if red, green or blue is not a
    /// function.
    pub fn from_colormap(source: &Colormap) -> Result<Self> {
        let rgb = source.require_continuous()?;
        Ok(Self::new(rgb.red.clone(), rgb.green.clone(), rgb.blue.clone()))
    }

    /// Masky RGBA at `x`.
    pub fn evaluate(&self, x: f32) -> [f32; 4] {
        pointwise(self.red.eval(x), self.green.eval(x), self.blue.eval(x))
    }

    /// Masky RGBA at every position of `xs`, in order.
    ///
    /// The source channels are evaluated through their batch entry point,
    /// which broadcasts natively where supported and falls back to
    /// element-wise evaluation otherwise.
    pub fn evaluate_slice(&self, xs: &[f32]) -> Vec<[f32; 4]> {
        let r = self.red.eval_slice(xs);
        let g = self.green.eval_slice(xs);
        let b = self.blue.eval_slice(xs);
        r.into_iter()
            .zip(g)
            .zip(b)
            .map(|((r, g), b)| pointwise(r, g, b))
            .collect()
    }

    /// Masky RGBA for a scalar or array, one [`Samples`] per channel in
    /// RGBA order, each shaped like `x`.
    pub fn evaluate_samples(&self, x: &Samples) -> [Samples; 4] {
        match x {
            Samples::Scalar(v) => self.evaluate(*v).map(Samples::Scalar),
            Samples::Array { shape, data } => {
                let rgba = self.evaluate_slice(data);
                Channel::ALL.map(|c| Samples::Array {
                    shape: shape.clone(),
                    data: rgba.iter().map(|px| px[c.index()]).collect(),
                })
            }
        }
    }

    /// Channel function projecting one component of the shared evaluation.
    pub fn channel(self: &Arc<Self>, channel: Channel) -> ChannelFn {
        Arc::new(MaskyChannel {
            rgba: Arc::clone(self),
            channel,
        })
    }
}

/// One component of a [`MaskyEvaluator`].
struct MaskyChannel {
    rgba: Arc<MaskyEvaluator>,
    channel: Channel,
}

impl ChannelFunction for MaskyChannel {
    fn eval(&self, x: f32) -> f32 {
        self.rgba.evaluate(x)[self.channel.index()]
    }

    fn eval_slice(&self, xs: &[f32]) -> Vec<f32> {
        let i = self.channel.index();
        self.rgba.evaluate_slice(xs).into_iter().map(|px| px[i]).collect()
    }
}

/// Where the source colormap comes from.
#[derive(Clone, Copy)]
pub enum Source<'a> {
    /// Built-in colormap name, resolved with [`registry::get`].
    Name(&'a str),
    /// Colormap supplied by the caller.
    Colormap(&'a Colormap),
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a Colormap> for Source<'a> {
    fn from(cmap: &'a Colormap) -> Self {
        Self::Colormap(cmap)
    }
}

/// Derives the masky version of a colormap.
///
/// The result is a function-based colormap with red, green, blue and alpha
/// channels, named `new_name` or `<source>_masky`. `options` are passed to
/// the new colormap unchanged; its gamma shifts where the color channels are
/// sampled but never enters the alpha computation. Any alpha channel of the
/// source is ignored.
///
/// # Errors
///
/// - [`cmap_core::Error::UnknownColormap`] if a name does not resolve.
/// - [`cmap_core::Error::UnsupportedKind`] if the source is segmented or
///   listed.
/// - [`cmap_core::Error::InvalidOptions`] for unusable options.
///
/// # Example
///
/// ```rust
/// use cmap_core::ColormapOptions;
/// use cmap_masky::derive;
///
/// let hot = derive("afmhot", None, ColormapOptions::default()).unwrap();
/// assert_eq!(hot.name(), "afmhot_masky");
/// assert_eq!(hot.sample(0.0), [0.0, 0.0, 0.0, 0.0]);
///
/// assert!(derive("jet", None, ColormapOptions::default()).is_err());
/// ```
pub fn derive<'a>(
    source: impl Into<Source<'a>>,
    new_name: Option<&str>,
    options: ColormapOptions,
) -> Result<Colormap> {
    let resolved;
    let source = match source.into() {
        Source::Name(name) => {
            resolved = registry::get(name)?;
            &resolved
        }
        Source::Colormap(cmap) => cmap,
    };
    trace!(source = source.name(), new_name, "masky::derive");

    let rgba = Arc::new(MaskyEvaluator::from_colormap(source)?);
    let name = match new_name {
        Some(name) => name.to_string(),
        None => format!("{}{}", source.name(), NAME_SUFFIX),
    };

    let data = SegmentData {
        red: ChannelData::Function(rgba.channel(Channel::Red)),
        green: ChannelData::Function(rgba.channel(Channel::Green)),
        blue: ChannelData::Function(rgba.channel(Channel::Blue)),
        alpha: Some(ChannelData::Function(rgba.channel(Channel::Alpha))),
    };
    debug!(source = source.name(), name = %name, lut_size = options.lut_size, gamma = options.gamma, "Derived masky colormap");
    Colormap::from_segments(name, data, options)
}

/// [`derive`] with the default name and options.
pub fn masky<'a>(source: impl Into<Source<'a>>) -> Result<Colormap> {
    derive(source, None, ColormapOptions::default())
}
