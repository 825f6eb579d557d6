//! Segment tables: per-channel definitions of a colormap.
//!
//! Each channel is either a continuous [`ChannelFunction`](crate::ChannelFunction)
//! or a list of [`Anchor`]s. An anchor `(x, y0, y1)` pins the channel to
//! `y0` when approached from the left of `x` and to `y1` when leaving to the
//! right, so a step is two values at the same `x`:
//!
//! ```text
//! red:  (0.0, 0.0, 0.0)  (0.5, 1.0, 0.2)  (1.0, 1.0, 1.0)
//!        ramp 0 -> 1 on [0, 0.5), jump to 0.2, ramp 0.2 -> 1 on [0.5, 1]
//! ```
//!
//! Anchor lists must start at `x = 0`, end at `x = 1` and never decrease in
//! `x`.

use std::fmt;

use crate::channel::{linspace, ChannelFn, ChannelFunction, Mirrored};
use crate::{Error, Result};
use std::sync::Arc;

/// One row of an anchor list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    /// Position in `[0, 1]`
    pub x: f32,
    /// Value reached from the left
    pub y0: f32,
    /// Value leaving to the right
    pub y1: f32,
}

impl Anchor {
    /// Creates an anchor.
    #[inline]
    pub const fn new(x: f32, y0: f32, y1: f32) -> Self {
        Self { x, y0, y1 }
    }
}

/// Definition of a single channel.
#[derive(Clone)]
pub enum ChannelData {
    /// Continuous function of the position.
    Function(ChannelFn),
    /// Piecewise-linear anchor list.
    Anchors(Vec<Anchor>),
}

impl ChannelData {
    /// Builds an anchor channel from `(x, y0, y1)` tuples.
    pub fn anchors(rows: &[(f32, f32, f32)]) -> Self {
        Self::Anchors(rows.iter().map(|&(x, y0, y1)| Anchor::new(x, y0, y1)).collect())
    }

    /// Returns the function if this channel is continuous.
    pub fn as_function(&self) -> Option<&ChannelFn> {
        match self {
            Self::Function(f) => Some(f),
            Self::Anchors(_) => None,
        }
    }

    /// Returns `true` for a function channel.
    #[inline]
    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    pub(crate) fn validate(&self, channel: &'static str) -> Result<()> {
        let Self::Anchors(anchors) = self else {
            return Ok(());
        };
        let (Some(first), Some(last)) = (anchors.first(), anchors.last()) else {
            return Err(Error::invalid_anchors(channel, "anchor list is empty"));
        };
        if first.x != 0.0 || last.x != 1.0 {
            return Err(Error::invalid_anchors(
                channel,
                format!("must start at x = 0 and end at x = 1, got [{}, {}]", first.x, last.x),
            ));
        }
        if anchors.windows(2).any(|w| w[1].x < w[0].x) {
            return Err(Error::invalid_anchors(channel, "x must be non-decreasing"));
        }
        Ok(())
    }

    /// Same channel read from the opposite end.
    pub(crate) fn mirrored(&self) -> Self {
        match self {
            Self::Function(f) => Self::Function(Arc::new(Mirrored(f.clone()))),
            Self::Anchors(anchors) => Self::Anchors(
                anchors
                    .iter()
                    .rev()
                    .map(|a| Anchor::new(1.0 - a.x, a.y1, a.y0))
                    .collect(),
            ),
        }
    }

    /// Samples the channel into `n` lookup entries clipped to `[0, 1]`.
    ///
    /// Entry `i` corresponds to position `(i / (n - 1))^gamma`.
    pub(crate) fn sample(&self, n: usize, gamma: f32) -> Vec<f32> {
        let positions: Vec<f32> = linspace(n).into_iter().map(|t| t.powf(gamma)).collect();
        let raw = match self {
            Self::Function(f) => f.eval_slice(&positions),
            Self::Anchors(anchors) => interpolate_anchors(anchors, &positions),
        };
        // Non-positive and NaN entries become +0.0.
        raw.into_iter().map(|v| if v > 0.0 { v.min(1.0) } else { 0.0 }).collect()
    }
}

impl fmt::Debug for ChannelData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(_) => f.write_str("Function(..)"),
            Self::Anchors(a) => f.debug_tuple("Anchors").field(a).finish(),
        }
    }
}

/// Piecewise-linear interpolation of a validated anchor list.
///
/// The first entry takes `y1` of the first anchor and the last entry `y0` of
/// the last anchor. Interior entries interpolate between the right value of
/// the previous anchor and the left value of the next one.
fn interpolate_anchors(anchors: &[Anchor], positions: &[f32]) -> Vec<f32> {
    let n = positions.len();
    let (Some(first), Some(last)) = (anchors.first(), anchors.last()) else {
        return vec![0.0; n];
    };
    if n == 1 {
        return vec![last.y0];
    }

    let scale = (n - 1) as f32;
    let xs: Vec<f32> = anchors.iter().map(|a| a.x * scale).collect();

    let mut out = Vec::with_capacity(n);
    out.push(first.y1);
    for &t in &positions[1..n - 1] {
        let p = t * scale;
        // First anchor at or right of p; interior positions never hit index 0.
        let k = xs.partition_point(|&x| x < p).clamp(1, xs.len() - 1);
        let (lo, hi) = (&anchors[k - 1], &anchors[k]);
        let span = xs[k] - xs[k - 1];
        let distance = if span > 0.0 { (p - xs[k - 1]) / span } else { 0.0 };
        out.push(distance * (hi.y0 - lo.y1) + lo.y1);
    }
    out.push(last.y0);
    out
}

/// Per-channel definition of a colormap.
#[derive(Debug, Clone)]
pub struct SegmentData {
    /// Red channel
    pub red: ChannelData,
    /// Green channel
    pub green: ChannelData,
    /// Blue channel
    pub blue: ChannelData,
    /// Alpha channel; opaque when absent
    pub alpha: Option<ChannelData>,
}

impl SegmentData {
    /// Segment data from three continuous functions, without alpha.
    pub fn from_functions(red: ChannelFn, green: ChannelFn, blue: ChannelFn) -> Self {
        Self {
            red: ChannelData::Function(red),
            green: ChannelData::Function(green),
            blue: ChannelData::Function(blue),
            alpha: None,
        }
    }

    /// Checks every anchor list.
    pub fn validate(&self) -> Result<()> {
        self.red.validate("red")?;
        self.green.validate("green")?;
        self.blue.validate("blue")?;
        if let Some(alpha) = &self.alpha {
            alpha.validate("alpha")?;
        }
        Ok(())
    }

    /// Returns `true` if red, green and blue are all functions.
    pub fn is_continuous(&self) -> bool {
        self.red.is_function() && self.green.is_function() && self.blue.is_function()
    }

    pub(crate) fn mirrored(&self) -> Self {
        Self {
            red: self.red.mirrored(),
            green: self.green.mirrored(),
            blue: self.blue.mirrored(),
            alpha: self.alpha.as_ref().map(ChannelData::mirrored),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::channel_fn;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_validate_bounds() {
        let ok = ChannelData::anchors(&[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)]);
        assert!(ok.validate("red").is_ok());

        let late_start = ChannelData::anchors(&[(0.1, 0.0, 0.0), (1.0, 1.0, 1.0)]);
        assert!(late_start.validate("red").is_err());

        let early_end = ChannelData::anchors(&[(0.0, 0.0, 0.0), (0.9, 1.0, 1.0)]);
        assert!(early_end.validate("red").is_err());

        let empty = ChannelData::Anchors(Vec::new());
        assert!(empty.validate("red").is_err());
    }

    #[test]
    fn test_validate_order() {
        let unordered =
            ChannelData::anchors(&[(0.0, 0.0, 0.0), (0.6, 1.0, 1.0), (0.4, 0.5, 0.5), (1.0, 1.0, 1.0)]);
        let err = unordered.validate("blue").unwrap_err();
        assert!(err.to_string().contains("non-decreasing"));

        let repeated = ChannelData::anchors(&[(0.0, 0.0, 0.0), (0.5, 1.0, 0.0), (0.5, 0.0, 0.0), (1.0, 1.0, 1.0)]);
        assert!(repeated.validate("blue").is_ok());
    }

    #[test]
    fn test_linear_ramp() {
        let ramp = ChannelData::anchors(&[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)]);
        let lut = ramp.sample(5, 1.0);
        for (got, want) in lut.iter().zip([0.0, 0.25, 0.5, 0.75, 1.0]) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_step_uses_right_value() {
        // Jumps from 1.0 down to 0.0 at the midpoint.
        let step = ChannelData::anchors(&[(0.0, 0.0, 0.0), (0.5, 1.0, 0.0), (1.0, 0.0, 0.0)]);
        let lut = step.sample(11, 1.0);
        assert_abs_diff_eq!(lut[4], 0.8, epsilon = 1e-5);
        assert_abs_diff_eq!(lut[5], 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(lut[6], 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_endpoints_use_outer_values() {
        let ch = ChannelData::anchors(&[(0.0, 0.9, 0.1), (1.0, 0.7, 0.3)]);
        let lut = ch.sample(3, 1.0);
        assert_abs_diff_eq!(lut[0], 0.1, epsilon = 1e-6);
        assert_abs_diff_eq!(lut[1], 0.4, epsilon = 1e-6);
        assert_abs_diff_eq!(lut[2], 0.7, epsilon = 1e-6);

        assert_eq!(ch.sample(1, 1.0), vec![0.7]);
    }

    #[test]
    fn test_function_sample_clips_and_applies_gamma() {
        let ch = ChannelData::Function(channel_fn(|x| 2.0 * x - 0.5));
        let lut = ch.sample(3, 1.0);
        assert_eq!(lut, vec![0.0, 0.5, 1.0]);

        let ramp = ChannelData::Function(channel_fn(|x| x));
        let lut = ramp.sample(3, 2.0);
        assert_abs_diff_eq!(lut[1], 0.25, epsilon = 1e-6);
    }

    #[test]
    fn test_mirrored_anchors() {
        let ch = ChannelData::anchors(&[(0.0, 0.0, 0.0), (0.25, 1.0, 0.5), (1.0, 1.0, 1.0)]);
        let ChannelData::Anchors(m) = ch.mirrored() else {
            panic!("expected anchors");
        };
        assert_eq!(m[0], Anchor::new(0.0, 1.0, 1.0));
        assert_eq!(m[1], Anchor::new(0.75, 0.5, 1.0));
        assert_eq!(m[2], Anchor::new(1.0, 0.0, 0.0));
        assert!(ChannelData::Anchors(m).validate("red").is_ok());
    }
}
