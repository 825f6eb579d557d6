//! Channel functions and scalar-or-array samples.
//!
//! A channel function maps a position in `[0, 1]` to one color component.
//! Results are not clamped: a channel may return values below 0 or above 1,
//! and consumers decide how to treat them.
//!
//! Every channel function answers single positions through
//! [`ChannelFunction::eval`]. Batches go through
//! [`ChannelFunction::eval_slice`], which falls back to element-wise
//! evaluation unless the implementation broadcasts natively.
//!
//! # Example
//!
//! ```rust
//! use cmap_core::{channel_fn, ChannelFunction, Samples};
//!
//! let ramp = channel_fn(|x| 2.0 * x);
//! assert_eq!(ramp.eval(0.25), 0.5);
//!
//! let out = ramp.apply(&Samples::from(vec![0.0, 0.5]));
//! assert_eq!(out.values(), &[0.0, 1.0]);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::{Error, Result};

/// A pure mapping from a colormap position to one color component.
///
/// Implementations must be referentially transparent: the same `x` always
/// yields the same value, with no interior caching. They are shared across
/// threads, hence the `Send + Sync` bound.
pub trait ChannelFunction: Send + Sync {
    /// Evaluates the channel at a single position.
    fn eval(&self, x: f32) -> f32;

    /// Evaluates the channel at every position of `xs`, preserving order.
    ///
    /// Override when the function can broadcast over a whole slice at once.
    fn eval_slice(&self, xs: &[f32]) -> Vec<f32> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }

    /// Evaluates a scalar or an array of any shape.
    fn apply(&self, x: &Samples) -> Samples {
        match x {
            Samples::Scalar(v) => Samples::Scalar(self.eval(*v)),
            Samples::Array { shape, data } => Samples::Array {
                shape: shape.clone(),
                data: self.eval_slice(data),
            },
        }
    }
}

/// Shared handle to a channel function.
pub type ChannelFn = Arc<dyn ChannelFunction>;

/// Adapts a scalar closure into a [`ChannelFunction`].
///
/// Only scalar evaluation is provided; batches use the element-wise fallback.
#[derive(Clone, Copy)]
pub struct ScalarFn<F>(pub F);

impl<F> ChannelFunction for ScalarFn<F>
where
    F: Fn(f32) -> f32 + Send + Sync,
{
    #[inline]
    fn eval(&self, x: f32) -> f32 {
        (self.0)(x)
    }
}

impl<F> fmt::Debug for ScalarFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ScalarFn")
    }
}

/// Wraps a closure as a shared [`ChannelFn`].
pub fn channel_fn<F>(f: F) -> ChannelFn
where
    F: Fn(f32) -> f32 + Send + Sync + 'static,
{
    Arc::new(ScalarFn(f))
}

/// Channel evaluated at the mirrored position `1 - x`.
pub(crate) struct Mirrored(pub ChannelFn);

impl ChannelFunction for Mirrored {
    #[inline]
    fn eval(&self, x: f32) -> f32 {
        self.0.eval(1.0 - x)
    }

    fn eval_slice(&self, xs: &[f32]) -> Vec<f32> {
        let flipped: Vec<f32> = xs.iter().map(|&x| 1.0 - x).collect();
        self.0.eval_slice(&flipped)
    }
}

/// A scalar position or a row-major array of positions.
///
/// Channel functions return the same variant they receive, so an array keeps
/// its shape and element order through evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    /// A single value.
    Scalar(f32),
    /// An array of any rank, stored row-major.
    Array {
        /// Extent of each axis
        shape: Vec<usize>,
        /// Elements, `shape.iter().product()` of them
        data: Vec<f32>,
    },
}

impl Samples {
    /// Creates an array after checking that `shape` matches `data`.
    pub fn array(shape: Vec<usize>, data: Vec<f32>) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(Error::InvalidShape {
                expected,
                got: data.len(),
            });
        }
        Ok(Self::Array { shape, data })
    }

    /// Returns `true` for [`Samples::Scalar`].
    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Shape of the samples; empty for a scalar.
    pub fn shape(&self) -> &[usize] {
        match self {
            Self::Scalar(_) => &[],
            Self::Array { shape, .. } => shape,
        }
    }

    /// Number of values held.
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Array { data, .. } => data.len(),
        }
    }

    /// Returns `true` if an array holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat view of the values in row-major order.
    pub fn values(&self) -> &[f32] {
        match self {
            Self::Scalar(v) => std::slice::from_ref(v),
            Self::Array { data, .. } => data,
        }
    }

    /// Applies `f` to every value, keeping the variant and shape.
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        match self {
            Self::Scalar(v) => Self::Scalar(f(*v)),
            Self::Array { shape, data } => Self::Array {
                shape: shape.clone(),
                data: data.iter().map(|&v| f(v)).collect(),
            },
        }
    }
}

impl From<f32> for Samples {
    fn from(v: f32) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vec<f32>> for Samples {
    fn from(data: Vec<f32>) -> Self {
        Self::Array {
            shape: vec![data.len()],
            data,
        }
    }
}

/// `n` evenly spaced positions from 0 to 1 inclusive.
///
/// A single position is 0.
pub fn linspace(n: usize) -> Vec<f32> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => (0..n).map(|i| i as f32 / (n - 1) as f32).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Broadcasting {
        batches: AtomicUsize,
    }

    impl ChannelFunction for Broadcasting {
        fn eval(&self, x: f32) -> f32 {
            x * x
        }

        fn eval_slice(&self, xs: &[f32]) -> Vec<f32> {
            self.batches.fetch_add(1, Ordering::Relaxed);
            xs.iter().map(|x| x * x).collect()
        }
    }

    #[test]
    fn test_scalar_fn_fallback_matches_eval() {
        let f = channel_fn(|x| 3.0 * x - 1.0);
        let xs = [0.0, 0.25, 0.5, 1.0];
        let batch = f.eval_slice(&xs);
        for (x, y) in xs.iter().zip(batch) {
            assert_eq!(f.eval(*x), y);
        }
    }

    #[test]
    fn test_apply_uses_native_broadcast() {
        let f = Broadcasting {
            batches: AtomicUsize::new(0),
        };
        let out = f.apply(&Samples::from(vec![0.5, 1.0]));
        assert_eq!(out.values(), &[0.25, 1.0]);
        assert_eq!(f.batches.load(Ordering::Relaxed), 1);

        assert_eq!(f.apply(&Samples::Scalar(0.5)), Samples::Scalar(0.25));
        assert_eq!(f.batches.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_apply_preserves_shape() {
        let f = channel_fn(|x| x + 1.0);
        let input = Samples::array(vec![2, 3], vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5]).unwrap();
        let out = f.apply(&input);
        assert_eq!(out.shape(), &[2, 3]);
        assert!((out.values()[4] - 1.4).abs() < 1e-6);
    }

    #[test]
    fn test_array_shape_mismatch() {
        let err = Samples::array(vec![2, 2], vec![0.0; 3]).unwrap_err();
        assert!(matches!(err, Error::InvalidShape { expected: 4, got: 3 }));
    }

    #[test]
    fn test_mirrored() {
        let f = Mirrored(channel_fn(|x| x));
        assert_eq!(f.eval(0.25), 0.75);
        assert_eq!(f.eval_slice(&[0.0, 1.0]), vec![1.0, 0.0]);
    }

    #[test]
    fn test_linspace() {
        assert!(linspace(0).is_empty());
        assert_eq!(linspace(1), vec![0.0]);
        assert_eq!(linspace(5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }
}
