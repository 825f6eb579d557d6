//! Gnuplot palette formulas.
//!
//! Gnuplot's `rgbformulae` palettes pick one of 37 numbered formulas per
//! channel. Several classic colormaps (`gnuplot`, `ocean`, `afmhot`, ...)
//! are formula triples, which makes them continuous and therefore usable
//! with function-composing transforms.
//!
//! Formulas return raw values; most leave `[0, 1]` somewhere in the domain
//! and rely on the lookup table to clip.

use std::f32::consts::PI;
use std::sync::Arc;

use crate::channel::{ChannelFn, ChannelFunction};

/// Number of formulas in the table.
pub const FORMULA_COUNT: u8 = 37;

/// One numbered gnuplot formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GnuplotFormula(u8);

impl GnuplotFormula {
    /// Returns the formula with the given number, if it exists.
    pub fn new(index: u8) -> Option<Self> {
        (index < FORMULA_COUNT).then_some(Self(index))
    }

    /// Formula number.
    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    /// Shared channel function for this formula.
    pub fn channel(self) -> ChannelFn {
        Arc::new(self)
    }
}

impl ChannelFunction for GnuplotFormula {
    fn eval(&self, x: f32) -> f32 {
        match self.0 {
            0 => 0.0,
            1 => 0.5,
            2 => 1.0,
            3 => x,
            4 => x * x,
            5 => x * x * x,
            6 => x.powi(4),
            7 => x.sqrt(),
            8 => x.sqrt().sqrt(),
            9 => (x * PI / 2.0).sin(),
            10 => (x * PI / 2.0).cos(),
            11 => (x - 0.5).abs(),
            12 => (2.0 * x - 1.0).powi(2),
            13 => (x * PI).sin(),
            14 => (x * PI).cos().abs(),
            15 => (x * 2.0 * PI).sin(),
            16 => (x * 2.0 * PI).cos(),
            17 => (x * 2.0 * PI).sin().abs(),
            18 => (x * 2.0 * PI).cos().abs(),
            19 => (x * 4.0 * PI).sin().abs(),
            20 => (x * 4.0 * PI).cos().abs(),
            21 => 3.0 * x,
            22 => 3.0 * x - 1.0,
            23 => 3.0 * x - 2.0,
            24 => (3.0 * x - 1.0).abs(),
            25 => (3.0 * x - 2.0).abs(),
            26 => (3.0 * x - 1.0) / 2.0,
            27 => (3.0 * x - 2.0) / 2.0,
            28 => ((3.0 * x - 1.0) / 2.0).abs(),
            29 => ((3.0 * x - 2.0) / 2.0).abs(),
            30 => x / 0.32 - 0.78125,
            31 => 2.0 * x - 0.84,
            32 => formula_32(x),
            33 => (2.0 * x - 0.5).abs(),
            34 => 2.0 * x,
            35 => 2.0 * x - 0.5,
            36 => 2.0 * x - 1.0,
            _ => 0.0,
        }
    }
}

/// Piecewise blue ramp used by `gnuplot2`.
fn formula_32(x: f32) -> f32 {
    if x < 0.25 {
        4.0 * x
    } else if x < 0.42 {
        1.0
    } else if x < 0.92 {
        -2.0 * x + 1.84
    } else {
        x / 0.08 - 11.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn f(i: u8) -> GnuplotFormula {
        GnuplotFormula::new(i).unwrap()
    }

    #[test]
    fn test_range() {
        assert!(GnuplotFormula::new(36).is_some());
        assert!(GnuplotFormula::new(37).is_none());
    }

    #[test]
    fn test_afmhot_formulas() {
        assert_abs_diff_eq!(f(34).eval(0.25), 0.5);
        assert_abs_diff_eq!(f(35).eval(0.25), 0.0);
        assert_abs_diff_eq!(f(36).eval(0.25), -0.5);
        assert_abs_diff_eq!(f(36).eval(1.0), 1.0);
    }

    #[test]
    fn test_trig_formulas() {
        assert_abs_diff_eq!(f(9).eval(1.0), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(f(10).eval(1.0), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(f(13).eval(0.5), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(f(15).eval(0.25), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_formula_32_pieces() {
        assert_abs_diff_eq!(f(32).eval(0.125), 0.5);
        assert_abs_diff_eq!(f(32).eval(0.3), 1.0);
        assert_abs_diff_eq!(f(32).eval(0.5), 0.84, epsilon = 1e-6);
        assert_abs_diff_eq!(f(32).eval(1.0), 1.0, epsilon = 1e-5);
    }
}
