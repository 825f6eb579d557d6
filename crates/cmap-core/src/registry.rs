//! Built-in colormaps resolved by name.
//!
//! The lookup is read-only: every call builds a fresh [`Colormap`] with
//! default options. Appending `_r` to any name yields the reversed map.
//!
//! | Name | Kind |
//! |------|------|
//! | `afmhot`, `gnuplot`, `gnuplot2`, `ocean`, `rainbow` | gnuplot formulas |
//! | `gist_heat`, `flag`, `prism`, `cubehelix` | closed-form functions |
//! | `gray`, `hot`, `jet` | anchor lists |
//!
//! # Example
//!
//! ```rust
//! use cmap_core::registry;
//!
//! let afmhot = registry::get("afmhot").unwrap();
//! assert_eq!(afmhot.name(), "afmhot");
//!
//! let reversed = registry::get("afmhot_r").unwrap();
//! assert_eq!(reversed.name(), "afmhot_r");
//! ```

use std::f32::consts::PI;

use tracing::debug;

use crate::channel::{channel_fn, ChannelFn};
use crate::colormap::Colormap;
use crate::gnuplot::GnuplotFormula;
use crate::options::ColormapOptions;
use crate::segment::{ChannelData, SegmentData};
use crate::{Error, Result};

/// Names of the built-in colormaps, without `_r` variants.
pub const NAMES: &[&str] = &[
    "afmhot",
    "cubehelix",
    "flag",
    "gist_heat",
    "gnuplot",
    "gnuplot2",
    "gray",
    "hot",
    "jet",
    "ocean",
    "prism",
    "rainbow",
];

/// Names of the built-in colormaps, without `_r` variants.
pub fn names() -> &'static [&'static str] {
    NAMES
}

/// Returns `true` if `name` resolves to a built-in colormap.
pub fn contains(name: &str) -> bool {
    let base = name.strip_suffix("_r").unwrap_or(name);
    NAMES.contains(&name) || NAMES.contains(&base)
}

/// Resolves a built-in colormap by name.
///
/// # Errors
///
/// [`Error::UnknownColormap`] if neither `name` nor its `_r`-stripped base
/// is built in.
pub fn get(name: &str) -> Result<Colormap> {
    if let Some(cmap) = build(name)? {
        return Ok(cmap);
    }
    if let Some(base) = name.strip_suffix("_r") {
        if let Some(cmap) = build(base)? {
            debug!(name, base, "Resolved reversed colormap");
            return Ok(cmap.reversed());
        }
    }
    Err(Error::unknown_colormap(name))
}

fn build(name: &str) -> Result<Option<Colormap>> {
    let data = match name {
        "afmhot" => formulas(34, 35, 36),
        "gnuplot" => formulas(7, 5, 15),
        "gnuplot2" => formulas(30, 31, 32),
        "ocean" => formulas(23, 28, 3),
        "rainbow" => formulas(33, 13, 10),
        "gist_heat" => SegmentData::from_functions(
            channel_fn(|x| 1.5 * x),
            channel_fn(|x| 2.0 * x - 1.0),
            channel_fn(|x| 4.0 * x - 3.0),
        ),
        "flag" => SegmentData::from_functions(
            channel_fn(|x| 0.75 * ((x * 31.5 + 0.25) * PI).sin() + 0.5),
            channel_fn(|x| (x * 31.5 * PI).sin()),
            channel_fn(|x| 0.75 * ((x * 31.5 - 0.25) * PI).sin() + 0.5),
        ),
        "prism" => SegmentData::from_functions(
            channel_fn(|x| 0.75 * ((x * 20.9 + 0.25) * PI).sin() + 0.67),
            channel_fn(|x| 0.75 * ((x * 20.9 - 0.25) * PI).sin() + 0.33),
            channel_fn(|x| -1.1 * (x * 20.9 * PI).sin()),
        ),
        "cubehelix" => cubehelix(1.0, 0.5, -1.5, 1.0),
        "gray" => SegmentData {
            red: ChannelData::anchors(&[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)]),
            green: ChannelData::anchors(&[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)]),
            blue: ChannelData::anchors(&[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)]),
            alpha: None,
        },
        "hot" => SegmentData {
            red: ChannelData::anchors(&[
                (0.0, 0.0416, 0.0416),
                (0.365079, 1.0, 1.0),
                (1.0, 1.0, 1.0),
            ]),
            green: ChannelData::anchors(&[
                (0.0, 0.0, 0.0),
                (0.365079, 0.0, 0.0),
                (0.746032, 1.0, 1.0),
                (1.0, 1.0, 1.0),
            ]),
            blue: ChannelData::anchors(&[
                (0.0, 0.0, 0.0),
                (0.746032, 0.0, 0.0),
                (1.0, 1.0, 1.0),
            ]),
            alpha: None,
        },
        "jet" => SegmentData {
            red: ChannelData::anchors(&[
                (0.0, 0.0, 0.0),
                (0.35, 0.0, 0.0),
                (0.66, 1.0, 1.0),
                (0.89, 1.0, 1.0),
                (1.0, 0.5, 0.5),
            ]),
            green: ChannelData::anchors(&[
                (0.0, 0.0, 0.0),
                (0.125, 0.0, 0.0),
                (0.375, 1.0, 1.0),
                (0.64, 1.0, 1.0),
                (0.91, 0.0, 0.0),
                (1.0, 0.0, 0.0),
            ]),
            blue: ChannelData::anchors(&[
                (0.0, 0.5, 0.5),
                (0.11, 1.0, 1.0),
                (0.34, 1.0, 1.0),
                (0.65, 0.0, 0.0),
                (1.0, 0.0, 0.0),
            ]),
            alpha: None,
        },
        _ => return Ok(None),
    };
    Colormap::from_segments(name, data, ColormapOptions::default()).map(Some)
}

fn formulas(r: u8, g: u8, b: u8) -> SegmentData {
    let channel = |i: u8| -> ChannelFn {
        GnuplotFormula::new(i)
            .map(GnuplotFormula::channel)
            .unwrap_or_else(|| channel_fn(|_| 0.0))
    };
    SegmentData::from_functions(channel(r), channel(g), channel(b))
}

/// Dave Green's cubehelix scheme.
///
/// `gamma` emphasises low (< 1) or high (> 1) intensities, `s` is the start
/// hue, `r` the number of rotations and `h` the saturation.
pub fn cubehelix(gamma: f32, s: f32, r: f32, h: f32) -> SegmentData {
    let helper = move |p0: f32, p1: f32| {
        channel_fn(move |x: f32| {
            let xg = x.powf(gamma);
            let a = h * xg * (1.0 - xg) / 2.0;
            let phi = 2.0 * PI * (s / 3.0 + r * x);
            xg + a * (p0 * phi.cos() + p1 * phi.sin())
        })
    };
    SegmentData::from_functions(
        helper(-0.14861, 1.78277),
        helper(-0.29227, -0.90649),
        helper(1.97294, 0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::ChannelFunction;
    use crate::colormap::ColormapKind;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_every_name_resolves() {
        for name in names() {
            let cmap = get(name).unwrap();
            assert_eq!(cmap.name(), *name);
            assert_eq!(cmap.lut().len(), 256);

            let rev = get(&format!("{name}_r")).unwrap();
            assert_eq!(rev.name(), format!("{name}_r"));
        }
    }

    #[test]
    fn test_kinds() {
        for name in ["afmhot", "gnuplot", "gnuplot2", "ocean", "rainbow", "gist_heat", "flag", "prism", "cubehelix"] {
            assert_eq!(get(name).unwrap().kind(), ColormapKind::Function, "{name}");
        }
        for name in ["gray", "hot", "jet"] {
            assert_eq!(get(name).unwrap().kind(), ColormapKind::Segmented, "{name}");
        }
    }

    #[test]
    fn test_unknown() {
        let err = get("no_such_map").unwrap_err();
        assert!(err.is_unknown_colormap());
        assert!(get("_r").is_err());
        assert!(!contains("no_such_map_r"));
        assert!(contains("jet_r"));
    }

    #[test]
    fn test_afmhot_samples() {
        let afmhot = get("afmhot").unwrap();
        // x = 0.5 lands on entry 128, position 128/255.
        let rgba = afmhot.sample(0.5);
        let t: f32 = 128.0 / 255.0;
        assert_abs_diff_eq!(rgba[0], 1.0);
        assert_abs_diff_eq!(rgba[1], 2.0 * t - 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(rgba[2], (2.0 * t - 1.0).max(0.0), epsilon = 1e-6);
        assert_eq!(afmhot.sample(0.0), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(afmhot.sample(1.0), [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_cubehelix_endpoints() {
        let data = cubehelix(1.0, 0.5, -1.5, 1.0);
        let red = data.red.as_function().unwrap();
        assert_abs_diff_eq!(red.eval(0.0), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(red.eval(1.0), 1.0, epsilon = 1e-6);
    }
}
