//! Colormap construction options.
//!
//! Options control how a colormap is sampled into its lookup table. They can
//! be built in code or loaded from YAML:
//!
//! ```yaml
//! lut_size: 512
//! gamma: 0.8
//! ```
//!
//! Missing keys take their defaults (`lut_size: 256`, `gamma: 1.0`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default number of lookup table entries.
pub const DEFAULT_LUT_SIZE: usize = 256;

/// Options applied when a colormap builds its lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColormapOptions {
    /// Number of lookup table entries (`N`).
    pub lut_size: usize,
    /// Exponent applied to the sample positions of the color channels.
    ///
    /// Values below 1 spend more entries on the high end of the map. The
    /// alpha channel is always sampled linearly.
    pub gamma: f32,
}

impl Default for ColormapOptions {
    fn default() -> Self {
        Self {
            lut_size: DEFAULT_LUT_SIZE,
            gamma: 1.0,
        }
    }
}

impl ColormapOptions {
    /// Returns options with a different lookup table size.
    pub fn with_lut_size(mut self, lut_size: usize) -> Self {
        self.lut_size = lut_size;
        self
    }

    /// Returns options with a different gamma.
    pub fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    /// Checks that the options can build a lookup table.
    pub fn validate(&self) -> Result<()> {
        if self.lut_size == 0 {
            return Err(Error::invalid_options("lut_size must be >= 1"));
        }
        if !(self.gamma.is_finite() && self.gamma > 0.0) {
            return Err(Error::invalid_options(format!(
                "gamma must be finite and > 0, got {}",
                self.gamma
            )));
        }
        Ok(())
    }

    /// Parses and validates options from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let options: Self = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    /// Loads options from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let opts = ColormapOptions::default();
        assert_eq!(opts.lut_size, 256);
        assert_eq!(opts.gamma, 1.0);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let opts = ColormapOptions::from_yaml_str("gamma: 0.5\n").unwrap();
        assert_eq!(opts.lut_size, DEFAULT_LUT_SIZE);
        assert_eq!(opts.gamma, 0.5);
    }

    #[test]
    fn test_rejects_zero_lut_size() {
        let err = ColormapOptions::from_yaml_str("lut_size: 0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidOptions(_)));
    }

    #[test]
    fn test_rejects_unknown_key() {
        let err = ColormapOptions::from_yaml_str("lutsize: 12\n").unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn test_rejects_bad_gamma() {
        assert!(ColormapOptions::default().with_gamma(0.0).validate().is_err());
        assert!(ColormapOptions::default().with_gamma(f32::NAN).validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opts.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "lut_size: 16").unwrap();
        writeln!(file, "gamma: 2.0").unwrap();
        drop(file);

        let opts = ColormapOptions::from_file(&path).unwrap();
        assert_eq!(opts, ColormapOptions::default().with_lut_size(16).with_gamma(2.0));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ColormapOptions::from_file(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
