//! CLI command implementations

pub mod list;
pub mod sample;
pub mod table;

use anyhow::{Context as _, Result};
use cmap_core::{registry, Colormap, ColormapOptions};

use crate::Context;

/// Options for derived colormaps: `--config` file, then flag overrides.
pub fn load_options(ctx: &Context) -> Result<ColormapOptions> {
    let mut options = match &ctx.config {
        Some(path) => ColormapOptions::from_file(path)
            .with_context(|| format!("Failed to load options: {}", path.display()))?,
        None => ColormapOptions::default(),
    };
    if let Some(lut_size) = ctx.lut_size {
        options = options.with_lut_size(lut_size);
    }
    if let Some(gamma) = ctx.gamma {
        options = options.with_gamma(gamma);
    }
    options.validate().context("Invalid colormap options")?;
    Ok(options)
}

/// Resolve a built-in colormap by name.
pub fn resolve(name: &str) -> Result<Colormap> {
    registry::get(name).with_context(|| {
        format!(
            "Failed to resolve colormap '{}' (available: {})",
            name,
            registry::names().join(", ")
        )
    })
}

/// Format RGBA as space-separated `0.000` fields.
pub fn format_rgba(rgba: &[f32; 4]) -> String {
    rgba.iter()
        .map(|v| format!("{:5.3}", v))
        .collect::<Vec<_>>()
        .join(" ")
}
