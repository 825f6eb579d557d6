//! Side-by-side table of a colormap and its masky variant

use crate::{Context, TableArgs};
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::{bail, Result};
use cmap_core::{linspace, Colormap};

pub fn run(args: TableArgs, ctx: &Context) -> Result<()> {
    trace!(name = %args.name, points = args.points, "table::run");
    if args.points == 0 {
        bail!("--points must be at least 1");
    }

    let options = super::load_options(ctx)?;
    let original = super::resolve(&args.name)?;
    let derived = cmap_masky::derive(&original, args.new_name.as_deref(), options)?;
    debug!(original = original.name(), derived = derived.name(), "Comparing colormaps");

    if ctx.verbose > 0 {
        println!(
            "{}: lut_size={} gamma={}",
            derived.name(),
            options.lut_size,
            options.gamma
        );
    }

    for line in render(&original, &derived, args.points) {
        println!("{}", line);
    }
    Ok(())
}

/// Header and one row per sampled position.
pub fn render(original: &Colormap, derived: &Colormap, points: usize) -> Vec<String> {
    let xs = linspace(points);
    let left = original.sample_many(&xs);
    let right = derived.sample_many(&xs);

    let mut lines = Vec::with_capacity(xs.len() + 2);
    lines.push(format!(
        "x      {:<26}{}",
        format!("{}(x)", original.name()),
        format!("{}(x)", derived.name())
    ));
    lines.push("         red green  blue alpha     red green  blue alpha".to_string());
    for ((x, l), r) in xs.iter().zip(&left).zip(&right) {
        lines.push(format!(
            "{:5.3} ({}) ({})",
            x,
            super::format_rgba(l),
            super::format_rgba(r)
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmap_core::registry;

    #[test]
    fn test_render_afmhot() {
        let original = registry::get("afmhot").unwrap();
        let derived = cmap_masky::masky(&original).unwrap();
        let lines = render(&original, &derived, 9);

        assert_eq!(lines.len(), 11);
        assert!(lines[0].starts_with("x      afmhot(x)"));
        assert!(lines[0].ends_with("afmhot_masky(x)"));
        assert_eq!(lines[2], "0.000 (0.000 0.000 0.000 1.000) (0.000 0.000 0.000 0.000)");
        assert_eq!(lines[10], "1.000 (1.000 1.000 1.000 1.000) (1.000 1.000 1.000 1.000)");
    }

    #[test]
    fn test_render_single_point() {
        let original = registry::get("ocean").unwrap();
        let derived = cmap_masky::masky(&original).unwrap();
        let lines = render(&original, &derived, 1);
        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with("0.000 ("));
    }
}
