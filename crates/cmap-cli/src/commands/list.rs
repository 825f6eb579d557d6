//! List built-in colormaps

use crate::{Context, ListArgs};
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::Result;
use cmap_core::{registry, ColormapKind};

pub fn run(args: ListArgs, _ctx: &Context) -> Result<()> {
    trace!(reversed = args.reversed, "list::run");
    for line in render(args.reversed)? {
        println!("{}", line);
    }
    Ok(())
}

/// Header and one row per colormap: name, kind, whether masky applies.
pub fn render(reversed: bool) -> Result<Vec<String>> {
    let mut lines = vec![format!("{:<14} {:<16} masky", "name", "kind")];
    for base in registry::names() {
        let mut names = vec![base.to_string()];
        if reversed {
            names.push(format!("{}_r", base));
        }
        for name in names {
            let kind = super::resolve(&name)?.kind();
            let masky = if kind == ColormapKind::Function { "yes" } else { "no" };
            lines.push(format!("{:<14} {:<16} {}", name, kind.to_string(), masky));
        }
    }
    Ok(lines)
}
