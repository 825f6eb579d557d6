//! Sample a colormap at given positions

use crate::{Context, SampleArgs};
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::Result;

pub fn run(args: SampleArgs, ctx: &Context) -> Result<()> {
    trace!(name = %args.name, count = args.positions.len(), masky = args.masky, "sample::run");

    let mut cmap = super::resolve(&args.name)?;
    if args.masky {
        let options = super::load_options(ctx)?;
        cmap = cmap_masky::derive(&cmap, None, options)?;
        debug!(name = cmap.name(), "Sampling masky variant");
    }

    if ctx.verbose > 0 {
        println!("{} ({}, {} entries)", cmap.name(), cmap.kind(), cmap.lut().len());
    }

    let rgba = cmap.sample_many(&args.positions);
    for (x, px) in args.positions.iter().zip(&rgba) {
        println!("{:5.3} ({})", x, super::format_rgba(px));
    }
    Ok(())
}
