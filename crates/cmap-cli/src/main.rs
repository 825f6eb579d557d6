//! cmap - inspect colormaps and their masky variants
//!
//! Prints lookup-table samples of built-in colormaps and compares them with
//! the derived map whose brightness has been moved into alpha.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "cmap")]
#[command(author, version, about = "Inspect colormaps and their masky variants")]
#[command(long_about = "
Samples built-in colormaps and their masky variants, where each color is
normalized to its brightest channel and that brightness becomes alpha.

Examples:
  cmap table afmhot                     # Compare afmhot with afmhot_masky
  cmap table gnuplot2 -n 17             # 17 evenly spaced points
  cmap sample ocean 0 0.25 0.5          # RGBA of ocean at three points
  cmap sample ocean --masky 0.5         # RGBA of ocean_masky
  cmap list                             # Built-in colormaps
  cmap --config opts.yaml table afmhot  # Options from YAML
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// YAML file with colormap options (lut_size, gamma)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Lookup table size of derived colormaps (overrides --config)
    #[arg(long = "lut-size", global = true)]
    lut_size: Option<usize>,

    /// Gamma of derived colormaps (overrides --config)
    #[arg(long, global = true)]
    gamma: Option<f32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a colormap next to its masky variant
    #[command(visible_alias = "t")]
    Table(TableArgs),

    /// Print RGBA values at given positions
    #[command(visible_alias = "s")]
    Sample(SampleArgs),

    /// List built-in colormaps
    #[command(visible_alias = "l")]
    List(ListArgs),
}

#[derive(Args)]
struct TableArgs {
    /// Colormap name (append _r for reversed)
    #[arg(default_value = "afmhot")]
    name: String,

    /// Number of evenly spaced points from 0 to 1
    #[arg(short = 'n', long, default_value = "9")]
    points: usize,

    /// Name of the derived colormap
    #[arg(long = "as")]
    new_name: Option<String>,
}

#[derive(Args)]
struct SampleArgs {
    /// Colormap name (append _r for reversed)
    name: String,

    /// Positions to sample
    #[arg(required = true, allow_negative_numbers = true)]
    positions: Vec<f32>,

    /// Sample the masky variant instead
    #[arg(short, long)]
    masky: bool,
}

#[derive(Args)]
struct ListArgs {
    /// Include reversed (_r) variants
    #[arg(short, long)]
    reversed: bool,
}

/// Global options shared by every command.
pub struct Context {
    config: Option<PathBuf>,
    lut_size: Option<usize>,
    gamma: Option<f32>,
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = Context {
        config: cli.config,
        lut_size: cli.lut_size,
        gamma: cli.gamma,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Table(args) => commands::table::run(args, &ctx),
        Commands::Sample(args) => commands::sample::run(args, &ctx),
        Commands::List(args) => commands::list::run(args, &ctx),
    }
}
