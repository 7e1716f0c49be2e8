#![deny(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use render_main_support::{stream, terminal_width, Palette, TerminalGlyph};
use ring_grid::{
    Cell, ConfigError, Evolver, EvolverConfig, GlyphCell, GlyphRule, Random, RowCell, Ruleset,
};
use std::time::Duration;

/// The palette stream always runs the sum rule.
const PALETTE_RULESET: Ruleset = Ruleset::Sum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Colored blocks from the fixed palette
    Palette,
    /// Cells carrying their own color and character
    Glyph,
}

/// Streams a one-dimensional cellular automaton to the terminal, one row per
/// generation. Press q, Esc or Ctrl-C to stop.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(short, long, value_enum, default_value_t = Mode::Palette)]
    mode: Mode,

    /// Cells per row; defaults to the terminal width
    #[arg(short, long)]
    width: Option<usize>,

    /// Number of evenly spaced start cells (1-4)
    #[arg(short, long, default_value_t = 1)]
    start_cells: usize,

    /// Pause between generations in milliseconds
    #[arg(short, long, default_value_t = 50)]
    delay_ms: u64,

    /// Stop after this many generations instead of running until interrupted
    #[arg(short, long)]
    generations: Option<usize>,

    /// Seed for the start cells
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let width = args.width.unwrap_or_else(terminal_width);
    let mut rand = args.seed.map_or_else(Random::new, Random::from_seed);
    let printed = match args.mode {
        Mode::Palette => run::<Cell>(&args, width, PALETTE_RULESET, &mut rand)?,
        Mode::Glyph => run::<GlyphCell>(&args, width, GlyphRule, &mut rand)?,
    };
    info!("printed {printed} generations");
    Ok(())
}

fn run<C>(args: &Args, width: usize, rule: C::Rule, rand: &mut Random) -> Result<usize>
where
    C: RowCell + TerminalGlyph,
{
    let evolver = Evolver::<C>::new(EvolverConfig {
        width,
        start_cells: args.start_cells,
        rule,
    })
    .context("invalid automaton configuration")?;
    if args.generations == Some(0) {
        return Err(ConfigError::InvalidGenerations.into());
    }
    let delay = Duration::from_millis(args.delay_ms);
    let palette = Palette::default();
    let rows = evolver.generations(rand);

    let printed = match args.generations {
        Some(limit) => stream(rows.take(limit), delay, &palette),
        None => stream(rows, delay, &palette),
    };
    printed.context("failed to print generations")
}
