#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod prompt;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use prompt::Prompter;
use render_main_support::{animate_grid, write_gif, Palette, RasterLayout};
use ring_grid::{Cell, Evolver, EvolverConfig, Random, Ruleset};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Generates an animated gif of a one-dimensional cellular automaton, one new
/// row per frame.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Ruleset id (1-6) or name; asked for when omitted
    #[arg(short, long)]
    ruleset: Option<Ruleset>,

    /// Number of evenly spaced start cells (1-4); asked for when omitted
    #[arg(short, long)]
    start_cells: Option<usize>,

    /// Draw lines between cells
    #[arg(short, long)]
    grid_lines: bool,

    /// Cells per row
    #[arg(long, default_value_t = 100)]
    width: usize,

    /// Rows to grow, seed row included
    #[arg(long, default_value_t = 100)]
    generations: usize,

    /// Side of each cell's square in pixels
    #[arg(long, default_value_t = 6)]
    square_size: u32,

    /// Delay between frames in hundredths of a second
    #[arg(long, default_value_t = 5)]
    frame_delay: u16,

    /// Seed for the start cell colors
    #[arg(long)]
    seed: Option<u64>,

    #[arg(short, long, default_value = "out.gif")]
    output: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Settings {
    grid_lines: bool,
    ruleset: Ruleset,
    start_cells: usize,
}

impl Settings {
    fn resolve<R, W>(args: &Args, prompter: &mut Prompter<R, W>) -> Result<Self>
    where
        R: BufRead,
        W: Write,
    {
        if let (Some(ruleset), Some(start_cells)) = (args.ruleset, args.start_cells) {
            return Ok(Self {
                grid_lines: args.grid_lines,
                ruleset,
                start_cells,
            });
        }

        prompter.welcome()?;
        let grid_lines = args.grid_lines || prompter.grid_lines()?;
        let ruleset = match args.ruleset {
            Some(ruleset) => ruleset,
            None => prompter.ruleset()?,
        };
        let start_cells = match args.start_cells {
            Some(start_cells) => start_cells,
            None => prompter.start_cells()?,
        };
        Ok(Self {
            grid_lines,
            ruleset,
            start_cells,
        })
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    let settings = Settings::resolve(&args, &mut prompter)?;
    if settings.ruleset.is_bitwise() && settings.start_cells > 1 {
        warn!(
            "ruleset {} usually works best with a single start cell",
            settings.ruleset
        );
    }

    let evolver = Evolver::<Cell>::new(EvolverConfig {
        width: args.width,
        start_cells: settings.start_cells,
        rule: settings.ruleset,
    })
    .context("invalid automaton configuration")?;
    let layout = RasterLayout::new(args.square_size, settings.grid_lines)
        .context("invalid raster layout")?;
    let mut rand = args.seed.map_or_else(Random::new, Random::from_seed);
    let palette = Palette::default();

    println!("Generating animation...");
    let grid = evolver
        .evolve(&mut rand, args.generations)
        .context("invalid generation count")?;
    let animation = animate_grid(&grid, &layout, &palette, args.frame_delay)
        .context("failed to render frames")?;
    let loops = u16::try_from(animation.len()).unwrap_or(u16::MAX);
    write_gif(&animation, &palette, loops, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    info!(
        "{} rows of ruleset {} in {} frames",
        grid.height(),
        settings.ruleset,
        animation.len()
    );
    println!("Animation saved to {}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args(cli: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("ring-automaton-gif").chain(cli.iter().copied()))
            .unwrap()
    }

    fn resolve(args: &Args, input: &str) -> Result<Settings> {
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        Settings::resolve(args, &mut prompter)
    }

    #[test]
    fn defaults_match_original_layout() {
        let args = args(&[]);
        assert_eq!(args.width, 100);
        assert_eq!(args.generations, 100);
        assert_eq!(args.square_size, 6);
        assert_eq!(args.frame_delay, 5);
        assert_eq!(args.output, PathBuf::from("out.gif"));
    }

    #[test]
    fn flags_skip_prompts() {
        let args = args(&["--ruleset", "or-xor", "--start-cells", "1", "-g"]);
        let settings = resolve(&args, "").unwrap();
        assert_eq!(
            settings,
            Settings {
                grid_lines: true,
                ruleset: Ruleset::OrXor,
                start_cells: 1,
            }
        );
    }

    #[test]
    fn prompts_for_missing_settings() {
        let settings = resolve(&args(&[]), "n\n2\n4\n").unwrap();
        assert_eq!(settings.ruleset, Ruleset::CrossSum);
        assert_eq!(settings.start_cells, 4);
        assert!(!settings.grid_lines);

        let settings = resolve(&args(&["-r", "1"]), "y\n3\n").unwrap();
        assert_eq!(settings.ruleset, Ruleset::Sum);
        assert_eq!(settings.start_cells, 3);
        assert!(settings.grid_lines);
    }

    #[test]
    fn rejects_bad_ruleset_flag() {
        assert!(Args::try_parse_from(["ring-automaton-gif", "--ruleset", "7"]).is_err());
    }
}
