use crate::error::ConfigError;
use crate::random::Random;
use crate::row::{Grid, Neighborhood, Row, RowCell};
use log::{debug, trace};

pub const MAX_START_CELLS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvolverConfig<R> {
    pub width: usize,
    pub start_cells: usize,
    pub rule: R,
}

/// Seeds generation 0 and derives each following generation from the one
/// before it. The configuration is validated once and never changes.
#[derive(Clone, Debug)]
pub struct Evolver<C>
where
    C: RowCell,
{
    config: EvolverConfig<C::Rule>,
}

impl<C> Evolver<C>
where
    C: RowCell,
{
    pub fn new(config: EvolverConfig<C::Rule>) -> Result<Self, ConfigError> {
        if config.width == 0 {
            return Err(ConfigError::InvalidWidth(config.width));
        }
        if !(1..=MAX_START_CELLS).contains(&config.start_cells) {
            return Err(ConfigError::InvalidStartCells(config.start_cells));
        }
        // One seed always fits; more need a column each.
        if config.start_cells > 1 && config.width <= config.start_cells {
            return Err(ConfigError::TooNarrow {
                width: config.width,
                count: config.start_cells,
            });
        }
        debug!("evolver configured: {config:?}");
        Ok(Self { config })
    }

    pub fn width(&self) -> usize {
        self.config.width
    }

    pub fn start_cells(&self) -> usize {
        self.config.start_cells
    }

    pub fn rule(&self) -> C::Rule {
        self.config.rule
    }

    /// Background everywhere except the evenly spaced seed columns, which get
    /// a random non-background value each.
    pub fn seed(&self, rand: &mut Random) -> Row<C> {
        let mut cells = vec![C::default(); self.width()];
        for col in seed_columns(self.width(), self.start_cells()) {
            cells[col] = C::random_seed(rand);
            debug!("seed column {col}: {:?}", cells[col]);
        }
        Row::from_validated(cells)
    }

    pub fn step(&self, previous: &Row<C>) -> Result<Row<C>, ConfigError> {
        self.check_width(previous)?;
        Ok(self.advance(previous))
    }

    fn advance(&self, previous: &Row<C>) -> Row<C> {
        let cells = (0..self.width())
            .map(|col| C::next(&Neighborhood::around(previous, col), self.rule()))
            .collect();
        Row::from_validated(cells)
    }

    fn check_width(&self, row: &Row<C>) -> Result<(), ConfigError> {
        if row.width() != self.width() {
            return Err(ConfigError::WidthMismatch {
                expected: self.width(),
                actual: row.width(),
            });
        }
        Ok(())
    }

    /// Seeds and grows `generations` rows, seed included.
    pub fn evolve(&self, rand: &mut Random, generations: usize) -> Result<Grid<C>, ConfigError> {
        if generations == 0 {
            return Err(ConfigError::InvalidGenerations);
        }
        let seed = self.seed(rand);
        self.evolve_from(seed, generations)
    }

    pub fn evolve_from(&self, seed: Row<C>, generations: usize) -> Result<Grid<C>, ConfigError> {
        if generations == 0 {
            return Err(ConfigError::InvalidGenerations);
        }
        let mut grid = Grid::new(self.width());
        for row in self.generations_from(seed)?.take(generations) {
            grid.push(row);
        }
        Ok(grid)
    }

    /// Unbounded stream of generations starting with a fresh seed row.
    pub fn generations(&self, rand: &mut Random) -> Generations<'_, C> {
        Generations {
            evolver: self,
            seed: Some(self.seed(rand)),
            previous: None,
            index: 0,
        }
    }

    pub fn generations_from(&self, seed: Row<C>) -> Result<Generations<'_, C>, ConfigError> {
        self.check_width(&seed)?;
        Ok(Generations {
            evolver: self,
            seed: Some(seed),
            previous: None,
            index: 0,
        })
    }
}

/// Yields the seed row, then one derived row per call. Never ends on its own.
#[derive(Debug)]
pub struct Generations<'a, C>
where
    C: RowCell,
{
    evolver: &'a Evolver<C>,
    seed: Option<Row<C>>,
    previous: Option<Row<C>>,
    index: usize,
}

impl<C> Iterator for Generations<'_, C>
where
    C: RowCell,
{
    type Item = Row<C>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = match (self.seed.take(), &self.previous) {
            (Some(seed), _) => seed,
            (None, Some(previous)) => self.evolver.advance(previous),
            (None, None) => return None,
        };
        trace!("generation {}", self.index);
        self.index += 1;
        self.previous = Some(row.clone());
        Some(row)
    }
}

/// Columns of the `count` seed cells: the i-th (1-indexed) sits at
/// `(width / (count + 1)) * i`, clamped to the last column. The spacing is
/// truncated before multiplying, so width 10 with 3 cells gives `[2, 4, 6]`
/// rather than the `[2, 5, 7]` of `floor(width * i / (count + 1))`.
pub fn seed_columns(width: usize, count: usize) -> impl Iterator<Item = usize> {
    let spacing = width / (count + 1);
    let last = width.saturating_sub(1);
    (1..=count).map(move |i| (spacing * i).min(last))
}
