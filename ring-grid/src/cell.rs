use crate::error::ConfigError;
use crate::random::Random;
use crate::row::{Neighborhood, RowCell};
use crate::rule::{transition, Ruleset};

/// Number of cell states, `K`. Background plus four accent colors.
pub const NUM_STATES: u8 = 5;

/// Automaton state in `0..NUM_STATES`. Color is the renderer's business.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(u8);

impl Cell {
    pub const BACKGROUND: Cell = Cell(0);

    pub fn new(value: u8) -> Result<Self, ConfigError> {
        if value < NUM_STATES {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidCellValue(value))
        }
    }

    /// Reduces a raw rule result into range. Unsigned input keeps it non-negative.
    pub(crate) fn reduce(raw: u32) -> Self {
        Self((raw % NUM_STATES as u32) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_background(self) -> bool {
        self.0 == 0
    }

    /// Every valid state, background first.
    pub fn all() -> impl DoubleEndedIterator<Item = Cell> + Clone {
        (0..NUM_STATES).map(Cell)
    }
}

impl TryFrom<u8> for Cell {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl RowCell for Cell {
    type Rule = Ruleset;

    fn random_seed(rand: &mut Random) -> Self {
        Self(rand.next_in_range(1..NUM_STATES))
    }

    fn next(neighborhood: &Neighborhood<'_, Self>, rule: Ruleset) -> Self {
        transition(
            neighborhood.left(),
            neighborhood.center(),
            neighborhood.right(),
            rule,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(Cell::new(4).map(Cell::value), Ok(4));
        assert_eq!(Cell::new(5), Err(ConfigError::InvalidCellValue(5)));
        assert_eq!(Cell::try_from(200), Err(ConfigError::InvalidCellValue(200)));
    }

    #[test]
    fn reduce_wraps_modulo_states() {
        assert_eq!(Cell::reduce(0), Cell::BACKGROUND);
        assert_eq!(Cell::reduce(7).value(), 2);
        assert_eq!(Cell::reduce(u32::MAX).value(), (u32::MAX % 5) as u8);
    }

    #[test]
    fn random_seed_is_never_background() {
        let mut rand = Random::from_seed(42);
        for _ in 0..500 {
            let cell = Cell::random_seed(&mut rand);
            assert!(!cell.is_background());
            assert!(cell.value() < NUM_STATES);
        }
    }
}
