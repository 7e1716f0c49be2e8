use crate::cell::NUM_STATES;
use crate::evolver::MAX_START_CELLS;
use thiserror::Error;

/// Rejected configuration. Always raised before generation 0 is computed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("width must be at least 1, got {0}")]
    InvalidWidth(usize),

    #[error("start cell count must be between 1 and {max}, got {0}", max = MAX_START_CELLS)]
    InvalidStartCells(usize),

    #[error("width {width} is too narrow to space {count} start cells apart")]
    TooNarrow { width: usize, count: usize },

    #[error("unknown ruleset '{0}', expected 1-6 or a ruleset name")]
    UnknownRuleset(String),

    #[error("generation count must be at least 1")]
    InvalidGenerations,

    #[error("cell value {0} is outside 0..{max}", max = NUM_STATES)]
    InvalidCellValue(u8),

    #[error("row width {actual} does not match evolver width {expected}")]
    WidthMismatch { expected: usize, actual: usize },
}
