#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! One-dimensional cellular automaton over a toroidal row.
//!
//! Each generation is a [`Row`]; a bounded run collects them into a [`Grid`]
//! whose row 0 is the seed. The [`Evolver`] drives propagation and is generic
//! over [`RowCell`], so palette cells ([`Cell`]) and terminal glyph cells
//! ([`GlyphCell`]) share the same left/center/right discipline.

mod cell;
mod error;
mod evolver;
mod glyph;
mod random;
mod row;
mod rule;

pub use cell::{Cell, NUM_STATES};
pub use error::ConfigError;
pub use evolver::{seed_columns, Evolver, EvolverConfig, Generations, MAX_START_CELLS};
pub use glyph::{
    next_channel, next_glyph, GlyphCell, GlyphRule, CHANNEL_FLOOR, FIRST_GLYPH, LAST_GLYPH,
    VOID_GLYPH,
};
pub use random::Random;
pub use row::{Grid, Neighborhood, Row, RowCell};
pub use rule::{transition, Ruleset};
