#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod animation;
mod error;
mod palette;
mod raster;
mod terminal;

pub use animation::{animate_grid, encode_gif, write_gif, Animation, FINAL_DELAY_FACTOR};
pub use error::RenderError;
pub use palette::{Palette, GRID_LINE_INDEX};
pub use raster::{rasterize, IndexedFrame, RasterLayout};
pub use terminal::{stream, terminal_width, write_row, TerminalGlyph, BLOCK_GLYPH};
