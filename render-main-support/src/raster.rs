use crate::error::RenderError;
use crate::palette::{Palette, GRID_LINE_INDEX};
use image::{Rgba, RgbaImage};
use rayon::prelude::*;
use ring_grid::{Cell, Grid};

/// Gif dimensions are 16-bit.
const MAX_FRAME_SIDE: u64 = u16::MAX as u64;

/// How grid cells map to pixels: one square per cell, optionally separated by
/// one-pixel grid lines along the top and left edge of every square that is
/// not in the first row or column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterLayout {
    square_size: u32,
    grid_lines: bool,
}

impl RasterLayout {
    pub fn new(square_size: u32, grid_lines: bool) -> Result<Self, RenderError> {
        if square_size == 0 {
            return Err(RenderError::InvalidSquareSize);
        }
        if grid_lines && square_size < 2 {
            return Err(RenderError::GridLinesTooThin(square_size));
        }
        Ok(Self {
            square_size,
            grid_lines,
        })
    }

    pub fn square_size(&self) -> u32 {
        self.square_size
    }

    pub fn frame_size(&self, grid: &Grid<Cell>) -> Result<(u32, u32), RenderError> {
        let width = grid.width() as u64 * u64::from(self.square_size);
        let height = grid.height() as u64 * u64::from(self.square_size);
        if width > MAX_FRAME_SIDE || height > MAX_FRAME_SIDE {
            return Err(RenderError::FrameTooLarge { width, height });
        }
        Ok((width as u32, height as u32))
    }

    fn on_grid_line(&self, square: usize, offset: usize) -> bool {
        self.grid_lines && square != 0 && offset == 0
    }
}

/// Palette-indexed pixels of one animation frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedFrame {
    width: u32,
    height: u32,
    indices: Vec<u8>,
}

impl IndexedFrame {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn index_at(&self, x: u32, y: u32) -> u8 {
        self.indices[y as usize * self.width as usize + x as usize]
    }

    pub fn to_rgba(&self, palette: &Palette) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            Rgba(palette.rgba(self.index_at(x, y)))
        })
    }
}

/// Draws the first `rows_shown` rows of `grid`. Rows past that are drawn as
/// background, so the frame size is the same for every `rows_shown`.
pub fn rasterize(
    grid: &Grid<Cell>,
    rows_shown: usize,
    layout: &RasterLayout,
    palette: &Palette,
) -> Result<IndexedFrame, RenderError> {
    let (width, height) = layout.frame_size(grid)?;
    let square = layout.square_size() as usize;
    let mut indices = vec![GRID_LINE_INDEX; width as usize * height as usize];

    indices
        .par_chunks_exact_mut(width as usize)
        .enumerate()
        .for_each(|(y, pixels)| {
            let grid_row = y / square;
            if layout.on_grid_line(grid_row, y % square) {
                return;
            }
            let row = grid.row(grid_row).filter(|_| grid_row < rows_shown);
            for (x, pixel) in pixels.iter_mut().enumerate() {
                let col = x / square;
                if layout.on_grid_line(col, x % square) {
                    continue;
                }
                let cell = row.map_or(Cell::BACKGROUND, |row| row[col]);
                *pixel = palette.index_of(cell);
            }
        });

    Ok(IndexedFrame {
        width,
        height,
        indices,
    })
}
