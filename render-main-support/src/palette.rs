use ring_grid::{Cell, NUM_STATES};

const PALETTE_LEN: usize = NUM_STATES as usize + 1;

/// Palette slot of the lines drawn between squares.
pub const GRID_LINE_INDEX: u8 = 1;

const WHITE: [u8; 4] = [249, 249, 249, 0xff];
const BLACK: [u8; 4] = [0, 0, 0, 0xff];
// https://www.color-hex.com/color-palette/5452
const RED: [u8; 4] = [217, 83, 79, 0xff];
const LIGHT_BLUE: [u8; 4] = [91, 192, 222, 0xff];
const GREEN: [u8; 4] = [92, 184, 92, 0xff];
const DARK_BLUE: [u8; 4] = [66, 139, 202, 0xff];

/// Fixed mapping from cell state to color. Slot 0 is the background, slot
/// `GRID_LINE_INDEX` the grid lines, and the accent colors follow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: [[u8; 4]; PALETTE_LEN],
}

impl Palette {
    pub fn new(background: [u8; 4], grid_line: [u8; 4], accents: [[u8; 4]; 4]) -> Self {
        let [a, b, c, d] = accents;
        Self {
            colors: [background, grid_line, a, b, c, d],
        }
    }

    pub fn index_of(&self, cell: Cell) -> u8 {
        if cell.is_background() {
            0
        } else {
            cell.value() + GRID_LINE_INDEX
        }
    }

    pub fn rgba(&self, index: u8) -> [u8; 4] {
        self.colors[index as usize]
    }

    pub fn cell_rgba(&self, cell: Cell) -> [u8; 4] {
        self.rgba(self.index_of(cell))
    }

    pub fn cell_rgb(&self, cell: Cell) -> [u8; 3] {
        let [r, g, b, _] = self.cell_rgba(cell);
        [r, g, b]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(WHITE, BLACK, [RED, LIGHT_BLUE, GREEN, DARK_BLUE])
    }
}
