use crate::random::Random;
use crate::row::{Neighborhood, RowCell};
use std::array;

/// Empty cell marker. Never produced unless all three predecessors are void.
pub const VOID_GLYPH: u8 = b' ';
pub const FIRST_GLYPH: u8 = 33;
pub const LAST_GLYPH: u8 = 126;
/// Lowest channel value a wrapped sum lands on.
pub const CHANNEL_FLOOR: u8 = 64;

const GLYPH_RANGE_WIDTH: u32 = (LAST_GLYPH - FIRST_GLYPH) as u32;
const CHANNEL_RANGE_WIDTH: u32 = 256 - CHANNEL_FLOOR as u32;

/// Terminal cell carrying its own color and printable character.
///
/// Void cells have a space glyph and a black color; every other cell has a
/// glyph in `FIRST_GLYPH..=LAST_GLYPH`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GlyphCell {
    pub rgb: [u8; 3],
    pub glyph: u8,
}

impl GlyphCell {
    pub const VOID: GlyphCell = GlyphCell {
        rgb: [0, 0, 0],
        glyph: VOID_GLYPH,
    };

    pub fn is_void(&self) -> bool {
        self.glyph == VOID_GLYPH
    }

    pub fn glyph_char(&self) -> char {
        char::from(self.glyph)
    }
}

impl Default for GlyphCell {
    fn default() -> Self {
        Self::VOID
    }
}

/// Glyph cells have a single fixed rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlyphRule;

impl RowCell for GlyphCell {
    type Rule = GlyphRule;

    fn random_seed(rand: &mut Random) -> Self {
        Self {
            rgb: array::from_fn(|_| rand.next_in_range(CHANNEL_FLOOR..=u8::MAX)),
            glyph: rand.next_in_range(FIRST_GLYPH..=LAST_GLYPH),
        }
    }

    fn next(neighborhood: &Neighborhood<'_, Self>, _rule: GlyphRule) -> Self {
        let [left, center, right] = neighborhood.cells();
        Self {
            rgb: array::from_fn(|i| next_channel(left.rgb[i], center.rgb[i], right.rgb[i])),
            glyph: next_glyph(left.glyph, center.glyph, right.glyph),
        }
    }
}

/// Sum of the non-void predecessor codes, wrapped back into the printable
/// range once it reaches `LAST_GLYPH`. Three voids stay void.
pub fn next_glyph(left: u8, center: u8, right: u8) -> u8 {
    let mut codes = [left, center, right]
        .into_iter()
        .filter(|&code| code != VOID_GLYPH)
        .peekable();
    if codes.peek().is_none() {
        return VOID_GLYPH;
    }
    let sum: u32 = codes.map(u32::from).sum();
    if sum >= u32::from(LAST_GLYPH) {
        (sum % GLYPH_RANGE_WIDTH + u32::from(FIRST_GLYPH)) as u8
    } else {
        sum as u8
    }
}

/// Sum of the predecessor components, wrapped into `CHANNEL_FLOOR..=255` on
/// overflow.
pub fn next_channel(left: u8, center: u8, right: u8) -> u8 {
    let sum = u32::from(left) + u32::from(center) + u32::from(right);
    if sum > u32::from(u8::MAX) {
        (sum % CHANNEL_RANGE_WIDTH + u32::from(CHANNEL_FLOOR)) as u8
    } else {
        sum as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolver::{Evolver, EvolverConfig};
    use crate::row::Row;

    fn printable(code: u8) -> bool {
        (FIRST_GLYPH..=LAST_GLYPH).contains(&code)
    }

    #[test]
    fn void_propagates_only_from_void() {
        assert_eq!(next_glyph(b' ', b' ', b' '), VOID_GLYPH);
        assert_eq!(next_glyph(b' ', b'A', b' '), b'A');
        assert_eq!(next_glyph(b'!', b' ', b'!'), b'B');
    }

    #[test]
    fn glyph_sums_wrap_into_printable_range() {
        // 126 % 93 + 33
        assert_eq!(next_glyph(b' ', b'~', b' '), 66);
        // 3 * 126 = 378, 378 % 93 + 33
        assert_eq!(next_glyph(b'~', b'~', b'~'), 39);
        let choices = std::iter::once(VOID_GLYPH).chain(FIRST_GLYPH..=LAST_GLYPH);
        for l in choices.clone() {
            for c in choices.clone() {
                for r in [VOID_GLYPH, FIRST_GLYPH, 80, LAST_GLYPH] {
                    let next = next_glyph(l, c, r);
                    assert!(next == VOID_GLYPH || printable(next), "({l}, {c}, {r}) -> {next}");
                    assert_eq!(next == VOID_GLYPH, l == b' ' && c == b' ' && r == b' ');
                }
            }
        }
    }

    #[test]
    fn channels_sum_then_wrap() {
        assert_eq!(next_channel(0, 0, 0), 0);
        assert_eq!(next_channel(100, 50, 105), 255);
        // 256 % 192 + 64
        assert_eq!(next_channel(100, 50, 106), 128);
        for l in (0..=255).step_by(15) {
            for c in (0..=255).step_by(17) {
                let next = next_channel(l, c, u8::MAX);
                assert!(next >= CHANNEL_FLOOR);
            }
        }
    }

    #[test]
    fn seeds_are_lit_and_printable() {
        let mut rand = Random::from_seed(21);
        for _ in 0..200 {
            let cell = GlyphCell::random_seed(&mut rand);
            assert!(printable(cell.glyph));
            assert!(cell.rgb.iter().all(|&channel| channel >= CHANNEL_FLOOR));
        }
    }

    #[test]
    fn glyph_rows_wrap_like_palette_rows() {
        let evolver = Evolver::<GlyphCell>::new(EvolverConfig {
            width: 4,
            start_cells: 1,
            rule: GlyphRule,
        })
        .unwrap();
        let lit = GlyphCell {
            rgb: [200, 100, 70],
            glyph: b'#',
        };
        let seed = Row::new(vec![lit, GlyphCell::VOID, GlyphCell::VOID, GlyphCell::VOID]).unwrap();
        let next = evolver.step(&seed).unwrap();
        assert_eq!(next[0], lit);
        assert_eq!(next[1], lit);
        assert!(next[2].is_void());
        // Column 3's right neighbor wraps to column 0.
        assert_eq!(next[3], lit);
        assert_eq!(next[2], GlyphCell::VOID);
    }

    #[test]
    fn void_cells_stay_black() {
        let evolver = Evolver::<GlyphCell>::new(EvolverConfig {
            width: 40,
            start_cells: 2,
            rule: GlyphRule,
        })
        .unwrap();
        let grid = evolver.evolve(&mut Random::from_seed(4), 30).unwrap();
        for cell in grid.rows_iter().flat_map(|row| row.cells_iter()) {
            if cell.is_void() {
                assert_eq!(cell.rgb, [0, 0, 0]);
            } else {
                assert!(printable(cell.glyph));
                assert!(cell.rgb.iter().any(|&channel| channel > 0));
            }
        }
    }
}
