use crate::cell::Cell;
use crate::error::ConfigError;
use crate::random::Random;
use std::fmt::Debug;
use std::ops::Index;

/// A cell that can be evolved along a toroidal row.
pub trait RowCell
where
    Self: Copy + Debug + Default + PartialEq,
{
    /// Run-wide transition selector, fixed once the evolver is built.
    type Rule: Copy + Debug;

    /// A non-background value for a seed column.
    fn random_seed(rand: &mut Random) -> Self;

    fn next(neighborhood: &Neighborhood<'_, Self>, rule: Self::Rule) -> Self;
}

/// One generation. Never mutated once built.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Row<C> {
    cells: Vec<C>,
}

impl<C> Row<C>
where
    C: RowCell,
{
    pub fn new(cells: Vec<C>) -> Result<Self, ConfigError> {
        if cells.is_empty() {
            return Err(ConfigError::InvalidWidth(0));
        }
        Ok(Self { cells })
    }

    /// For callers that already rejected a zero width.
    pub(crate) fn from_validated(cells: Vec<C>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells }
    }

    pub fn background(width: usize) -> Result<Self, ConfigError> {
        Self::new(vec![C::default(); width])
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &C> + Clone {
        self.cells.iter()
    }

    /// `None` when `col` is past the last column.
    pub fn neighborhood(&self, col: usize) -> Option<Neighborhood<'_, C>> {
        Neighborhood::new(self, col)
    }
}

impl Row<Cell> {
    pub fn from_values(values: &[u8]) -> Result<Self, ConfigError> {
        let cells = values
            .iter()
            .map(|&value| Cell::new(value))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(cells)
    }

    pub fn values(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.value()).collect()
    }
}

impl<C> Index<usize> for Row<C> {
    type Output = C;

    fn index(&self, col: usize) -> &Self::Output {
        &self.cells[col]
    }
}

/// The three cells of the previous generation feeding one column. The row is
/// a ring: column 0's left is the last column and the last column's right is
/// column 0.
pub struct Neighborhood<'a, C> {
    cells: &'a [C],
    cols: [usize; 3],
}

impl<'a, C> Neighborhood<'a, C>
where
    C: RowCell,
{
    pub fn new(row: &'a Row<C>, center: usize) -> Option<Self> {
        (center < row.width()).then(|| Self::around(row, center))
    }

    /// Callers guarantee `center < row.width()`.
    pub(crate) fn around(row: &'a Row<C>, center: usize) -> Self {
        let (col_left, col_right) = Self::adjacent_indexes(center, row.width());
        Self {
            cells: row.cells(),
            cols: [col_left, center, col_right],
        }
    }

    pub fn left(&self) -> C {
        self.cells[self.cols[0]]
    }

    pub fn center(&self) -> C {
        self.cells[self.cols[1]]
    }

    pub fn right(&self) -> C {
        self.cells[self.cols[2]]
    }

    pub fn cells(&self) -> [C; 3] {
        [self.left(), self.center(), self.right()]
    }

    pub fn cols(&self) -> [usize; 3] {
        self.cols
    }

    fn adjacent_indexes(cell_index: usize, max: usize) -> (usize, usize) {
        (
            Self::modulo(cell_index as i64 - 1, max),
            Self::modulo(cell_index as i64 + 1, max),
        )
    }

    fn modulo(val: i64, max: usize) -> usize {
        val.rem_euclid(max as i64) as usize
    }
}

/// Generations of a bounded run, row 0 being the seed. Append-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<C> {
    width: usize,
    rows: Vec<Row<C>>,
}

impl<C> Grid<C>
where
    C: RowCell,
{
    pub(crate) fn new(width: usize) -> Self {
        Self {
            width,
            rows: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, row: Row<C>) {
        debug_assert_eq!(row.width(), self.width);
        self.rows.push(row);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows, seed included.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, index: usize) -> Option<&Row<C>> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[Row<C>] {
        &self.rows
    }

    pub fn rows_iter(&self) -> impl DoubleEndedIterator<Item = &Row<C>> + Clone {
        self.rows.iter()
    }
}

impl<C> Index<usize> for Grid<C> {
    type Output = Row<C>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}
