use crate::board::Coordinate;

/// Highest number of columns a board may have, one per letter `A`–`Z`.
pub const MAX_COLS: usize = 26;

/// Dimensions of a rectangular board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Number of rows. This cooresponds to the `row` of a [`Coordinate`].
    rows: usize,
    /// Number of columns. This cooresponds to the `col` of a [`Coordinate`].
    cols: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified rows and columns.
    /// Panics if either is 0 or if `cols` exceeds [`MAX_COLS`].
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Some(dim) => dim,
            None => panic!("invalid dimensions: {}x{}", rows, cols),
        }
    }

    /// Create new [`Dimensions`] with the specified rows and columns.
    /// Returns `None` if either is 0 or if `cols` exceeds [`MAX_COLS`],
    /// since columns are addressed by a single letter.
    pub fn try_new(rows: usize, cols: usize) -> Option<Self> {
        if rows == 0 || cols == 0 || cols > MAX_COLS {
            None
        } else {
            Some(Self { rows, cols })
        }
    }

    /// Number of rows on the board.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns on the board.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells on the board.
    pub fn total_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the given [`Coordinate`] lies on the board.
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.col < self.cols && coord.row < self.rows
    }

    /// Convert a coordinate to a linear index within these dimensions.
    /// Returns `None` if the coordinate is out of range.
    pub(super) fn try_linearize(&self, coord: Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row * self.cols + coord.col)
        } else {
            None
        }
    }

    /// The smallest legal coordinate, `A1`.
    pub fn first(&self) -> Coordinate {
        Coordinate::new(0, 0)
    }

    /// The largest legal coordinate, the bottom-right corner of the grid
    /// (`I9` on the default board).
    pub fn last(&self) -> Coordinate {
        Coordinate::new(self.cols - 1, self.rows - 1)
    }

    /// Iterate every legal coordinate in row-major order: all of row 1 from
    /// column `A` up, then row 2, and so on. [`first`][Self::first] is the
    /// first item yielded and [`last`][Self::last] the final one.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Coordinate::new(col, row)))
    }

    /// Iterate the rows of the grid. Each item is an iterator over the
    /// coordinates of one row, which is the shape renderers want.
    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let cols = self.cols;
        (0..self.rows).map(move |row| (0..cols).map(move |col| Coordinate::new(col, row)))
    }
}

impl Default for Dimensions {
    /// The standard board for the solo game, 9 rows by 9 columns.
    fn default() -> Self {
        Self { rows: 9, cols: 9 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_nine_by_nine() {
        let dim = Dimensions::default();
        assert_eq!(dim.rows(), 9);
        assert_eq!(dim.cols(), 9);
        assert_eq!(dim.total_size(), 81);
    }

    #[test]
    fn first_and_last_name_the_corners() {
        let dim = Dimensions::default();
        assert_eq!(dim.first().to_string(), "A1");
        assert_eq!(dim.last().to_string(), "I9");

        let wide = Dimensions::new(3, 26);
        assert_eq!(wide.last().to_string(), "Z3");
    }

    #[test]
    fn iteration_is_row_major() {
        let dim = Dimensions::new(2, 3);
        let coords: Vec<String> = dim.iter().map(|c| c.to_string()).collect();
        assert_eq!(coords, ["A1", "B1", "C1", "A2", "B2", "C2"]);
        assert_eq!(coords.len(), dim.total_size());
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        assert!(Dimensions::try_new(0, 9).is_none());
        assert!(Dimensions::try_new(9, 0).is_none());
        assert!(Dimensions::try_new(9, MAX_COLS + 1).is_none());
        assert!(Dimensions::try_new(9, MAX_COLS).is_some());
    }

    #[test]
    fn contains_matches_the_bounds() {
        let dim = Dimensions::default();
        assert!(dim.contains(Coordinate::new(0, 0)));
        assert!(dim.contains(Coordinate::new(8, 8)));
        assert!(!dim.contains(Coordinate::new(9, 0)));
        assert!(!dim.contains(Coordinate::new(0, 9)));
        // Z9 parses but is off a 9x9 grid.
        assert!(!dim.contains("Z9".parse().unwrap()));
    }
}
