use std::fmt::Display;

use array2d::Array2D;

/// A partially filled word search grid, as it exists while words are placed and letters filled in.
///
/// Cells are addressed by `(x, y)`, `x` being the column and `y` the row. A filled cell never changes to a different
/// letter; writing the letter it already holds succeeds without changing anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<Option<char>>,
}

impl Grid {
    /// Creates an empty grid.
    pub fn new(num_rows: usize, num_columns: usize) -> Self {
        Self {
            cells: Array2D::filled_with(None, num_rows, num_columns),
        }
    }

    /// The number of rows.
    pub fn num_rows(&self) -> usize {
        self.cells.num_rows()
    }

    /// The number of columns.
    pub fn num_columns(&self) -> usize {
        self.cells.num_columns()
    }

    /// The letter at `(x, y)`, or [`None`] if the cell is empty or outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.cells.get(y, x).copied().flatten()
    }

    /// Whether `(x, y)` is inside the grid and still empty.
    pub fn is_empty_at(&self, x: usize, y: usize) -> bool {
        matches!(self.cells.get(y, x), Some(None))
    }

    /// Writes `letter` into `(x, y)`.
    ///
    /// Returns `false`, leaving the grid untouched, if the cell is outside the grid or already holds a different letter.
    pub fn place(&mut self, x: usize, y: usize, letter: char) -> bool {
        let Some(cell) = self.cells.get_mut(y, x) else {
            return false;
        };

        match cell {
            Some(existing) => *existing == letter,
            None => {
                *cell = Some(letter);
                true
            }
        }
    }

    /// Empties `(x, y)` again. Only used to roll back a rejected placement.
    pub(crate) fn clear(&mut self, x: usize, y: usize) {
        if let Some(cell) = self.cells.get_mut(y, x) {
            *cell = None;
        }
    }

    /// Whether every cell holds a letter.
    pub fn is_full(&self) -> bool {
        self.cells.elements_row_major_iter().all(Option::is_some)
    }

    /// The number of cells still empty.
    pub fn empty_cells(&self) -> usize {
        self.cells
            .elements_row_major_iter()
            .filter(|cell| cell.is_none())
            .count()
    }

    /// The first empty cell in row-major order.
    pub fn first_empty(&self) -> Option<(usize, usize)> {
        let index = self
            .cells
            .elements_row_major_iter()
            .position(|cell| cell.is_none())?;

        Some((index % self.num_columns(), index / self.num_columns()))
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows_iter() {
            let mut first = true;

            for cell in row {
                if !first {
                    f.write_str(" ")?;
                }
                first = false;

                write!(f, "{}", cell.unwrap_or('.'))?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
