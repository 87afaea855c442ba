use std::fmt::Display;

use crate::direction::{Axis, WordDirection};

/// Describes where a word's letters are placed in the word search grid. Includes a beginning coordinate, a length, and a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WordSpan {
    /// The starting `(x, y)` coordinate in the grid of the word that this WordSpan refers to, where `x` is the column
    /// and `y` the row.
    pub begin: (usize, usize),

    /// The length of the word that this WordSpan refers to.
    pub len: usize,

    /// The direction that the word goes in.
    pub direction: WordDirection,
}

impl WordSpan {
    /// Creates a new [WordSpan] with the given values for the beginning coordinate, the length, and the direction of the word.
    pub fn new(begin: (usize, usize), len: usize, direction: WordDirection) -> Self {
        Self {
            begin,
            len,
            direction,
        }
    }

    /// The signed coordinate of the `i`th letter, which may lie outside the grid.
    pub fn cell(&self, i: usize) -> (isize, isize) {
        let (dx, dy) = self.direction.delta();
        let i = i as isize;

        (self.begin.0 as isize + dx * i, self.begin.1 as isize + dy * i)
    }

    /// Returns all `(x, y)` indices of the grid that the word spans across.
    ///
    /// Only meaningful for spans that are [in bounds](WordSpan::in_bounds).
    pub fn indices(&self) -> Vec<(usize, usize)> {
        (0..self.len)
            .map(|i| {
                let (x, y) = self.cell(i);
                (x as usize, y as usize)
            })
            .collect()
    }

    /// Whether the span covers the cell at `(x, y)`.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        (0..self.len).any(|i| self.cell(i) == (x as isize, y as isize))
    }

    /// Returns whether the word span is in bounds of the given grid dimensions.
    pub fn in_bounds(&self, num_rows: usize, num_columns: usize) -> bool {
        if self.len == 0 {
            return false;
        }

        let inside = |(x, y): (isize, isize)| {
            x >= 0 && y >= 0 && (x as usize) < num_columns && (y as usize) < num_rows
        };

        // A straight line is inside the grid iff both of its ends are
        inside(self.cell(0)) && inside(self.cell(self.len - 1))
    }

    /// The line of cells this span occupies, independent of reading order.
    pub(crate) fn window(&self) -> Window {
        let axis = self.direction.axis();

        let start = if self.direction == axis.forward() {
            self.begin
        } else {
            let (x, y) = self.cell(self.len.saturating_sub(1));
            (x as usize, y as usize)
        };

        Window::new(start, axis, self.len)
    }

    /// Whether both spans occupy exactly the same cells, whichever way they are read.
    pub fn same_cells(&self, other: &Self) -> bool {
        self.window() == other.window()
    }

    /// Whether every cell of `other` lies on this span, in the same line. A word found inside a longer placed word
    /// is covered by it.
    pub fn covers(&self, other: &Self) -> bool {
        self.window().covers(&other.window())
    }
}

impl Display for WordSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) {} x{}",
            self.begin.0, self.begin.1, self.direction, self.len
        )
    }
}

/// A run of `len` cells read along an axis from `start`. Two spans over the same cells share one window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Window {
    pub start: (usize, usize),
    pub axis: Axis,
    pub len: usize,
}

impl Window {
    pub fn new(start: (usize, usize), axis: Axis, len: usize) -> Self {
        // a single cell lies on every axis at once
        let axis = if len == 1 { Axis::Row } else { axis };

        Self { start, axis, len }
    }

    /// The window of `len` cells along `axis` in which `(x, y)` is the `offset`th cell, if it fits in the grid.
    pub fn through(
        (x, y): (usize, usize),
        axis: Axis,
        len: usize,
        offset: usize,
        num_rows: usize,
        num_columns: usize,
    ) -> Option<Self> {
        let (dx, dy) = axis.delta();
        let back = offset as isize;
        let ahead = (len - 1 - offset) as isize;

        let start = (x as isize - dx * back, y as isize - dy * back);
        let end = (x as isize + dx * ahead, y as isize + dy * ahead);

        let inside = |(cx, cy): (isize, isize)| {
            cx >= 0 && cy >= 0 && (cx as usize) < num_columns && (cy as usize) < num_rows
        };

        (inside(start) && inside(end))
            .then(|| Self::new((start.0 as usize, start.1 as usize), axis, len))
    }

    /// Where `cell` sits in the window, if it is part of it.
    pub fn position_of(&self, cell: (usize, usize)) -> Option<usize> {
        (0..self.len).find(|&i| self.cell(i) == cell)
    }

    /// Whether `other` is a run of cells inside this window.
    pub fn covers(&self, other: &Window) -> bool {
        if other.len == 1 {
            return self.position_of(other.start).is_some();
        }

        other.axis == self.axis
            && self
                .position_of(other.start)
                .is_some_and(|i| i + other.len <= self.len)
    }

    /// The `i`th cell of the window. The window must lie inside the grid.
    pub fn cell(&self, i: usize) -> (usize, usize) {
        let (dx, dy) = self.axis.delta();
        let i = i as isize;

        (
            (self.start.0 as isize + dx * i) as usize,
            (self.start.1 as isize + dy * i) as usize,
        )
    }
}
