use std::fmt::Display;

use rand::{distributions::WeightedIndex, prelude::Distribution, Rng};

use crate::error::InvalidInput;

/// The direction a word is placed in inside the word search grid.
///
/// Coordinates are `(x, y)` with `x` the column and `y` the row, so "up" decreases `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordDirection {
    /// The word goes up from the start position.
    Up,

    /// The word goes down from the start position.
    Down,

    /// The word goes left from the start position.
    Left,

    /// The word goes right from the start position.
    Right,

    /// The word goes diagonally up and left from the start position.
    DiagonalUpLeft,

    /// The word goes diagonally up and right from the start position.
    DiagonalUpRight,

    /// The word goes diagonally down and left from the start position.
    DiagonalDownLeft,

    /// The word goes diagonally down and right from the start position.
    DiagonalDownRight,
}

impl WordDirection {
    /// Every direction, in the order used by [`DirectionWeights`].
    pub const ALL: [WordDirection; 8] = [
        WordDirection::Right,
        WordDirection::Down,
        WordDirection::DiagonalDownRight,
        WordDirection::DiagonalUpRight,
        WordDirection::Left,
        WordDirection::Up,
        WordDirection::DiagonalUpLeft,
        WordDirection::DiagonalDownLeft,
    ];

    /// The `(dx, dy)` step taken between consecutive letters.
    pub fn delta(self) -> (isize, isize) {
        use WordDirection::*;

        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
            DiagonalUpLeft => (-1, -1),
            DiagonalUpRight => (1, -1),
            DiagonalDownLeft => (-1, 1),
            DiagonalDownRight => (1, 1),
        }
    }

    /// The direction pointing the opposite way.
    pub fn reversed(self) -> Self {
        use WordDirection::*;

        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
            DiagonalUpLeft => DiagonalDownRight,
            DiagonalUpRight => DiagonalDownLeft,
            DiagonalDownLeft => DiagonalUpRight,
            DiagonalDownRight => DiagonalUpLeft,
        }
    }

    /// Whether the word reads right-to-left or down-to-up along this direction.
    pub fn is_backward(self) -> bool {
        use WordDirection::*;

        matches!(self, Up | Left | DiagonalUpLeft | DiagonalDownLeft)
    }

    /// The line family this direction travels along.
    pub fn axis(self) -> Axis {
        use WordDirection::*;

        match self {
            Left | Right => Axis::Row,
            Up | Down => Axis::Column,
            DiagonalUpLeft | DiagonalDownRight => Axis::Descending,
            DiagonalUpRight | DiagonalDownLeft => Axis::Ascending,
        }
    }
}

impl Display for WordDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use WordDirection::*;

        let name = match self {
            Up => "up",
            Down => "down",
            Left => "left",
            Right => "right",
            DiagonalUpLeft => "up-left",
            DiagonalUpRight => "up-right",
            DiagonalDownLeft => "down-left",
            DiagonalDownRight => "down-right",
        };

        f.write_str(name)
    }
}

/// One of the four families of straight lines in the grid. Each direction lies on exactly one axis,
/// read either along it or against it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right.
    Row,

    /// Top to bottom.
    Column,

    /// Upper left to lower right.
    Descending,

    /// Lower left to upper right.
    Ascending,
}

impl Axis {
    /// All four axes.
    pub const ALL: [Axis; 4] = [Axis::Row, Axis::Column, Axis::Descending, Axis::Ascending];

    /// The direction that reads along this axis.
    pub fn forward(self) -> WordDirection {
        match self {
            Axis::Row => WordDirection::Right,
            Axis::Column => WordDirection::Down,
            Axis::Descending => WordDirection::DiagonalDownRight,
            Axis::Ascending => WordDirection::DiagonalUpRight,
        }
    }

    /// The `(dx, dy)` step along this axis.
    pub fn delta(self) -> (isize, isize) {
        self.forward().delta()
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Axis::Row => "row",
            Axis::Column => "column",
            Axis::Descending => "descending diagonal",
            Axis::Ascending => "ascending diagonal",
        };

        f.write_str(name)
    }
}

/// Relative selection weights for each direction a word may be placed in.
///
/// A weight of zero disables a direction. The weights don't need to sum to anything in particular.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectionWeights {
    weights: [u32; 8],
}

impl DirectionWeights {
    /// Weights every direction equally.
    pub fn uniform() -> Self {
        Self { weights: [1; 8] }
    }

    /// The default weights with every backward-facing direction disabled.
    pub fn forward_only() -> Self {
        let mut weights = Self::default();

        for direction in WordDirection::ALL {
            if direction.is_backward() {
                weights.set(direction, 0);
            }
        }

        weights
    }

    /// Only the given direction is ever chosen.
    pub fn only(direction: WordDirection) -> Self {
        let mut weights = Self { weights: [0; 8] };
        weights.set(direction, 1);
        weights
    }

    /// The weight of `direction`.
    pub fn get(&self, direction: WordDirection) -> u32 {
        self.weights[Self::slot(direction)]
    }

    /// Changes the weight of `direction`.
    pub fn set(&mut self, direction: WordDirection, weight: u32) {
        self.weights[Self::slot(direction)] = weight;
    }

    /// Builder-style [`DirectionWeights::set`].
    pub fn with(mut self, direction: WordDirection, weight: u32) -> Self {
        self.set(direction, weight);
        self
    }

    /// The directions that can be chosen at all.
    pub fn enabled(&self) -> impl Iterator<Item = WordDirection> + '_ {
        WordDirection::ALL
            .into_iter()
            .filter(move |&direction| self.get(direction) > 0)
    }

    /// Builds a sampler over these weights, failing if every weight is zero.
    pub fn sampler(&self) -> Result<DirectionSampler, InvalidInput> {
        WeightedIndex::new(self.weights)
            .map(|index| DirectionSampler { index })
            .map_err(|_| InvalidInput::NoDirections)
    }

    // Index into `weights`, matching the order of `WordDirection::ALL`.
    fn slot(direction: WordDirection) -> usize {
        use WordDirection::*;

        match direction {
            Right => 0,
            Down => 1,
            DiagonalDownRight => 2,
            DiagonalUpRight => 3,
            Left => 4,
            Up => 5,
            DiagonalUpLeft => 6,
            DiagonalDownLeft => 7,
        }
    }
}

impl Default for DirectionWeights {
    fn default() -> Self {
        Self {
            weights: [100, 100, 75, 25, 10, 10, 5, 5],
        }
    }
}

/// Draws directions with replacement according to a set of [`DirectionWeights`].
#[derive(Clone, Debug)]
pub struct DirectionSampler {
    index: WeightedIndex<u32>,
}

impl DirectionSampler {
    /// Draws one direction.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> WordDirection {
        WordDirection::ALL[self.index.sample(rng)]
    }
}
