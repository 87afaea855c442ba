use thiserror::Error;

use crate::grid::Grid;

/// An error that happened when creating the word search.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The configuration can't describe a word search. Returned before anything is generated.
    #[error("invalid word search configuration: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// A word couldn't be placed anywhere in the grid within the attempt budget.
    #[error("couldn't place {word:?} in {attempts} attempts:\n{grid}")]
    PlacementExhausted {
        /// The word that didn't fit.
        word: String,
        /// How many candidate placements were tried.
        attempts: usize,
        /// The grid as it was when placement gave up.
        grid: Grid,
    },

    /// Every letter tried for an empty cell would have spelled one of the words by accident.
    #[error("couldn't fill cell ({x}, {y}) in {attempts} attempts:\n{grid}")]
    FillExhausted {
        /// Column of the cell.
        x: usize,
        /// Row of the cell.
        y: usize,
        /// How many letters were tried.
        attempts: usize,
        /// The grid as it was when filling gave up.
        grid: Grid,
    },
}

/// The reason a [`WordSearchConfig`](crate::WordSearchConfig) was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidInput {
    /// No words were given, so there is no alphabet to fill the grid with.
    #[error("no words were given")]
    NoWords,

    /// The word at `index` has no letters.
    #[error("word #{index} is empty")]
    EmptyWord {
        /// Position of the empty word in the word list.
        index: usize,
    },

    /// The grid has no cells.
    #[error("grid dimensions {num_rows} rows x {num_columns} columns leave no cells")]
    ZeroDimensions {
        /// The number of rows requested.
        num_rows: usize,
        /// The number of columns requested.
        num_columns: usize,
    },

    /// The word is longer than the grid in every direction.
    #[error("{word:?} doesn't fit in {num_rows} rows x {num_columns} columns")]
    WordTooLong {
        /// The offending word.
        word: String,
        /// The number of rows requested.
        num_rows: usize,
        /// The number of columns requested.
        num_columns: usize,
    },

    /// Every direction has a weight of zero.
    #[error("every word direction has zero weight")]
    NoDirections,

    /// Placement or fill was given no attempts at all.
    #[error("attempt budgets must be at least 1")]
    ZeroAttempts,
}
