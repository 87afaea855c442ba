use std::{fmt::Display, ops::Index};

use array2d::Array2D;
use rand::Rng;

use crate::{
    config::WordSearchConfig,
    direction::Axis,
    error::Error,
    generator::Generator,
    span::{Window, WordSpan},
};

/// A word search object that contains a grid of characters and a list of each word and their positions within the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordSearch {
    grid: Array2D<char>,
    word_spans: Vec<(String, WordSpan)>,
    alphabet: Vec<char>,
}

impl WordSearch {
    /// Creates and generates a new word search with the specified configuration, or returns an error if the word search can't be created.
    ///
    /// Words are placed in the order given, each along a direction drawn according to `config.direction_weights`.
    /// Every other cell is filled with one of the letters contained in the given words, picked so that no word can be
    /// found anywhere except where it was placed (or inside a longer word that was placed).
    ///
    /// Uses [`rand::thread_rng`]; see [`WordSearch::with_rng`] for reproducible puzzles.
    pub fn new(config: &WordSearchConfig<'_>) -> Result<Self, Error> {
        Self::with_rng(config, &mut rand::thread_rng())
    }

    /// Like [`WordSearch::new`], drawing every random choice from `rng`. The same seed and configuration always
    /// produce the same word search.
    pub fn with_rng<R: Rng + ?Sized>(
        config: &WordSearchConfig<'_>,
        rng: &mut R,
    ) -> Result<Self, Error> {
        Generator::new(config)?.run(rng)
    }

    pub(crate) fn from_parts(
        grid: Array2D<char>,
        word_spans: Vec<(String, WordSpan)>,
        alphabet: Vec<char>,
    ) -> Self {
        Self {
            grid,
            word_spans,
            alphabet,
        }
    }

    /// The number of rows in the word search grid.
    pub fn num_rows(&self) -> usize {
        self.grid.num_rows()
    }

    /// The number of columns in the word search grid.
    pub fn num_columns(&self) -> usize {
        self.grid.num_columns()
    }

    /// Provides a reference to the inner word search grid, indexed `(row, column)` as [`Array2D`] is.
    pub fn grid(&self) -> &Array2D<char> {
        &self.grid
    }

    /// Gets the character at `(x, y)`, returning [`Option::None`] if the coordinates are out of bounds.
    ///
    /// Like [`WordSpan`], `x` is the column and `y` the row, so the cells of [`WordSpan::indices`] can be looked up
    /// directly.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.grid.get(y, x).copied()
    }

    /// A list containing tuples, where the first element is a word that appears in the list, and the second element contains
    /// information about the word's location within the list.
    pub fn word_spans(&self) -> &[(String, WordSpan)] {
        &self.word_spans
    }

    /// The letters the grid was filled from, sorted.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Every place `word` can be read in the grid, forwards or backwards, in any of the eight directions.
    ///
    /// Each run of cells is reported once, in the direction that spells `word`.
    pub fn find(&self, word: &str) -> Vec<WordSpan> {
        let word: Vec<char> = word.chars().collect();
        let len = word.len();
        let mut found = Vec::new();

        if len == 0 {
            return found;
        }

        for axis in Axis::ALL {
            if len == 1 && axis != Axis::Row {
                continue;
            }

            for y in 0..self.num_rows() {
                for x in 0..self.num_columns() {
                    let Some(window) =
                        Window::through((x, y), axis, len, 0, self.num_rows(), self.num_columns())
                    else {
                        continue;
                    };

                    let letters: Vec<char> = (0..len)
                        .map(|i| {
                            let (cx, cy) = window.cell(i);
                            self.grid[(cy, cx)]
                        })
                        .collect();

                    if letters == word {
                        found.push(WordSpan::new(window.start, len, axis.forward()));
                    } else if letters.iter().rev().eq(word.iter()) {
                        found.push(WordSpan::new(
                            window.cell(len - 1),
                            len,
                            axis.forward().reversed(),
                        ));
                    }
                }
            }
        }

        found
    }

    /// Whether `(x, y)` belongs to any placed word.
    pub fn is_part_of_word(&self, x: usize, y: usize) -> bool {
        self.word_spans.iter().any(|(_, span)| span.contains(x, y))
    }

    /// The grid as text, with `separator` between letters and a line break after each row.
    pub fn to_text(&self, separator: &str) -> String {
        self.grid
            .rows_iter()
            .map(|row| row.map(char::to_string).collect::<Vec<_>>().join(separator))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Indexes by `(x, y)`, the same order as [`WordSearch::get`].
impl Index<(usize, usize)> for WordSearch {
    type Output = char;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.grid[(y, x)]
    }
}

impl Display for WordSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.to_text(" "))
    }
}
