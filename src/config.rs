use crate::{direction::DirectionWeights, error::InvalidInput};

/// The default number of candidate placements tried per word, and of letters tried per empty cell.
pub const DEFAULT_ATTEMPTS: usize = 50;

/// How candidate placements for a word are chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlacementStrategy {
    /// Draw a weighted random direction and a uniform random origin for every attempt, up to
    /// [`WordSearchConfig::placement_attempts`] times. Out-of-bounds draws count as attempts.
    #[default]
    Random,

    /// Try every origin in every enabled direction, in a random order, until one fits. Slower on big grids, but finds
    /// a place for a word whenever one exists. The attempt budget is ignored.
    Exhaustive,
}

/// The configuration for the word search. See [`WordSearch::new`] for details.
///
/// [`WordSearch::new`]: crate::WordSearch::new
#[derive(Clone, Debug)]
pub struct WordSearchConfig<'a> {
    /// The number of rows.
    pub num_rows: usize,

    /// The number of columns.
    pub num_columns: usize,

    /// The list of words that will appear in the word search. Letters are case sensitive, and the empty cells are
    /// filled using only letters contained in these words.
    pub words: &'a [String],

    /// How likely each direction is to be picked when placing a word. Use [`DirectionWeights::forward_only`] to keep
    /// every word readable left-to-right or top-to-bottom.
    pub direction_weights: DirectionWeights,

    /// How many placements are tried for each word with [`PlacementStrategy::Random`].
    pub placement_attempts: usize,

    /// How many letters are tried for each empty cell.
    pub fill_attempts: usize,

    /// How candidate placements are chosen.
    pub strategy: PlacementStrategy,
}

impl<'a> WordSearchConfig<'a> {
    /// A square `size` x `size` word search with the default options.
    pub fn new(words: &'a [String], size: usize) -> Self {
        Self {
            num_rows: size,
            num_columns: size,
            words,
            direction_weights: DirectionWeights::default(),
            placement_attempts: DEFAULT_ATTEMPTS,
            fill_attempts: DEFAULT_ATTEMPTS,
            strategy: PlacementStrategy::default(),
        }
    }

    /// Checks that a word search can be generated from this configuration at all.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if self.words.is_empty() {
            return Err(InvalidInput::NoWords);
        }

        if self.num_rows == 0 || self.num_columns == 0 {
            return Err(InvalidInput::ZeroDimensions {
                num_rows: self.num_rows,
                num_columns: self.num_columns,
            });
        }

        if let Some(index) = self.words.iter().position(|word| word.is_empty()) {
            return Err(InvalidInput::EmptyWord { index });
        }

        // horizontal and vertical lines are the longest ones in the grid
        let longest_line = self.num_rows.max(self.num_columns);

        if let Some(word) = self
            .words
            .iter()
            .find(|word| word.chars().count() > longest_line)
        {
            return Err(InvalidInput::WordTooLong {
                word: word.clone(),
                num_rows: self.num_rows,
                num_columns: self.num_columns,
            });
        }

        if self.direction_weights.enabled().next().is_none() {
            return Err(InvalidInput::NoDirections);
        }

        if self.placement_attempts == 0 || self.fill_attempts == 0 {
            return Err(InvalidInput::ZeroAttempts);
        }

        Ok(())
    }
}
