use std::collections::BTreeSet;

use array2d::Array2D;
use log::{debug, info, trace};
use rand::Rng;

use crate::{
    check::CollisionChecker,
    config::{PlacementStrategy, WordSearchConfig},
    direction::DirectionSampler,
    error::{Error, InvalidInput},
    grid::Grid,
    puzzle::WordSearch,
    span::WordSpan,
};

/// Every distinct letter of the given words, sorted so the same words always give the same alphabet.
pub fn alphabet<S: AsRef<str>>(words: &[S]) -> Result<Vec<char>, InvalidInput> {
    if words.is_empty() {
        return Err(InvalidInput::NoWords);
    }

    let letters: BTreeSet<char> = words.iter().flat_map(|word| word.as_ref().chars()).collect();

    Ok(letters.into_iter().collect())
}

/// One generation run: owns the grid while words are placed and the rest is filled in.
pub(crate) struct Generator<'c, 'a> {
    config: &'c WordSearchConfig<'a>,
    words: Vec<Vec<char>>,
    alphabet: Vec<char>,
    checker: CollisionChecker,
    sampler: DirectionSampler,
    grid: Grid,
    placed: Vec<WordSpan>,
}

impl<'c, 'a> Generator<'c, 'a> {
    pub fn new(config: &'c WordSearchConfig<'a>) -> Result<Self, Error> {
        config.validate()?;

        Ok(Self {
            config,
            words: config
                .words
                .iter()
                .map(|word| word.chars().collect())
                .collect(),
            alphabet: alphabet(config.words)?,
            checker: CollisionChecker::new(config.words),
            sampler: config.direction_weights.sampler()?,
            grid: Grid::new(config.num_rows, config.num_columns),
            placed: Vec::with_capacity(config.words.len()),
        })
    }

    pub fn run<R: Rng + ?Sized>(mut self, rng: &mut R) -> Result<WordSearch, Error> {
        for index in 0..self.words.len() {
            let span = self.place_word(index, rng)?;
            trace!("placed {:?} at {span}", self.config.words[index]);
        }

        info!(
            "placed {} words, filling {} empty cells",
            self.placed.len(),
            self.grid.empty_cells()
        );

        let letters = self.fill(rng)?;
        let word_spans = self.config.words.iter().cloned().zip(self.placed).collect();

        Ok(WordSearch::from_parts(letters, word_spans, self.alphabet))
    }

    fn place_word<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        rng: &mut R,
    ) -> Result<WordSpan, Error> {
        let attempts = match self.config.strategy {
            PlacementStrategy::Random => {
                for _ in 0..self.config.placement_attempts {
                    let direction = self.sampler.sample(rng);
                    let begin = (
                        rng.gen_range(0..self.grid.num_columns()),
                        rng.gen_range(0..self.grid.num_rows()),
                    );

                    let span = WordSpan::new(begin, self.words[index].len(), direction);

                    if self.try_place(index, span) {
                        return Ok(span);
                    }
                }

                self.config.placement_attempts
            }
            PlacementStrategy::Exhaustive => {
                let candidates = self.candidates(index, rng);

                for &span in &candidates {
                    if self.try_place(index, span) {
                        return Ok(span);
                    }
                }

                candidates.len()
            }
        };

        Err(Error::PlacementExhausted {
            word: self.config.words[index].clone(),
            attempts,
            grid: self.grid.clone(),
        })
    }

    /// Every in-bounds placement of the word in an enabled direction, in a random order biased by the direction
    /// weights.
    fn candidates<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> Vec<WordSpan> {
        let len = self.words[index].len();
        let (num_rows, num_columns) = (self.grid.num_rows(), self.grid.num_columns());
        let weights = self.config.direction_weights;

        let mut keyed: Vec<(f64, WordSpan)> = Vec::new();

        for direction in weights.enabled() {
            for y in 0..num_rows {
                for x in 0..num_columns {
                    let span = WordSpan::new((x, y), len, direction);

                    if span.in_bounds(num_rows, num_columns) {
                        // exponential keys sorted ascending give a weighted random permutation
                        let key = -rng.gen::<f64>().ln() / f64::from(weights.get(direction));
                        keyed.push((key, span));
                    }
                }
            }
        }

        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        keyed.into_iter().map(|(_, span)| span).collect()
    }

    /// Writes the word along `span` if it fits, keeping it only when no line through its new letters spells a word
    /// by accident. A rejected word leaves the grid as it was.
    fn try_place(&mut self, index: usize, span: WordSpan) -> bool {
        if !span.in_bounds(self.grid.num_rows(), self.grid.num_columns()) {
            trace!("{span} runs off the grid");
            return false;
        }

        let mut written = Vec::with_capacity(span.len);

        for (&letter, (x, y)) in self.words[index].iter().zip(span.indices()) {
            let was_empty = self.grid.is_empty_at(x, y);

            if !self.grid.place(x, y, letter) {
                debug!(
                    "{:?} at {span} clashes with {:?} at ({x}, {y})",
                    self.config.words[index],
                    self.grid.get(x, y)
                );
                roll_back(&mut self.grid, &written);
                return false;
            }

            if was_empty {
                written.push((x, y));
            }
        }

        self.placed.push(span);

        let collision = written.iter().find_map(|&(x, y)| {
            let letter = self.grid.get(x, y)?;
            self.checker
                .find_collision(&self.grid, (x, y), letter, &self.placed)
        });

        if let Some(collision) = collision {
            debug!(
                "{:?} at {span} would also spell {:?} at {}",
                self.config.words[index], self.config.words[collision.word], collision.span
            );
            self.placed.pop();
            roll_back(&mut self.grid, &written);
            return false;
        }

        true
    }

    /// Fills every empty cell, in row-major order, with a letter that doesn't complete any word, and returns the
    /// finished letters.
    fn fill<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Array2D<char>, Error> {
        let attempts = self.config.fill_attempts;
        let mut letters = Array2D::filled_with(' ', self.grid.num_rows(), self.grid.num_columns());

        for y in 0..self.grid.num_rows() {
            for x in 0..self.grid.num_columns() {
                if let Some(letter) = self.grid.get(x, y) {
                    letters[(y, x)] = letter;
                    continue;
                }

                let letter = (0..attempts)
                    .map(|_| self.alphabet[rng.gen_range(0..self.alphabet.len())])
                    .find(|&letter| self.checker.check(&self.grid, x, y, letter));

                let Some(letter) = letter else {
                    return Err(Error::FillExhausted {
                        x,
                        y,
                        attempts,
                        grid: self.grid.clone(),
                    });
                };

                self.grid.place(x, y, letter);
                letters[(y, x)] = letter;
            }
        }

        Ok(letters)
    }
}

fn roll_back(grid: &mut Grid, written: &[(usize, usize)]) {
    for &(x, y) in written {
        grid.clear(x, y);
    }
}
