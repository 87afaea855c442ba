#![warn(missing_docs)]

//! # Word searches
//!
//! A crate that generates word searches in which every word can be found exactly where it was placed, and nowhere
//! else.
//!
//! Words are placed one after another along randomly chosen directions, crossing only on shared letters. The rest of
//! the grid is filled with letters taken from the words themselves, each one checked so it doesn't complete an
//! accidental copy of any word along a row, column or diagonal, forwards or backwards.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let words = vec![String::from("crab"), String::from("rust")];
//! let puzzle = word_search::generate(&words, 8, &mut StdRng::seed_from_u64(1));
//!
//! if let Ok(puzzle) = puzzle {
//!     assert_eq!(puzzle.find("crab").len(), 1);
//! }
//! ```

mod check;
mod config;
mod direction;
mod error;
mod generator;
mod grid;
mod puzzle;
pub mod render;
mod span;

use rand::Rng;

pub use check::{Collision, CollisionChecker};
pub use config::{PlacementStrategy, WordSearchConfig, DEFAULT_ATTEMPTS};
pub use direction::{Axis, DirectionSampler, DirectionWeights, WordDirection};
pub use error::{Error, InvalidInput};
pub use generator::alphabet;
pub use grid::Grid;
pub use puzzle::WordSearch;
pub use render::{Render, TextRenderer};
pub use span::WordSpan;

/// Generates a `size` x `size` word search containing `words`, using the default options and drawing every random
/// choice from `rng`.
pub fn generate<R: Rng + ?Sized>(
    words: &[String],
    size: usize,
    rng: &mut R,
) -> Result<WordSearch, Error> {
    WordSearch::with_rng(&WordSearchConfig::new(words, size), rng)
}
