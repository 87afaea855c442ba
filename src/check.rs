use log::debug;

use crate::{
    direction::Axis,
    grid::Grid,
    span::{Window, WordSpan},
};

/// Decides whether a letter may go into a cell without spelling one of the words somewhere it wasn't placed.
#[derive(Clone, Debug)]
pub struct CollisionChecker {
    words: Vec<Vec<char>>,
}

/// A line of the grid that a letter would turn into an unintended copy of a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Collision {
    /// Index of the word in the checker's word list.
    pub word: usize,

    /// Where the accidental copy would be, read in the direction that spells the word.
    pub span: WordSpan,
}

impl CollisionChecker {
    /// Creates a checker guarding against every word in `words`.
    pub fn new<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            words: words
                .iter()
                .map(|word| word.as_ref().chars().collect())
                .collect(),
        }
    }

    /// Whether `candidate` can go at `(x, y)`.
    ///
    /// A filled cell accepts only the letter it already holds, which is what lets words cross. An empty cell accepts
    /// `candidate` unless some straight line through it, with every other cell already filled, would then read one
    /// of the words forwards or backwards.
    pub fn check(&self, grid: &Grid, x: usize, y: usize, candidate: char) -> bool {
        match grid.get(x, y) {
            Some(existing) => existing == candidate,
            None => self.find_collision(grid, (x, y), candidate, &[]).is_none(),
        }
    }

    /// Looks for a line through `at` that would spell a word once `letter` is there. Lines lying along one of the
    /// `placed` words are intentional and never reported, including a shorter word read inside a placed one.
    pub fn find_collision(
        &self,
        grid: &Grid,
        at: (usize, usize),
        letter: char,
        placed: &[WordSpan],
    ) -> Option<Collision> {
        for (index, word) in self.words.iter().enumerate() {
            for axis in Axis::ALL {
                // one letter words would only find the same cell four times
                if word.len() == 1 && axis != Axis::Row {
                    continue;
                }

                for offset in 0..word.len() {
                    let Some(window) = Window::through(
                        at,
                        axis,
                        word.len(),
                        offset,
                        grid.num_rows(),
                        grid.num_columns(),
                    ) else {
                        continue;
                    };

                    if placed.iter().any(|span| span.window().covers(&window)) {
                        continue;
                    }

                    if let Some(reversed) = spells(grid, &window, at, letter, word) {
                        let span = if reversed {
                            let (x, y) = window.cell(window.len - 1);
                            WordSpan::new((x, y), window.len, axis.forward().reversed())
                        } else {
                            WordSpan::new(window.start, window.len, axis.forward())
                        };

                        debug!(
                            "{letter:?} at ({}, {}) would spell {:?} along the {axis} at {span}",
                            at.0,
                            at.1,
                            word.iter().collect::<String>(),
                        );

                        return Some(Collision { word: index, span });
                    }
                }
            }
        }

        None
    }
}

/// Whether the window, with `letter` at `at`, reads `word`. Returns `Some(true)` when it only reads `word` backwards,
/// and [`None`] when it doesn't spell it at all or still has an empty cell.
fn spells(
    grid: &Grid,
    window: &Window,
    at: (usize, usize),
    letter: char,
    word: &[char],
) -> Option<bool> {
    let len = word.len();
    let mut forward = true;
    let mut backward = true;

    for i in 0..len {
        let cell = window.cell(i);
        let ch = if cell == at {
            letter
        } else {
            grid.get(cell.0, cell.1)?
        };

        forward &= ch == word[i];
        backward &= ch == word[len - 1 - i];

        if !forward && !backward {
            return None;
        }
    }

    Some(!forward)
}

#[cfg(test)]
mod tests {
    use crate::direction::WordDirection;

    use super::*;

    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows.len(), rows[0].chars().count());

        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch != '.' {
                    grid.place(x, y, ch);
                }
            }
        }

        grid
    }

    #[test]
    fn filled_cell_accepts_only_its_letter() {
        let checker = CollisionChecker::new(&["CAT"]);
        let grid = grid_from(&["C..", "...", "..."]);

        assert!(checker.check(&grid, 0, 0, 'C'));
        assert!(!checker.check(&grid, 0, 0, 'T'));
    }

    #[test]
    fn rejects_row_match_both_ways() {
        let checker = CollisionChecker::new(&["CAT"]);

        let grid = grid_from(&["CA.", "...", "..."]);
        assert!(!checker.check(&grid, 2, 0, 'T'));
        assert!(checker.check(&grid, 2, 0, 'C'));

        let grid = grid_from(&["TA.", "...", "..."]);
        assert!(!checker.check(&grid, 2, 0, 'C'));
        assert!(checker.check(&grid, 2, 0, 'T'));
    }

    #[test]
    fn rejects_match_in_the_middle_of_a_line() {
        let checker = CollisionChecker::new(&["CAT"]);
        let grid = grid_from(&["...", "C.T", "..."]);

        assert!(!checker.check(&grid, 1, 1, 'A'));
    }

    #[test]
    fn rejects_columns_and_both_diagonals() {
        let checker = CollisionChecker::new(&["CAT"]);

        let column = grid_from(&["..T", "..A", "..."]);
        assert!(!checker.check(&column, 2, 2, 'C'));

        let descending = grid_from(&["C..", ".A.", "..."]);
        assert!(!checker.check(&descending, 2, 2, 'T'));

        // reading up the ascending diagonal from the lower left
        let ascending = grid_from(&["..T", ".A.", "..."]);
        assert!(!checker.check(&ascending, 0, 2, 'C'));

        // and the cell that completes it can be the top right one
        let ascending = grid_from(&["...", ".A.", "T.."]);
        assert!(!checker.check(&ascending, 2, 0, 'C'));
    }

    #[test]
    fn lines_with_empty_cells_are_ignored() {
        let checker = CollisionChecker::new(&["CAT"]);
        let grid = grid_from(&["C..", "...", "..."]);

        assert!(checker.check(&grid, 2, 0, 'T'));
    }

    #[test]
    fn checks_every_word() {
        let checker = CollisionChecker::new(&["CAT", "DOG"]);
        let grid = grid_from(&["DO..", "....", "....", "...."]);

        assert!(!checker.check(&grid, 2, 0, 'G'));
        assert!(checker.check(&grid, 2, 0, 'T'));
    }

    #[test]
    fn placed_lines_are_allowed() {
        let checker = CollisionChecker::new(&["CAT"]);
        let grid = grid_from(&["CAT", "...", "..."]);
        let placed = [WordSpan::new((0, 0), 3, WordDirection::Right)];

        assert!(checker.find_collision(&grid, (2, 0), 'T', &placed).is_none());

        let collision = checker.find_collision(&grid, (2, 0), 'T', &[]).unwrap();
        assert_eq!(collision.word, 0);
        assert_eq!(collision.span, placed[0]);
    }

    #[test]
    fn words_inside_placed_words_are_allowed() {
        let checker = CollisionChecker::new(&["CAT", "AT"]);
        let grid = grid_from(&["CAT", "...", "..."]);
        let placed = [WordSpan::new((0, 0), 3, WordDirection::Right)];

        assert!(checker.find_collision(&grid, (2, 0), 'T', &placed).is_none());
        assert!(checker.find_collision(&grid, (1, 0), 'A', &placed).is_none());
    }

    #[test]
    fn reports_reversed_span() {
        let checker = CollisionChecker::new(&["CAT"]);
        let grid = grid_from(&["...", "...", "TAC"]);

        let collision = checker.find_collision(&grid, (0, 2), 'T', &[]).unwrap();
        assert_eq!(
            collision.span,
            WordSpan::new((2, 2), 3, WordDirection::Left)
        );
    }

    #[test]
    fn single_letter_words() {
        let checker = CollisionChecker::new(&["Q"]);
        let grid = Grid::new(2, 2);

        assert!(!checker.check(&grid, 1, 1, 'Q'));
        assert!(checker.check(&grid, 1, 1, 'R'));
    }
}
