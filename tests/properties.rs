//! Properties every generated word search must have, checked over many seeds.

use rand::{rngs::StdRng, SeedableRng};
use word_search::{
    DirectionWeights, Error, InvalidInput, PlacementStrategy, WordDirection, WordSearch,
    WordSearchConfig, WordSpan,
};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|word| word.to_string()).collect()
}

/// Every word appears where it was placed, and every other place it can be read lies along a placed word.
fn assert_no_accidental_words(puzzle: &WordSearch, words: &[String]) {
    let placed: Vec<WordSpan> = puzzle.word_spans().iter().map(|(_, span)| *span).collect();

    assert_eq!(placed.len(), words.len());

    for (word, span) in puzzle.word_spans() {
        let found = puzzle.find(word);

        assert!(
            found.iter().any(|f| f.same_cells(span)),
            "{word} isn't at {span} in\n{puzzle}"
        );

        for occurrence in found {
            assert!(
                placed.iter().any(|p| p.covers(&occurrence)),
                "{word} was found at {occurrence} by accident in\n{puzzle}"
            );
        }
    }
}

fn assert_uses_only_alphabet(puzzle: &WordSearch, words: &[String]) {
    for row in puzzle.grid().rows_iter() {
        for ch in row {
            assert!(puzzle.alphabet().contains(ch));
            assert!(words.iter().any(|word| word.contains(*ch)));
        }
    }
}

#[test]
fn generated_puzzles_hold_every_word_exactly_where_placed() {
    let words = words(&[
        "RUST", "CARGO", "BORROW", "TRAIT", "CRATE", "SLICE", "MACRO", "CLOSURE",
    ]);
    let config = WordSearchConfig::new(&words, 12);

    let mut generated = 0;

    for seed in 0..10 {
        match WordSearch::with_rng(&config, &mut StdRng::seed_from_u64(seed)) {
            Ok(puzzle) => {
                assert_eq!(puzzle.num_rows(), 12);
                assert_eq!(puzzle.num_columns(), 12);
                assert_no_accidental_words(&puzzle, &words);
                assert_uses_only_alphabet(&puzzle, &words);
                generated += 1;
            }
            Err(Error::PlacementExhausted { .. } | Error::FillExhausted { .. }) => {}
            Err(err) => panic!("unexpected error: {err}"),
        }
    }

    assert!(generated > 0);
}

#[test]
fn words_inside_other_words_are_not_accidents() {
    let words = words(&["CATALOG", "CAT", "LOG"]);
    let config = WordSearchConfig::new(&words, 9);

    for seed in 0..10 {
        if let Ok(puzzle) = WordSearch::with_rng(&config, &mut StdRng::seed_from_u64(seed)) {
            assert_no_accidental_words(&puzzle, &words);
        }
    }
}

#[test]
fn rectangular_grids() {
    let words = words(&["HORIZON", "SKY", "SEA"]);
    let mut config = WordSearchConfig::new(&words, 4);
    config.num_columns = 10;

    for seed in 0..10 {
        if let Ok(puzzle) = WordSearch::with_rng(&config, &mut StdRng::seed_from_u64(seed)) {
            assert_eq!(puzzle.num_rows(), 4);
            assert_eq!(puzzle.num_columns(), 10);
            assert_no_accidental_words(&puzzle, &words);

            // seven letters only fit along a row of a four row grid
            let horizon = puzzle.word_spans()[0].1;
            assert!(matches!(
                horizon.direction,
                WordDirection::Left | WordDirection::Right
            ));
        }
    }
}

#[test]
fn same_seed_same_outcome() {
    let words = words(&["ORBIT", "COMET", "STAR", "MOON"]);
    let config = WordSearchConfig::new(&words, 8);

    for seed in [0, 1, 99, 12345] {
        let first = WordSearch::with_rng(&config, &mut StdRng::seed_from_u64(seed));
        let second = WordSearch::with_rng(&config, &mut StdRng::seed_from_u64(seed));

        assert_eq!(first, second);
    }
}

#[test]
fn cat_in_the_first_row() {
    let words = words(&["CAT"]);
    let mut config = WordSearchConfig::new(&words, 3);
    config.direction_weights = DirectionWeights::only(WordDirection::Right);

    let puzzle = WordSearch::with_rng(&config, &mut StdRng::seed_from_u64(3)).unwrap();
    let span = puzzle.word_spans()[0].1;

    // going right, a three letter word can only start in the first column
    assert_eq!(span.begin.0, 0);
    assert_eq!(span.direction, WordDirection::Right);

    let row = span.begin.1;
    let letters: String = (0..3).map(|column| puzzle[(column, row)]).collect();
    assert_eq!(letters, "CAT");

    assert_eq!(puzzle.find("CAT"), vec![span]);
    assert_eq!(puzzle.find("TAC").len(), 1);
    assert_eq!(puzzle.alphabet(), &['A', 'C', 'T']);
}

#[test]
fn crossing_reversals_in_a_tiny_grid() {
    let words = words(&["AB", "BA"]);
    let config = WordSearchConfig::new(&words, 2);

    for seed in 0..20 {
        let result = WordSearch::with_rng(&config, &mut StdRng::seed_from_u64(seed));

        match &result {
            Ok(puzzle) => assert_no_accidental_words(puzzle, &words),
            Err(Error::PlacementExhausted { .. } | Error::FillExhausted { .. }) => {}
            Err(err) => panic!("unexpected error: {err}"),
        }

        assert_eq!(
            result,
            WordSearch::with_rng(&config, &mut StdRng::seed_from_u64(seed))
        );
    }
}

#[test]
fn exhaustive_placement_fills_a_full_row_and_column() {
    let words = words(&["ABCDEF", "AGHIJK"]);
    let mut config = WordSearchConfig::new(&words, 6);
    config.direction_weights = DirectionWeights::forward_only();
    config.strategy = PlacementStrategy::Exhaustive;

    for seed in 0..5 {
        match WordSearch::with_rng(&config, &mut StdRng::seed_from_u64(seed)) {
            Ok(puzzle) => assert_no_accidental_words(&puzzle, &words),
            Err(Error::FillExhausted { .. }) => {}
            Err(err) => panic!("exhaustive placement failed: {err}"),
        }
    }
}

#[test]
fn no_words() {
    let result = word_search::generate(&[], 5, &mut StdRng::seed_from_u64(0));

    assert!(matches!(
        result,
        Err(Error::InvalidInput(InvalidInput::NoWords))
    ));
}

#[test]
fn zero_size() {
    let words = words(&["A"]);
    let result = word_search::generate(&words, 0, &mut StdRng::seed_from_u64(0));

    assert!(matches!(
        result,
        Err(Error::InvalidInput(InvalidInput::ZeroDimensions { .. }))
    ));
}

#[test]
fn errors_carry_the_grid() {
    let words = words(&["AA"]);
    let mut config = WordSearchConfig::new(&words, 3);
    config.direction_weights = DirectionWeights::only(WordDirection::Down);

    let Err(Error::FillExhausted { x, y, grid, .. }) =
        WordSearch::with_rng(&config, &mut StdRng::seed_from_u64(0))
    else {
        panic!("a grid of only A's always repeats \"AA\"");
    };

    assert!(grid.is_empty_at(x, y));
    assert_eq!(grid.to_string().lines().count(), 3);
}
