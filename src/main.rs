use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use env_logger::Env;
use log::error;
use rand::{rngs::StdRng, SeedableRng};
use word_search::{
    DirectionWeights, PlacementStrategy, Render, TextRenderer, WordSearch, WordSearchConfig,
    DEFAULT_ATTEMPTS,
};

#[derive(Parser)]
#[command(about = "Generate a word search in which every word appears exactly once")]
struct Opts {
    /// Words to hide in the grid
    words: Vec<String>,

    /// File with one word per line, added after any words given on the command line
    #[arg(long)]
    words_file: Option<PathBuf>,

    /// Side length of a square grid
    #[arg(long, default_value_t = 15)]
    size: usize,

    /// Number of rows, overriding --size
    #[arg(long)]
    rows: Option<usize>,

    /// Number of columns, overriding --size
    #[arg(long)]
    columns: Option<usize>,

    /// Seed to regenerate a puzzle
    #[arg(long)]
    seed: Option<u64>,

    /// Only place words reading left-to-right or top-to-bottom
    #[arg(long)]
    forward_only: bool,

    /// Try every position for each word instead of a limited number of random ones
    #[arg(long)]
    exhaustive: bool,

    /// Placements tried per word and letters tried per cell
    #[arg(long, default_value_t = DEFAULT_ATTEMPTS)]
    attempts: usize,

    /// Put between the letters of a row
    #[arg(long, default_value = " ")]
    separator: String,

    /// Also print an answer key
    #[arg(long)]
    solution: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let opts = Opts::parse();

    let mut words = opts.words;

    if let Some(path) = &opts.words_file {
        match fs::read_to_string(path) {
            Ok(contents) => words.extend(
                contents
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(String::from),
            ),
            Err(err) => {
                error!("couldn't read {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        }
    }

    let mut config = WordSearchConfig::new(&words, opts.size);
    config.num_rows = opts.rows.unwrap_or(opts.size);
    config.num_columns = opts.columns.unwrap_or(opts.size);
    config.placement_attempts = opts.attempts;
    config.fill_attempts = opts.attempts;

    if opts.forward_only {
        config.direction_weights = DirectionWeights::forward_only();
    }

    if opts.exhaustive {
        config.strategy = PlacementStrategy::Exhaustive;
    }

    let result = match opts.seed {
        Some(seed) => WordSearch::with_rng(&config, &mut StdRng::seed_from_u64(seed)),
        None => WordSearch::new(&config),
    };

    let word_search = match result {
        Ok(word_search) => word_search,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let renderer = TextRenderer {
        separator: opts.separator.clone(),
        show_words: true,
        solution: None,
    };

    let text = renderer.render(&word_search).unwrap_or_else(|never| match never {});
    println!("{text}");

    if opts.solution {
        let key = TextRenderer {
            separator: opts.separator,
            show_words: false,
            solution: Some('.'),
        };

        let text = key.render(&word_search).unwrap_or_else(|never| match never {});
        println!("\n{text}");
    }

    ExitCode::SUCCESS
}
