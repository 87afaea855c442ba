//! Turning a finished [`WordSearch`] into something people can look at.
//!
//! Anything heavier than text, like drawing the grid into an image with a font, belongs in its own [`Render`]
//! implementation outside this crate, so that generating a word search never touches the file system or network.

use std::convert::Infallible;

use crate::WordSearch;

/// Produces a visual form of a word search.
pub trait Render {
    /// What the renderer produces, e.g. a [`String`] or encoded image bytes.
    type Output;

    /// Why rendering can fail.
    type Error: std::error::Error;

    /// Renders the word search.
    fn render(&self, word_search: &WordSearch) -> Result<Self::Output, Self::Error>;
}

/// Renders the grid as plain text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextRenderer {
    /// Put between the letters of a row.
    pub separator: String,

    /// Whether to list the words to find on the right of the grid, one per row.
    pub show_words: bool,

    /// Replace every letter that isn't part of a placed word with this character, producing an answer key.
    pub solution: Option<char>,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            separator: String::from(" "),
            show_words: false,
            solution: None,
        }
    }
}

impl TextRenderer {
    /// An answer key that blanks out every filler letter with `blank`.
    pub fn solution(blank: char) -> Self {
        Self {
            solution: Some(blank),
            ..Self::default()
        }
    }
}

impl Render for TextRenderer {
    type Output = String;
    type Error = Infallible;

    fn render(&self, word_search: &WordSearch) -> Result<String, Infallible> {
        let mut words_iter = word_search.word_spans().iter().map(|(word, _)| word);
        let mut lines = Vec::with_capacity(word_search.num_rows());

        for row in 0..word_search.num_rows() {
            let letters: Vec<String> = (0..word_search.num_columns())
                .map(|column| match self.solution {
                    Some(blank) if !word_search.is_part_of_word(column, row) => blank.to_string(),
                    _ => word_search[(column, row)].to_string(),
                })
                .collect();

            let mut line = letters.join(&self.separator);

            if self.show_words {
                if let Some(word) = words_iter.next() {
                    line.push_str(" | ");
                    line.push_str(word);
                }
            }

            lines.push(line);
        }

        // more words than rows go underneath
        if self.show_words {
            lines.extend(words_iter.cloned());
        }

        Ok(lines.join("\n"))
    }
}
