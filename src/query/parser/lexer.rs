// Tokenizer Implementation
//
// This module splits command text into trimmed tokens over a delimiter set.
// The sequence is lazy, finite and restartable: a `Tokens` value can be
// cloned or rewound and walked again without touching the input.

use crate::common::types::STATEMENT_DELIMITER;

/// Characters separating words in a command
pub const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r'];

/// Characters separating items in a column or value list
pub const LIST_DELIMITERS: &[char] = &[STATEMENT_DELIMITER];

/// A token borrowed from the input, with its byte offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token text with surrounding whitespace removed
    pub text: &'a str,
    /// Byte offset of `text` within the input
    pub offset: usize,
}

impl<'a> Token<'a> {
    /// Byte offset just past the end of the token
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Iterator over the tokens of a string
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    input: &'a str,
    delimiters: &'a [char],
    skip_empty: bool,
    position: usize,
    finished: bool,
}

impl<'a> Tokens<'a> {
    /// Create a tokenizer over `input` splitting on any of `delimiters`.
    ///
    /// Input made only of whitespace yields no tokens at all.
    pub fn new(input: &'a str, delimiters: &'a [char]) -> Self {
        Tokens {
            input,
            delimiters,
            skip_empty: false,
            position: 0,
            finished: input.trim().is_empty(),
        }
    }

    /// Choose whether empty tokens between adjacent delimiters are dropped
    pub fn skip_empty(mut self, skip: bool) -> Self {
        self.skip_empty = skip;
        self
    }

    /// Rewind to the start of the input
    pub fn restart(&mut self) {
        self.position = 0;
        self.finished = self.input.trim().is_empty();
    }

    /// Text not yet consumed, untrimmed
    pub fn remainder(&self) -> &'a str {
        if self.finished {
            ""
        } else {
            &self.input[self.position..]
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        while !self.finished {
            let start = self.position;
            let rest = &self.input[start..];

            let raw = match rest.char_indices().find(|(_, c)| self.delimiters.contains(c)) {
                Some((idx, delim)) => {
                    self.position = start + idx + delim.len_utf8();
                    &rest[..idx]
                }
                None => {
                    self.position = self.input.len();
                    self.finished = true;
                    rest
                }
            };

            let text = raw.trim();
            if text.is_empty() && self.skip_empty {
                continue;
            }
            let leading = raw.len() - raw.trim_start().len();
            return Some(Token {
                text,
                offset: start + leading,
            });
        }
        None
    }
}

/// Whitespace-separated words; runs of whitespace never produce empty words
pub fn split_words(input: &str) -> Tokens<'_> {
    Tokens::new(input, WHITESPACE).skip_empty(true)
}

/// Comma-separated items, each trimmed; empty items are kept
pub fn split_list(input: &str) -> Tokens<'_> {
    Tokens::new(input, LIST_DELIMITERS)
}

/// Split off the first word, returning it and the trimmed text after it
pub fn split_first_word(input: &str) -> Option<(&str, &str)> {
    let word = split_words(input).next()?;
    Some((word.text, input[word.end()..].trim()))
}

/// Find a whitespace-delimited keyword, ignoring ASCII case
pub fn find_keyword<'a>(input: &'a str, keyword: &str) -> Option<Token<'a>> {
    split_words(input).find(|token| token.text.eq_ignore_ascii_case(keyword))
}
