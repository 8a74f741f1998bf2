// Core Parser Implementation
//
// This module implements the statement parser entry point and the word
// cursor shared by the statement-specific parsers.

use std::fmt;

use crate::query::parser::ast::Statement;
use crate::query::parser::lexer::{split_first_word, split_words};
use super::{parse_alter, parse_create, parse_drop, parse_insert, parse_select, parse_use};

/// Command parsing errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownCommand(String),
    ExpectedKeyword(&'static str, String),
    MissingPart(&'static str),
    InvalidOperator(String),
    InvalidLiteral(String),
    InvalidSyntax(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownCommand(word) => write!(f, "Unknown command: {}", word),
            ParseError::ExpectedKeyword(expected, found) => write!(f, "Expected {}, found: {}", expected, found),
            ParseError::MissingPart(what) => write!(f, "Missing {}", what),
            ParseError::InvalidOperator(op) => write!(f, "Invalid operator: {}", op),
            ParseError::InvalidLiteral(lit) => write!(f, "Invalid literal: {}", lit),
            ParseError::InvalidSyntax(reason) => write!(f, "Invalid syntax: {}", reason),
        }
    }
}

impl std::error::Error for ParseError {}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Word cursor over one command line
pub struct Parser<'a> {
    rest: &'a str,
}

impl<'a> Parser<'a> {
    /// Create a parser over a command line; a trailing `;` is ignored
    pub fn new(input: &'a str) -> Self {
        let input = input.trim();
        let input = input.strip_suffix(';').unwrap_or(input).trim_end();
        Parser { rest: input }
    }

    /// Parse the whole line as one statement
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        if self.rest.eq_ignore_ascii_case(".exit") {
            self.rest = "";
            return Ok(Statement::Exit);
        }

        let command = self.next_word().ok_or(ParseError::MissingPart("command"))?;
        match command.to_ascii_uppercase().as_str() {
            "CREATE" => parse_create(self),
            "DROP" => parse_drop(self),
            "USE" => parse_use(self),
            "ALTER" => parse_alter(self),
            "SELECT" => parse_select(self),
            "INSERT" => parse_insert(self),
            _ => Err(ParseError::UnknownCommand(command.to_string())),
        }
    }

    /// Consume and return the next word
    pub fn next_word(&mut self) -> Option<&'a str> {
        let (word, rest) = split_first_word(self.rest)?;
        self.rest = rest;
        Some(word)
    }

    /// Consume the next word, which must equal `keyword` ignoring case
    pub fn expect_keyword(&mut self, keyword: &'static str) -> ParseResult<()> {
        match self.next_word() {
            Some(word) if word.eq_ignore_ascii_case(keyword) => Ok(()),
            Some(word) => Err(ParseError::ExpectedKeyword(keyword, word.to_string())),
            None => Err(ParseError::ExpectedKeyword(keyword, "end of input".to_string())),
        }
    }

    /// Consume the rest of the line as a single name
    pub fn parse_single_name(&mut self, what: &'static str) -> ParseResult<String> {
        let name = self.take_rest();
        expect_single_word(name, what)
    }

    /// Consume and return everything not yet parsed
    pub fn take_rest(&mut self) -> &'a str {
        std::mem::take(&mut self.rest)
    }

    /// Text not yet consumed
    pub fn rest(&self) -> &'a str {
        self.rest
    }
}

/// Check that `text` is exactly one word
pub(crate) fn expect_single_word(text: &str, what: &'static str) -> ParseResult<String> {
    let mut words = split_words(text);
    match (words.next(), words.next()) {
        (Some(word), None) => Ok(word.text.to_string()),
        (None, _) => Err(ParseError::MissingPart(what)),
        (Some(_), Some(_)) => Err(ParseError::InvalidSyntax(format!("{} '{}' must be a single word", what, text.trim()))),
    }
}
