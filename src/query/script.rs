// Statement Reader
//
// Groups input lines into complete statements. A statement may span several
// lines and ends at the first line whose last character is `;`. Blank lines
// and `--` comment lines are skipped, and `.EXIT` stands alone without a `;`.

use std::io::{self, BufRead};

use log::trace;
use thiserror::Error;

/// Starts a comment line
const COMMENT_PREFIX: &str = "--";

/// Ends a statement
const TERMINATOR: char = ';';

/// Errors raised while reading statements
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("IO error reading statements: {0}")]
    Io(#[from] io::Error),
    /// Input ended in the middle of a statement
    #[error("Unterminated statement: {0}")]
    Unterminated(String),
}

/// Accumulates lines until a statement is complete
#[derive(Debug, Default)]
pub struct StatementReader {
    pending: Vec<String>,
}

impl StatementReader {
    pub fn new() -> Self {
        StatementReader::default()
    }

    /// Feed one line; returns the statement it completes, without its `;`
    pub fn push_line(&mut self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            return None;
        }

        if self.pending.is_empty() && is_exit(line) {
            return Some(line.trim_end_matches(TERMINATOR).to_string());
        }

        match line.strip_suffix(TERMINATOR) {
            Some(last) => {
                self.pending.push(last.trim_end().to_string());
                let statement = self.pending.join(" ");
                self.pending.clear();
                trace!("Read statement '{}'", statement);
                Some(statement)
            }
            None => {
                self.pending.push(line.to_string());
                None
            }
        }
    }

    /// Whether a statement has been started but not terminated
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Take whatever unterminated text is left
    pub fn take_pending(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            return None;
        }
        let rest = self.pending.join(" ");
        self.pending.clear();
        Some(rest)
    }
}

/// Iterator of the statements in a line-oriented input
pub struct Statements<R> {
    lines: io::Lines<R>,
    reader: StatementReader,
    done: bool,
}

impl<R: BufRead> Statements<R> {
    pub fn new(input: R) -> Self {
        Statements {
            lines: input.lines(),
            reader: StatementReader::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for Statements<R> {
    type Item = Result<String, ScriptError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    if let Some(statement) = self.reader.push_line(&line) {
                        return Some(Ok(statement));
                    }
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
                None => {
                    self.done = true;
                    return self.reader.take_pending().map(|rest| Err(ScriptError::Unterminated(rest)));
                }
            }
        }
    }
}

/// `.EXIT`, ignoring case and an optional `;`
pub fn is_exit(line: &str) -> bool {
    line.trim().trim_end_matches(TERMINATOR).trim_end().eq_ignore_ascii_case(".exit")
}
