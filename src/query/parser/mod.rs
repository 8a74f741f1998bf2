// Command Parser Module
//
// This module turns one command line into a `Statement`, and parses the raw
// command tails (column lists, projections, predicates, values) that the
// executor receives.

pub mod ast;
pub mod components;
pub mod lexer;

// Export key types
pub use self::ast::Statement;
pub use self::components::{ParseError, ParseResult, Parser};
pub use self::lexer::{Token, Tokens};

/// Parse one command line into a statement
pub fn parse_statement(input: &str) -> ParseResult<Statement> {
    Parser::new(input).parse_statement()
}
