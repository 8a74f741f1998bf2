// SELECT Statement Parser Implementation
//
// This module implements parsing for SELECT statements, their projection
// list and their single-comparison WHERE clause.

use crate::common::types::WILDCARD;
use crate::query::parser::ast::*;
use crate::query::parser::lexer::{find_keyword, split_list, split_words};
use super::parser_core::{expect_single_word, ParseError, ParseResult, Parser};

/// Characters that may make up a comparison operator
const OPERATOR_CHARS: &[char] = &['=', '!', '<', '>'];

/// Parse `SELECT <projection> FROM table [WHERE <predicate>]`
/// (the SELECT keyword is already consumed)
pub fn parse_select(parser: &mut Parser) -> ParseResult<Statement> {
    let rest = parser.take_rest();
    let from = find_keyword(rest, "FROM").ok_or(ParseError::MissingPart("FROM clause"))?;

    let projection = rest[..from.offset].trim();
    if projection.is_empty() {
        return Err(ParseError::MissingPart("projection"));
    }

    let after_from = &rest[from.end()..];
    let (table_text, predicate) = match find_keyword(after_from, "WHERE") {
        Some(where_kw) => {
            let predicate = after_from[where_kw.end()..].trim();
            if predicate.is_empty() {
                return Err(ParseError::MissingPart("WHERE condition"));
            }
            (&after_from[..where_kw.offset], Some(predicate.to_string()))
        }
        None => (after_from, None),
    };

    Ok(Statement::Select(SelectStatement {
        table_name: expect_single_word(table_text, "table name")?,
        projection: projection.to_string(),
        predicate,
    }))
}

/// Parse `*` or a comma-separated list of column names
pub fn parse_projection(spec: &str) -> ParseResult<Projection> {
    let spec = spec.trim();
    if spec == WILDCARD {
        return Ok(Projection::Wildcard);
    }

    let columns = split_list(spec)
        .map(|token| expect_single_word(token.text, "projection column"))
        .collect::<ParseResult<Vec<String>>>()?;

    if columns.is_empty() {
        return Err(ParseError::MissingPart("projection"));
    }
    Ok(Projection::Columns(columns))
}

/// Parse `column operator literal`.
///
/// The operator may be written with or without surrounding spaces; the
/// literal is everything after it, kept verbatim including quotes.
pub fn parse_predicate(spec: &str) -> ParseResult<Predicate> {
    let spec = spec.trim();
    let op_start = spec
        .find(OPERATOR_CHARS)
        .ok_or_else(|| ParseError::InvalidSyntax(format!("no comparison operator in '{}'", spec)))?;
    let op_len = spec[op_start..]
        .find(|c: char| !OPERATOR_CHARS.contains(&c))
        .unwrap_or(spec.len() - op_start);

    let symbol = &spec[op_start..op_start + op_len];
    let op = ComparisonOp::from_symbol(symbol).ok_or_else(|| ParseError::InvalidOperator(symbol.to_string()))?;

    let column = expect_single_word(&spec[..op_start], "predicate column")?;
    let literal = spec[op_start + op_len..].trim();
    if literal.is_empty() {
        return Err(ParseError::MissingPart("predicate literal"));
    }
    if split_words(literal).count() > 1 && !is_quoted(literal) {
        return Err(ParseError::InvalidLiteral(literal.to_string()));
    }

    Ok(Predicate {
        column,
        op,
        literal: literal.to_string(),
    })
}

fn is_quoted(literal: &str) -> bool {
    literal.len() >= 2 && literal.starts_with('\'') && literal.ends_with('\'')
}
