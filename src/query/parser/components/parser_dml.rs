// DML Statement Parser Implementation
//
// This module implements parsing for INSERT statements and their value lists.

use crate::common::types::FIELD_DELIMITER;
use crate::query::parser::ast::*;
use crate::query::parser::lexer::split_list;
use super::parser_core::{ParseError, ParseResult, Parser};

/// Parse `INSERT INTO table VALUES(v1, v2, ...)` (the INSERT keyword is already consumed)
pub fn parse_insert(parser: &mut Parser) -> ParseResult<Statement> {
    parser.expect_keyword("INTO")?;
    let table_name = parser
        .next_word()
        .ok_or(ParseError::MissingPart("table name"))?
        .to_string();

    let rest = parser.take_rest();
    let rest = strip_keyword_prefix(rest, "VALUES")
        .ok_or_else(|| ParseError::ExpectedKeyword("VALUES", rest.to_string()))?
        .trim();

    let values = rest
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .ok_or_else(|| ParseError::InvalidSyntax(format!("value list '{}' is not parenthesised", rest)))?;

    Ok(Statement::Insert(InsertStatement {
        table_name,
        values: values.to_string(),
    }))
}

/// Split a comma-separated value list into trimmed values.
///
/// Values are opaque text; a value may not contain the field delimiter or a
/// line break since either would corrupt the stored record line.
pub fn parse_value_list(list: &str) -> ParseResult<Vec<String>> {
    let values: Vec<String> = split_list(list).map(|token| token.text.to_string()).collect();
    if values.is_empty() {
        return Err(ParseError::MissingPart("values"));
    }
    if let Some(bad) = values.iter().find(|v| v.contains(FIELD_DELIMITER) || v.contains(['\n', '\r'])) {
        return Err(ParseError::InvalidLiteral(bad.clone()));
    }
    Ok(values)
}

/// Strip a leading keyword, ignoring ASCII case; the keyword may touch what follows
fn strip_keyword_prefix<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let text = text.trim_start();
    let head = text.get(..keyword.len())?;
    if head.eq_ignore_ascii_case(keyword) {
        Some(&text[keyword.len()..])
    } else {
        None
    }
}
