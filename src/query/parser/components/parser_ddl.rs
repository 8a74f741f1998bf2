// DDL Statement Parser Implementation
//
// This module implements parsing for the data definition commands:
// CREATE, DROP, USE and ALTER, plus the column-list grammar they share.

use log::debug;

use crate::catalog::Column;
use crate::common::types::FIELD_DELIMITER;
use crate::query::parser::ast::*;
use crate::query::parser::lexer::{split_first_word, split_list, split_words};
use super::parser_core::{expect_single_word, ParseError, ParseResult, Parser};

/// Parse a CREATE statement (the CREATE keyword is already consumed)
pub fn parse_create(parser: &mut Parser) -> ParseResult<Statement> {
    match parser.next_word().map(str::to_ascii_uppercase).as_deref() {
        Some("DATABASE") => Ok(Statement::CreateDatabase(parser.parse_single_name("database name")?)),
        Some("TABLE") => parse_create_table(parser),
        Some(other) => Err(ParseError::ExpectedKeyword("DATABASE or TABLE", other.to_string())),
        None => Err(ParseError::MissingPart("DATABASE or TABLE")),
    }
}

/// Parse `CREATE TABLE name (col type, ...)`; the name may touch the parenthesis
fn parse_create_table(parser: &mut Parser) -> ParseResult<Statement> {
    let rest = parser.take_rest();
    let open = rest
        .find('(')
        .ok_or_else(|| ParseError::InvalidSyntax("CREATE TABLE needs a parenthesised column list".to_string()))?;

    let table_name = expect_single_word(&rest[..open], "table name")?;
    Ok(Statement::CreateTable(CreateTableStatement {
        table_name,
        column_spec: rest[open..].to_string(),
    }))
}

/// Parse a DROP statement (the DROP keyword is already consumed)
pub fn parse_drop(parser: &mut Parser) -> ParseResult<Statement> {
    match parser.next_word().map(str::to_ascii_uppercase).as_deref() {
        Some("DATABASE") => Ok(Statement::DropDatabase(parser.parse_single_name("database name")?)),
        Some("TABLE") => Ok(Statement::DropTable(parser.parse_single_name("table name")?)),
        Some(other) => Err(ParseError::ExpectedKeyword("DATABASE or TABLE", other.to_string())),
        None => Err(ParseError::MissingPart("DATABASE or TABLE")),
    }
}

/// Parse `USE name` (the USE keyword is already consumed)
pub fn parse_use(parser: &mut Parser) -> ParseResult<Statement> {
    Ok(Statement::UseDatabase(parser.parse_single_name("database name")?))
}

/// Parse `ALTER TABLE name <verb> ...` (the ALTER keyword is already consumed)
pub fn parse_alter(parser: &mut Parser) -> ParseResult<Statement> {
    parser.expect_keyword("TABLE")?;
    let table_name = parser
        .next_word()
        .ok_or(ParseError::MissingPart("table name"))?
        .to_string();

    let alteration = parser.take_rest();
    if alteration.is_empty() {
        return Err(ParseError::MissingPart("alter action"));
    }

    Ok(Statement::AlterTable(AlterTableStatement {
        table_name,
        alteration: alteration.to_string(),
    }))
}

/// Parse the column spec of a CREATE TABLE.
///
/// Everything up to the first `(` and from the last `)` is discarded before
/// the list inside is parsed.
pub fn parse_table_spec(spec: &str) -> ParseResult<Vec<Column>> {
    let open = spec.find('(');
    let close = spec.rfind(')');
    match (open, close) {
        (Some(open), Some(close)) if open < close => parse_column_list(&spec[open + 1..close]),
        _ => Err(ParseError::InvalidSyntax(format!("column list '{}' is not parenthesised", spec.trim()))),
    }
}

/// Parse `name type, name type, ..., name type`.
///
/// Every definition but the last takes its first two words as name and type.
/// The last definition's type is all of its remaining text, so only the final
/// column may declare a type containing spaces.
pub fn parse_column_list(list: &str) -> ParseResult<Vec<Column>> {
    let definitions: Vec<&str> = split_list(list).map(|token| token.text).collect();
    let Some((last, leading)) = definitions.split_last() else {
        return Err(ParseError::MissingPart("column definitions"));
    };

    let mut columns = Vec::with_capacity(definitions.len());
    for definition in leading {
        let mut words = split_words(definition);
        match (words.next(), words.next()) {
            (Some(name), Some(data_type)) => {
                if words.next().is_some() {
                    debug!("Ignoring trailing words in column definition '{}'", definition);
                }
                columns.push(Column::new(name.text, data_type.text));
            }
            _ => return Err(incomplete_definition(definition)),
        }
    }

    match split_first_word(last) {
        Some((name, data_type)) if !data_type.is_empty() => columns.push(Column::new(name, data_type)),
        _ => return Err(incomplete_definition(last)),
    }

    // The schema line is TAB-delimited, so neither part may carry a TAB or a line break
    let corrupting = |text: &str| text.contains(FIELD_DELIMITER) || text.contains(['\n', '\r']);
    if let Some(bad) = columns.iter().find(|c| corrupting(c.name()) || corrupting(c.data_type())) {
        return Err(ParseError::InvalidLiteral(bad.to_string()));
    }

    Ok(columns)
}

/// Parse the tail of an ALTER TABLE statement
pub fn parse_alter_action(alteration: &str) -> ParseResult<AlterAction> {
    let (verb, rest) = split_first_word(alteration).ok_or(ParseError::MissingPart("alter action"))?;
    if verb.eq_ignore_ascii_case("ADD") {
        let rest = rest.trim();
        // A parenthesised list is accepted as well as a bare one
        let list = rest
            .strip_prefix('(')
            .and_then(|inner| inner.strip_suffix(')'))
            .unwrap_or(rest);
        Ok(AlterAction::Add(parse_column_list(list)?))
    } else {
        Ok(AlterAction::Unsupported(verb.to_string()))
    }
}

fn incomplete_definition(definition: &str) -> ParseError {
    ParseError::InvalidSyntax(format!("column definition '{}' needs a name and a type", definition))
}
