// Statement Representation
//
// This module defines the parsed forms of the commands the engine accepts.
// Table statements keep their command tail as raw text; the executor parses
// that text with the component parsers when it runs the statement.

use std::cmp::Ordering;
use std::fmt;

use crate::catalog::Column;

/// Represents one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    CreateDatabase(String),
    DropDatabase(String),
    UseDatabase(String),
    CreateTable(CreateTableStatement),
    DropTable(String),
    AlterTable(AlterTableStatement),
    Select(SelectStatement),
    Insert(InsertStatement),
    /// `.EXIT`
    Exit,
}

/// CREATE TABLE statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTableStatement {
    pub table_name: String,
    /// Parenthesised column list, e.g. `(a1 int, a2 varchar(20))`
    pub column_spec: String,
}

/// ALTER TABLE statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterTableStatement {
    pub table_name: String,
    /// Verb and its arguments, e.g. `ADD a3 float`
    pub alteration: String,
}

/// SELECT statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStatement {
    pub table_name: String,
    /// `*` or a comma-separated column list
    pub projection: String,
    /// Text after WHERE, if any
    pub predicate: Option<String>,
}

/// INSERT statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertStatement {
    pub table_name: String,
    /// Comma-separated values from inside `VALUES(...)`
    pub values: String,
}

/// Parsed ALTER TABLE action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlterAction {
    /// Append columns at the end of the schema
    Add(Vec<Column>),
    /// Any other verb; accepted and ignored
    Unsupported(String),
}

/// Columns requested by a select
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// All columns (*)
    Wildcard,
    /// Named columns in output order
    Columns(Vec<String>),
}

impl Projection {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Projection::Wildcard)
    }
}

/// Single `column operator literal` filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub column: String,
    pub op: ComparisonOp,
    /// Literal exactly as written, quotes included
    pub literal: String,
}

impl Predicate {
    /// Test a stored field against the literal
    pub fn matches(&self, value: &str) -> bool {
        self.op.evaluate(value, &self.literal)
    }
}

/// Comparison operators. All comparisons are byte-wise string comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Equals,
    NotEquals,
    LessThan,
    LessEquals,
    GreaterThan,
    GreaterEquals,
}

impl ComparisonOp {
    /// Parse an operator symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "==" | "=" => Some(ComparisonOp::Equals),
            "!=" | "<>" => Some(ComparisonOp::NotEquals),
            "<" => Some(ComparisonOp::LessThan),
            "<=" => Some(ComparisonOp::LessEquals),
            ">" => Some(ComparisonOp::GreaterThan),
            ">=" => Some(ComparisonOp::GreaterEquals),
            _ => None,
        }
    }

    /// Canonical symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOp::Equals => "==",
            ComparisonOp::NotEquals => "!=",
            ComparisonOp::LessThan => "<",
            ComparisonOp::LessEquals => "<=",
            ComparisonOp::GreaterThan => ">",
            ComparisonOp::GreaterEquals => ">=",
        }
    }

    /// Compare `left` to `right` lexicographically, so "10" < "2"
    pub fn evaluate(&self, left: &str, right: &str) -> bool {
        let ordering = left.cmp(right);
        match self {
            ComparisonOp::Equals => ordering == Ordering::Equal,
            ComparisonOp::NotEquals => ordering != Ordering::Equal,
            ComparisonOp::LessThan => ordering == Ordering::Less,
            ComparisonOp::LessEquals => ordering != Ordering::Greater,
            ComparisonOp::GreaterThan => ordering == Ordering::Greater,
            ComparisonOp::GreaterEquals => ordering != Ordering::Less,
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.op, self.literal)
    }
}
