// Command Parser Components
//
// This module contains the separate components of the command parser.
// Each component handles one family of statements.

pub mod parser_core;
pub mod parser_ddl;
pub mod parser_dml;
pub mod parser_select;

// Re-export frequently used items
pub use parser_core::{ParseError, ParseResult, Parser};
pub use parser_ddl::{parse_alter, parse_alter_action, parse_column_list, parse_create, parse_drop, parse_table_spec, parse_use};
pub use parser_dml::{parse_insert, parse_value_list};
pub use parser_select::{parse_predicate, parse_projection, parse_select};
