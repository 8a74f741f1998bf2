// Select Evaluation
//
// This module builds and drives the operator pipeline for a SELECT:
// scan -> optional filter -> projection.

use log::debug;

use crate::catalog::{Column, Table};
use crate::query::executor::operators::{create_filter, create_full_projection, create_projection, create_table_scan, Operator};
use crate::query::executor::result::{Action, QueryError, QueryResult, QueryResultSet};
use crate::query::parser::ast::Projection;
use crate::query::parser::components::{parse_predicate, parse_projection};
use crate::storage::TableFile;

/// Evaluate `SELECT <projection> FROM table [WHERE <predicate>]`.
///
/// Column names resolve against the stored schema; when a name is declared
/// twice the later declaration wins. Comparisons use the raw stored text.
/// `*` prints every stored field of a record, even past the schema width.
pub fn select(table: &TableFile, projection: &str, predicate: Option<&str>) -> QueryResult<QueryResultSet> {
    let projection = parse_projection(projection).map_err(|e| QueryError::malformed(projection, e))?;
    let predicate = predicate
        .map(|spec| parse_predicate(spec).map_err(|e| QueryError::malformed(spec, e)))
        .transpose()?;

    let mut scan = create_table_scan(table.clone());
    scan.init()?;
    let schema = Table::from_stored(table.name(), scan.schema().map(<[Column]>::to_vec).unwrap_or_default());

    let resolve = |name: &str| {
        schema
            .resolve(name)
            .map_err(|e| QueryError::from_catalog(Action::Query, table.name(), e))
    };

    let indices = match &projection {
        Projection::Wildcard => None,
        Projection::Columns(names) => Some(names.iter().map(|name| resolve(name.as_str())).collect::<QueryResult<Vec<_>>>()?),
    };
    let header = match &indices {
        Some(indices) => indices.iter().map(|&idx| schema.columns()[idx].clone()).collect(),
        None => schema.columns().to_vec(),
    };

    let mut root: Box<dyn Operator> = scan;
    if let Some(predicate) = predicate {
        let column_index = resolve(predicate.column.as_str())?;
        debug!("Filtering {} on {} (column {})", table.name(), predicate, column_index);
        root = create_filter(root, predicate, column_index);
    }
    let mut root = match indices {
        Some(indices) => create_projection(root, indices),
        None => create_full_projection(root),
    };

    let mut result = QueryResultSet::new(header);
    root.init()?;
    while let Some(row) = root.next()? {
        result.add_row(row);
    }
    root.close()?;

    debug!("Select on {} returned {} rows", table.name(), result.row_count());
    Ok(result)
}
