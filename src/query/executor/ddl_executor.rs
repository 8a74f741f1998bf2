// Data Definition Language Executor
//
// This module handles execution of the table-level DDL statements: CREATE
// TABLE, ALTER TABLE and DROP TABLE against a single table file.

use log::{debug, info, warn};

use crate::catalog::Table;
use crate::query::executor::result::{Action, QueryError, QueryOutput, QueryResult};
use crate::query::parser::ast::AlterAction;
use crate::query::parser::components::{parse_alter_action, parse_table_spec};
use crate::storage::{TableContents, TableFile};

/// Handles execution of DDL operations
pub struct DdlExecutor {
    /// Value backfilled into existing records when columns are added
    null_sentinel: String,
}

impl DdlExecutor {
    pub fn new(null_sentinel: impl Into<String>) -> Self {
        DdlExecutor {
            null_sentinel: null_sentinel.into(),
        }
    }

    /// Create a table file holding only the schema line.
    ///
    /// The column list is parsed and checked for repeated names before the
    /// file is created, so a rejected statement leaves no file behind.
    pub fn create_table(&self, table: &TableFile, column_spec: &str) -> QueryResult<QueryOutput> {
        let columns = parse_table_spec(column_spec).map_err(|e| QueryError::malformed(column_spec, e))?;
        let schema = Table::new(table.name(), columns)
            .map_err(|e| QueryError::from_catalog(Action::Create, table.name(), e))?;

        table
            .create(schema.columns())
            .map_err(|e| QueryError::from_storage(Action::Create, table.name(), e))?;

        info!("Created table {} with {} columns", table.name(), schema.width());
        Ok(QueryOutput::Message(format!("Table {} created.", table.name())))
    }

    /// Apply an ALTER TABLE action.
    ///
    /// `ADD` appends the new columns to the schema and one null sentinel per
    /// new column to every record. Other verbs change nothing.
    pub fn alter_table(&self, table: &TableFile, alteration: &str) -> QueryResult<QueryOutput> {
        let action = parse_alter_action(alteration).map_err(|e| QueryError::malformed(alteration, e))?;

        let contents = table
            .read()
            .map_err(|e| QueryError::from_storage(Action::Alter, table.name(), e))?;

        let new_columns = match action {
            AlterAction::Add(columns) => columns,
            AlterAction::Unsupported(verb) => {
                warn!("ALTER TABLE {} {} is not supported; table left unchanged", table.name(), verb);
                return Ok(QueryOutput::Message(format!("Table {} modified.", table.name())));
            }
        };

        let added = new_columns.len();
        let mut schema = Table::from_stored(table.name(), contents.schema);
        schema
            .add_columns(new_columns)
            .map_err(|e| QueryError::from_catalog(Action::Alter, table.name(), e))?;

        let records = contents
            .records
            .into_iter()
            .map(|mut record| {
                record.extend(std::iter::repeat_n(self.null_sentinel.clone(), added));
                record
            })
            .collect::<Vec<_>>();
        debug!("Backfilling {} records of {} with {} new fields", records.len(), table.name(), added);

        let altered = TableContents {
            schema: schema.columns().to_vec(),
            records,
        };
        table
            .rewrite(&altered)
            .map_err(|e| QueryError::from_storage(Action::Alter, table.name(), e))?;

        info!("Added {} columns to table {}", added, table.name());
        Ok(QueryOutput::Message(format!("Table {} modified.", table.name())))
    }

    /// Remove the table file
    pub fn drop_table(&self, table: &TableFile) -> QueryResult<QueryOutput> {
        table
            .remove()
            .map_err(|e| QueryError::from_storage(Action::Drop, table.name(), e))?;

        info!("Dropped table {}", table.name());
        Ok(QueryOutput::Message(format!("Table {} deleted.", table.name())))
    }
}
