// Query Execution Engine Implementation
//
// This module implements the engine that runs one parsed statement against a
// catalog and reports what happened.

use log::debug;

use crate::catalog::Catalog;
use crate::common::EngineConfig;
use crate::query::executor::ddl_executor::DdlExecutor;
use crate::query::executor::dml_executor::DmlExecutor;
use crate::query::executor::result::{Action, QueryError, QueryOutput, QueryResult};
use crate::query::executor::select::select;
use crate::query::parser::ast::{AlterTableStatement, CreateTableStatement, InsertStatement, SelectStatement, Statement};
use crate::query::parser::parse_statement;

pub struct ExecutionEngine {
    config: EngineConfig,
    ddl: DdlExecutor,
    dml: DmlExecutor,
}

impl ExecutionEngine {
    pub fn new(config: EngineConfig) -> Self {
        let ddl = DdlExecutor::new(config.null_sentinel.clone());
        ExecutionEngine {
            config,
            ddl,
            dml: DmlExecutor::new(),
        }
    }

    /// Get the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Open the catalog under the configured root directory
    pub fn open_catalog(&self) -> QueryResult<Catalog> {
        Catalog::open(&self.config.root_dir)
    }

    pub fn execute(&self, catalog: &mut Catalog, statement: Statement) -> QueryResult<QueryOutput> {
        match statement {
            Statement::CreateDatabase(name) => {
                catalog.create_database(&name)?;
                Ok(QueryOutput::Message(format!("Database {} created.", name)))
            }
            Statement::DropDatabase(name) => {
                catalog.drop_database(&name)?;
                Ok(QueryOutput::Message(format!("Database {} deleted.", name)))
            }
            Statement::UseDatabase(name) => {
                catalog.use_database(&name)?;
                Ok(QueryOutput::Message(format!("Using database {}.", name)))
            }
            Statement::CreateTable(create) => self.execute_create_table(catalog, create),
            Statement::DropTable(table_name) => self.execute_drop_table(catalog, &table_name),
            Statement::AlterTable(alter) => self.execute_alter_table(catalog, alter),
            Statement::Select(select) => self.execute_select(catalog, select),
            Statement::Insert(insert) => self.execute_insert(catalog, insert),
            Statement::Exit => Ok(QueryOutput::Exit),
        }
    }

    fn execute_create_table(&self, catalog: &mut Catalog, create: CreateTableStatement) -> QueryResult<QueryOutput> {
        let table = catalog.table_file(Action::Create, &create.table_name)?;
        let output = self.ddl.create_table(&table, &create.column_spec)?;
        catalog.register_table(&create.table_name);
        Ok(output)
    }

    fn execute_drop_table(&self, catalog: &mut Catalog, table_name: &str) -> QueryResult<QueryOutput> {
        let table = catalog.table_file(Action::Drop, table_name)?;
        let output = self.ddl.drop_table(&table)?;
        catalog.unregister_table(table_name);
        Ok(output)
    }

    fn execute_alter_table(&self, catalog: &mut Catalog, alter: AlterTableStatement) -> QueryResult<QueryOutput> {
        let table = catalog.table_file(Action::Alter, &alter.table_name)?;
        self.ddl.alter_table(&table, &alter.alteration)
    }

    fn execute_select(&self, catalog: &mut Catalog, stmt: SelectStatement) -> QueryResult<QueryOutput> {
        let table = catalog.table_file(Action::Query, &stmt.table_name)?;
        let result = select(&table, &stmt.projection, stmt.predicate.as_deref())?;
        Ok(QueryOutput::ResultSet(result))
    }

    fn execute_insert(&self, catalog: &mut Catalog, insert: InsertStatement) -> QueryResult<QueryOutput> {
        let table = catalog.table_file(Action::Insert, &insert.table_name)?;
        self.dml.insert_record(&table, &insert.values)
    }

    /// Parse and execute one command line
    pub fn execute_query(&self, catalog: &mut Catalog, query: &str) -> QueryResult<QueryOutput> {
        let statement = parse_statement(query).map_err(|e| QueryError::malformed(query, e))?;
        debug!("Executing {:?}", statement);
        self.execute(catalog, statement)
    }
}
