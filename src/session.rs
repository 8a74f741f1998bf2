// Session
//
// A session owns an execution engine and the catalog it runs against, and
// turns statement text into printable output lines.

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::catalog::Catalog;
use crate::common::EngineConfig;
use crate::query::executor::engine::ExecutionEngine;
use crate::query::executor::result::{QueryError, QueryOutput, QueryResult};
use crate::query::script::{ScriptError, Statements};

/// Engine, catalog and the session's exit state
pub struct Session {
    engine: ExecutionEngine,
    catalog: Catalog,
    finished: bool,
}

impl Session {
    /// Open a session on the configured root directory
    pub fn open(config: EngineConfig) -> QueryResult<Self> {
        let engine = ExecutionEngine::new(config);
        let catalog = engine.open_catalog()?;
        info!("Session opened on {}", catalog.root().display());
        Ok(Session {
            engine,
            catalog,
            finished: false,
        })
    }

    /// Get the catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Whether `.EXIT` has been executed
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Execute one statement and render its outcome as output lines
    pub fn execute(&mut self, statement: &str) -> Vec<String> {
        match self.engine.execute_query(&mut self.catalog, statement) {
            Ok(QueryOutput::Exit) => {
                debug!("Exit requested");
                self.finished = true;
                Vec::new()
            }
            Ok(output) => output.to_lines(),
            Err(err) => {
                debug!("Statement failed: {:?}", err);
                err.to_lines()
            }
        }
    }

    /// Execute every statement read from `input`, writing output lines to `out`,
    /// until the input ends or `.EXIT` is read
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), ScriptError> {
        for item in Statements::new(input) {
            let lines = match item {
                Ok(statement) => self.execute(&statement),
                Err(ScriptError::Unterminated(rest)) => unterminated(rest).to_lines(),
                Err(err) => return Err(err),
            };
            for line in lines {
                writeln!(out, "{}", line)?;
            }
            if self.finished {
                break;
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// Error reported for input that ended before its `;`
pub fn unterminated(rest: String) -> QueryError {
    QueryError::MalformedCommand {
        input: rest,
        reason: "missing ';'".to_string(),
    }
}
