#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

use flatdb::{Catalog, EngineConfig, ExecutionEngine};

/// An engine and catalog rooted in a fresh temporary directory
pub struct TestDb {
    pub dir: TempDir,
    pub engine: ExecutionEngine,
    pub catalog: Catalog,
}

impl TestDb {
    /// Database root inside the temporary directory
    pub fn root(&self) -> PathBuf {
        self.dir.path().join("DatabaseSystem")
    }

    /// Path of a table file in a database
    pub fn table_path(&self, database: &str, table: &str) -> PathBuf {
        self.root().join(database).join(table)
    }

    /// Run one statement and return its printed lines, errors included
    pub fn run(&mut self, query: &str) -> Vec<String> {
        match self.engine.execute_query(&mut self.catalog, query) {
            Ok(output) => output.to_lines(),
            Err(err) => err.to_lines(),
        }
    }

    /// Run several statements, failing on the first error
    pub fn run_all(&mut self, queries: &[&str]) -> Result<()> {
        for query in queries {
            self.engine.execute_query(&mut self.catalog, query)?;
        }
        Ok(())
    }
}

// Create an engine over an empty temporary root
pub fn create_test_db() -> Result<TestDb> {
    let dir = TempDir::new()?;
    let engine = ExecutionEngine::new(EngineConfig::with_root(dir.path().join("DatabaseSystem")));
    let catalog = engine.open_catalog()?;
    Ok(TestDb { dir, engine, catalog })
}

// Create an engine with database `db_1` created and in use
pub fn create_test_db_in_use() -> Result<TestDb> {
    let mut db = create_test_db()?;
    db.run_all(&["CREATE DATABASE db_1;", "USE db_1;"])?;
    Ok(db)
}

// Create the Product table used across the select tests
pub fn create_product_table(db: &mut TestDb) -> Result<()> {
    db.run_all(&[
        "create table Product (pid int, name varchar(20), price float);",
        "insert into Product values(1,\t'Gizmo',      19.99);",
        "insert into Product values(2,\t'PowerGizmo', 29.99);",
        "insert into Product values(3,\t'SingleTouch', 149.99);",
        "insert into Product values(4,\t'MultiTouch', 199.99);",
        "insert into Product values(5,\t'SuperGizmo', 49.99);",
    ])
}

// Read a table file
pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}
