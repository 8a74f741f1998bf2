// Catalog Integration Tests
//
// Database lifecycle and persistence of the directory layout across sessions.

use anyhow::Result;

use flatdb::{Catalog, EngineConfig, ExecutionEngine};

#[path = "../common/mod.rs"]
mod common;
use common::create_test_db;

#[test]
fn test_database_statements() -> Result<()> {
    let mut db = create_test_db()?;

    assert_eq!(db.run("CREATE DATABASE db_1;"), vec!["-- Database db_1 created."]);
    assert!(db.root().join("db_1").is_dir());
    assert_eq!(
        db.run("CREATE DATABASE db_1;"),
        vec!["-- !Failed to create database db_1 because it already exists."]
    );

    assert_eq!(db.run("USE db_1;"), vec!["-- Using database db_1."]);
    db.run("CREATE TABLE Tbl_1 (a int);");

    assert_eq!(db.run("DROP DATABASE db_1;"), vec!["-- Database db_1 deleted."]);
    assert!(!db.root().join("db_1").exists());
    assert_eq!(
        db.run("DROP DATABASE db_1;"),
        vec!["-- !Failed to drop database db_1 because it does not exist."]
    );
    assert_eq!(
        db.run("CREATE TABLE Tbl_2 (a int);"),
        vec!["-- !Failed to create table Tbl_2 because no database is in use."]
    );
    Ok(())
}

#[test]
fn test_catalog_reopens_existing_layout() -> Result<()> {
    let mut db = create_test_db()?;
    db.run_all(&[
        "CREATE DATABASE db_1;",
        "CREATE DATABASE db_2;",
        "USE db_2;",
        "CREATE TABLE Tbl_1 (a int);",
        "INSERT INTO Tbl_1 VALUES (42);",
        "ALTER TABLE Tbl_1 ADD b int;",
    ])?;

    let engine = ExecutionEngine::new(EngineConfig::with_root(db.root()));
    let mut catalog = Catalog::open(db.root())?;
    assert_eq!(catalog.database_names(), vec!["db_1", "db_2"]);
    assert!(catalog.current_database().is_none());

    catalog.use_database("db_2")?;
    assert_eq!(catalog.table_names(), vec!["Tbl_1"]);

    let output = engine.execute_query(&mut catalog, "SELECT * FROM Tbl_1")?;
    assert_eq!(output.to_lines(), vec!["-- a int|b int", "-- 42|NULL"]);
    Ok(())
}

#[test]
fn test_keywords_ignore_case_names_do_not() -> Result<()> {
    let mut db = create_test_db()?;
    db.run_all(&["create database Shop;", "use Shop;", "CrEaTe TaBlE Item (id int);"])?;

    assert_eq!(db.run("select * from Item;"), vec!["-- id int"]);
    assert!(!db.catalog.table_exists("item"));
    assert_eq!(
        db.run("use shop;"),
        vec!["-- !Failed to use database shop because it does not exist."]
    );
    Ok(())
}
