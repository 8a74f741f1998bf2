// Mutation Path Integration Tests

use anyhow::Result;

#[path = "../common/mod.rs"]
mod common;
use common::{create_test_db_in_use, read_file};

#[test]
fn test_insert_then_select_round_trip() -> Result<()> {
    let mut db = create_test_db_in_use()?;
    db.run("CREATE TABLE Tbl_1 (a1 int, a2 varchar(20), a3 float);");

    assert_eq!(
        db.run("INSERT INTO Tbl_1 VALUES (1,   'hello world',\t3.5);"),
        vec!["-- 1 new record inserted."]
    );
    assert_eq!(
        read_file(&db.table_path("db_1", "Tbl_1"))?,
        "a1 int\ta2 varchar(20)\ta3 float\n1\t'hello world'\t3.5\n"
    );
    assert_eq!(
        db.run("SELECT * FROM Tbl_1;"),
        vec!["-- a1 int|a2 varchar(20)|a3 float", "-- 1|hello world|3.5"]
    );
    Ok(())
}

#[test]
fn test_insert_does_not_check_value_count() -> Result<()> {
    let mut db = create_test_db_in_use()?;
    db.run("CREATE TABLE Tbl_1 (a int, b int);");

    db.run_all(&["INSERT INTO Tbl_1 VALUES (1);", "INSERT INTO Tbl_1 VALUES (2, 3, 4);"])?;
    assert_eq!(
        read_file(&db.table_path("db_1", "Tbl_1"))?,
        "a int\tb int\n1\n2\t3\t4\n"
    );

    // A short record prints empty fields and never satisfies a predicate on them
    assert_eq!(db.run("SELECT b, a FROM Tbl_1;"), vec!["-- b int|a int", "-- |1", "-- 3|2"]);
    assert_eq!(db.run("SELECT a FROM Tbl_1 WHERE b != 9;"), vec!["-- a int", "-- 2"]);
    Ok(())
}

#[test]
fn test_select_star_prints_whole_wide_record() -> Result<()> {
    let mut db = create_test_db_in_use()?;
    db.run_all(&["CREATE TABLE W (a int);", "INSERT INTO W VALUES (1, 'extra', 3);"])?;

    assert_eq!(read_file(&db.table_path("db_1", "W"))?, "a int\n1\t'extra'\t3\n");
    assert_eq!(db.run("SELECT * FROM W;"), vec!["-- a int", "-- 1|extra|3"]);

    // A named projection still picks only the declared column
    assert_eq!(db.run("SELECT a FROM W;"), vec!["-- a int", "-- 1"]);
    Ok(())
}

#[test]
fn test_insert_into_missing_table_creates_nothing() -> Result<()> {
    let mut db = create_test_db_in_use()?;

    assert_eq!(
        db.run("INSERT INTO Ghost VALUES (1);"),
        vec!["-- !Failed to insert into table Ghost because it does not exist."]
    );
    assert!(!db.table_path("db_1", "Ghost").exists());
    Ok(())
}

#[test]
fn test_insert_alter_select() -> Result<()> {
    let mut db = create_test_db_in_use()?;
    db.run_all(&[
        "CREATE TABLE Tbl_1 (a1 int);",
        "INSERT INTO Tbl_1 VALUES (1);",
        "ALTER TABLE Tbl_1 ADD a2 char(4);",
        "INSERT INTO Tbl_1 VALUES (2, 'two');",
    ])?;

    assert_eq!(
        db.run("SELECT a2 FROM Tbl_1;"),
        vec!["-- a2 char(4)", "-- NULL", "-- two"]
    );
    Ok(())
}
