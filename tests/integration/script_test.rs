// Script Execution Integration Tests
//
// Whole scripts run through a session, as the CLI's `run` command does.

use std::io::Cursor;

use anyhow::Result;
use tempfile::TempDir;

use flatdb::{EngineConfig, Session};

fn run_script(root: &std::path::Path, script: &str) -> Result<String> {
    let mut session = Session::open(EngineConfig::with_root(root))?;
    let mut out = Vec::new();
    session.run(Cursor::new(script), &mut out)?;
    Ok(String::from_utf8(out)?)
}

const METADATA_SCRIPT: &str = "\
-- Metadata test script

CREATE DATABASE db_1;
CREATE DATABASE db_1;
CREATE DATABASE db_2;
DROP DATABASE db_2;
DROP DATABASE db_2;
CREATE DATABASE db_2;

USE db_1;
CREATE TABLE tbl_1 (a1 int, a2 varchar(20));
CREATE TABLE tbl_1 (a3 float, a4 char(20));
DROP TABLE tbl_1;
DROP TABLE tbl_1;
CREATE TABLE tbl_1 (a1 int, a2 varchar(20));
SELECT * FROM tbl_1;
ALTER TABLE tbl_1 ADD a3 float;
SELECT * FROM tbl_1;
CREATE TABLE tbl_2 (a3 float, a4 char(20));
SELECT * FROM tbl_2;
USE db_2;
SELECT * FROM tbl_1;
CREATE TABLE tbl_1 (a3 float, a4 char(20));
SELECT * FROM tbl_1;

.EXIT
";

#[test]
fn test_metadata_script() -> Result<()> {
    let dir = TempDir::new()?;
    let output = run_script(dir.path(), METADATA_SCRIPT)?;

    let expected = "\
-- Database db_1 created.
-- !Failed to create database db_1 because it already exists.
-- Database db_2 created.
-- Database db_2 deleted.
-- !Failed to drop database db_2 because it does not exist.
-- Database db_2 created.
-- Using database db_1.
-- Table tbl_1 created.
-- !Failed to create table tbl_1 because it already exists.
-- Table tbl_1 deleted.
-- !Failed to drop table tbl_1 because it does not exist.
-- Table tbl_1 created.
-- a1 int|a2 varchar(20)
-- Table tbl_1 modified.
-- a1 int|a2 varchar(20)|a3 float
-- Table tbl_2 created.
-- a3 float|a4 char(20)
-- Using database db_2.
-- !Failed to query table tbl_1 because it does not exist.
-- Table tbl_1 created.
-- a3 float|a4 char(20)
";
    assert_eq!(output, expected);
    Ok(())
}

const QUERY_SCRIPT: &str = "\
CREATE DATABASE CS457_PA2;
USE CS457_PA2;
create table Product (pid int, name varchar(20), price float);

insert into Product values(1,\t'Gizmo',      19.99);
insert into Product values(2,\t'PowerGizmo', 29.99);
insert into Product values(3,\t'SingleTouch', 149.99);

select * from Product;
select name, price
from Product
where pid != 2;
.exit
";

#[test]
fn test_multiline_query_script() -> Result<()> {
    let dir = TempDir::new()?;
    let output = run_script(dir.path(), QUERY_SCRIPT)?;

    let expected = "\
-- Database CS457_PA2 created.
-- Using database CS457_PA2.
-- Table Product created.
-- 1 new record inserted.
-- 1 new record inserted.
-- 1 new record inserted.
-- pid int|name varchar(20)|price float
-- 1|Gizmo|19.99
-- 2|PowerGizmo|29.99
-- 3|SingleTouch|149.99
-- name varchar(20)|price float
-- Gizmo|19.99
-- SingleTouch|149.99
";
    assert_eq!(output, expected);
    Ok(())
}

#[test]
fn test_bad_statements_do_not_stop_the_script() -> Result<()> {
    let dir = TempDir::new()?;
    let output = run_script(dir.path(), "CREATE DATABSE db;\nCREATE DATABASE db;\nUSE db\n")?;

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "-- !Failed to complete command.");
    assert!(lines[1].starts_with("-- !Incorrect instruction: CREATE DATABSE db"));
    assert_eq!(lines[2], "-- Database db created.");
    assert_eq!(lines[3], "-- !Failed to complete command.");
    assert_eq!(lines[4], "-- !Incorrect instruction: USE db (missing ';')");
    Ok(())
}
