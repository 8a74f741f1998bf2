use anyhow::Result;
use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

const BIN: &str = env!("CARGO_BIN_EXE_flatdb");

/// Test that the CLI can execute a single statement
#[test]
fn test_cli_query_command() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let root = temp_dir.path().join("DatabaseSystem");

    let output = Command::new(BIN)
        .args(["--root", &root.to_string_lossy(), "query", "CREATE DATABASE db_1;"])
        .output()?;

    assert!(output.status.success(), "CLI query command failed");
    assert_eq!(String::from_utf8(output.stdout)?, "-- Database db_1 created.\n");
    assert!(root.join("db_1").is_dir());

    // Errors are reported on stdout and do not fail the process
    let output = Command::new(BIN)
        .args(["--root", &root.to_string_lossy(), "query", "USE db_9"])
        .output()?;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "-- !Failed to use database db_9 because it does not exist.\n"
    );

    Ok(())
}

/// Test running a script file
#[test]
fn test_cli_run_script() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let root = temp_dir.path().join("DatabaseSystem");
    let script = temp_dir.path().join("PA1_test.sql");
    fs::write(
        &script,
        "-- setup\nCREATE DATABASE db_1;\nUSE db_1;\nCREATE TABLE tbl_1 (a1 int, a2 varchar(20));\nSELECT * FROM tbl_1;\n.EXIT\n",
    )?;

    let output = Command::new(BIN)
        .args(["--root", &root.to_string_lossy(), "run", &script.to_string_lossy()])
        .output()?;

    assert!(output.status.success(), "CLI run command failed");
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "-- Database db_1 created.\n-- Using database db_1.\n-- Table tbl_1 created.\n-- a1 int|a2 varchar(20)\nAll done.\n"
    );
    assert_eq!(fs::read_to_string(root.join("db_1").join("tbl_1"))?, "a1 int\ta2 varchar(20)\n");

    let output = Command::new(BIN)
        .args(["--root", &root.to_string_lossy(), "run", "no_such_script.sql"])
        .output()?;
    assert!(!output.status.success());

    Ok(())
}

/// Test the CLI shell reading piped standard input
#[test]
fn test_cli_shell_with_piped_input() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let root = temp_dir.path().join("DatabaseSystem");

    let mut child = Command::new(BIN)
        .args(["--root", &root.to_string_lossy()])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;

    {
        let stdin = child.stdin.as_mut().expect("Failed to open stdin");
        stdin.write_all(b"CREATE DATABASE db_1;\nUSE db_1;\nCREATE TABLE t (a int);\n")?;
        stdin.write_all(b"INSERT INTO t\n  VALUES (5);\nSELECT a\nFROM t;\n.exit\n")?;
    }

    let output = child.wait_with_output()?;
    assert!(output.status.success(), "CLI shell failed");
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "-- Database db_1 created.\n-- Using database db_1.\n-- Table t created.\n-- 1 new record inserted.\n-- a int\n-- 5\nAll done.\n"
    );

    Ok(())
}
