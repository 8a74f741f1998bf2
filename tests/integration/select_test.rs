// Query Evaluator Integration Tests
//
// Projection, filtering and output formatting of SELECT.

use anyhow::Result;

#[path = "../common/mod.rs"]
mod common;
use common::{create_product_table, create_test_db_in_use};

#[test]
fn test_select_star_prints_header_and_all_rows() -> Result<()> {
    let mut db = create_test_db_in_use()?;
    create_product_table(&mut db)?;

    assert_eq!(
        db.run("select * from Product;"),
        vec![
            "-- pid int|name varchar(20)|price float",
            "-- 1|Gizmo|19.99",
            "-- 2|PowerGizmo|29.99",
            "-- 3|SingleTouch|149.99",
            "-- 4|MultiTouch|199.99",
            "-- 5|SuperGizmo|49.99",
        ]
    );
    Ok(())
}

#[test]
fn test_projection_with_predicate() -> Result<()> {
    let mut db = create_test_db_in_use()?;
    create_product_table(&mut db)?;

    assert_eq!(
        db.run("select name, price\nfrom Product\nwhere pid != 2;"),
        vec![
            "-- name varchar(20)|price float",
            "-- Gizmo|19.99",
            "-- SingleTouch|149.99",
            "-- MultiTouch|199.99",
            "-- SuperGizmo|49.99",
        ]
    );

    // Output follows projection order; the predicate column may be projected too
    assert_eq!(
        db.run("SELECT price, pid FROM Product WHERE pid == 3;"),
        vec!["-- price float|pid int", "-- 149.99|3"]
    );
    Ok(())
}

#[test]
fn test_predicates_compare_text() -> Result<()> {
    let mut db = create_test_db_in_use()?;
    create_product_table(&mut db)?;

    // "19.99", "29.99", "199.99" and "49.99" all sort after "150"
    assert_eq!(
        db.run("SELECT pid FROM Product WHERE price > 150;"),
        vec!["-- pid int", "-- 1", "-- 2", "-- 4", "-- 5"]
    );

    db.run_all(&[
        "CREATE TABLE Nums (n int);",
        "INSERT INTO Nums VALUES (10);",
        "INSERT INTO Nums VALUES (2);",
    ])?;
    assert_eq!(db.run("SELECT n FROM Nums WHERE n < 2;"), vec!["-- n int", "-- 10"]);

    // The literal is compared with its quotes, as stored
    assert_eq!(
        db.run("SELECT pid FROM Product WHERE name = 'Gizmo';"),
        vec!["-- pid int", "-- 1"]
    );
    assert_eq!(db.run("SELECT pid FROM Product WHERE name = Gizmo;"), vec!["-- pid int"]);
    Ok(())
}

#[test]
fn test_empty_table_prints_only_header() -> Result<()> {
    let mut db = create_test_db_in_use()?;
    db.run("CREATE TABLE Empty (a int, b char(2));");

    assert_eq!(db.run("SELECT * FROM Empty;"), vec!["-- a int|b char(2)"]);
    assert_eq!(db.run("SELECT b FROM Empty WHERE a >= 0;"), vec!["-- b char(2)"]);
    Ok(())
}

#[test]
fn test_select_errors() -> Result<()> {
    let mut db = create_test_db_in_use()?;
    create_product_table(&mut db)?;

    assert_eq!(
        db.run("SELECT colour FROM Product;"),
        vec!["-- !Failed to query table Product because attribute colour does not exist."]
    );
    assert_eq!(
        db.run("SELECT * FROM Product WHERE weight > 1;"),
        vec!["-- !Failed to query table Product because attribute weight does not exist."]
    );
    assert_eq!(
        db.run("SELECT * FROM Tbl_9;"),
        vec!["-- !Failed to query table Tbl_9 because it does not exist."]
    );

    let lines = db.run("SELECT * FROM Product WHERE pid =! 1;");
    assert_eq!(lines[0], "-- !Failed to complete command.");
    Ok(())
}
