//! Tests for building and stacking tables.

use crate::table::{Cell, Table, TableError};

fn table(columns: &[&str], rows: &[&[i64]]) -> Table {
    let mut t = Table::new(columns.iter().copied());
    for row in rows {
        t.push_row(row.iter().map(|v| Cell::Int(*v)).collect()).unwrap();
    }
    t
}

#[test]
fn push_row_checks_length() {
    let mut t = Table::new(["a", "b"]);
    let err = t.push_row(vec![Cell::Int(1)]).unwrap_err();
    assert_eq!(err, TableError::RowLength { expected: 2, found: 1 });
    assert!(t.is_empty());
}

#[test]
fn column_lookup() {
    let t = table(&["a", "b"], &[&[1, 2], &[3, 4]]);
    let b: Vec<&Cell> = t.column("b").unwrap();
    assert_eq!(b, vec![&Cell::Int(2), &Cell::Int(4)]);
    assert!(t.column("missing").is_none());
    assert_eq!(t.row(1), Some(&[Cell::Int(3), Cell::Int(4)][..]));
    assert_eq!(t.row(2), None);
}

#[test]
fn vstack_keeps_given_order() {
    let first = table(&["a"], &[&[1], &[2]]);
    let second = table(&["a"], &[&[3]]);

    let stacked = Table::vstack(vec![second, first]).unwrap();
    assert_eq!(stacked.len(), 3);
    let a: Vec<i64> = stacked.rows().iter().map(|r| r[0].as_i64().unwrap()).collect();
    assert_eq!(a, vec![3, 1, 2]);
}

#[test]
fn vstack_of_one_is_identity() {
    let only = table(&["a", "b"], &[&[1, 2]]);
    assert_eq!(Table::vstack(vec![only.clone()]).unwrap(), only);
}

#[test]
fn vstack_rejects_empty_list() {
    assert_eq!(Table::vstack(Vec::new()).unwrap_err(), TableError::Empty);
}

#[test]
fn vstack_rejects_column_mismatch() {
    let err = Table::vstack(vec![
        table(&["a", "b"], &[]),
        table(&["a", "b"], &[]),
        table(&["b", "a"], &[]),
    ])
    .unwrap_err();

    assert_eq!(
        err,
        TableError::ColumnMismatch {
            index: 2,
            expected: vec!["a".into(), "b".into()],
            found: vec!["b".into(), "a".into()],
        }
    );
}

#[cfg(feature = "csv")]
#[test]
fn write_csv_emits_header_and_rows() {
    let mut t = Table::new(["name", "score"]);
    t.push_row(vec![Cell::from("ada"), Cell::Float(9.5)]).unwrap();
    t.push_row(vec![Cell::from("bob"), Cell::Null]).unwrap();

    let mut out = Vec::new();
    t.write_csv(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "name,score\nada,9.5\nbob,\n");
}
