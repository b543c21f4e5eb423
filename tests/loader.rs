//! CSV shim behavior against real files.

use std::io::Write;

use arbor::data::io::{load_csv, LoadOptions, TableLoadError};
use tempfile::NamedTempFile;

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn loads_and_sorts_a_dataset() {
    let file = write_csv("vhigh,low,unacc\nlow,high,acc\nlow,low,acc\n");
    let table = load_csv(file.path(), LoadOptions::default()).unwrap();

    assert_eq!(table.n_rows(), 3);
    assert_eq!(table.n_attrs(), 2);
    // Sorted by all columns: both "low" rows precede "vhigh".
    assert_eq!(table.attr_value(0, 0), "low");
    assert_eq!(table.attr_value(0, 1), "high");
    assert_eq!(table.attr_value(2, 0), "vhigh");
    assert_eq!(table.label(2), "unacc");
}

#[test]
fn skip_header_drops_the_first_row() {
    let file = write_csv("buying,maint,class\nvhigh,low,unacc\n");
    let table = load_csv(file.path(), LoadOptions { skip_header: true }).unwrap();

    assert_eq!(table.n_rows(), 1);
    assert_eq!(table.label(0), "unacc");
}

#[test]
fn empty_cells_are_filled_with_the_column_mode() {
    let file = write_csv("a,x,yes\na,,yes\nb,x,no\n");
    let table = load_csv(file.path(), LoadOptions::default()).unwrap();

    assert_eq!(table.distinct_values(1, &table.all_rows()), vec!["x"]);
}

#[test]
fn missing_file_is_a_not_found_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dataset.csv");

    let err = load_csv(&path, LoadOptions::default()).unwrap_err();
    assert!(matches!(err, TableLoadError::NotFound(reported) if reported == path));
}

#[test]
fn empty_file_is_an_empty_error() {
    let file = write_csv("");
    assert!(matches!(
        load_csv(file.path(), LoadOptions::default()),
        Err(TableLoadError::Empty)
    ));
}

#[test]
fn single_column_file_is_a_schema_error() {
    let file = write_csv("acc\nunacc\n");
    assert!(matches!(
        load_csv(file.path(), LoadOptions::default()),
        Err(TableLoadError::Schema { got: 1 })
    ));
}

#[test]
fn ragged_file_is_a_parse_error() {
    let file = write_csv("a,b,yes\na,yes\n");
    assert!(matches!(
        load_csv(file.path(), LoadOptions::default()),
        Err(TableLoadError::Parse {
            line: 2,
            expected: 3,
            got: 2
        })
    ));
}

#[test]
fn load_errors_render_readable_messages() {
    let file = write_csv("acc\nunacc\n");
    let err = load_csv(file.path(), LoadOptions::default()).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("label column"), "unexpected message: {message}");
}
