use ilphone_core::{merge_by_entity, normalize, CoreError};
use ilphone_table::{
    read_records, read_rows, write_merged, write_processed, write_rows, Columns, TableError,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn columns() -> Columns {
    Columns::new("חפ", "טלפון בעלים")
}

fn write_input(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("calls.csv");
    fs::write(&path, contents).expect("write input");
    path
}

fn read_output(path: &Path) -> String {
    let contents = fs::read_to_string(path).expect("read output");
    contents.trim_start_matches('\u{feff}').to_string()
}

#[test]
fn read_records_locates_columns_by_header() {
    let temp = TempDir::new().expect("temp dir");
    let path = write_input(
        temp.path(),
        "שם,טלפון בעלים,חפ\nAcme,\"052 111 2222, 03-9999999\",514\nBeta,,515\n",
    );

    let records = read_records(&path, &columns()).expect("read records");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].entity_id().as_str(), "514");
    assert_eq!(records[0].raw_phone(), Some("052 111 2222, 03-9999999"));
    assert_eq!(records[1].entity_id().as_str(), "515");
    assert_eq!(records[1].raw_phone(), None);
}

#[test]
fn read_rows_accepts_bom_and_skips_blank_rows() {
    let temp = TempDir::new().expect("temp dir");
    let path = write_input(
        temp.path(),
        "\u{feff}חפ,טלפון בעלים\n1,0501234567\n,\n2,tel: 09-7654321\n",
    );

    let rows = read_rows(&path, &columns()).expect("read rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].line, 2);
    assert_eq!(rows[1].entity, "2");
    assert_eq!(rows[1].line, 4);
}

#[test]
fn read_records_reports_missing_column() {
    let temp = TempDir::new().expect("temp dir");
    let path = write_input(temp.path(), "id,phone\n1,0501234567\n");

    let err = read_records(&path, &columns()).unwrap_err();
    match err {
        TableError::MissingColumn { column, .. } => assert_eq!(column, "חפ"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn read_records_reports_blank_entity_row() {
    let temp = TempDir::new().expect("temp dir");
    let path = write_input(temp.path(), "חפ,טלפון בעלים\n1,0501234567\n  ,03-1234567\n");

    let err = read_records(&path, &columns()).unwrap_err();
    match err {
        TableError::Row { line, source, .. } => {
            assert_eq!(line, 3);
            assert_eq!(source, CoreError::EmptyEntityId);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn read_records_missing_file_is_io_error() {
    let temp = TempDir::new().expect("temp dir");
    let err = read_records(&temp.path().join("missing.csv"), &columns()).unwrap_err();
    assert!(matches!(err, TableError::Io(_)));
}

#[test]
fn processed_output_round_trips_through_reader() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(
        temp.path(),
        "חפ,טלפון בעלים\n20,+972501234567\n10,\"031234567; nan\"\n20,0501234567\n",
    );
    let records = normalize(&read_records(&input, &columns()).expect("read input"));

    let output = temp.path().join("out").join("processed.csv");
    write_processed(&output, &columns(), &records).expect("write processed");
    assert_eq!(
        read_output(&output),
        "חפ,טלפון בעלים\n10,03-1234567\n20,050-1234567\n"
    );

    let replay = read_records(&output, &columns()).expect("read output");
    assert_eq!(normalize(&replay), records);
}

#[test]
fn merged_output_joins_phones() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(
        temp.path(),
        "חפ,טלפון בעלים\n7,0501234567\n7,03 1234567\n8,09-7654321\n",
    );
    let records = normalize(&read_records(&input, &columns()).expect("read input"));
    let merged = merge_by_entity(&records);

    let output = temp.path().join("merged.csv");
    write_merged(&output, &columns(), &merged).expect("write merged");
    assert_eq!(
        read_output(&output),
        "חפ,טלפון בעלים\n7,\"03-1234567, 050-1234567\"\n8,09-7654321\n"
    );
}

#[test]
fn raw_rows_are_written_unchanged() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(temp.path(), "חפ,טלפון בעלים\n3,tel: 03 1234567\n4,\n");
    let rows = read_rows(&input, &columns()).expect("read rows");

    let output = temp.path().join("rows.csv");
    write_rows(&output, &columns(), &rows).expect("write rows");
    assert_eq!(
        read_output(&output),
        "חפ,טלפון בעלים\n3,tel: 03 1234567\n4,\n"
    );
}
