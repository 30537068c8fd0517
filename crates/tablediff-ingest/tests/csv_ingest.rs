//! Tests for CSV ingestion into the table model.

use std::io::Write;

use tablediff_ingest::{CsvReadOptions, read_table, read_table_from_reader};
use tablediff_model::TableCell;

#[test]
fn header_record_becomes_the_header_list() {
    let data = "id,name,city\n1,Alice,Berlin\n2,Bob,Paris\n";
    let options = CsvReadOptions::new().with_primary_keys(["id"]);
    let table = read_table_from_reader(data.as_bytes(), &options).expect("read csv");

    let headers = table.headers();
    assert_eq!(headers.len(), 3);
    assert_eq!(headers[0].name(), "id");
    assert!(headers[0].is_primary_key());
    assert!(!headers[1].is_primary_key());

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows()[0].primary_key_value(), "1");
    assert_eq!(table.rows()[1].cells()[1].as_str(), "Bob");
}

#[test]
fn ragged_records_are_adjusted_not_rejected() {
    let data = "a,b,c\nonly\none,two,three,four,five\n";
    let table =
        read_table_from_reader(data.as_bytes(), &CsvReadOptions::default()).expect("read csv");

    assert_eq!(table.row_count(), 2);
    let short = &table.rows()[0];
    assert_eq!(short.len(), 3);
    assert_eq!(short.cells()[0].as_str(), "only");
    assert_eq!(short.cells()[2], TableCell::MISSING);

    let long = &table.rows()[1];
    assert_eq!(long.len(), 3);
    assert_eq!(long.cells()[2].as_str(), "three");
}

#[test]
fn all_empty_records_are_skipped() {
    let data = "a,b\nx,y\n,\n  ,  \nz,w\n";
    let table =
        read_table_from_reader(data.as_bytes(), &CsvReadOptions::default()).expect("read csv");
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows()[1].cells()[0].as_str(), "z");
}

#[test]
fn fields_are_trimmed_unless_disabled() {
    let data = "a,b\n x , y \n";
    let trimmed =
        read_table_from_reader(data.as_bytes(), &CsvReadOptions::default()).expect("read csv");
    assert_eq!(trimmed.rows()[0].cells()[0].as_str(), "x");

    let raw = read_table_from_reader(data.as_bytes(), &CsvReadOptions::new().with_trim(false))
        .expect("read csv");
    assert_eq!(raw.rows()[0].cells()[0].as_str(), " x ");
}

#[test]
fn custom_delimiter_is_honored() {
    let data = "id;name\n1;Alice\n";
    let options = CsvReadOptions::new()
        .with_delimiter(b';')
        .with_primary_keys(["id"]);
    let table = read_table_from_reader(data.as_bytes(), &options).expect("read csv");
    assert_eq!(table.headers().len(), 2);
    assert_eq!(table.rows()[0].primary_key_value(), "1");
}

#[test]
fn empty_input_yields_an_empty_table() {
    let table =
        read_table_from_reader("".as_bytes(), &CsvReadOptions::default()).expect("read csv");
    assert!(table.headers().is_empty());
    assert_eq!(table.row_count(), 0);
}

#[test]
fn reads_a_table_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    write!(file, "id,name\n1,Alice\n2,Bob\n").expect("write csv");

    let options = CsvReadOptions::new().with_primary_keys(["id"]);
    let table = read_table(file.path(), &options).expect("read csv file");
    assert_eq!(table.row_count(), 2);
    assert!(table.headers()[0].is_primary_key());
}

#[test]
fn missing_file_surfaces_an_io_error() {
    let result = read_table(
        std::path::Path::new("does-not-exist.csv"),
        &CsvReadOptions::default(),
    );
    assert!(matches!(result, Err(tablediff_ingest::IngestError::Io(_))));
}
