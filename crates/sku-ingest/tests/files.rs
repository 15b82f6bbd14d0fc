//! File-based reading and writing.

use std::fs;

use sku_ingest::{read_raw_records, write_normalized};
use sku_model::{ColumnAliases, NormalizedRecord, TargetSchema};
use tempfile::TempDir;

#[test]
fn reads_bom_prefixed_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("items.csv");
    fs::write(&path, "\u{feff}Item Number, Brand \nA-1 , Acme\n").expect("write input");

    let table = read_raw_records(&path, &ColumnAliases::new()).expect("read");
    assert_eq!(table.headers, ["item number", "brand"]);
    assert_eq!(table.records[0].get("item number"), "A-1");
    assert_eq!(table.records[0].get("brand"), "Acme");
}

#[test]
fn missing_input_reports_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("absent.csv");
    let error = read_raw_records(&path, &ColumnAliases::new()).unwrap_err();
    assert!(format!("{error:#}").contains("absent.csv"));
}

#[test]
fn writes_into_new_directory() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("out").join("formatted.csv");
    let schema = TargetSchema::new("t", ["manufacturer_sku", "weight"]);
    let mut record = NormalizedRecord::empty_for(1, &schema);
    record.set("manufacturer_sku", "A-1");

    write_normalized(&path, &schema, &[record]).expect("write");
    let text = fs::read_to_string(&path).expect("read output");
    assert_eq!(text, "manufacturer_sku,weight\nA-1,\n");
}
