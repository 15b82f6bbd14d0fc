//! Tests for resource and configuration loaders.

use std::fs;
use std::path::{Path, PathBuf};

use sku_model::{CountryPolicy, ErrorMode, GroupOrder, WeightUnit};
use sku_standards::{
    StandardsError, load_country_codes, load_default_country_codes, load_default_target_schema,
    load_pipeline_options, load_target_schema,
};
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

// ============================================================================
// Bundled resources
// ============================================================================

#[test]
fn bundled_country_codes_load() {
    let codes = load_default_country_codes().expect("load country codes");
    assert!(codes.len() > 200);
    assert_eq!(codes.get("China").map(String::as_str), Some("CHN"));
    assert_eq!(codes.get("United States").map(String::as_str), Some("USA"));
    assert_eq!(codes.get("Philippines").map(String::as_str), Some("PHL"));
}

#[test]
fn bundled_schema_has_grouping_fields() {
    let schema = load_default_target_schema().expect("load schema");
    assert_eq!(schema.fields()[0], "manufacturer_sku");
    assert!(schema.contains("product__title"));
    assert!(schema.contains("product__parent_sku"));
    assert!(schema.contains("boxes__2__width"));
}

// ============================================================================
// Country map
// ============================================================================

#[test]
fn rejects_lowercase_codes() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(dir.path(), "codes.json", r#"{"China": "chn"}"#);
    let error = load_country_codes(&path).unwrap_err();
    assert!(matches!(error, StandardsError::InvalidResource { .. }));
    assert!(error.to_string().contains("China"));
}

#[test]
fn rejects_empty_country_map() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(dir.path(), "codes.json", "{}");
    assert!(matches!(
        load_country_codes(&path),
        Err(StandardsError::InvalidResource { .. })
    ));
}

#[test]
fn reports_malformed_json_with_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(dir.path(), "codes.json", "{ not json");
    let error = load_country_codes(&path).unwrap_err();
    assert!(matches!(error, StandardsError::Json { .. }));
    assert!(error.to_string().contains("codes.json"));
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().expect("temp dir");
    let error = load_country_codes(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(error, StandardsError::Io { .. }));
}

// ============================================================================
// Target schema
// ============================================================================

#[test]
fn loads_schema_table() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        dir.path(),
        "schema.toml",
        r#"
[schema]
name = "mini"
version = 2
fields = ["manufacturer_sku", "product__title", "product__parent_sku"]
"#,
    );
    let schema = load_target_schema(&path).expect("load schema");
    assert_eq!(schema.name, "mini");
    assert_eq!(schema.version, 2);
    assert_eq!(schema.len(), 3);
    assert_eq!(schema.position("product__parent_sku"), Some(2));
}

#[test]
fn rejects_duplicate_schema_fields() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        dir.path(),
        "schema.toml",
        r#"
[schema]
name = "dup"
fields = ["weight", "weight"]
"#,
    );
    let error = load_target_schema(&path).unwrap_err();
    assert!(error.to_string().contains("duplicate schema field"));
}

#[test]
fn rejects_empty_schema() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        dir.path(),
        "schema.toml",
        "[schema]\nname = \"empty\"\nfields = []\n",
    );
    assert!(matches!(
        load_target_schema(&path),
        Err(StandardsError::InvalidResource { .. })
    ));
}

// ============================================================================
// Pipeline options
// ============================================================================

#[test]
fn loads_partial_config_with_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        dir.path(),
        "skufmt.toml",
        r#"
error_mode = "collect"

[country]
policy = "lenient"

[units]
weight = "kg"

[grouping]
order = "input"

[columns]
"item #" = "item number"
"#,
    );
    let options = load_pipeline_options(&path).expect("load options");
    assert_eq!(options.error_mode, ErrorMode::Collect);
    assert_eq!(options.country.policy, CountryPolicy::Lenient);
    assert_eq!(options.units.weight, WeightUnit::Kilogram);
    assert_eq!(options.grouping.order, GroupOrder::Input);
    assert_eq!(options.grouping.prefix, "O-");
    assert!(!options.upc.auto_correct);
    assert_eq!(
        options.columns.get("item #").map(String::as_str),
        Some("item number")
    );
}

#[test]
fn rejects_empty_group_prefix() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(dir.path(), "skufmt.toml", "[grouping]\nprefix = \"\"\n");
    assert!(matches!(
        load_pipeline_options(&path),
        Err(StandardsError::InvalidResource { .. })
    ));
}

#[test]
fn rejects_unknown_enum_value() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(dir.path(), "skufmt.toml", "error_mode = \"sometimes\"\n");
    assert!(matches!(
        load_pipeline_options(&path),
        Err(StandardsError::Toml { .. })
    ));
}
