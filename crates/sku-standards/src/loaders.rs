//! Loaders for static resources and configuration files.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;
use sku_model::{PipelineOptions, TargetSchema};
use tracing::debug;

use crate::error::StandardsError;
use crate::paths::{country_codes_path, standards_root, target_schema_path};

pub fn load_default_country_codes() -> Result<BTreeMap<String, String>, StandardsError> {
    load_country_codes(&country_codes_path(&standards_root()))
}

pub fn load_default_target_schema() -> Result<TargetSchema, StandardsError> {
    load_target_schema(&target_schema_path(&standards_root()))
}

/// Load a `{ "Country Name": "ABC" }` map.
///
/// Every code must be three ASCII uppercase letters.
pub fn load_country_codes(path: &Path) -> Result<BTreeMap<String, String>, StandardsError> {
    let text = read_to_string(path)?;
    let codes: BTreeMap<String, String> =
        serde_json::from_str(&text).map_err(|source| StandardsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    if codes.is_empty() {
        return Err(StandardsError::invalid(path, "country map is empty"));
    }
    for (name, code) in &codes {
        if name.trim().is_empty() {
            return Err(StandardsError::invalid(path, "country map has an empty name"));
        }
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(StandardsError::invalid(
                path,
                format!("country {name:?} has invalid alpha-3 code {code:?}"),
            ));
        }
    }
    debug!(path = %path.display(), countries = codes.len(), "loaded country codes");
    Ok(codes)
}

#[derive(Deserialize)]
struct SchemaFile {
    schema: TargetSchema,
}

/// Load the target schema from a TOML file with a `[schema]` table.
///
/// Field names must be non-empty and unique.
pub fn load_target_schema(path: &Path) -> Result<TargetSchema, StandardsError> {
    let text = read_to_string(path)?;
    let file: SchemaFile = toml::from_str(&text).map_err(|source| StandardsError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    let schema = file.schema;
    if schema.is_empty() {
        return Err(StandardsError::invalid(path, "schema lists no fields"));
    }
    let mut seen = BTreeSet::new();
    for field in schema.fields() {
        if field.trim().is_empty() {
            return Err(StandardsError::invalid(path, "schema has an empty field name"));
        }
        if !seen.insert(field.as_str()) {
            return Err(StandardsError::invalid(
                path,
                format!("duplicate schema field {field:?}"),
            ));
        }
    }
    debug!(
        path = %path.display(),
        schema = %schema.name,
        fields = schema.len(),
        "loaded target schema"
    );
    Ok(schema)
}

/// Load pipeline options from a TOML config file. Missing keys take defaults.
pub fn load_pipeline_options(path: &Path) -> Result<PipelineOptions, StandardsError> {
    let text = read_to_string(path)?;
    let options: PipelineOptions = toml::from_str(&text).map_err(|source| StandardsError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    if options.grouping.prefix.is_empty() {
        return Err(StandardsError::invalid(path, "grouping.prefix must not be empty"));
    }
    debug!(path = %path.display(), "loaded pipeline options");
    Ok(options)
}

fn read_to_string(path: &Path) -> Result<String, StandardsError> {
    std::fs::read_to_string(path).map_err(|source| StandardsError::io(path, source))
}
