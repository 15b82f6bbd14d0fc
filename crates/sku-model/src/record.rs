//! Raw input rows and normalized output records.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::TargetSchema;

/// One input row keyed by normalized source column name.
///
/// Columns are optional: a missing column reads the same as an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based data row number in the source file (header excluded).
    pub row: usize,
    values: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new(row: usize) -> Self {
        Self {
            row,
            values: BTreeMap::new(),
        }
    }

    /// Build a record from `(column, value)` pairs; values are trimmed.
    pub fn from_pairs<K, V>(row: usize, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut record = Self::new(row);
        for (key, value) in pairs {
            record.insert(key, value.as_ref());
        }
        record
    }

    pub fn insert(&mut self, column: impl Into<String>, value: &str) {
        self.values.insert(column.into(), value.trim().to_string());
    }

    /// Get a value, returning an empty string when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// A normalized output value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text, including numbers rendered as text. Empty text is an empty cell.
    Text(String),
    /// Boolean flag, rendered as `True` / `False`.
    Flag(bool),
}

impl FieldValue {
    pub fn empty() -> Self {
        FieldValue::Text(String::new())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Text(text) if text.is_empty())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(flag) => Some(*flag),
            FieldValue::Text(_) => None,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Flag(true) => f.write_str("True"),
            FieldValue::Flag(false) => f.write_str("False"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// One output record holding every field of the target schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    /// Row number of the raw record this was built from.
    pub row: usize,
    fields: BTreeMap<String, FieldValue>,
}

impl NormalizedRecord {
    /// Create a record with every schema field present and empty.
    pub fn empty_for(row: usize, schema: &TargetSchema) -> Self {
        let fields = schema
            .fields()
            .iter()
            .map(|name| (name.clone(), FieldValue::empty()))
            .collect();
        Self { row, fields }
    }

    /// Set a field value. Returns false (and ignores the value) when the field
    /// is not part of the record's schema.
    pub fn set(&mut self, field: &str, value: impl Into<FieldValue>) -> bool {
        match self.fields.get_mut(field) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Text view of a field; flags and missing fields read as empty.
    pub fn text(&self, field: &str) -> &str {
        self.fields
            .get(field)
            .and_then(FieldValue::as_text)
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render values in schema order for output.
    pub fn render_row(&self, schema: &TargetSchema) -> Vec<String> {
        schema
            .fields()
            .iter()
            .map(|name| {
                self.fields
                    .get(name)
                    .map(ToString::to_string)
                    .unwrap_or_default()
            })
            .collect()
    }
}
