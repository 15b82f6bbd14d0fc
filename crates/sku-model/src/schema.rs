//! Target schema: the ordered list of canonical output fields.

use serde::{Deserialize, Serialize};

/// Ordered canonical field names; the order is the output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSchema {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: u32,
    fields: Vec<String>,
}

fn default_version() -> u32 {
    1
}

impl TargetSchema {
    pub fn new<S: Into<String>>(name: impl Into<String>, fields: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            version: default_version(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|name| name == field)
    }

    pub fn position(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|name| name == field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
