//! Configuration options for SKU normalization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::units::{DistanceUnit, WeightUnit};

/// How a batch reacts to a record that fails to normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorMode {
    /// Stop at the first failing record.
    #[default]
    FailFast,
    /// Keep going, drop failing records from the output and report them all.
    Collect,
}

/// Policy for country names missing from the country map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountryPolicy {
    /// Unknown names fail the record.
    #[default]
    Strict,
    /// Unknown names resolve to an empty code and are logged.
    Lenient,
}

/// Output order of a grouped batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupOrder {
    /// Sorted by grouping key, variants adjacent.
    #[default]
    Grouped,
    /// Original input order.
    Input,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpcOptions {
    /// Treat an 11-digit code as missing its check digit and append it.
    pub auto_correct: bool,
    /// Fail the record on any non-empty code that does not validate.
    pub require_valid: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryOptions {
    pub policy: CountryPolicy,
}

/// Units the source measurement columns are recorded in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceUnits {
    pub distance: DistanceUnit,
    pub weight: WeightUnit,
}

/// Text clean-up applied to the product description before any field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptionOptions {
    /// Literal `(from, to)` replacements for known source quirks.
    pub substitutions: Vec<(String, String)>,
}

impl Default for DescriptionOptions {
    fn default() -> Self {
        Self {
            substitutions: vec![
                (",white".to_string(), " In White".to_string()),
                ("-Ebony".to_string(), "- Ebony".to_string()),
            ],
        }
    }
}

/// Parent SKU grouping parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingOptions {
    /// The grouping key is truncated at the first occurrence of each separator.
    pub separators: Vec<String>,
    /// Standalone words removed from the grouping key.
    pub strip_tokens: Vec<String>,
    pub prefix: String,
    pub base: u64,
    pub order: GroupOrder,
}

impl Default for GroupingOptions {
    fn default() -> Self {
        Self {
            separators: vec![" - ".to_string(), " In ".to_string()],
            strip_tokens: vec!["Led".to_string()],
            prefix: "O-".to_string(),
            base: 100_000,
            order: GroupOrder::default(),
        }
    }
}

/// Source header aliases: header as found in the file -> canonical source column.
pub type ColumnAliases = BTreeMap<String, String>;

/// Options controlling a normalization run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    pub error_mode: ErrorMode,
    pub upc: UpcOptions,
    pub country: CountryOptions,
    pub units: SourceUnits,
    pub description: DescriptionOptions,
    pub grouping: GroupingOptions,
    pub columns: ColumnAliases,
}

impl PipelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    pub fn with_upc_auto_correct(mut self, enable: bool) -> Self {
        self.upc.auto_correct = enable;
        self
    }

    pub fn with_country_policy(mut self, policy: CountryPolicy) -> Self {
        self.country.policy = policy;
        self
    }

    pub fn with_group_order(mut self, order: GroupOrder) -> Self {
        self.grouping.order = order;
        self
    }
}
