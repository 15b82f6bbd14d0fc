#![deny(unsafe_code)]

pub mod error;
pub mod loaders;
pub mod paths;

pub use crate::error::StandardsError;
pub use crate::loaders::{
    load_country_codes, load_default_country_codes, load_default_target_schema,
    load_pipeline_options, load_target_schema,
};
pub use crate::paths::{
    COUNTRY_CODES_FILE, STANDARDS_ENV_VAR, TARGET_SCHEMA_FILE, country_codes_path, standards_root,
    target_schema_path,
};
