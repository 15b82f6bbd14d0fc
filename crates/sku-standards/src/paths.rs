//! Standards directory path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the standards directory.
pub const STANDARDS_ENV_VAR: &str = "SKU_STANDARDS_DIR";

/// Country name -> alpha-3 map.
pub const COUNTRY_CODES_FILE: &str = "alpha_3_codes.json";

/// Ordered canonical output fields.
pub const TARGET_SCHEMA_FILE: &str = "target_schema.toml";

/// Get the standards root directory.
///
/// Resolution order:
/// 1. `SKU_STANDARDS_DIR` environment variable
/// 2. `standards/` directory relative to workspace root
pub fn standards_root() -> PathBuf {
    if let Ok(root) = std::env::var(STANDARDS_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../standards")
}

pub fn country_codes_path(root: &Path) -> PathBuf {
    root.join(COUNTRY_CODES_FILE)
}

pub fn target_schema_path(root: &Path) -> PathBuf {
    root.join(TARGET_SCHEMA_FILE)
}
