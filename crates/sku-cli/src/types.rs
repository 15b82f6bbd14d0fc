use std::path::PathBuf;

use sku_core::RecordError;

/// Outcome of one `skufmt run`.
#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    /// Where the normalized file was written; `None` on dry runs and aborted batches.
    pub output: Option<PathBuf>,
    pub schema_name: String,
    pub field_count: usize,
    pub input_count: usize,
    pub output_count: usize,
    pub groups: usize,
    pub errors: Vec<RecordError>,
    /// Fail-fast mode stopped before the end of the input.
    pub aborted: bool,
    pub dry_run: bool,
}

impl RunResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
