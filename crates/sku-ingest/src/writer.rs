use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::WriterBuilder;
use sku_model::{NormalizedRecord, TargetSchema};
use tracing::debug;

/// File name used when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "formatted.csv";

/// `formatted.csv` next to the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    input
        .parent()
        .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE), |dir| dir.join(DEFAULT_OUTPUT_FILE))
}

/// Write records to a CSV file with the schema fields as header.
pub fn write_normalized(
    path: &Path,
    schema: &TargetSchema,
    records: &[NormalizedRecord],
) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir: {}", parent.display()))?;
    }
    let file =
        std::fs::File::create(path).with_context(|| format!("create csv: {}", path.display()))?;
    write_normalized_to(file, schema, records)
        .with_context(|| format!("write csv: {}", path.display()))?;
    debug!(path = %path.display(), rows = records.len(), "wrote normalized rows");
    Ok(())
}

/// Write records as CSV to any writer, one row per record in slice order.
pub fn write_normalized_to<W: Write>(
    writer: W,
    schema: &TargetSchema,
    records: &[NormalizedRecord],
) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer
        .write_record(schema.fields())
        .context("write header")?;
    for record in records {
        writer
            .write_record(record.render_row(schema))
            .with_context(|| format!("write row {}", record.row))?;
    }
    writer.flush().context("flush csv")?;
    Ok(())
}
