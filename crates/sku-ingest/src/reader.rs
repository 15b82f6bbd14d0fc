use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use sku_model::{ColumnAliases, RawRecord};
use tracing::{debug, warn};

/// Rows read from one supplier file.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// Normalized header names after alias resolution, in file order.
    pub headers: Vec<String>,
    pub records: Vec<RawRecord>,
}

/// Normalize a header cell: strip a byte-order mark, collapse whitespace and
/// lowercase, so `" Item  Number"` matches `item number`.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

/// Read a supplier CSV file. The first row is the header.
pub fn read_raw_records(path: &Path, aliases: &ColumnAliases) -> Result<RawTable> {
    let file = std::fs::File::open(path).with_context(|| format!("open csv: {}", path.display()))?;
    let table = read_raw_records_from(file, aliases)
        .with_context(|| format!("read csv: {}", path.display()))?;
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.records.len(),
        "read supplier rows"
    );
    Ok(table)
}

/// Read supplier rows from any reader.
///
/// Header names are normalized and then mapped through `aliases` (whose keys
/// are normalized the same way). Rows may be shorter or longer than the
/// header; missing cells read as empty and extra cells are dropped. Blank
/// rows are skipped but still count towards row numbers.
pub fn read_raw_records_from<R: Read>(reader: R, aliases: &ColumnAliases) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut rows = reader.records();

    let Some(header) = rows.next() else {
        return Ok(RawTable::default());
    };
    let header = header.context("read header row")?;
    let header_line = header.position().map_or(1, csv::Position::line);
    let aliases: Vec<(String, &str)> = aliases
        .iter()
        .map(|(from, to)| (normalize_header(from), to.as_str()))
        .collect();
    let mut seen = BTreeSet::new();
    let headers: Vec<String> = header
        .iter()
        .map(|cell| {
            let name = normalize_header(cell);
            let resolved = aliases
                .iter()
                .find(|(from, _)| *from == name)
                .map_or(name, |(_, to)| normalize_header(to));
            if !resolved.is_empty() && !seen.insert(resolved.clone()) {
                warn!(column = %resolved, "duplicate column; the rightmost value wins");
            }
            resolved
        })
        .collect();

    let mut records = Vec::new();
    let mut previous_row = 0;
    for row in rows {
        let row = row.with_context(|| format!("read data row after row {previous_row}"))?;
        // The reader drops empty lines, so the row number comes from the line.
        let row_number = row
            .position()
            .and_then(|position| usize::try_from(position.line().saturating_sub(header_line)).ok())
            .unwrap_or(previous_row + 1);
        previous_row = row_number;
        if row.iter().all(|cell| normalize_cell(cell).is_empty()) {
            continue;
        }
        let mut record = RawRecord::new(row_number);
        for (column, cell) in headers.iter().zip(row.iter()) {
            if column.is_empty() {
                continue;
            }
            record.insert(column.as_str(), normalize_cell(cell));
        }
        records.push(record);
    }
    Ok(RawTable { headers, records })
}
