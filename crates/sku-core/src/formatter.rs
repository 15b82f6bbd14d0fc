//! Raw record to normalized record formatting.

use sku_model::{
    DescriptionOptions, DistanceUnit, FieldValue, NormalizedRecord, PipelineOptions, RawRecord,
    WeightUnit,
};
use sku_transform::normalization::is_positive_real;
use sku_transform::{
    ConversionError, CountryResolver, SetSizeWords, UpcCode, convert_distance, convert_weight,
    format_currency, title_case, yes_no_to_bool,
};
use thiserror::Error;

use crate::multipack::multipack_quantity;
use crate::rules::{
    DESCRIPTION_COLUMN, FieldRule, ITEM_NUMBER_COLUMN, LONG_DESCRIPTION_COLUMN, RuleTable,
    SIZE_WORDS, SeatAxis,
};

/// A record that could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row {row} (sku {sku:?}): field {field}: {source}")]
pub struct RecordError {
    pub row: usize,
    pub sku: String,
    pub field: String,
    pub value: String,
    #[source]
    pub source: ConversionError,
}

/// Clean up a product description before it feeds any field.
///
/// Trims, applies the literal substitutions, rewrites spelled-out set sizes
/// to digits and title-cases the result.
pub fn preprocess_description(
    value: &str,
    options: &DescriptionOptions,
    set_words: &SetSizeWords,
) -> String {
    let mut text = value.trim().to_string();
    for (from, to) in &options.substitutions {
        if !from.is_empty() && text.contains(from.as_str()) {
            text = text.replace(from.as_str(), to);
        }
    }
    title_case(&set_words.normalize(&text.to_lowercase()))
}

/// Source values as the rules see them: the raw record with its description
/// already preprocessed.
struct SourceView<'r> {
    raw: &'r RawRecord,
    description: String,
}

impl SourceView<'_> {
    fn get(&self, column: &str) -> &str {
        if column == DESCRIPTION_COLUMN {
            &self.description
        } else {
            self.raw.get(column)
        }
    }
}

/// Applies a [`RuleTable`] to raw records.
#[derive(Debug, Clone, Copy)]
pub struct RecordFormatter<'a> {
    table: &'a RuleTable,
    countries: &'a CountryResolver,
    options: &'a PipelineOptions,
    set_words: &'a SetSizeWords,
}

impl<'a> RecordFormatter<'a> {
    pub fn new(
        table: &'a RuleTable,
        countries: &'a CountryResolver,
        options: &'a PipelineOptions,
        set_words: &'a SetSizeWords,
    ) -> Self {
        Self {
            table,
            countries,
            options,
            set_words,
        }
    }

    /// Normalize one record. The first failing field aborts the record.
    pub fn format(&self, raw: &RawRecord) -> Result<NormalizedRecord, RecordError> {
        let view = SourceView {
            raw,
            description: preprocess_description(
                raw.get(DESCRIPTION_COLUMN),
                &self.options.description,
                self.set_words,
            ),
        };
        let mut record = NormalizedRecord::empty_for(raw.row, self.table.schema());
        for resolved in self.table.rules() {
            let value = self
                .apply(resolved.rule, &view)
                .map_err(|source| RecordError {
                    row: raw.row,
                    sku: raw.get(ITEM_NUMBER_COLUMN).to_string(),
                    field: resolved.field.clone(),
                    value: source.value().to_string(),
                    source,
                })?;
            record.set(&resolved.field, value);
        }
        Ok(record)
    }

    fn apply(&self, rule: FieldRule, view: &SourceView<'_>) -> Result<FieldValue, ConversionError> {
        let units = &self.options.units;
        let value: FieldValue = match rule {
            FieldRule::Copy(column) => view.get(column).into(),
            FieldRule::TitleCase(column) => title_case(view.get(column)).into(),
            FieldRule::Title => view.description.as_str().into(),
            FieldRule::Ean13(column) => self.ean13(view.get(column))?.into(),
            FieldRule::Distance(column) => {
                convert_distance(view.get(column), units.distance, DistanceUnit::Inch)?.into()
            }
            FieldRule::Weight(column) => {
                convert_weight(view.get(column), units.weight, WeightUnit::Pound)?.into()
            }
            FieldRule::Currency(column) => format_currency(view.get(column))?.into(),
            FieldRule::YesNo(column) => yes_no_to_bool(view.get(column))?,
            FieldRule::Contains {
                sources,
                needle,
                ignore_case,
            } => contains_flag(sources.iter().map(|column| view.get(column)), needle, ignore_case),
            FieldRule::Join(sources) => sources
                .iter()
                .map(|column| view.get(column))
                .filter(|value| !value.is_empty())
                .collect::<Vec<_>>()
                .join(", ")
                .into(),
            FieldRule::SumCounts(sources) => {
                sum_counts(sources.iter().map(|column| view.get(column))).into()
            }
            FieldRule::Seat(column, axis) => self.seat(view.get(column), axis)?.into(),
            FieldRule::Size(column) => size_word(view.get(column)).into(),
            FieldRule::Multipack => multipack_quantity(
                view.get(ITEM_NUMBER_COLUMN),
                &view.description,
                view.get(LONG_DESCRIPTION_COLUMN),
            )
            .into(),
            FieldRule::Country(column) => self.countries.resolve_alpha_code(view.get(column))?.into(),
            FieldRule::Blank | FieldRule::Deferred => FieldValue::empty(),
        };
        Ok(value)
    }

    fn ean13(&self, code: &str) -> Result<String, ConversionError> {
        let upc = UpcCode::parse(code, self.options.upc.auto_correct)?;
        if self.options.upc.require_valid && !upc.is_missing() && !upc.is_valid() {
            return Err(ConversionError::MalformedCode {
                value: code.to_string(),
                reason: "length or check digit does not validate".to_string(),
            });
        }
        Ok(upc.ean13().to_string())
    }

    /// Split `D x W`; the larger value is the depth, the smaller the width.
    /// A single value stands for both. Failures report the whole source value.
    fn seat(&self, value: &str, axis: SeatAxis) -> Result<String, ConversionError> {
        let invalid = || ConversionError::InvalidMeasurement {
            value: value.to_string(),
        };
        let lowered = value.to_lowercase();
        let tokens: Vec<&str> = lowered.split('x').map(str::trim).collect();
        let picked = if tokens.len() > 1 {
            let mut numbers = Vec::with_capacity(tokens.len());
            for token in &tokens {
                if !is_positive_real(token) {
                    return Err(invalid());
                }
                let parsed: f64 = token.parse().map_err(|_| invalid())?;
                numbers.push((parsed, *token));
            }
            let chosen = match axis {
                SeatAxis::Depth => numbers.iter().max_by(|a, b| a.0.total_cmp(&b.0)),
                SeatAxis::Width => numbers.iter().min_by(|a, b| a.0.total_cmp(&b.0)),
            };
            chosen.map_or("", |(_, token)| *token)
        } else {
            tokens.first().copied().unwrap_or("")
        };
        convert_distance(picked, self.options.units.distance, DistanceUnit::Inch)
            .map_err(|_| invalid())
    }
}

fn contains_flag<'v>(
    values: impl Iterator<Item = &'v str>,
    needle: &str,
    ignore_case: bool,
) -> FieldValue {
    let mut any_value = false;
    let mut found = false;
    let folded_needle = needle.to_lowercase();
    for value in values {
        if value.is_empty() {
            continue;
        }
        any_value = true;
        found |= if ignore_case {
            value.to_lowercase().contains(&folded_needle)
        } else {
            value.contains(needle)
        };
    }
    if any_value {
        FieldValue::Flag(found)
    } else {
        FieldValue::empty()
    }
}

fn sum_counts<'v>(values: impl Iterator<Item = &'v str>) -> String {
    let mut any_value = false;
    let mut total: u64 = 0;
    for value in values {
        if value.is_empty() {
            continue;
        }
        any_value = true;
        if value.bytes().all(|b| b.is_ascii_digit()) {
            // All digits, so parsing only fails on overflow.
            total = total.saturating_add(value.parse().unwrap_or(u64::MAX));
        }
    }
    if any_value {
        total.to_string()
    } else {
        String::new()
    }
}

fn size_word(description: &str) -> &'static str {
    let lowered = description.to_lowercase();
    SIZE_WORDS
        .iter()
        .find(|(needle, _)| lowered.contains(needle))
        .map_or("", |(_, size)| size)
}
