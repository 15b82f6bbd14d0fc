//! Batch normalization: format every record, then group parents.

use std::time::Instant;

use sku_model::{ErrorMode, NormalizedRecord, PipelineOptions, RawRecord, TargetSchema};
use sku_transform::{CountryResolver, SetSizeWords};
use tracing::{error, info, info_span};

use crate::formatter::{RecordError, RecordFormatter};
use crate::grouping::ParentGrouper;
use crate::rules::{RuleTable, RuleTableError};

/// Everything a batch needs, built once and shared by reference.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    pub table: RuleTable,
    pub countries: CountryResolver,
    pub options: PipelineOptions,
    pub set_words: SetSizeWords,
}

impl PipelineContext {
    /// Resolve the rule table for `schema`. The country policy is taken
    /// from `options`.
    pub fn new(
        schema: &TargetSchema,
        countries: CountryResolver,
        options: PipelineOptions,
    ) -> Result<Self, RuleTableError> {
        let table = RuleTable::for_schema(schema)?;
        let countries = countries.with_policy(options.country.policy);
        Ok(Self {
            table,
            countries,
            options,
            set_words: SetSizeWords::default(),
        })
    }

    pub fn with_set_words(mut self, set_words: SetSizeWords) -> Self {
        self.set_words = set_words;
        self
    }

    pub fn schema(&self) -> &TargetSchema {
        self.table.schema()
    }

    pub fn formatter(&self) -> RecordFormatter<'_> {
        RecordFormatter::new(&self.table, &self.countries, &self.options, &self.set_words)
    }

    pub fn grouper(&self) -> ParentGrouper {
        ParentGrouper::new(self.options.grouping.clone())
    }
}

/// Callback invoked as a batch progresses.
pub trait ProgressObserver {
    /// Called once before the first record.
    fn on_start(&mut self, _total: usize) {}

    /// Called after each record, successful or not.
    fn on_record(&mut self, row: usize, result: Result<(), &RecordError>);

    /// Called once after grouping.
    fn on_finish(&mut self, _outcome: &BatchOutcome) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_record(&mut self, _row: usize, _result: Result<(), &RecordError>) {}
}

/// Result of one batch.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Normalized records with parent SKUs, in output order.
    pub records: Vec<NormalizedRecord>,
    pub errors: Vec<RecordError>,
    pub groups: usize,
    pub input_count: usize,
    /// True when fail-fast mode stopped before the end of the batch.
    pub aborted: bool,
}

impl BatchOutcome {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Normalize a batch.
///
/// Records are formatted one by one, then parent SKUs are assigned over the
/// whole batch. In fail-fast mode the first failing record stops the batch
/// and no grouping happens. In collect mode failing records are left out of
/// the output and every error is returned.
pub fn normalize_batch(
    ctx: &PipelineContext,
    raw_records: &[RawRecord],
    observer: &mut dyn ProgressObserver,
) -> BatchOutcome {
    let span = info_span!("normalize_batch", records = raw_records.len());
    let _guard = span.enter();
    let start = Instant::now();

    let formatter = ctx.formatter();
    let mut outcome = BatchOutcome {
        input_count: raw_records.len(),
        ..BatchOutcome::default()
    };
    observer.on_start(raw_records.len());

    for raw in raw_records {
        match formatter.format(raw) {
            Ok(record) => {
                observer.on_record(raw.row, Ok(()));
                outcome.records.push(record);
            }
            Err(record_error) => {
                error!(
                    row = record_error.row,
                    sku = %record_error.sku,
                    field = %record_error.field,
                    value = %record_error.value,
                    kind = record_error.source.kind(),
                    "record failed to normalize"
                );
                observer.on_record(raw.row, Err(&record_error));
                outcome.errors.push(record_error);
                if ctx.options.error_mode == ErrorMode::FailFast {
                    outcome.aborted = true;
                    break;
                }
            }
        }
    }

    if !outcome.aborted {
        outcome.groups = ctx.grouper().assign(&mut outcome.records);
    }

    info!(
        input = outcome.input_count,
        output = outcome.records.len(),
        errors = outcome.errors.len(),
        groups = outcome.groups,
        duration_ms = start.elapsed().as_millis(),
        "batch normalized"
    );
    observer.on_finish(&outcome);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::catalog_schema;

    #[derive(Default)]
    struct Recorder {
        total: usize,
        seen: Vec<(usize, bool)>,
        finished: bool,
    }

    impl ProgressObserver for Recorder {
        fn on_start(&mut self, total: usize) {
            self.total = total;
        }

        fn on_record(&mut self, row: usize, result: Result<(), &RecordError>) {
            self.seen.push((row, result.is_ok()));
        }

        fn on_finish(&mut self, _outcome: &BatchOutcome) {
            self.finished = true;
        }
    }

    fn context(options: PipelineOptions) -> PipelineContext {
        PipelineContext::new(
            &catalog_schema(),
            CountryResolver::new([("China", "CHN")]),
            options,
        )
        .expect("context")
    }

    fn rows() -> Vec<RawRecord> {
        vec![
            RawRecord::from_pairs(1, [("item number", "A"), ("description", "Lamp Red")]),
            RawRecord::from_pairs(2, [("item number", "B"), ("item weight (pounds)", "lots")]),
            RawRecord::from_pairs(3, [("item number", "C"), ("description", "Lamp Blue")]),
        ]
    }

    #[test]
    fn fail_fast_stops_at_first_error() {
        let ctx = context(PipelineOptions::default());
        let mut recorder = Recorder::default();
        let outcome = normalize_batch(&ctx, &rows(), &mut recorder);
        assert!(outcome.aborted);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].sku, "B");
        assert_eq!(outcome.groups, 0);
        assert_eq!(recorder.total, 3);
        assert_eq!(recorder.seen, [(1, true), (2, false)]);
        assert!(recorder.finished);
    }

    #[test]
    fn collect_mode_skips_failures_and_groups_the_rest() {
        let ctx = context(PipelineOptions::default().with_error_mode(ErrorMode::Collect));
        let mut recorder = Recorder::default();
        let outcome = normalize_batch(&ctx, &rows(), &mut recorder);
        assert!(!outcome.aborted);
        assert!(outcome.has_errors());
        assert_eq!(outcome.input_count, 3);
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.groups, 1);
        assert_eq!(recorder.seen.len(), 3);
        for record in &outcome.records {
            assert_eq!(record.text("product__parent_sku"), "O-100000");
        }
    }

    #[test]
    fn empty_batch() {
        let ctx = context(PipelineOptions::default());
        let outcome = normalize_batch(&ctx, &[], &mut NoProgress);
        assert_eq!(outcome.input_count, 0);
        assert_eq!(outcome.groups, 0);
        assert!(!outcome.has_errors());
    }

    #[test]
    fn context_applies_country_policy() {
        let ctx = context(
            PipelineOptions::default().with_country_policy(sku_model::CountryPolicy::Lenient),
        );
        assert_eq!(ctx.countries.policy(), sku_model::CountryPolicy::Lenient);
        assert_eq!(ctx.schema().len(), catalog_schema().len());
    }
}
