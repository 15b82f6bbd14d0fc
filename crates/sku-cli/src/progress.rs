//! Progress bar for batch normalization.

use indicatif::{ProgressBar, ProgressStyle};
use sku_core::{BatchOutcome, ProgressObserver, RecordError};

const TEMPLATE: &str = "{spinner} [{bar:40}] {pos}/{len} rows {msg}";

/// Reports batch progress on stderr with an `indicatif` bar.
pub struct BarProgress {
    bar: ProgressBar,
    failed: usize,
}

impl BarProgress {
    /// A visible bar when `enabled`, otherwise a hidden one.
    pub fn new(enabled: bool) -> Self {
        let bar = if enabled {
            ProgressBar::new(0)
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
            bar.set_style(style.progress_chars("=> "));
        }
        Self { bar, failed: 0 }
    }

    pub fn failed(&self) -> usize {
        self.failed
    }
}

impl ProgressObserver for BarProgress {
    fn on_start(&mut self, total: usize) {
        self.bar.set_length(total as u64);
    }

    fn on_record(&mut self, _row: usize, result: Result<(), &RecordError>) {
        if result.is_err() {
            self.failed += 1;
            self.bar.set_message(format!("({} failed)", self.failed));
        }
        self.bar.inc(1);
    }

    fn on_finish(&mut self, _outcome: &BatchOutcome) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_bar_counts_failures() {
        let mut progress = BarProgress::new(false);
        progress.on_start(2);
        progress.on_record(1, Ok(()));
        let error = RecordError {
            row: 2,
            sku: "A".to_string(),
            field: "weight".to_string(),
            value: "x".to_string(),
            source: sku_transform::ConversionError::InvalidMeasurement {
                value: "x".to_string(),
            },
        };
        progress.on_record(2, Err(&error));
        progress.on_finish(&BatchOutcome::default());
        assert_eq!(progress.failed(), 1);
    }
}
