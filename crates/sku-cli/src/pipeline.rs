//! Run orchestration: load resources, read, normalize, write.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use sku_core::{PipelineContext, ProgressObserver, normalize_batch};
use sku_ingest::{default_output_path, read_raw_records, write_normalized};
use sku_model::{CountryPolicy, ErrorMode, GroupOrder, PipelineOptions, TargetSchema};
use sku_standards::{
    country_codes_path, load_country_codes, load_pipeline_options, load_target_schema,
    standards_root, target_schema_path,
};
use sku_transform::CountryResolver;
use tracing::{info, info_span, warn};

use crate::types::RunResult;

/// Command-line switches layered over the options file.
///
/// A switch only ever turns a behavior on; leaving it off keeps the file value.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionOverrides {
    pub auto_correct_upc: bool,
    pub require_valid_upc: bool,
    pub lenient_country: bool,
    pub keep_going: bool,
    pub input_order: bool,
}

impl OptionOverrides {
    pub fn apply(self, mut options: PipelineOptions) -> PipelineOptions {
        if self.auto_correct_upc {
            options.upc.auto_correct = true;
        }
        if self.require_valid_upc {
            options.upc.require_valid = true;
        }
        if self.lenient_country {
            options.country.policy = CountryPolicy::Lenient;
        }
        if self.keep_going {
            options.error_mode = ErrorMode::Collect;
        }
        if self.input_order {
            options.grouping.order = GroupOrder::Input;
        }
        options
    }
}

/// Everything `skufmt run` needs to know.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub standards_dir: Option<PathBuf>,
    pub overrides: OptionOverrides,
    pub dry_run: bool,
}

/// The standards directory: explicit, then `SKU_STANDARDS_DIR`, then the bundled one.
pub fn resolve_standards_dir(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(standards_root, Path::to_path_buf)
}

/// Options from the config file (or defaults) with overrides applied.
pub fn load_options(config: Option<&Path>, overrides: OptionOverrides) -> Result<PipelineOptions> {
    let options = match config {
        Some(path) => load_pipeline_options(path).context("load pipeline options")?,
        None => PipelineOptions::default(),
    };
    Ok(overrides.apply(options))
}

pub fn load_schema(standards_dir: &Path) -> Result<TargetSchema> {
    load_target_schema(&target_schema_path(standards_dir)).context("load target schema")
}

pub fn load_countries(standards_dir: &Path) -> Result<CountryResolver> {
    let codes = load_country_codes(&country_codes_path(standards_dir))
        .context("load country codes")?;
    Ok(CountryResolver::new(codes))
}

/// Load the schema and country map and resolve the rule table.
pub fn build_context(standards_dir: &Path, options: PipelineOptions) -> Result<PipelineContext> {
    let schema = load_schema(standards_dir)?;
    let countries = load_countries(standards_dir)?;
    PipelineContext::new(&schema, countries, options).context("resolve rule table")
}

/// Normalize one input file.
///
/// Nothing is written on a dry run or when fail-fast mode stops the batch.
/// In collect mode the records that normalized are still written.
pub fn run_file(config: &RunConfig, observer: &mut dyn ProgressObserver) -> Result<RunResult> {
    let span = info_span!("run", input = %config.input.display());
    let _guard = span.enter();

    let options = load_options(config.config.as_deref(), config.overrides)?;
    let standards_dir = resolve_standards_dir(config.standards_dir.as_deref());
    let ctx = build_context(&standards_dir, options)?;

    let read_start = Instant::now();
    let table = read_raw_records(&config.input, &ctx.options.columns)?;
    info!(
        columns = table.headers.len(),
        rows = table.records.len(),
        duration_ms = read_start.elapsed().as_millis(),
        "input read"
    );

    let outcome = normalize_batch(&ctx, &table.records, observer);

    let output = if config.dry_run || outcome.aborted {
        if outcome.aborted {
            warn!("batch stopped at the first failing record; no output written");
        }
        None
    } else {
        let path = config
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&config.input));
        let write_start = Instant::now();
        write_normalized(&path, ctx.schema(), &outcome.records)?;
        info!(
            path = %path.display(),
            rows = outcome.records.len(),
            duration_ms = write_start.elapsed().as_millis(),
            "output written"
        );
        Some(path)
    };

    Ok(RunResult {
        input: config.input.clone(),
        output,
        schema_name: ctx.schema().name.clone(),
        field_count: ctx.schema().len(),
        input_count: outcome.input_count,
        output_count: outcome.records.len(),
        groups: outcome.groups,
        errors: outcome.errors,
        aborted: outcome.aborted,
        dry_run: config.dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_only_switch_on() {
        let mut base = PipelineOptions::default();
        base.upc.auto_correct = true;
        let options = OptionOverrides::default().apply(base);
        assert!(options.upc.auto_correct);
        assert_eq!(options.error_mode, ErrorMode::FailFast);

        let options = OptionOverrides {
            keep_going: true,
            lenient_country: true,
            input_order: true,
            ..OptionOverrides::default()
        }
        .apply(PipelineOptions::default());
        assert_eq!(options.error_mode, ErrorMode::Collect);
        assert_eq!(options.country.policy, CountryPolicy::Lenient);
        assert_eq!(options.grouping.order, GroupOrder::Input);
    }

    #[test]
    fn explicit_standards_dir_wins() {
        assert_eq!(
            resolve_standards_dir(Some(Path::new("/tmp/std"))),
            PathBuf::from("/tmp/std")
        );
    }
}
