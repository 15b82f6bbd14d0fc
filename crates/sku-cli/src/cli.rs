//! CLI argument definitions for skufmt.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "skufmt",
    version,
    about = "Normalize furniture supplier spreadsheets into the catalog schema",
    long_about = "Normalize a furniture supplier CSV into the catalog schema.\n\n\
                  Converts units and prices, transcodes UPC-A to EAN-13, resolves\n\
                  countries to ISO alpha-3 and groups variants under parent SKUs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a supplier CSV file.
    Run(RunArgs),

    /// List the output fields and the rule behind each.
    Fields(FieldsArgs),

    /// Break down UPC-A codes and show their EAN-13 form.
    Upc(UpcArgs),

    /// Resolve country names to alpha-3 codes.
    Country(CountryArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Supplier CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV path (default: formatted.csv next to INPUT).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Pipeline options file (TOML).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the country map and target schema.
    #[arg(long = "standards-dir", value_name = "DIR")]
    pub standards_dir: Option<PathBuf>,

    /// Append the check digit to 11-digit UPC codes.
    #[arg(long = "auto-correct-upc")]
    pub auto_correct_upc: bool,

    /// Fail records whose UPC does not validate.
    #[arg(long = "require-valid-upc")]
    pub require_valid_upc: bool,

    /// Leave unknown countries empty instead of failing the record.
    #[arg(long = "lenient-country")]
    pub lenient_country: bool,

    /// Skip failing records and report them all instead of stopping at the first.
    #[arg(long = "keep-going")]
    pub keep_going: bool,

    /// Write records in input order instead of grouped order.
    #[arg(long = "input-order")]
    pub input_order: bool,

    /// Normalize and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Hide the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// Directory holding the target schema.
    #[arg(long = "standards-dir", value_name = "DIR")]
    pub standards_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct UpcArgs {
    /// UPC-A codes to inspect.
    #[arg(value_name = "CODE", required = true)]
    pub codes: Vec<String>,

    /// Append the check digit to 11-digit codes.
    #[arg(long = "auto-correct")]
    pub auto_correct: bool,
}

#[derive(Parser)]
pub struct CountryArgs {
    /// Country names to resolve.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,

    /// Directory holding the country map.
    #[arg(long = "standards-dir", value_name = "DIR")]
    pub standards_dir: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
