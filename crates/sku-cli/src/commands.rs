use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, Table};
use tracing::info;

use sku_cli::pipeline::{
    OptionOverrides, RunConfig, load_countries, load_schema, resolve_standards_dir, run_file,
};
use sku_cli::progress::BarProgress;
use sku_cli::types::RunResult;
use sku_core::RuleTable;
use sku_transform::UpcCode;

use crate::cli::{CountryArgs, FieldsArgs, RunArgs, UpcArgs};
use crate::summary::{apply_table_style, header_cell};

pub fn run_normalize(args: &RunArgs, show_progress: bool) -> Result<RunResult> {
    let config = RunConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        config: args.config.clone(),
        standards_dir: args.standards_dir.clone(),
        overrides: OptionOverrides {
            auto_correct_upc: args.auto_correct_upc,
            require_valid_upc: args.require_valid_upc,
            lenient_country: args.lenient_country,
            keep_going: args.keep_going,
            input_order: args.input_order,
        },
        dry_run: args.dry_run,
    };
    let enabled = show_progress && !args.no_progress && io::stderr().is_terminal();
    let mut progress = BarProgress::new(enabled);
    run_file(&config, &mut progress)
}

pub fn run_fields(args: &FieldsArgs) -> Result<()> {
    let standards_dir = resolve_standards_dir(args.standards_dir.as_deref());
    let schema = load_schema(&standards_dir)?;
    let rules = RuleTable::for_schema(&schema).context("resolve rule table")?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Field"),
        header_cell("Rule"),
        header_cell("Source columns"),
    ]);
    apply_table_style(&mut table);
    for (index, resolved) in rules.rules().iter().enumerate() {
        let sources = resolved.rule.sources();
        let sources_cell = if sources.is_empty() {
            Cell::new("-").fg(Color::DarkGrey)
        } else {
            Cell::new(sources.join(", "))
        };
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&resolved.field).fg(Color::Blue),
            Cell::new(resolved.rule.to_string()),
            sources_cell,
        ]);
    }
    println!("Schema: {} v{} ({} fields)", schema.name, schema.version, schema.len());
    println!("{table}");
    Ok(())
}

/// Print UPC breakdowns. Returns false when any code is malformed.
pub fn run_upc(args: &UpcArgs) -> bool {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Valid"),
        header_cell("System"),
        header_cell("Manufacturer"),
        header_cell("Product"),
        header_cell("Check"),
        header_cell("EAN-13"),
    ]);
    apply_table_style(&mut table);
    let mut all_parsed = true;
    for code in &args.codes {
        match UpcCode::parse(code, args.auto_correct) {
            Ok(upc) => {
                let valid = if upc.is_valid() {
                    Cell::new("yes").fg(Color::Green)
                } else {
                    Cell::new("no").fg(Color::Yellow)
                };
                table.add_row(vec![
                    Cell::new(upc.digits()),
                    valid,
                    Cell::new(upc.system_digit()),
                    Cell::new(upc.manufacturer_code()),
                    Cell::new(upc.product_code()),
                    Cell::new(upc.check_digit()),
                    Cell::new(upc.ean13()),
                ]);
            }
            Err(error) => {
                all_parsed = false;
                table.add_row(vec![
                    Cell::new(code),
                    Cell::new("error").fg(Color::Red),
                    Cell::new(error.to_string()).fg(Color::Red),
                ]);
            }
        }
    }
    println!("{table}");
    all_parsed
}

/// Print country resolutions. Returns `Ok(false)` when any name is unknown.
pub fn run_country(args: &CountryArgs) -> Result<bool> {
    let standards_dir = resolve_standards_dir(args.standards_dir.as_deref());
    let resolver = load_countries(&standards_dir)?;
    info!(countries = resolver.len(), "country map loaded");
    let mut table = Table::new();
    table.set_header(vec![header_cell("Name"), header_cell("Alpha-3")]);
    apply_table_style(&mut table);
    let mut all_resolved = true;
    for name in &args.names {
        let code_cell = match resolver.resolve_alpha_code(name) {
            Ok(code) if code.is_empty() => Cell::new("-").fg(Color::DarkGrey),
            Ok(code) => Cell::new(code).fg(Color::Green),
            Err(error) => {
                all_resolved = false;
                Cell::new(error.to_string()).fg(Color::Red)
            }
        };
        table.add_row(vec![Cell::new(name), code_cell]);
    }
    println!("{table}");
    Ok(all_resolved)
}
