use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sku_cli::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None if result.dry_run => println!("Output: (dry run, nothing written)"),
        None => println!("Output: (not written)"),
    }
    println!("Schema: {} ({} fields)", result.schema_name, result.field_count);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input rows"),
        header_cell("Normalized"),
        header_cell("Parent groups"),
        header_cell("Errors"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(result.input_count),
        Cell::new(result.output_count),
        Cell::new(result.groups),
        count_cell(result.errors.len(), Color::Red),
    ]);
    println!("{table}");

    if result.has_errors() {
        print_error_table(result);
    }
    if result.aborted {
        println!("Stopped at the first failing record. Use --keep-going to skip failures.");
    }
}

fn print_error_table(result: &RunResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("SKU"),
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Problem"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for error in &result.errors {
        table.add_row(vec![
            Cell::new(error.row),
            Cell::new(&error.sku),
            Cell::new(&error.field).fg(Color::Blue),
            Cell::new(format!("{:?}", error.value)),
            Cell::new(error.source.kind()).fg(Color::Red),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).add_attribute(Attribute::Dim)
    }
}
