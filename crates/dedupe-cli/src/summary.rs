use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dedupe_cli::types::DedupeReport;

use crate::cli::SummaryFormatArg;

pub fn print_summary(report: &DedupeReport, format: SummaryFormatArg) -> serde_json::Result<()> {
    match format {
        SummaryFormatArg::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        SummaryFormatArg::Text => {
            println!("{}", headline(report));
            match &report.output {
                Some(path) => println!("Output: {}", path.display()),
                None => println!("Output: not written (dry run)"),
            }
            println!("{}", summary_table(report));
        }
    }
    Ok(())
}

fn headline(report: &DedupeReport) -> String {
    format!(
        "Removed {} duplicate(s) from {} row(s).",
        report.duplicates_removed, report.rows_read
    )
}

fn summary_table(report: &DedupeReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key column"),
        header_cell("Method"),
    ]);
    apply_summary_table_style(&mut table);
    for key in &report.key_columns {
        table.add_row(vec![
            Cell::new(&key.column)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(key.method),
        ]);
    }
    table.add_row(vec![dim_cell("Key mode"), dim_cell(report.key_mode)]);
    table.add_row(vec![Cell::new("Rows read"), count_cell(report.rows_read, None)]);
    table.add_row(vec![
        Cell::new("Duplicates removed"),
        count_cell(report.duplicates_removed, Some(Color::Yellow)),
    ]);
    table.add_row(vec![
        Cell::new("Rows written"),
        count_cell(report.rows_written, Some(Color::Green)),
    ]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn count_cell(count: usize, color: Option<Color>) -> Cell {
    match color {
        Some(color) if count > 0 => Cell::new(count).fg(color).add_attribute(Attribute::Bold),
        _ => Cell::new(count),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
