//! End-of-run summary table.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use csvload_cli::pipeline::{BatchResult, FileLoad};
use csvload_load::TableLoad;

pub fn print_summary(result: &BatchResult) {
    println!("Folder: {}", result.csv_folder.display());
    if result.files.is_empty() {
        println!("No CSV files found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("File"),
        header_cell("Columns"),
        header_cell("Rows"),
        header_cell("Skipped"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    let mut total_skipped = 0usize;
    for file in &result.files {
        total_skipped += file.skipped_rows;
        table.add_row(vec![
            table_cell(file.load.table()),
            dim_cell(file_name(file)),
            columns_cell(&file.load),
            Cell::new(file.load.rows_inserted()),
            count_cell(file.skipped_rows, Color::Yellow),
            status_cell(&file.load),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} files", result.files.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(result.rows_inserted()).add_attribute(Attribute::Bold),
        count_cell(total_skipped, Color::Yellow).add_attribute(Attribute::Bold),
        Cell::new(format!("{} created", result.tables_created())).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn file_name(file: &FileLoad) -> String {
    file.path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.path.display().to_string())
}

fn columns_cell(load: &TableLoad) -> Cell {
    match load {
        TableLoad::Created { columns, .. } => Cell::new(columns),
        TableLoad::Skipped { .. } => dim_cell("-"),
    }
}

fn status_cell(load: &TableLoad) -> Cell {
    match load {
        TableLoad::Created { .. } => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        TableLoad::Skipped { .. } => Cell::new("empty").fg(Color::Yellow),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn table_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
