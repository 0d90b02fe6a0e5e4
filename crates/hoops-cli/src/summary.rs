use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::DataFrame;

use hoops_common::{any_to_string, null_counts};

use crate::types::{PipelineResult, StepSummary};

pub fn print_summary(result: &PipelineResult, preview: usize) {
    println!(
        "Features: {} rows, {} feature columns",
        result.features.height(),
        result.feature_columns()
    );
    println!("{}", step_table(&result.steps));
    println!("{}", null_count_table(&result.features));
    if preview > 0 {
        println!("{}", preview_table(&result.features, preview));
    }
}

/// One row per generator run, with a total row.
pub fn step_table(steps: &[StepSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Generator"),
        header_cell("Parameters"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Time (ms)"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    let mut total_columns = 0usize;
    let mut total_ms = 0u128;
    for step in steps {
        total_columns += step.columns;
        total_ms += step.duration_ms;
        table.add_row(vec![
            Cell::new(step.generator),
            if step.detail.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(&step.detail)
            },
            Cell::new(step.rows),
            Cell::new(step.columns),
            dim_cell(step.duration_ms),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_columns).add_attribute(Attribute::Bold),
        Cell::new(total_ms).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Missing values per feature column.
pub fn null_count_table(features: &DataFrame) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Missing"),
        header_cell("Missing %"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    let rows = features.height();
    for (column, missing) in null_counts(features) {
        let share = if rows == 0 {
            0.0
        } else {
            missing as f64 * 100.0 / rows as f64
        };
        table.add_row(vec![
            Cell::new(column),
            count_cell(missing, Color::Yellow),
            dim_cell(format!("{share:.1}")),
        ]);
    }
    table
}

/// The first `limit` rows rendered as text.
pub fn preview_rows(features: &DataFrame, limit: usize) -> Vec<Vec<String>> {
    (0..features.height().min(limit))
        .map(|row| {
            features
                .get_columns()
                .iter()
                .map(|column| column.get(row).map(any_to_string).unwrap_or_default())
                .collect()
        })
        .collect()
}

pub fn preview_table(features: &DataFrame, limit: usize) -> Table {
    let mut table = Table::new();
    table.set_header(
        features
            .get_column_names_str()
            .into_iter()
            .map(header_cell)
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for row in preview_rows(features, limit) {
        table.add_row(row);
    }
    table
}

/// Name and description of every generator.
pub fn generator_table(generators: &[(&str, &str)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Generator"), header_cell("Description")]);
    apply_table_style(&mut table);
    for (name, description) in generators {
        table.add_row(vec![Cell::new(name), Cell::new(description)]);
    }
    table
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
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
