//! Terminal rendering of the batch summary.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::RunResult;

pub fn print_summary(result: &RunResult) {
    let summary = &result.summary;
    println!("Cases analyzed: {}", summary.total_cases);

    let mut breakdown = Table::new();
    breakdown.set_header(vec![
        header_cell("Dimension"),
        header_cell("Value"),
        header_cell("Cases"),
    ]);
    apply_table_style(&mut breakdown);
    align_column(&mut breakdown, 2, CellAlignment::Right);
    add_breakdown(&mut breakdown, "Service type", &summary.by_service_type);
    add_breakdown(&mut breakdown, "Complexity tier", &summary.by_complexity_tier);
    add_breakdown(&mut breakdown, "Priority level", &summary.by_priority_level);
    add_breakdown(&mut breakdown, "Assigned to", &summary.by_assignee);
    add_breakdown(&mut breakdown, "Bill 96 risk", &summary.bill96_by_risk);
    println!("{breakdown}");

    let mut metrics = Table::new();
    metrics.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut metrics);
    align_column(&mut metrics, 1, CellAlignment::Right);
    metrics.add_row(vec![
        Cell::new("Mean triage score"),
        mean_cell(summary.mean_triage_score),
    ]);
    metrics.add_row(vec![
        Cell::new("Mean nexus score"),
        mean_cell(summary.mean_nexus_score),
    ]);
    metrics.add_row(vec![
        Cell::new("Mean Bill 96 score"),
        mean_cell(summary.mean_bill96_score),
    ]);
    metrics.add_row(vec![
        Cell::new("Mean total complexity"),
        mean_cell(summary.mean_total_complexity),
    ]);
    metrics.add_row(vec![
        Cell::new("Multi-jurisdiction cases"),
        Cell::new(format!(
            "{} ({:.1}%)",
            summary.multi_jurisdiction_cases,
            summary.multi_jurisdiction_pct()
        )),
    ]);
    metrics.add_row(vec![
        Cell::new("Bill 96 applicable"),
        Cell::new(format!(
            "{} ({:.1}%)",
            summary.bill96_cases,
            summary.bill96_pct()
        )),
    ]);
    metrics.add_row(vec![
        Cell::new("Total estimated time"),
        Cell::new(format!("{:.1} h", summary.total_estimated_hours())),
    ]);
    metrics.add_row(vec![
        Cell::new("Mean time per case"),
        match summary.mean_estimated_minutes {
            Some(minutes) => Cell::new(format!("{minutes:.1} min")),
            None => dim_cell("-"),
        },
    ]);
    metrics.add_row(vec![
        Cell::new("Mean billing multiplier"),
        match summary.mean_billing_multiplier {
            Some(multiplier) => Cell::new(format!("{multiplier:.2}x")),
            None => dim_cell("-"),
        },
    ]);
    println!("{metrics}");

    println!("Output: {}", result.output_dir.display());
    for path in &result.generated {
        println!("- {}", path.display());
    }
}

fn add_breakdown(table: &mut Table, dimension: &str, counts: &[(String, usize)]) {
    for (index, (value, count)) in counts.iter().enumerate() {
        let label = if index == 0 {
            Cell::new(dimension)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new("")
        };
        table.add_row(vec![label, Cell::new(value), Cell::new(count)]);
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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

fn mean_cell(value: Option<f64>) -> Cell {
    match value {
        Some(v) => Cell::new(format!("{v:.2}")),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
