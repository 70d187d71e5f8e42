use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use invoice_model::MigrationStatus;

use crate::types::{RunResult, RunSummary};

pub fn print_summary(summary: &RunSummary) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    for (field, value) in summary_rows(summary) {
        let value_cell = if field == "Status" {
            status_cell(&value)
        } else {
            Cell::new(value)
        };
        table.add_row(vec![
            Cell::new(field).add_attribute(Attribute::Bold),
            value_cell,
        ]);
    }
    println!("{table}");
    if let RunResult::Migration(outcome) = &summary.result
        && let Some(error) = &outcome.error
    {
        eprintln!("error: {error}");
    }
}

/// Field/value pairs shown in the summary table, in display order.
pub fn summary_rows(summary: &RunSummary) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Input", summary.input.display().to_string()),
        ("SHA-256", summary.sha256.clone()),
        ("Table", summary.table.clone()),
        ("Records", summary.records.to_string()),
    ];
    match &summary.result {
        RunResult::Migration(outcome) => {
            rows.push(("Status", outcome.status.label().to_string()));
            let count_label = if outcome.status == MigrationStatus::Skipped {
                "Existing rows"
            } else {
                "Inserted"
            };
            rows.push((count_label, outcome.count.to_string()));
            rows.push(("Batches", outcome.batches.to_string()));
            rows.push(("Message", outcome.message.clone()));
        }
        RunResult::Plan { batch_sizes } => {
            rows.push(("Status", "Dry run".to_string()));
            rows.push(("Batches", batch_sizes.len().to_string()));
            rows.push(("Batch sizes", format_batch_sizes(batch_sizes)));
        }
    }
    rows
}

/// Batches are full except possibly the last, so `3 x 100, 1 x 50` says it all.
fn format_batch_sizes(sizes: &[usize]) -> String {
    let Some((last, full)) = sizes.split_last() else {
        return "-".to_string();
    };
    match full.first() {
        Some(size) if size != last => format!("{} x {size}, 1 x {last}", full.len()),
        _ => format!("{} x {last}", sizes.len()),
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn status_cell(status: &str) -> Cell {
    let color = match status {
        "Migrated" => Color::Green,
        "Skipped" | "Dry run" => Color::Yellow,
        _ => Color::Red,
    };
    Cell::new(status).fg(color).add_attribute(Attribute::Bold)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
