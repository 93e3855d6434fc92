//! Console summary of a reconciliation run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use telemap_match::Coverage;
use telemap_model::Candidate;

use crate::commands::RunOutcome;

pub fn print_summary(outcome: &RunOutcome) {
    let result = &outcome.result;
    println!(
        "Dictionary: {} entries ({} rows dropped)",
        outcome.dictionary_entries, outcome.dictionary_dropped
    );
    println!(
        "Channels: {} telemetry, {} sensor",
        result.telemetry_total(),
        result.sensor_total()
    );
    println!();

    print_kind_table(outcome);
    println!();

    print_coverage("All matches", &result.coverage());
    print_coverage("High confidence", &result.high_confidence_coverage());
    println!();

    print_top_matches(&result.sorted_by_confidence(), outcome.top);

    if let Some(written) = &outcome.written {
        println!("Matches: {}", written.matches.display());
        println!("High confidence: {}", written.high_confidence.display());
    } else {
        println!("Dry run: no files written");
    }
}

fn print_kind_table(outcome: &RunOutcome) {
    let result = &outcome.result;
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Match kind"), header_cell("Count")]);
    align_column(&mut table, 1, CellAlignment::Right);
    for (kind, count) in result.counts_by_kind() {
        table.add_row(vec![Cell::new(kind.as_str()), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.candidates().len()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn print_coverage(label: &str, coverage: &Coverage) {
    println!(
        "Coverage ({label}): telemetry {}/{} ({:.1}%), sensor {}/{} ({:.1}%)",
        coverage.telemetry.matched,
        coverage.telemetry.total,
        coverage.telemetry.percent(),
        coverage.sensor.matched,
        coverage.sensor.total,
        coverage.sensor.percent(),
    );
}

fn print_top_matches(sorted: &[Candidate], top: usize) {
    if sorted.is_empty() {
        println!("No matches found.");
        return;
    }
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Telemetry"),
        header_cell("Sensor"),
        header_cell("Kind"),
        header_cell("Confidence"),
    ]);
    align_column(&mut table, 3, CellAlignment::Right);
    for candidate in sorted.iter().take(top) {
        table.add_row(vec![
            Cell::new(&candidate.telemetry_name),
            Cell::new(&candidate.sensor_name),
            Cell::new(candidate.kind.as_str()),
            Cell::new(format!("{:.2}", candidate.confidence)),
        ]);
    }
    println!("{table}");
    if sorted.len() > top {
        println!("... and {} more", sorted.len() - top);
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
