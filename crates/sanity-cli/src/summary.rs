//! Table rendering for `sanity scan`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::outcome::Outcome;

const NO_MATCH: &str = "-";

/// `(normalizer, value)` pairs in scan order, `-` for no match.
pub fn scan_rows(outcomes: &[Outcome<'_>]) -> Vec<(String, String)> {
    outcomes
        .iter()
        .map(|outcome| {
            (
                outcome.kind.to_string(),
                outcome
                    .render_text()
                    .unwrap_or_else(|| NO_MATCH.to_string()),
            )
        })
        .collect()
}

pub fn build_scan_table(outcomes: &[Outcome<'_>]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Normalizer"), header_cell("Value")]);
    apply_table_style(&mut table);
    for (outcome, (label, value)) in outcomes.iter().zip(scan_rows(outcomes)) {
        let value_cell = if outcome.is_match() {
            Cell::new(value).fg(Color::Green)
        } else {
            dim_cell(value)
        };
        table.add_row(vec![Cell::new(label), value_cell]);
    }
    table
}

pub fn print_scan(outcomes: &[Outcome<'_>]) {
    println!("{}", build_scan_table(outcomes));
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
