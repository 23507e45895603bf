use average::Mean;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use octopus_energy::model::ConsumptionRecord;

/// Values above the mean are highlighted in red.
pub fn build_consumption_table(records: &[ConsumptionRecord], unit: &str) -> Table {
    let mean = {
        let estimate: Mean = records.iter().map(|record| record.value).collect();
        if estimate.is_empty() { 0.0 } else { estimate.mean() }
    };

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Date", "Start", "End", unit]);
    for record in records {
        table.add_row(vec![
            Cell::new(record.interval_start.format("%b %d")).add_attribute(Attribute::Dim),
            Cell::new(record.interval_start.format("%H:%M")),
            Cell::new(record.interval_end.format("%H:%M")).add_attribute(Attribute::Dim),
            Cell::new(format!("{:.3}", record.value))
                .set_alignment(CellAlignment::Right)
                .fg(if record.value > mean { Color::Red } else { Color::Green }),
        ]);
    }
    table
}
