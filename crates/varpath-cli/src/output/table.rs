//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use varpath::Value;

/// The outcome of resolving one path.
pub struct Resolution {
    /// Path as given on the command line.
    pub path: String,
    /// Resolved value, `None` when the path did not resolve.
    pub value: Option<Value>,
}

/// Format resolution results as an ASCII table.
pub fn format_results_table(results: &[Resolution]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Path", "Value"]);

    for result in results {
        table.add_row(vec![
            result.path.clone(),
            result
                .value
                .as_ref()
                .map_or_else(|| "(absent)".to_string(), ToString::to_string),
        ]);
    }

    table
}

/// One row of a path trace.
pub struct TraceRow {
    pub segment: String,
    pub name: String,
    pub result: String,
}

/// Format a path trace as an ASCII table.
pub fn format_trace_table(rows: &[TraceRow]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["#", "Segment", "Name", "Result"]);

    for (index, row) in rows.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            row.segment.clone(),
            format!("{:?}", row.name),
            row.result.clone(),
        ]);
    }

    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}
