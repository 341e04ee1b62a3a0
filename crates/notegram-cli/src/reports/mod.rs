use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use notegram_core::api::Analysis;
use notegram_core::config::AnalysisConfig;
use notegram_core::report::Report;

/// Ranked pattern lines per length, ascending. Formatting mirrors the
/// count tables exactly: descending count, lexical tie-break, top-k cut.
pub fn print_patterns(report: &Report, config: &AnalysisConfig) {
    for (n, entries) in report {
        println!("{}", "=".repeat(80));
        println!(
            "Top {} {}-gram patterns (frequency >= {})",
            config.top_k, n, config.min_freq
        );
        println!("{}", "=".repeat(80));

        if entries.is_empty() {
            println!("(No {}-grams with frequency >= {})\n", n, config.min_freq);
            continue;
        }

        for entry in entries {
            println!("{:6}  |  {}", entry.count, entry.phrase);
        }
        println!();
    }
}

pub fn print_summary(analysis: &Analysis) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Length").add_attribute(Attribute::Bold),
        Cell::new("Distinct"),
        Cell::new("Reported"),
        Cell::new("Top count"),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (n, entries) in &analysis.report {
        let distinct = analysis.tables.get(n).map_or(0, |t| t.len());
        let top = entries.first().map_or(0, |e| e.count);

        table.add_row(vec![
            Cell::new(n.to_string()).add_attribute(Attribute::Bold),
            Cell::new(distinct.to_string()),
            Cell::new(entries.len().to_string()),
            Cell::new(top.to_string()),
        ]);
    }

    println!("\n{}", table);
}
