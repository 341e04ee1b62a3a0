use crate::aggregate::CountTable;
use crate::ngram::format_phrase;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub phrase: String,
    pub count: u64,
}

/// Qualifying patterns per length, keyed ascending. Lengths with no
/// survivors map to an explicit empty list so callers can render a
/// "none found" notice instead of skipping the section.
pub type Report = BTreeMap<usize, Vec<ReportEntry>>;

pub fn build_report(tables: &CountTable, min_freq: u64, top_k: usize) -> Report {
    let mut report = Report::new();

    for (&n, table) in tables {
        let mut entries: Vec<ReportEntry> = table
            .iter()
            .filter(|(_, &count)| count >= min_freq)
            .map(|(gram, &count)| ReportEntry {
                phrase: format_phrase(gram),
                count,
            })
            .collect();

        // Descending by count; equal counts fall back to phrase order so
        // repeated runs print identically.
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.phrase.cmp(&b.phrase)));
        entries.truncate(top_k);

        report.insert(n, entries);
    }

    report
}
