use crate::aggregate::CountTable;
use crate::error::NgResult;
use crate::ngram::format_phrase;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ExportRow {
    n: usize,
    phrase: String,
    count: u64,
}

/// Dumps every n-gram meeting `min_freq` to a CSV with columns
/// `n,phrase,count`, sorted ascending by `n` then descending by count.
/// Returns the number of rows written. With zero qualifying rows no
/// file is created and `Ok(0)` is returned; the caller prints a notice.
pub fn export_csv<P: AsRef<Path>>(
    tables: &CountTable,
    min_freq: u64,
    path: P,
) -> NgResult<usize> {
    let mut rows: Vec<ExportRow> = Vec::new();
    for (&n, table) in tables {
        for (gram, &count) in table {
            if count >= min_freq {
                rows.push(ExportRow {
                    n,
                    phrase: format_phrase(gram),
                    count,
                });
            }
        }
    }

    if rows.is_empty() {
        return Ok(0);
    }

    rows.sort_by(|a, b| {
        a.n.cmp(&b.n)
            .then(b.count.cmp(&a.count))
            .then_with(|| a.phrase.cmp(&b.phrase))
    });

    let mut wtr = csv::Writer::from_path(path)?;
    for row in &rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    Ok(rows.len())
}
