use notegram_core::aggregate::{CountTable, LengthTable};
use notegram_core::report::build_report;

fn table_of(n: usize, entries: &[(&str, u64)]) -> CountTable {
    let mut inner = LengthTable::new();
    for (phrase, count) in entries {
        let gram: Vec<String> = phrase.split(' ').map(str::to_string).collect();
        inner.insert(gram, *count);
    }
    let mut tables = CountTable::new();
    tables.insert(n, inner);
    tables
}

#[test]
fn threshold_is_inclusive() {
    let tables = table_of(2, &[("deep clean", 5), ("quick rinse", 4)]);
    let report = build_report(&tables, 5, 250);

    let entries = &report[&2];
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].phrase, "deep clean");
    assert_eq!(entries[0].count, 5);
}

#[test]
fn descending_by_count_first() {
    let tables = table_of(2, &[("low one", 5), ("high one", 9), ("mid one", 7)]);
    let report = build_report(&tables, 1, 250);

    let phrases: Vec<&str> = report[&2].iter().map(|e| e.phrase.as_str()).collect();
    assert_eq!(phrases, vec!["high one", "mid one", "low one"]);
}

#[test]
fn equal_counts_break_ties_lexically() {
    let tables = table_of(2, &[("zz top", 7), ("aa bb", 7), ("mm nn", 7)]);
    let report = build_report(&tables, 1, 250);

    let phrases: Vec<&str> = report[&2].iter().map(|e| e.phrase.as_str()).collect();
    assert_eq!(phrases, vec!["aa bb", "mm nn", "zz top"]);
}

#[test]
fn top_k_truncates_after_sorting() {
    let tables = table_of(
        2,
        &[("a a", 2), ("b b", 9), ("c c", 5), ("d d", 7), ("e e", 3)],
    );
    let report = build_report(&tables, 1, 2);

    let phrases: Vec<&str> = report[&2].iter().map(|e| e.phrase.as_str()).collect();
    assert_eq!(phrases, vec!["b b", "d d"]);
}

#[test]
fn filtered_out_lengths_stay_in_the_report() {
    let mut tables = table_of(2, &[("rare pair", 1)]);
    tables.insert(3, LengthTable::new());

    let report = build_report(&tables, 5, 250);

    // Explicit empty lists, not omitted keys.
    assert!(report[&2].is_empty());
    assert!(report[&3].is_empty());
    assert_eq!(report.len(), 2);
}

#[test]
fn report_iterates_lengths_in_ascending_order() {
    let mut tables = table_of(4, &[("a b c d", 6)]);
    tables.extend(table_of(2, &[("a b", 6)]));
    tables.extend(table_of(3, &[("a b c", 6)]));

    let report = build_report(&tables, 1, 250);
    let lengths: Vec<usize> = report.keys().copied().collect();
    assert_eq!(lengths, vec![2, 3, 4]);
}
