use crate::ngram::{ngrams, NGram};
use crate::tokenizer::Tokenizer;
use rayon::prelude::*;
use std::collections::HashMap;
use std::ops::RangeInclusive;
use tracing::debug;

pub type LengthTable = HashMap<NGram, u64>;

/// Occurrence counts keyed by n-gram, one table per configured length.
/// Every length in the range has an entry, present even when empty.
pub type CountTable = HashMap<usize, LengthTable>;

pub fn empty_table(lengths: RangeInclusive<usize>) -> CountTable {
    lengths.map(|n| (n, LengthTable::new())).collect()
}

/// Single pass over the corpus: tokenize each row once, then update
/// every configured length's table. Counts are exact.
pub fn aggregate(
    rows: &[String],
    tokenizer: &Tokenizer,
    lengths: RangeInclusive<usize>,
) -> CountTable {
    let mut tables = empty_table(lengths.clone());

    for row in rows {
        let tokens = tokenizer.tokenize(row);
        if tokens.is_empty() {
            continue;
        }
        for n in lengths.clone() {
            let table = tables.entry(n).or_default();
            for gram in ngrams(&tokens, n) {
                *table.entry(gram).or_default() += 1;
            }
        }
    }

    debug!(
        "Aggregated {} rows into {} length tables",
        rows.len(),
        tables.len()
    );
    tables
}

const PAR_CHUNK: usize = 512;

/// Chunked variant for large corpora. Addition is commutative, so the
/// merged table equals the serial result for the same input.
pub fn aggregate_parallel(
    rows: &[String],
    tokenizer: &Tokenizer,
    lengths: RangeInclusive<usize>,
) -> CountTable {
    rows.par_chunks(PAR_CHUNK)
        .map(|chunk| aggregate(chunk, tokenizer, lengths.clone()))
        .reduce(|| empty_table(lengths.clone()), merge_tables)
}

fn merge_tables(mut into: CountTable, from: CountTable) -> CountTable {
    for (n, table) in from {
        let dst = into.entry(n).or_default();
        for (gram, count) in table {
            *dst.entry(gram).or_default() += count;
        }
    }
    into
}
