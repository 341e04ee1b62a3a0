use itertools::Itertools;

/// An ordered run of adjacent tokens from a single row.
/// Equality is structural: same tokens, same order.
pub type NGram = Vec<String>;

/// Every contiguous window of length `n`, in sliding order, overlapping
/// windows included. Sequences shorter than `n` yield nothing.
pub fn ngrams(tokens: &[String], n: usize) -> Vec<NGram> {
    if n == 0 || tokens.len() < n {
        return Vec::new();
    }
    tokens.windows(n).map(|w| w.to_vec()).collect()
}

pub fn format_phrase(ngram: &[String]) -> String {
    ngram.iter().join(" ")
}
