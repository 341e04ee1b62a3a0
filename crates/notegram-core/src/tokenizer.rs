use crate::config::AnalysisConfig;
use std::collections::HashSet;

/// Normalizes a raw text row into a filtered token sequence.
///
/// Lowercases the input, keeps maximal runs of the allowed character
/// class (ascii lowercase, digits, plus the configured extra symbols)
/// and drops stopwords. Everything else acts as a separator and is
/// discarded.
pub struct Tokenizer {
    stopwords: HashSet<String>,
    extra: Vec<char>,
}

impl Tokenizer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            stopwords: config.get_stopwords(),
            extra: config.get_extra_symbols(),
        }
    }

    fn is_token_char(&self, c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || self.extra.contains(&c)
    }

    /// Never fails: malformed or empty input yields an empty sequence.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        let mut tokens = Vec::new();
        let mut current = String::new();

        for c in lowered.chars() {
            if self.is_token_char(c) {
                current.push(c);
            } else {
                self.flush(&mut current, &mut tokens);
            }
        }
        self.flush(&mut current, &mut tokens);

        tokens
    }

    fn flush(&self, current: &mut String, tokens: &mut Vec<String>) {
        if current.is_empty() {
            return;
        }
        if self.stopwords.contains(current.as_str()) {
            current.clear();
        } else {
            tokens.push(std::mem::take(current));
        }
    }
}
