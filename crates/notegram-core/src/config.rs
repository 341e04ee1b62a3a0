use crate::error::{NgResult, NotegramError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

/// Filler words dropped during tokenization so that
/// "shampoo and groom" counts together with "shampoo groom".
pub const DEFAULT_STOPWORDS: &str =
    "and,&,with,the,a,an,to,of,for,on,in,at,by,from,is,are,was,were,be,cc";

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Shortest n-gram length to count.
    #[arg(long, default_value_t = 2)]
    pub min_len: usize,

    /// Longest n-gram length to count.
    #[arg(long, default_value_t = 6)]
    pub max_len: usize,

    /// Minimum occurrences for a pattern to be reported.
    #[arg(long, default_value_t = 5)]
    pub min_freq: u64,

    /// Patterns listed per length in the console report.
    #[arg(long, default_value_t = 250)]
    pub top_k: usize,

    /// Cap on rows fetched from the source. Unbounded when absent.
    #[arg(long)]
    pub max_rows: Option<u64>,

    /// Comma-separated tokens dropped before n-gram construction.
    #[arg(long, default_value = DEFAULT_STOPWORDS)]
    pub stopwords: String,

    /// Characters kept inside tokens besides ascii lowercase and digits.
    #[arg(long, default_value = "$")]
    pub extra_symbols: String,

    /// Aggregate row chunks on the rayon pool instead of one serial pass.
    #[arg(long, default_value_t = false)]
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_len: 2,
            max_len: 6,
            min_freq: 5,
            top_k: 250,
            max_rows: None,
            stopwords: DEFAULT_STOPWORDS.to_string(),
            extra_symbols: "$".to_string(),
            parallel: false,
        }
    }
}

impl AnalysisConfig {
    pub fn lengths(&self) -> RangeInclusive<usize> {
        self.min_len..=self.max_len
    }

    pub fn get_stopwords(&self) -> HashSet<String> {
        self.stopwords
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn get_extra_symbols(&self) -> Vec<char> {
        self.extra_symbols
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    }

    /// Runs before any corpus fetch. A bad range would otherwise just
    /// produce empty tables and an empty report.
    pub fn validate(&self) -> NgResult<()> {
        if self.min_len == 0 {
            return Err(NotegramError::Config(
                "--min-len must be a positive integer".to_string(),
            ));
        }
        if self.min_len > self.max_len {
            return Err(NotegramError::Config(format!(
                "--min-len ({}) exceeds --max-len ({})",
                self.min_len, self.max_len
            )));
        }
        if self.min_freq == 0 {
            return Err(NotegramError::Config(
                "--min-freq must be a positive integer".to_string(),
            ));
        }
        if self.top_k == 0 {
            return Err(NotegramError::Config(
                "--top-k must be a positive integer".to_string(),
            ));
        }
        if self.max_rows == Some(0) {
            return Err(NotegramError::Config(
                "--max-rows must be a positive integer when set".to_string(),
            ));
        }
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> NgResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn merge_from_cli(&mut self, cli_config: &AnalysisConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_config.$field.clone();
                }
            };
        }

        update_if_present!(min_len, "min_len");
        update_if_present!(max_len, "max_len");
        update_if_present!(min_freq, "min_freq");
        update_if_present!(top_k, "top_k");
        update_if_present!(max_rows, "max_rows");
        update_if_present!(stopwords, "stopwords");
        update_if_present!(extra_symbols, "extra_symbols");
        update_if_present!(parallel, "parallel");
    }
}
