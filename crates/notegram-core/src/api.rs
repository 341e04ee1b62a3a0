use crate::aggregate::{aggregate, aggregate_parallel, CountTable};
use crate::config::AnalysisConfig;
use crate::error::NgResult;
use crate::report::{build_report, Report};
use crate::tokenizer::Tokenizer;
use crate::util::corpus_fingerprint;
use tracing::{debug, info};

/// Everything one run produces: the final count tables plus the
/// filtered, ranked report built from them.
pub struct Analysis {
    pub rows: usize,
    pub fingerprint: String,
    pub tables: CountTable,
    pub report: Report,
}

/// Full pipeline over an already-fetched corpus: validate, aggregate,
/// rank. The count tables are final once this returns.
pub fn run_analysis(config: &AnalysisConfig, corpus: &[String]) -> NgResult<Analysis> {
    config.validate()?;

    let tokenizer = Tokenizer::new(config);
    let fingerprint = corpus_fingerprint(corpus);
    debug!("Corpus fingerprint: {}", fingerprint);

    let tables = if config.parallel {
        aggregate_parallel(corpus, &tokenizer, config.lengths())
    } else {
        aggregate(corpus, &tokenizer, config.lengths())
    };

    let distinct: usize = tables.values().map(|t| t.len()).sum();
    info!(
        "📊 Counted {} distinct patterns across lengths {}..={}",
        distinct, config.min_len, config.max_len
    );

    let report = build_report(&tables, config.min_freq, config.top_k);

    Ok(Analysis {
        rows: corpus.len(),
        fingerprint,
        tables,
        report,
    })
}
