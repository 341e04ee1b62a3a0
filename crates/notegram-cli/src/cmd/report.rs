use crate::reports;
use anyhow::Result;
use clap::Args;
use notegram_core::api;
use notegram_core::config::AnalysisConfig;

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub config: AnalysisConfig,
}

pub fn run(config: &AnalysisConfig, corpus: &[String]) -> Result<()> {
    let analysis = api::run_analysis(config, corpus)?;

    reports::print_patterns(&analysis.report, config);
    reports::print_summary(&analysis);

    Ok(())
}
