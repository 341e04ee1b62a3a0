use anyhow::Result;
use clap::Args;
use notegram_core::api;
use notegram_core::config::AnalysisConfig;
use notegram_core::export::export_csv;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub config: AnalysisConfig,

    /// Destination CSV path.
    #[arg(short, long, default_value = "notes_ngrams.csv")]
    pub out: String,
}

pub fn run(args: &ExportArgs, config: &AnalysisConfig, corpus: &[String]) -> Result<()> {
    let analysis = api::run_analysis(config, corpus)?;

    let written = export_csv(&analysis.tables, config.min_freq, &args.out)?;
    if written == 0 {
        println!(
            "No n-grams to export (no patterns reached frequency {}).",
            config.min_freq
        );
    } else {
        info!("💾 Export complete.");
        println!("Exported {} n-gram patterns to {}", written, args.out);
    }

    Ok(())
}
