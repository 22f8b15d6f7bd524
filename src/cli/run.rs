use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::config::Config;
use crate::pipeline::stage1_metrics::run_stage1_metrics;
use crate::pipeline::stage2_networks::run_stage2_networks;
use crate::pipeline::stage3_analyze::run_stage3_analyze;
use crate::pipeline::stage4_report::run_stage4_report;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// TOML configuration file
    #[arg(long)]
    pub(crate) config: PathBuf,

    /// Output directory (overrides output.dir)
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,

    /// Rebuild the AR metrics caches even when both exist
    #[arg(long)]
    pub(crate) refresh_cache: bool,
}

pub fn handle(args: RunArgs) -> anyhow::Result<()> {
    let mut config = Config::load(&args.config)?;
    if let Some(out) = args.out {
        config.output.dir = out;
    }
    std::fs::create_dir_all(&config.output.dir)?;

    let start = Instant::now();
    info!(stage = "stage1_metrics", "starting stage");
    let metrics = run_stage1_metrics(&config, args.refresh_cache)?;
    let (unfiltered_rows, filtered_rows) = metrics.rows();
    info!(
        stage = "stage1_metrics",
        elapsed_ms = start.elapsed().as_millis(),
        populations = metrics.filtered.len(),
        unfiltered_rows,
        filtered_rows,
        from_cache = metrics.from_cache,
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage2_networks", "starting stage");
    let networks = run_stage2_networks(&config, config.analysis.include_ppi)?;
    info!(
        stage = "stage2_networks",
        elapsed_ms = start.elapsed().as_millis(),
        networks = networks.networks.len(),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage3_analyze", "starting stage");
    let analysis = run_stage3_analyze(
        &metrics.filtered,
        &networks,
        &config.thresholds,
        config.analysis.method,
    )?;
    info!(
        stage = "stage3_analyze",
        elapsed_ms = start.elapsed().as_millis(),
        method = analysis.method.as_str(),
        populations = analysis.populations,
        records = analysis.results.records.len(),
        skipped = analysis.results.skipped.len(),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage4_report", "starting stage");
    let paths = run_stage4_report(
        &analysis,
        &config.report_path(),
        &config.table_path(),
        &config.output.dir,
        metrics.from_cache,
    )?;
    info!(
        stage = "stage4_report",
        elapsed_ms = start.elapsed().as_millis(),
        report = %paths.report.display(),
        table = %paths.table.display(),
        "finished stage"
    );
    Ok(())
}
