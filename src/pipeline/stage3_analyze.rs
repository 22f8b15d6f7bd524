use thiserror::Error;

use crate::analysis::InteractionTypeAnalyzer;
use crate::analysis::results::AnalysisResults;
use crate::metrics::{PopulationTables, filter_all};
use crate::model::thresholds::Thresholds;
use crate::pipeline::stage2_networks::NetworksCtx;
use crate::stats::TestMethod;

#[derive(Debug, Error)]
pub enum Stage3Error {
    #[error("no cell populations to analyze")]
    NoPopulations,
}

#[derive(Debug, Clone)]
pub struct AnalysisCtx {
    pub results: AnalysisResults,
    pub method: TestMethod,
    pub populations: usize,
}

/// Re-applies `thresholds` and runs every analyzer task per population.
pub fn run_stage3_analyze(
    filtered: &PopulationTables,
    networks: &NetworksCtx,
    thresholds: &Thresholds,
    method: TestMethod,
) -> Result<AnalysisCtx, Stage3Error> {
    if filtered.is_empty() {
        return Err(Stage3Error::NoPopulations);
    }
    let tables = filter_all(filtered, thresholds);
    let results = InteractionTypeAnalyzer::new(&networks.networks)
        .with_method(method)
        .run(&tables);
    Ok(AnalysisCtx {
        results,
        method,
        populations: tables.len(),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_analyze.rs"]
mod tests;
