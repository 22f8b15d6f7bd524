use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::analysis::results::{AnalysisResults, SkippedCombination};

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tool: ToolSummary,
    pub method: String,
    pub from_cache: bool,
    pub populations: usize,
    pub records: usize,
    pub records_per_section: BTreeMap<String, usize>,
    pub skipped: Vec<SkippedCombination>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    pub name: String,
    pub version: String,
}

impl RunSummary {
    pub fn from_results(
        results: &AnalysisResults,
        method: &str,
        from_cache: bool,
        populations: usize,
    ) -> Self {
        Self {
            tool: ToolSummary {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            method: method.to_string(),
            from_cache,
            populations,
            records: results.records.len(),
            records_per_section: results.records_per_section(),
            skipped: results.skipped.clone(),
        }
    }
}

pub fn write_summary(out_dir: &Path, summary: &RunSummary) -> Result<(), std::io::Error> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(out_dir.join("summary.json"), json)
}
