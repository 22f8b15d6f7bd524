use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::input::InputError;
use crate::pipeline::stage3_analyze::AnalysisCtx;
use crate::report::json::{RunSummary, write_summary};
use crate::report::text::render_report;
use crate::report::tsv::write_result_table;

#[derive(Debug, Error)]
pub enum Stage4Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("table error: {0}")]
    Table(#[from] InputError),
}

#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub report: PathBuf,
    pub table: PathBuf,
    pub summary: PathBuf,
}

/// Writes the text report, the flat TSV and `summary.json`.
pub fn run_stage4_report(
    ctx: &AnalysisCtx,
    report_path: &Path,
    table_path: &Path,
    out_dir: &Path,
    from_cache: bool,
) -> Result<ReportPaths, Stage4Error> {
    fs::create_dir_all(out_dir)?;
    for path in [report_path, table_path] {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(report_path, render_report(&ctx.results))?;
    write_result_table(&ctx.results.records, table_path)?;

    let summary = RunSummary::from_results(
        &ctx.results,
        ctx.method.as_str(),
        from_cache,
        ctx.populations,
    );
    write_summary(out_dir, &summary)?;

    Ok(ReportPaths {
        report: report_path.to_path_buf(),
        table: table_path.to_path_buf(),
        summary: out_dir.join("summary.json"),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
