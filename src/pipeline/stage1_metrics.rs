use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::input::{InputError, path_display};
use crate::metrics::{PopulationTables, filter_all, load_dir, save_dir};

#[derive(Debug, Error)]
pub enum Stage1Error {
    #[error("input error: {0}")]
    Input(#[from] InputError),
    #[error("cache {path} is missing populations: {missing}")]
    CacheMismatch { path: String, missing: String },
}

#[derive(Debug, Clone)]
pub struct MetricsCtx {
    pub unfiltered: PopulationTables,
    pub filtered: PopulationTables,
    pub from_cache: bool,
}

impl MetricsCtx {
    pub fn rows(&self) -> (usize, usize) {
        let count = |tables: &PopulationTables| tables.values().map(|t| t.len()).sum();
        (count(&self.unfiltered), count(&self.filtered))
    }
}

/// Loads both cache directories when present; otherwise rebuilds them from
/// `inputs.ar_metrics` with the configured thresholds.
pub fn run_stage1_metrics(config: &Config, refresh: bool) -> Result<MetricsCtx, Stage1Error> {
    let unfiltered_dir = config.edge_style_cache();
    let filtered_dir = config.edge_style_filtered_cache();

    if !refresh && unfiltered_dir.is_dir() && filtered_dir.is_dir() {
        info!(
            edge_style = %unfiltered_dir.display(),
            edge_style_filtered = %filtered_dir.display(),
            "loading cached ar metrics"
        );
        return load_cached(&unfiltered_dir, &filtered_dir);
    }

    let unfiltered = load_dir(&config.inputs.ar_metrics)?;
    let filtered = filter_all(&unfiltered, &config.thresholds);
    save_dir(&unfiltered, &unfiltered_dir)?;
    save_dir(&filtered, &filtered_dir)?;
    Ok(MetricsCtx {
        unfiltered,
        filtered,
        from_cache: false,
    })
}

fn load_cached(unfiltered_dir: &Path, filtered_dir: &Path) -> Result<MetricsCtx, Stage1Error> {
    let unfiltered = load_dir(unfiltered_dir)?;
    let filtered = load_dir(filtered_dir)?;
    if let Some(err) = mismatch(&unfiltered, &filtered, unfiltered_dir, filtered_dir) {
        return Err(err);
    }
    Ok(MetricsCtx {
        unfiltered,
        filtered,
        from_cache: true,
    })
}

/// Both caches are written from the same populations; any difference means a
/// partial write.
fn mismatch(
    unfiltered: &PopulationTables,
    filtered: &PopulationTables,
    unfiltered_dir: &Path,
    filtered_dir: &Path,
) -> Option<Stage1Error> {
    let absent = |from: &PopulationTables, other: &PopulationTables| -> Vec<String> {
        other.keys().filter(|p| !from.contains_key(*p)).cloned().collect()
    };
    [
        (unfiltered_dir, absent(unfiltered, filtered)),
        (filtered_dir, absent(filtered, unfiltered)),
    ]
    .into_iter()
    .find(|(_, missing)| !missing.is_empty())
    .map(|(dir, missing)| Stage1Error::CacheMismatch {
        path: path_display(dir).to_string(),
        missing: missing.join(","),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_metrics.rs"]
mod tests;
