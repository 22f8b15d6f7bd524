use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::input::{InputError, is_table_file, path_display, table_stem};
use crate::metrics::table::{ArMetricsTable, load_ar_metrics, save_ar_metrics};
use crate::model::thresholds::Thresholds;

/// AR metrics tables keyed by cell population id.
pub type PopulationTables = BTreeMap<String, ArMetricsTable>;

/// Loads every table file in `dir`; the file stem is the population id.
pub fn load_dir(dir: &Path) -> Result<PopulationTables, InputError> {
    if !dir.is_dir() {
        return Err(InputError::MissingFile(path_display(dir).to_string()));
    }
    let mut files = list_table_files(dir)?;
    files.sort();

    let mut tables = PopulationTables::new();
    for file in files {
        let Some(population) = table_stem(&file) else {
            continue;
        };
        let table = load_ar_metrics(&file)?;
        debug!(population = %population, rows = table.len(), "loaded ar metrics");
        if tables.insert(population.clone(), table).is_some() {
            return Err(InputError::DataFormat {
                path: path_display(&file).to_string(),
                line: 0,
                reason: format!("population {population} appears in more than one file"),
            });
        }
    }

    if tables.is_empty() {
        return Err(InputError::EmptyInput(path_display(dir).to_string()));
    }
    Ok(tables)
}

/// Writes one `<population>.csv` per table, creating `dir` when needed.
pub fn save_dir(tables: &PopulationTables, dir: &Path) -> Result<(), InputError> {
    fs::create_dir_all(dir)?;
    for (population, table) in tables {
        save_ar_metrics(table, &dir.join(format!("{population}.csv")))?;
    }
    Ok(())
}

pub fn filter_all(tables: &PopulationTables, thresholds: &Thresholds) -> PopulationTables {
    tables
        .iter()
        .map(|(population, table)| (population.clone(), table.filter(thresholds)))
        .collect()
}

fn list_table_files(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_table_file(&path) {
            files.push(path);
        }
    }
    Ok(files)
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/store.rs"]
mod tests;
