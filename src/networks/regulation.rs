use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use crate::input::{InputError, column_index, open_reader, open_table, path_display};
use crate::model::pair::GenePair;
use crate::networks::NetworkTable;

pub const TF: &str = "TF";
pub const TARGET: &str = "Target";
pub const TYPE: &str = "Type";
pub const UP_DOWN: &str = "Up_or_Down_or_Unknown";

/// One symbol per line, first tab-separated field; blank and `#` lines skipped.
pub fn read_tf_list(path: &Path) -> Result<HashSet<String>, InputError> {
    let reader = open_reader(path)?;
    let mut symbols = HashSet::new();
    for line in reader.lines() {
        let line = line?;
        let value = line.trim_end_matches(['\n', '\r']);
        if value.trim().is_empty() || value.starts_with('#') {
            continue;
        }
        let symbol = value.split('\t').next().unwrap_or("").trim();
        if !symbol.is_empty() {
            symbols.insert(symbol.to_string());
        }
    }
    if symbols.is_empty() {
        return Err(InputError::EmptyInput(path_display(path).to_string()));
    }
    Ok(symbols)
}

/// TF -> Target pairs restricted to regulators in the TF list. All source
/// columns are kept in their original order.
pub fn read_regulation_network(
    tf_path: &Path,
    interaction_path: &Path,
) -> Result<NetworkTable, InputError> {
    let tfs = read_tf_list(tf_path)?;

    let mut reader = open_table(interaction_path)?;
    let headers = reader.headers()?.clone();
    let tf_idx = column_index(&headers, TF, interaction_path)?;
    let target_idx = column_index(&headers, TARGET, interaction_path)?;
    column_index(&headers, TYPE, interaction_path)?;
    column_index(&headers, UP_DOWN, interaction_path)?;

    let columns = headers.iter().map(|h| h.trim().to_string()).collect();
    let mut table = NetworkTable::new("tf", TF, TARGET, columns);
    let mut dropped = 0usize;
    for record in reader.records() {
        let record = record?;
        let tf = record[tf_idx].trim();
        if !tfs.contains(tf) {
            dropped += 1;
            continue;
        }
        let fields: Vec<String> = record.iter().map(|f| f.trim().to_string()).collect();
        table.push(GenePair::new(tf, record[target_idx].trim()), fields);
    }

    debug!(
        rows = table.len(),
        dropped,
        tfs = tfs.len(),
        "regulation network loaded"
    );
    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/src_inline/networks/regulation.rs"]
mod tests;
