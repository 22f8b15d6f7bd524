use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use crate::input::{InputError, open_reader, open_table, path_display};
use crate::model::pair::GenePair;
use crate::networks::NetworkTable;

pub const GENE1: &str = "Gene1";
pub const GENE2: &str = "Gene2";
const SYMBOL_COLUMN: &str = "preferred_name";
const SCORE_COLUMN: &str = "combined_score";

/// Protein id (first column) -> gene symbol (`preferred_name`, else the second column).
pub fn read_ppi_mapping(path: &Path) -> Result<HashMap<String, String>, InputError> {
    let mut reader = open_table(path)?;
    let headers = reader.headers()?.clone();
    if headers.len() < 2 {
        return Err(InputError::DataFormat {
            path: path_display(path).to_string(),
            line: 1,
            reason: "mapping needs a protein id column and a symbol column".to_string(),
        });
    }
    let symbol_idx = headers
        .iter()
        .position(|h| h.trim() == SYMBOL_COLUMN)
        .unwrap_or(1);

    let mut mapping = HashMap::new();
    for record in reader.records() {
        let record = record?;
        let id = record[0].trim();
        let symbol = record[symbol_idx].trim();
        if id.is_empty() || symbol.is_empty() {
            continue;
        }
        mapping.entry(id.to_string()).or_insert_with(|| symbol.to_string());
    }
    if mapping.is_empty() {
        return Err(InputError::EmptyInput(path_display(path).to_string()));
    }
    Ok(mapping)
}

/// Whitespace-separated `protein1 protein2 [score..]` links mapped to gene symbols.
/// Links with an unmapped protein are dropped. No label column is produced.
pub fn read_ppi_network(ppi_path: &Path, mapping_path: &Path) -> Result<NetworkTable, InputError> {
    let mapping = read_ppi_mapping(mapping_path)?;
    let mut reader = open_reader(ppi_path)?;

    let mut header_line = String::new();
    if reader.read_line(&mut header_line)? == 0 {
        return Err(InputError::EmptyInput(path_display(ppi_path).to_string()));
    }
    let header: Vec<&str> = header_line.split_whitespace().collect();
    if header.len() < 2 {
        return Err(InputError::DataFormat {
            path: path_display(ppi_path).to_string(),
            line: 1,
            reason: "expected at least two protein columns".to_string(),
        });
    }
    let score_idx = header.iter().position(|h| *h == SCORE_COLUMN);

    let mut columns = vec![GENE1.to_string(), GENE2.to_string()];
    if score_idx.is_some() {
        columns.push(SCORE_COLUMN.to_string());
    }
    let mut table = NetworkTable::new("ppi", GENE1, GENE2, columns);

    let mut unmapped = 0usize;
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }
        if parts.len() < header.len() {
            return Err(InputError::DataFormat {
                path: path_display(ppi_path).to_string(),
                line: i + 2,
                reason: format!("expected {} fields, found {}", header.len(), parts.len()),
            });
        }
        let (Some(g1), Some(g2)) = (mapping.get(parts[0]), mapping.get(parts[1])) else {
            unmapped += 1;
            continue;
        };
        let mut fields = vec![g1.clone(), g2.clone()];
        if let Some(idx) = score_idx {
            fields.push(parts[idx].to_string());
        }
        table.push(GenePair::new(g1.as_str(), g2.as_str()), fields);
    }

    debug!(rows = table.len(), unmapped, "ppi network loaded");
    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/src_inline/networks/ppi.rs"]
mod tests;
