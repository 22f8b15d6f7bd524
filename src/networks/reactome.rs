use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use crate::input::{InputError, column_index, open_reader, open_table, path_display};
use crate::model::pair::GenePair;
use crate::networks::NetworkTable;

pub const GENE1: &str = "Gene1";
pub const GENE2: &str = "Gene2";
pub const DIRECTION: &str = "Direction";

#[derive(Debug, Clone, PartialEq)]
pub struct GeneSet {
    pub name: String,
    pub description: Option<String>,
    pub genes: Vec<String>,
}

pub fn read_gmt(path: &Path) -> Result<Vec<GeneSet>, InputError> {
    let reader = open_reader(path)?;
    let mut sets = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.trim_end_matches('\r').split('\t').collect();
        if parts.len() < 3 {
            return Err(InputError::DataFormat {
                path: path_display(path).to_string(),
                line: i + 1,
                reason: "gene set needs a name, a description and at least one gene".to_string(),
            });
        }
        let description = if parts[1].is_empty() {
            None
        } else {
            Some(parts[1].to_string())
        };
        let genes = parts[2..]
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        sets.push(GeneSet {
            name: parts[0].to_string(),
            description,
            genes,
        });
    }
    if sets.is_empty() {
        return Err(InputError::EmptyInput(path_display(path).to_string()));
    }
    Ok(sets)
}

pub fn gene_universe(sets: &[GeneSet]) -> HashSet<&str> {
    sets.iter()
        .flat_map(|s| s.genes.iter().map(String::as_str))
        .collect()
}

/// Forward form of a reverse arrow (`<-` -> `->`, `|-` -> `-|`).
pub fn forward_direction(direction: &str) -> Option<&'static str> {
    match direction {
        "<-" => Some("->"),
        "|-" => Some("-|"),
        _ => None,
    }
}

/// Gene1 -> Gene2 pairs with a `Direction` label, restricted to genes that occur
/// in the gene-set file. Reverse arrows are flipped so the key reads source -> target.
pub fn read_reactome_network(
    gmt_path: &Path,
    interaction_path: &Path,
) -> Result<NetworkTable, InputError> {
    let sets = read_gmt(gmt_path)?;
    let universe = gene_universe(&sets);

    let mut reader = open_table(interaction_path)?;
    let headers = reader.headers()?.clone();
    let g1_idx = column_index(&headers, GENE1, interaction_path)?;
    let g2_idx = column_index(&headers, GENE2, interaction_path)?;
    let dir_idx = column_index(&headers, DIRECTION, interaction_path)?;

    let columns = headers.iter().map(|h| h.trim().to_string()).collect();
    let mut table = NetworkTable::new("reactome", GENE1, GENE2, columns);
    let mut outside = 0usize;
    let mut flipped = 0usize;
    for record in reader.records() {
        let record = record?;
        let mut fields: Vec<String> = record.iter().map(|f| f.trim().to_string()).collect();
        if !universe.contains(fields[g1_idx].as_str())
            || !universe.contains(fields[g2_idx].as_str())
        {
            outside += 1;
            continue;
        }
        if let Some(forward) = forward_direction(&fields[dir_idx]) {
            fields.swap(g1_idx, g2_idx);
            fields[dir_idx] = forward.to_string();
            flipped += 1;
        }
        let pair = GenePair::new(fields[g1_idx].as_str(), fields[g2_idx].as_str());
        table.push(pair, fields);
    }

    debug!(
        rows = table.len(),
        outside,
        flipped,
        gene_sets = sets.len(),
        "reactome network loaded"
    );
    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/src_inline/networks/reactome.rs"]
mod tests;
