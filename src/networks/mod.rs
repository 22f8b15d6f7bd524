pub mod integration;
pub mod ppi;
pub mod reactome;
pub mod regulation;

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::model::pair::GenePair;

/// Reference networks keyed by name (`tf`, `reactome`, optionally `ppi`).
pub type NetworkMap = BTreeMap<String, NetworkTable>;

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkRow {
    pub pair: GenePair,
    pub fields: Vec<String>,
}

/// Reference network normalized to ordered-pair keys. `columns` names every
/// field of a row, the two key columns included.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkTable {
    pub name: String,
    pub source_column: String,
    pub target_column: String,
    pub columns: Vec<String>,
    pub rows: Vec<NetworkRow>,
}

impl NetworkTable {
    pub fn new(
        name: &str,
        source_column: &str,
        target_column: &str,
        columns: Vec<String>,
    ) -> Self {
        Self {
            name: name.to_string(),
            source_column: source_column.to_string(),
            target_column: target_column.to_string(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, pair: GenePair, fields: Vec<String>) {
        self.rows.push(NetworkRow { pair, fields });
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Columns other than the two key columns.
    pub fn label_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|c| *c != self.source_column && *c != self.target_column)
            .collect()
    }

    pub fn distinct_pairs(&self) -> usize {
        self.rows.iter().map(|r| &r.pair).collect::<HashSet<_>>().len()
    }

    /// Row position of the first occurrence of every pair.
    pub fn first_occurrence(&self) -> HashMap<&GenePair, usize> {
        let mut index = HashMap::with_capacity(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            index.entry(&row.pair).or_insert(i);
        }
        index
    }

    /// Pair -> label lookup after keep-first deduplication on the pair key.
    pub fn first_labels(&self, label_column: &str) -> Option<HashMap<&GenePair, &str>> {
        let idx = self.column_index(label_column)?;
        Some(
            self.first_occurrence()
                .into_iter()
                .map(|(pair, row)| (pair, self.rows[row].fields[idx].as_str()))
                .collect(),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/networks/mod.rs"]
mod tests;
