use std::collections::HashMap;

use crate::metrics::{ArMetricsTable, ArRule};
use crate::model::pair::GenePair;
use crate::networks::{NetworkRow, NetworkTable};

/// AR rule matched to the first network row carrying the same ordered pair.
#[derive(Debug, Clone, Copy)]
pub struct JoinedRow<'a> {
    pub rule: &'a ArRule,
    pub network_row: &'a NetworkRow,
}

/// Inner join on the exact ordered pair, keeping AR row order. Duplicate
/// network rows resolve to their first occurrence.
pub fn join<'a>(ar: &'a ArMetricsTable, network: &'a NetworkTable) -> Vec<JoinedRow<'a>> {
    let first = network.first_occurrence();
    ar.iter()
        .filter_map(|rule| {
            first.get(&rule.pair).map(|&row| JoinedRow {
                rule,
                network_row: &network.rows[row],
            })
        })
        .collect()
}

/// Label value for every joined row, looked up through the keep-first
/// pair -> label map of the network. Rows whose label is blank are left out.
pub fn attach_labels<'a>(
    joined: &[JoinedRow<'a>],
    labels: &HashMap<&'a GenePair, &'a str>,
) -> Vec<(&'a ArRule, &'a str)> {
    joined
        .iter()
        .filter_map(|row| {
            let label = *labels.get(&row.rule.pair)?;
            if label.trim().is_empty() {
                None
            } else {
                Some((row.rule, label))
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/analysis/join.rs"]
mod tests;
