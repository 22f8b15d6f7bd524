use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::metric::Metric;

/// Flat result row: one p-value for one (population, section, metric, label).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    pub population: String,
    pub network: String,
    pub metric: Metric,
    pub label: String,
    pub p_value: f64,
}

impl ResultRecord {
    /// `<metric>_<label>`, the key used in the nested result.
    pub fn key(&self) -> String {
        metric_label_key(self.metric, &self.label)
    }
}

pub fn metric_label_key(metric: Metric, label: &str) -> String {
    format!("{}_{}", metric.as_str(), label)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionResult {
    pub name: String,
    pub entries: Vec<(String, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopulationResult {
    pub population: String,
    pub sections: Vec<SectionResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedCombination {
    pub population: String,
    pub section: String,
    pub reason: String,
}

/// Nested view (population -> section -> key -> p-value) and flat record list.
/// Both are filled from the same calls and stay in step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisResults {
    pub nested: Vec<PopulationResult>,
    pub records: Vec<ResultRecord>,
    pub skipped: Vec<SkippedCombination>,
}

impl AnalysisResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a completed section; an empty `records` list still opens the section.
    pub fn push_section(&mut self, population: &str, section: &str, records: Vec<ResultRecord>) {
        let entries = records.iter().map(|r| (r.key(), r.p_value)).collect();
        let population_result = self.population_mut(population);
        population_result.sections.push(SectionResult {
            name: section.to_string(),
            entries,
        });
        self.records.extend(records);
    }

    pub fn push_skipped(&mut self, population: &str, section: &str, reason: String) {
        self.skipped.push(SkippedCombination {
            population: population.to_string(),
            section: section.to_string(),
            reason,
        });
    }

    pub fn nested_len(&self) -> usize {
        self.nested
            .iter()
            .flat_map(|p| p.sections.iter())
            .map(|s| s.entries.len())
            .sum()
    }

    pub fn section(&self, population: &str, section: &str) -> Option<&SectionResult> {
        self.nested
            .iter()
            .find(|p| p.population == population)?
            .sections
            .iter()
            .find(|s| s.name == section)
    }

    pub fn records_per_section(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.network.clone()).or_insert(0) += 1;
        }
        counts
    }

    fn population_mut(&mut self, population: &str) -> &mut PopulationResult {
        let pos = match self.nested.iter().position(|p| p.population == population) {
            Some(pos) => pos,
            None => {
                self.nested.push(PopulationResult {
                    population: population.to_string(),
                    sections: Vec::new(),
                });
                self.nested.len() - 1
            }
        };
        &mut self.nested[pos]
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/analysis/results.rs"]
mod tests;
