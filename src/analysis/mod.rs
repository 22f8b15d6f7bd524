//! Interaction-type analysis: join AR rules to reference networks, split the
//! joined rules by label value and test every AR metric in-group vs out-group.

pub mod join;
pub mod results;
pub mod tasks;

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;
use tracing::{debug, warn};

use crate::analysis::join::{JoinedRow, attach_labels, join};
use crate::analysis::results::{AnalysisResults, ResultRecord};
use crate::analysis::tasks::{LabelTask, default_tasks};
use crate::metrics::{ArMetricsTable, ArRule};
use crate::model::metric::Metric;
use crate::networks::{NetworkMap, NetworkTable};
use crate::stats::{StatsError, TestMethod, compare};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("network '{0}' is not loaded")]
    MissingNetwork(String),
    #[error("network '{network}' has no column '{column}'")]
    MissingLabelColumn { network: String, column: String },
    #[error("{metric} is missing for rule {pair}")]
    MissingMetric { metric: Metric, pair: String },
    #[error("statistics error: {0}")]
    Stats(#[from] StatsError),
}

pub struct InteractionTypeAnalyzer<'a> {
    networks: &'a NetworkMap,
    tasks: Vec<LabelTask>,
    metrics: Vec<Metric>,
    method: TestMethod,
}

impl<'a> InteractionTypeAnalyzer<'a> {
    pub fn new(networks: &'a NetworkMap) -> Self {
        Self {
            networks,
            tasks: default_tasks(),
            metrics: Metric::ordered().to_vec(),
            method: TestMethod::default(),
        }
    }

    pub fn with_tasks(mut self, tasks: Vec<LabelTask>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn with_method(mut self, method: TestMethod) -> Self {
        self.method = method;
        self
    }

    pub fn run(&self, populations: &BTreeMap<String, ArMetricsTable>) -> AnalysisResults {
        let mut results = AnalysisResults::new();
        for (population, table) in populations {
            self.analyze_population(population, table, &mut results);
        }
        results
    }

    /// Runs every task for one population. A failing task is recorded as
    /// skipped and never stops the remaining tasks.
    pub fn analyze_population(
        &self,
        population: &str,
        table: &ArMetricsTable,
        results: &mut AnalysisResults,
    ) {
        let mut joined: BTreeMap<&str, Vec<JoinedRow<'_>>> = BTreeMap::new();

        for task in &self.tasks {
            let Some(network) = self.networks.get(&task.network) else {
                let err = AnalysisError::MissingNetwork(task.network.clone());
                self.skip(population, task, table, None, 0, &err, results);
                continue;
            };
            let rows = joined
                .entry(task.network.as_str())
                .or_insert_with(|| join(table, network));

            match self.test_task(population, task, network, rows) {
                Ok(records) => {
                    debug!(
                        population,
                        section = task.section.as_str(),
                        joined_rows = rows.len(),
                        records = records.len(),
                        "section tested"
                    );
                    results.push_section(population, &task.section, records);
                }
                Err(err) => {
                    let n_joined = rows.len();
                    self.skip(
                        population,
                        task,
                        table,
                        Some(network),
                        n_joined,
                        &err,
                        results,
                    );
                }
            }
        }
    }

    /// All records for one task, or the first error. Nothing is committed on error.
    fn test_task(
        &self,
        population: &str,
        task: &LabelTask,
        network: &NetworkTable,
        joined: &[JoinedRow<'_>],
    ) -> Result<Vec<ResultRecord>, AnalysisError> {
        let labels = network.first_labels(&task.label_column).ok_or_else(|| {
            AnalysisError::MissingLabelColumn {
                network: network.name.clone(),
                column: task.label_column.clone(),
            }
        })?;
        let labelled = attach_labels(joined, &labels);
        self.check_metrics(&labelled)?;

        let values: BTreeSet<&str> = labelled.iter().map(|(_, label)| *label).collect();
        let mut records = Vec::new();
        for &metric in &self.metrics {
            for &value in &values {
                let (group_in, group_out) = partition(&labelled, metric, value);
                if group_in.is_empty() || group_out.is_empty() {
                    continue;
                }
                let p_value = compare(&group_in, &group_out, self.method)?;
                records.push(ResultRecord {
                    population: population.to_string(),
                    network: task.section.clone(),
                    metric,
                    label: value.to_string(),
                    p_value,
                });
            }
        }
        Ok(records)
    }

    fn check_metrics(&self, labelled: &[(&ArRule, &str)]) -> Result<(), AnalysisError> {
        for (rule, _) in labelled {
            for &metric in &self.metrics {
                if rule.metric(metric).is_nan() {
                    return Err(AnalysisError::MissingMetric {
                        metric,
                        pair: rule.pair.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn skip(
        &self,
        population: &str,
        task: &LabelTask,
        table: &ArMetricsTable,
        network: Option<&NetworkTable>,
        joined_rows: usize,
        err: &AnalysisError,
        results: &mut AnalysisResults,
    ) {
        warn!(
            population,
            section = task.section.as_str(),
            label_column = task.label_column.as_str(),
            ar_rows = table.len(),
            network_rows = network.map(NetworkTable::len).unwrap_or(0),
            joined_rows,
            error = %err,
            "skipping combination"
        );
        results.push_skipped(population, &task.section, err.to_string());
    }
}

/// Metric values of rows labelled `value` and of all other rows.
pub fn partition(
    labelled: &[(&ArRule, &str)],
    metric: Metric,
    value: &str,
) -> (Vec<f64>, Vec<f64>) {
    let mut group_in = Vec::new();
    let mut group_out = Vec::new();
    for (rule, label) in labelled {
        if *label == value {
            group_in.push(rule.metric(metric));
        } else {
            group_out.push(rule.metric(metric));
        }
    }
    (group_in, group_out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/analysis/mod.rs"]
mod tests;
