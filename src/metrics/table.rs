use std::collections::HashSet;
use std::path::Path;

use crate::input::{InputError, column_index, delimiter_for, open_table, path_display};
use crate::model::metric::Metric;
use crate::model::pair::GenePair;
use crate::model::thresholds::Thresholds;

pub const ANTECEDENT: &str = "antecedent";
pub const CONSEQUENT: &str = "consequent";

/// One antecedent -> consequent rule. `fields` is the row as read, index column first.
#[derive(Debug, Clone, PartialEq)]
pub struct ArRule {
    pub pair: GenePair,
    pub values: [f64; 5],
    pub fields: Vec<String>,
}

impl ArRule {
    pub fn metric(&self, metric: Metric) -> f64 {
        self.values[metric.position()]
    }
}

/// Row-indexed AR metrics table for a single cell population.
#[derive(Debug, Clone, PartialEq)]
pub struct ArMetricsTable {
    pub headers: Vec<String>,
    pub rows: Vec<ArRule>,
}

impl ArMetricsTable {
    /// Builds a table with the canonical column layout; the row index is the row position.
    pub fn from_rules<S: AsRef<str>>(rules: &[(S, S, [f64; 5])]) -> Self {
        let mut headers = vec![
            String::new(),
            ANTECEDENT.to_string(),
            CONSEQUENT.to_string(),
        ];
        headers.extend(Metric::ordered().iter().map(|m| m.as_str().to_string()));

        let rows = rules
            .iter()
            .enumerate()
            .map(|(i, (a, c, values))| {
                let mut fields = vec![
                    i.to_string(),
                    a.as_ref().to_string(),
                    c.as_ref().to_string(),
                ];
                fields.extend(values.iter().map(|v| v.to_string()));
                ArRule {
                    pair: GenePair::new(a.as_ref(), c.as_ref()),
                    values: *values,
                    fields,
                }
            })
            .collect();
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArRule> {
        self.rows.iter()
    }

    /// Keeps rows inside every configured metric's inclusive bounds.
    pub fn filter(&self, thresholds: &Thresholds) -> ArMetricsTable {
        if thresholds.is_identity() {
            return self.clone();
        }
        let rows = self
            .rows
            .iter()
            .filter(|rule| thresholds.accepts(|m| rule.metric(m)))
            .cloned()
            .collect();
        ArMetricsTable {
            headers: self.headers.clone(),
            rows,
        }
    }
}

pub fn load_ar_metrics(path: &Path) -> Result<ArMetricsTable, InputError> {
    let mut reader = open_table(path)?;
    let header_record = reader.headers()?.clone();
    if header_record.len() < 2 {
        return Err(InputError::DataFormat {
            path: path_display(path).to_string(),
            line: 1,
            reason: "expected an index column followed by metric columns".to_string(),
        });
    }

    let antecedent_idx = column_index(&header_record, ANTECEDENT, path)?;
    let consequent_idx = column_index(&header_record, CONSEQUENT, path)?;
    let mut metric_idx = [0usize; 5];
    for metric in Metric::ordered() {
        metric_idx[metric.position()] = column_index(&header_record, metric.as_str(), path)?;
    }

    let mut seen: HashSet<GenePair> = HashSet::new();
    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let line = i + 2;
        let pair = GenePair::new(&record[antecedent_idx], &record[consequent_idx]);
        let mut values = [0f64; 5];
        for metric in Metric::ordered() {
            let raw = record[metric_idx[metric.position()]].trim();
            values[metric.position()] =
                raw.parse::<f64>().map_err(|_| InputError::DataFormat {
                    path: path_display(path).to_string(),
                    line,
                    reason: format!("{metric} is not a number: '{raw}'"),
                })?;
        }
        if !seen.insert(pair.clone()) {
            return Err(InputError::DataFormat {
                path: path_display(path).to_string(),
                line,
                reason: format!("duplicate rule {pair}"),
            });
        }
        rows.push(ArRule {
            pair,
            values,
            fields: record.iter().map(str::to_string).collect(),
        });
    }

    Ok(ArMetricsTable {
        headers: header_record.iter().map(str::to_string).collect(),
        rows,
    })
}

pub fn save_ar_metrics(table: &ArMetricsTable, path: &Path) -> Result<(), InputError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter_for(path))
        .from_path(path)?;
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(&row.fields)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/table.rs"]
mod tests;
