use std::path::Path;

use crate::analysis::results::ResultRecord;
use crate::input::{InputError, column_index, open_reader, path_display};
use crate::report::text::format_p_value;

pub const HEADER: [&str; 5] = [
    "cell_type",
    "interaction_database",
    "metrics",
    "interaction_type",
    "pval",
];

/// Tab-separated, one row per record, no index column.
pub fn write_result_table(records: &[ResultRecord], path: &Path) -> Result<(), InputError> {
    let mut writer = csv::WriterBuilder::new().delimiter(b'\t').from_path(path)?;
    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record([
            record.population.as_str(),
            record.network.as_str(),
            record.metric.as_str(),
            record.label.as_str(),
            format_p_value(record.p_value).as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads a table written by [`write_result_table`]; columns are found by name.
pub fn read_result_table(path: &Path) -> Result<Vec<ResultRecord>, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_reader(open_reader(path)?);
    let headers = reader.headers()?.clone();
    let idx: Vec<usize> = HEADER
        .iter()
        .map(|c| column_index(&headers, c, path))
        .collect::<Result<_, _>>()?;

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row?;
        let bad_row = |reason: String| InputError::DataFormat {
            path: path_display(path).to_string(),
            line: i + 2,
            reason,
        };
        let metric = row[idx[2]].parse().map_err(bad_row)?;
        let p_value = row[idx[4]]
            .parse::<f64>()
            .map_err(|e| bad_row(format!("pval: {e}")))?;
        records.push(ResultRecord {
            population: row[idx[0]].to_string(),
            network: row[idx[1]].to_string(),
            metric,
            label: row[idx[3]].to_string(),
            p_value,
        });
    }
    Ok(records)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/tsv.rs"]
mod tests;
