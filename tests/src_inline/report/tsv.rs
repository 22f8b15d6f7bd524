use super::*;
use crate::model::metric::Metric;
use std::fs;
use tempfile::tempdir;

fn records() -> Vec<ResultRecord> {
    vec![
        ResultRecord {
            population: "Bcell".to_string(),
            network: "reactome".to_string(),
            metric: Metric::Lift,
            label: "->".to_string(),
            p_value: 0.049_534_613_435_626_74,
        },
        ResultRecord {
            population: "T cell".to_string(),
            network: "tf_up_down".to_string(),
            metric: Metric::Conviction,
            label: "-->".to_string(),
            p_value: 1.0,
        },
    ]
}

#[test]
fn header_and_rows_are_tab_separated() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("stats.tsv");
    write_result_table(&records(), &path).expect("write");

    let text = fs::read_to_string(&path).expect("read");
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("cell_type\tinteraction_database\tmetrics\tinteraction_type\tpval")
    );
    assert_eq!(lines.next(), Some("Bcell\treactome\tlift\t->\t0.04953461343562674"));
    assert_eq!(lines.next(), Some("T cell\ttf_up_down\tconviction\t-->\t1.0"));
    assert_eq!(lines.next(), None);
}

#[test]
fn reload_reproduces_records() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("stats.tsv");
    write_result_table(&records(), &path).expect("write");
    assert_eq!(read_result_table(&path).expect("read"), records());
}

#[test]
fn reload_tolerates_column_order() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("stats.tsv");
    fs::write(
        &path,
        "pval\tmetrics\tcell_type\tinteraction_type\tinteraction_database\n\
         0.5\tsupport\tB\tup\ttf_type\n",
    )
    .expect("write file");
    let loaded = read_result_table(&path).expect("read");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].population, "B");
    assert_eq!(loaded[0].network, "tf_type");
    assert_eq!(loaded[0].metric, Metric::Support);
    assert_eq!(loaded[0].p_value, 0.5);
}

#[test]
fn unknown_metric_is_data_format_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("stats.tsv");
    fs::write(
        &path,
        "cell_type\tinteraction_database\tmetrics\tinteraction_type\tpval\n\
         B\ttf\tzscore\tup\t0.1\n",
    )
    .expect("write file");
    assert!(matches!(
        read_result_table(&path),
        Err(InputError::DataFormat { line: 2, .. })
    ));
}
