use super::*;

fn record(population: &str, network: &str, metric: Metric, label: &str, p: f64) -> ResultRecord {
    ResultRecord {
        population: population.to_string(),
        network: network.to_string(),
        metric,
        label: label.to_string(),
        p_value: p,
    }
}

#[test]
fn sections_group_under_population() {
    let mut results = AnalysisResults::new();
    results.push_section(
        "Bcell",
        "reactome",
        vec![record("Bcell", "reactome", Metric::Lift, "->", 0.2)],
    );
    results.push_section("Bcell", "tf_type", Vec::new());
    results.push_section(
        "Tcell",
        "reactome",
        vec![record("Tcell", "reactome", Metric::Support, "-|", 0.5)],
    );

    assert_eq!(results.nested.len(), 2);
    assert_eq!(results.nested[0].sections.len(), 2);
    assert_eq!(results.nested_len(), results.records.len());
    let section = results.section("Bcell", "reactome").expect("section");
    assert_eq!(section.entries, vec![("lift_->".to_string(), 0.2)]);
    assert!(results.section("Bcell", "tf_type").expect("empty").entries.is_empty());
    assert_eq!(results.records_per_section()["reactome"], 2);
}

#[test]
fn key_joins_metric_and_label() {
    let r = record("p", "tf_up_down", Metric::Conviction, "-->", 0.1);
    assert_eq!(r.key(), "conviction_-->");
}
